//! Example demonstrating a kind-specific visitor over a finished tree.
//!
//! Run with: cargo run --example identifier_counter

use tinycl_ast::{NodeId, NodeVisitor, SyntaxTree, Token, walk};

struct IdentifierCounter {
    count: usize,
}

impl NodeVisitor for IdentifierCounter {
    fn visit_default(&mut self, _tree: &SyntaxTree, _node: NodeId) {}

    fn visit_identifier(&mut self, tree: &SyntaxTree, node: NodeId) {
        println!("  identifier: {}", tree.render(node));
        self.count += 1;
    }
}

fn main() {
    let mut tree = SyntaxTree::new();

    let modifiers = tree.make_modifiers(Token::Public).unwrap();
    let class_name = tree.make_identifier("Pair");
    let a = tree.make_identifier("a");
    let fd_a = tree.make_field_declaration(a);
    let fields = tree.make_field_declarations(fd_a);
    let b = tree.make_identifier("b");
    let fd_b = tree.make_field_declaration(b);
    tree.add_field_declaration(fields, fd_b).unwrap();
    let body = tree.make_class_body(Some(fields));
    let class = tree
        .make_class_declaration(modifiers, class_name, body)
        .unwrap();

    println!("=== Identifier visitor example ===\n");
    let mut counter = IdentifierCounter { count: 0 };
    walk(&tree, class, &mut counter);
    println!("\n{} identifiers in the tree", counter.count);
}
