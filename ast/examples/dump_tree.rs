//! Example building a small class and printing its indented dump.
//!
//! Run with: cargo run --example dump_tree

use tinycl_ast::{Primitive, SyntaxTree, Token};

fn main() {
    let mut tree = SyntaxTree::new();

    // public class Counter { private int value; }
    let modifiers = tree.make_modifiers(Token::Public).unwrap();
    let class_name = tree.make_identifier("Counter");

    let field_mods = tree.make_modifiers(Token::Private).unwrap();
    let field_ty = {
        let prim = tree.make_primitive_type(Primitive::Int);
        let name = tree.make_type_name(prim);
        tree.make_type_specifier(name)
    };
    let value = tree.make_identifier("value");
    let declarators = tree.make_field_variable_declarators(value);
    let field = tree
        .make_field_variable_declaration(field_mods, field_ty, declarators)
        .unwrap();
    let fd = tree.make_field_declaration(field);
    let fields = tree.make_field_declarations(fd);

    let body = tree.make_class_body(Some(fields));
    let class = tree
        .make_class_declaration(modifiers, class_name, body)
        .unwrap();
    let unit = tree.make_compilation_unit(class);

    println!("=== TinyCL AST dump ===\n");
    print!("{}", tree.dump(unit));
    println!("\n{} nodes constructed", tree.len());
}
