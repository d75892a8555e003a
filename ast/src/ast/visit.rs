//! Visitor dispatch and the depth-first walk.
//!
//! A traversal client implements the handlers for the kinds it cares about;
//! every handler defaults to `visit_default`, so generic clients implement
//! exactly one method. [`SyntaxTree::accept`] is the dispatch point: the
//! node routes itself to the handler matching its own kind.
//!
//! The walk is pre-order: visit the node, descend into its child chain one
//! level deeper, then move across siblings. Siblings are walked with a
//! loop, not recursion, so arbitrarily long statement or declaration lists
//! cannot overflow the stack; recursion depth is bounded by the nesting
//! depth of the source program.
//!
//! Traversal never mutates linkage fields.

use super::kind::NodeKind;
use super::node::{NodeId, SyntaxTree};

/// Per-kind handlers for a tree walk.
///
/// # Example
///
/// ```
/// use tinycl_ast::{NodeVisitor, NodeId, SyntaxTree, walk};
///
/// struct IdentCounter {
///     count: usize,
/// }
///
/// impl NodeVisitor for IdentCounter {
///     fn visit_default(&mut self, _tree: &SyntaxTree, _node: NodeId) {}
///
///     fn visit_identifier(&mut self, _tree: &SyntaxTree, _node: NodeId) {
///         self.count += 1;
///     }
/// }
///
/// let mut tree = SyntaxTree::new();
/// let a = tree.make_identifier("a");
/// let b = tree.make_identifier("b");
/// tree.join_siblings(a, b).unwrap();
/// let body = tree.make_class_body(Some(a));
///
/// let mut counter = IdentCounter { count: 0 };
/// walk(&tree, body, &mut counter);
/// assert_eq!(counter.count, 2);
/// ```
pub trait NodeVisitor {
    /// Fallback handler for every kind without a specific one.
    fn visit_default(&mut self, tree: &SyntaxTree, node: NodeId);

    fn visit_identifier(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_modifiers(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_primitive_type(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_special_name(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_number_literal(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_string_literal(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_compilation_unit(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_class_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_struct_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_class_body(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_field_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_field_variable_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_method_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_method_declarator(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_method_body(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_parameter(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_type_specifier(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_type_name(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_array_specifier(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_expression(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_static_initializer(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_field_declarations(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_field_variable_declarators(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }
    fn visit_parameter_list(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.visit_default(tree, node)
    }

    /// Called after a node is visited, before its child chain is walked.
    fn enter_children(&mut self, _tree: &SyntaxTree, _parent: NodeId) {}

    /// Called once the node's child chain has been walked.
    fn exit_children(&mut self, _tree: &SyntaxTree, _parent: NodeId) {}
}

impl SyntaxTree {
    /// Double dispatch: route `node` to the visitor handler matching its
    /// kind.
    pub fn accept<V: NodeVisitor + ?Sized>(&self, node: NodeId, visitor: &mut V) {
        match self.kind(node) {
            NodeKind::Identifier(_) => visitor.visit_identifier(self, node),
            NodeKind::Modifiers(_) => visitor.visit_modifiers(self, node),
            NodeKind::PrimitiveType(_) => visitor.visit_primitive_type(self, node),
            NodeKind::SpecialName(_) => visitor.visit_special_name(self, node),
            NodeKind::NumberLiteral(_) => visitor.visit_number_literal(self, node),
            NodeKind::StringLiteral(_) => visitor.visit_string_literal(self, node),
            NodeKind::CompilationUnit => visitor.visit_compilation_unit(self, node),
            NodeKind::ClassDeclaration => visitor.visit_class_declaration(self, node),
            NodeKind::StructDeclaration => visitor.visit_struct_declaration(self, node),
            NodeKind::ClassBody => visitor.visit_class_body(self, node),
            NodeKind::FieldDeclaration => visitor.visit_field_declaration(self, node),
            NodeKind::FieldVariableDeclaration => {
                visitor.visit_field_variable_declaration(self, node)
            }
            NodeKind::MethodDeclaration => visitor.visit_method_declaration(self, node),
            NodeKind::MethodDeclarator => visitor.visit_method_declarator(self, node),
            NodeKind::MethodBody => visitor.visit_method_body(self, node),
            NodeKind::Parameter => visitor.visit_parameter(self, node),
            NodeKind::TypeSpecifier => visitor.visit_type_specifier(self, node),
            NodeKind::TypeName => visitor.visit_type_name(self, node),
            NodeKind::ArraySpecifier => visitor.visit_array_specifier(self, node),
            NodeKind::Expression(_) => visitor.visit_expression(self, node),
            NodeKind::StaticInitializer => visitor.visit_static_initializer(self, node),
            NodeKind::FieldDeclarations => visitor.visit_field_declarations(self, node),
            NodeKind::FieldVariableDeclarators => {
                visitor.visit_field_variable_declarators(self, node)
            }
            NodeKind::ParameterList => visitor.visit_parameter_list(self, node),
        }
    }
}

/// Depth-first pre-order walk from `root`.
///
/// Visits `root`, then its child chain one level deeper, then each of
/// `root`'s following siblings at the same level. The sibling traversal is
/// a loop; only descent recurses.
pub fn walk<V: NodeVisitor + ?Sized>(tree: &SyntaxTree, root: NodeId, visitor: &mut V) {
    let mut cur = Some(root);
    while let Some(node) = cur {
        tree.accept(node, visitor);
        if let Some(child) = tree.first_child(node) {
            visitor.enter_children(tree, node);
            walk(tree, tree.chain_head(child), visitor);
            visitor.exit_children(tree, node);
        }
        cur = tree.next_sibling(node);
    }
}

/// Adapter turning a closure into a visitor with no kind-specific
/// handlers.
pub struct ClosureVisitor<F>
where
    F: FnMut(&SyntaxTree, NodeId),
{
    f: F,
}

impl<F> ClosureVisitor<F>
where
    F: FnMut(&SyntaxTree, NodeId),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> NodeVisitor for ClosureVisitor<F>
where
    F: FnMut(&SyntaxTree, NodeId),
{
    fn visit_default(&mut self, tree: &SyntaxTree, node: NodeId) {
        (self.f)(tree, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec;
    use crate::ast::kind::Token;

    #[test]
    fn walk_is_preorder_children_before_following_siblings() {
        let mut tree = SyntaxTree::new();
        let modifiers = tree.make_modifiers(Token::Public).unwrap();
        let name = tree.make_identifier("Point");
        let member = tree.make_identifier("x");
        let fd = tree.make_field_declaration(member);
        let fields = tree.make_field_declarations(fd);
        let body = tree.make_class_body(Some(fields));
        let class = tree.make_class_declaration(modifiers, name, body).unwrap();

        let mut order = Vec::new();
        let mut v = ClosureVisitor::new(|_t: &SyntaxTree, n: NodeId| order.push(n));
        walk(&tree, class, &mut v);

        assert_eq!(order, vec![class, modifiers, name, body, fields, fd, member]);
    }

    #[test]
    fn enter_and_exit_children_bracket_each_descent() {
        let mut tree = SyntaxTree::new();
        let member = tree.make_identifier("x");
        let fd = tree.make_field_declaration(member);
        let fields = tree.make_field_declarations(fd);

        struct DepthProbe {
            depth: usize,
            max: usize,
        }
        impl NodeVisitor for DepthProbe {
            fn visit_default(&mut self, _tree: &SyntaxTree, _node: NodeId) {
                self.max = self.max.max(self.depth);
            }
            fn enter_children(&mut self, _tree: &SyntaxTree, _parent: NodeId) {
                self.depth += 1;
            }
            fn exit_children(&mut self, _tree: &SyntaxTree, _parent: NodeId) {
                self.depth -= 1;
            }
        }

        let mut probe = DepthProbe { depth: 0, max: 0 };
        walk(&tree, fields, &mut probe);
        assert_eq!(probe.depth, 0);
        assert_eq!(probe.max, 2);
    }

    #[test]
    fn kind_specific_handler_overrides_default() {
        let mut tree = SyntaxTree::new();
        let a = tree.make_identifier("a");
        let n = tree.make_number_literal(7);
        tree.join_siblings(a, n).unwrap();
        let body = tree.make_method_body(Some(a));

        struct Split {
            idents: usize,
            others: usize,
        }
        impl NodeVisitor for Split {
            fn visit_default(&mut self, _tree: &SyntaxTree, _node: NodeId) {
                self.others += 1;
            }
            fn visit_identifier(&mut self, _tree: &SyntaxTree, _node: NodeId) {
                self.idents += 1;
            }
        }

        let mut split = Split {
            idents: 0,
            others: 0,
        };
        walk(&tree, body, &mut split);
        assert_eq!(split.idents, 1);
        assert_eq!(split.others, 2); // MethodBody and the literal
    }

    #[test]
    fn long_sibling_chains_walk_without_deep_recursion() {
        let mut tree = SyntaxTree::new();
        let first = tree.make_number_literal(0);
        let mut last = first;
        for i in 1..2_000 {
            let next = tree.make_number_literal(i);
            // Joining from the previous tail keeps this loop linear.
            tree.join_siblings(last, next).unwrap();
            last = next;
        }
        let body = tree.make_method_body(Some(first));

        let mut count = 0usize;
        let mut v = ClosureVisitor::new(|_t: &SyntaxTree, _n: NodeId| count += 1);
        walk(&tree, body, &mut v);
        assert_eq!(count, 2_001);
    }
}
