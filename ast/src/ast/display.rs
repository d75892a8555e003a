//! Diagnostic rendering: per-node text and the indented tree dump.
//!
//! `render` is the node's own one-line text (an identifier shows its text,
//! an operator its symbol, composites the rendered run of their children).
//! `dump` walks the tree with a [`TreePrinter`], printing one `dump_line`
//! per node, children indented one level deeper than their parent and
//! siblings at equal indentation.

use core::fmt::Write;

use super::kind::{ModifierSet, NodeKind};
use super::node::{NodeId, SyntaxTree};
use super::visit::{NodeVisitor, walk};
use crate::{String, ToString, Vec, format};

impl SyntaxTree {
    /// The node's diagnostic text. Empty for payload-less childless nodes.
    pub fn render(&self, node: NodeId) -> String {
        match self.kind(node) {
            NodeKind::Identifier(text) => text.clone(),
            NodeKind::Modifiers(set) => {
                let mut names: Vec<&str> = Vec::new();
                if set.contains(ModifierSet::PUBLIC) {
                    names.push("PUBLIC");
                }
                if set.contains(ModifierSet::PRIVATE) {
                    names.push("PRIVATE");
                }
                if set.contains(ModifierSet::STATIC) {
                    names.push("STATIC");
                }
                names.join(" ")
            }
            NodeKind::PrimitiveType(p) => p.name().to_string(),
            NodeKind::SpecialName(s) => s.text().to_string(),
            NodeKind::NumberLiteral(v) => v.to_string(),
            NodeKind::StringLiteral(text) => text.clone(),
            NodeKind::Expression(op) => {
                // Infix: operand renders joined by the operator symbol.
                let parts = self.render_children(node);
                parts.join(&format!(" {} ", op.symbol()))
            }
            NodeKind::ClassBody => {
                let parts = self.render_children(node);
                if parts.is_empty() {
                    "{ }".to_string()
                } else {
                    format!("{{ {} }}", parts.join(" "))
                }
            }
            NodeKind::FieldDeclaration => {
                // Tag the declaration with the kind of the wrapped member.
                let tag = match self.first_child(node) {
                    Some(child) => self.kind_name(child),
                    None => "?",
                };
                let parts = self.render_children(node);
                format!("[{tag}] {}", parts.join(" "))
            }
            _ => self.render_children(node).join(" "),
        }
    }

    fn render_children(&self, node: NodeId) -> Vec<String> {
        self.children(node).map(|child| self.render(child)).collect()
    }

    /// One diagnostic line: node number, declared type (if any), kind name
    /// and the node's rendered text.
    pub fn dump_line(&self, node: NodeId) -> String {
        let ty = match self.declared_type(node) {
            Some(ty) => format!("<{ty}> "),
            None => String::new(),
        };
        format!(
            "{}: {}{}  \"{}\"",
            self.node_num(node),
            ty,
            self.kind_name(node),
            self.render(node)
        )
    }

    /// Indented depth-first dump of the subtree rooted at `root`.
    pub fn dump(&self, root: NodeId) -> String {
        let mut printer = TreePrinter::new();
        walk(self, root, &mut printer);
        printer.finish()
    }
}

/// Visitor producing the indented tree dump.
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    const INDENT: &'static str = "   ";

    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeVisitor for TreePrinter {
    fn visit_default(&mut self, tree: &SyntaxTree, node: NodeId) {
        for _ in 0..self.depth {
            self.out.push_str(Self::INDENT);
        }
        let _ = writeln!(self.out, "{}", tree.dump_line(node));
    }

    fn enter_children(&mut self, _tree: &SyntaxTree, _parent: NodeId) {
        self.depth += 1;
    }

    fn exit_children(&mut self, _tree: &SyntaxTree, _parent: NodeId) {
        self.depth -= 1;
    }
}
