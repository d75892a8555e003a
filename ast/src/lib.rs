//! AST representation and traversal for TinyCL, a small C-like language.
//!
//! This crate is the tree layer underneath a hand-built parser: the grammar
//! driver calls the construction facade as it reduces productions, and each
//! builder links the freshly made node with previously built subtrees using
//! leftmost-child / right-sibling chains.
//!
//! # Quick Start
//!
//! ```
//! use tinycl_ast::{SyntaxTree, Token};
//!
//! let mut tree = SyntaxTree::new();
//!
//! let modifiers = tree.make_modifiers(Token::Public).unwrap();
//! let name = tree.make_identifier("Point");
//! let body = tree.make_class_body(None);
//! let class = tree.make_class_declaration(modifiers, name, body).unwrap();
//! let unit = tree.make_compilation_unit(class);
//!
//! // Indented depth-first dump of the finished tree.
//! print!("{}", tree.dump(unit));
//! ```
//!
//! # Structure
//!
//! - [`ast::node`] - node identity, arena storage, linkage accessors
//! - [`ast::link`] - the sibling-chain / child-adoption engine
//! - [`ast::kind`] - the catalog of syntactic node kinds and their payloads
//! - [`ast::build`] - the construction facade called by the grammar driver
//! - [`ast::visit`] - visitor dispatch and the depth-first walk
//! - [`ast::display`] - per-node rendering and the indented tree printer

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod ast;
pub mod error;

pub use ast::{
    Children, ClosureVisitor, ModifierSet, NodeId, NodeKind, NodeVisitor, Operator, Primitive,
    SemanticType, SpecialName, SyntaxTree, Token, TreePrinter, walk,
};
pub use error::AstError;
