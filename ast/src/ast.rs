//! Generic AST node model for TinyCL.
//!
//! Every syntactic construct is an instance of one node shape, stored in an
//! index-addressed arena ([`SyntaxTree`]) and linked into a multiway tree
//! with leftmost-child / right-sibling chains.
//!
//! ## Structure
//!
//! - **Node model**: `NodeId`, `SyntaxTree` - identity, storage, accessors
//! - **Linkage engine**: joining sibling chains, adopting child chains,
//!   detaching nodes, abandoning children
//! - **Variant catalog**: `NodeKind` and its payload types
//! - **Construction facade**: `make_*` / `add_*` builders, one per
//!   production shape
//! - **Visitor**: per-kind dispatch and the depth-first walk
//! - **Display**: `render`, `dump_line`, and the indented tree printer

pub mod build;
pub mod display;
pub mod kind;
pub mod link;
pub mod node;
pub mod visit;

pub use display::TreePrinter;
pub use kind::{ModifierSet, NodeKind, Operator, Primitive, SemanticType, SpecialName, Token};
pub use node::{Children, NodeId, SyntaxTree};
pub use visit::{ClosureVisitor, NodeVisitor, walk};
