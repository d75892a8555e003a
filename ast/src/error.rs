//! Error types for tree construction.
//!
//! All failures surface immediately at the point of construction; the tree
//! engine never retries and never recovers. A failed call observes no
//! partial mutation.

use crate::String;
use crate::ast::kind::{ModifierSet, Token};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A structurally impossible argument: a cycle-creating linkage call,
    /// or an `add_*` builder applied to a node of the wrong kind.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A token outside the closed modifier set where a modifier was
    /// required.
    #[error("token {token:?} is not a modifier")]
    UnsupportedModifier { token: Token },

    /// Mutually exclusive modifiers on one declaration.
    #[error("modifier {added:?} conflicts with {held:?}")]
    ConflictingModifiers {
        held: ModifierSet,
        added: ModifierSet,
    },
}
