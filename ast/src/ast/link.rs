//! The tree linkage engine.
//!
//! Structurally the tree is a web of sibling chains: a chain is a singly
//! linked run of nodes that all agree on one chain head, and a parent's
//! children are exactly one such chain. These operations keep two
//! invariants intact across every mutation:
//!
//! 1. every member of a chain reports the same chain head;
//! 2. after any adoption, every member of the parent's child chain has its
//!    `parent` reference set to the adopting node.
//!
//! Argument checks happen before any mutation, so a failed call leaves the
//! tree exactly as it was.

use tracing::trace;

use super::node::{NodeId, SyntaxTree};
use crate::error::AstError;
use crate::format;

impl SyntaxTree {
    /// Append `other`'s entire chain to the end of `chain`'s chain.
    ///
    /// The appended run starts at `other`'s chain head, and every appended
    /// node has its chain head rewritten to `chain`'s head. Returns the
    /// head of the combined chain.
    ///
    /// Joining a chain to itself would create a cycle and fails with
    /// [`AstError::InvalidArgument`].
    pub fn join_siblings(&mut self, chain: NodeId, other: NodeId) -> Result<NodeId, AstError> {
        let head = self.chain_head(chain);
        let incoming = self.chain_head(other);
        if head == incoming {
            return Err(AstError::InvalidArgument {
                reason: format!(
                    "cannot join sibling chain headed by node {} to itself",
                    self.node_num(head)
                ),
            });
        }

        let mut tail = chain;
        while let Some(next) = self.next_sibling(tail) {
            tail = next;
        }
        self.node_mut(tail).next_sib = Some(incoming);

        // Every node of the appended run must agree on the new chain head.
        // Forgetting any of them silently breaks later adoptions.
        let mut cur = Some(incoming);
        while let Some(id) = cur {
            self.node_mut(id).first_sib = head;
            cur = self.next_sibling(id);
        }

        trace!(head = ?head, appended = ?incoming, "joined sibling chains");
        Ok(head)
    }

    /// Make `node`'s entire chain the child chain of `parent`.
    ///
    /// `None` is accepted as a no-op, so optional sub-trees adopt cleanly.
    /// If `parent` already has children the incoming chain is joined onto
    /// the existing child chain. Afterwards every node of the resulting
    /// child chain has `parent` as its parent.
    ///
    /// Adopting a chain that contains `parent` itself fails with
    /// [`AstError::InvalidArgument`] before anything is mutated.
    pub fn adopt(&mut self, parent: NodeId, node: Option<NodeId>) -> Result<(), AstError> {
        let Some(node) = node else {
            return Ok(());
        };
        let incoming = self.chain_head(node);

        let mut cur = Some(incoming);
        while let Some(id) = cur {
            if id == parent {
                return Err(AstError::InvalidArgument {
                    reason: format!(
                        "node {} cannot adopt a chain containing itself",
                        self.node_num(parent)
                    ),
                });
            }
            cur = self.next_sibling(id);
        }

        match self.first_child(parent) {
            None => self.node_mut(parent).first_child = Some(incoming),
            Some(child) => {
                self.join_siblings(child, incoming)?;
            }
        }

        // Re-stamp the whole child chain, not just the newcomers.
        let mut cur = self.first_child(parent);
        while let Some(id) = cur {
            self.node_mut(id).parent = Some(parent);
            cur = self.next_sibling(id);
        }

        trace!(parent = ?parent, adopted = ?incoming, "adopted child chain");
        Ok(())
    }

    /// Detach this node from its context: no parent, no next sibling, a
    /// chain of its own. The node's children are untouched. Idempotent,
    /// and returns the node so construction code can chain calls.
    pub fn detach(&mut self, node: NodeId) -> NodeId {
        let data = self.node_mut(node);
        data.parent = None;
        data.next_sib = None;
        data.first_sib = node;
        node
    }

    /// Drop this node's child chain without tearing it apart internally.
    ///
    /// The former children remain a well-formed chain inside the arena;
    /// they are just no longer reachable from `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        self.node_mut(node).first_child = None;
    }
}
