//! Node identity and arena storage.
//!
//! The whole tree lives in one [`SyntaxTree`] arena; nodes are addressed by
//! [`NodeId`], a plain index. Parent and chain references are indices too,
//! so there is no ownership cycle between a parent and its children. Nodes
//! are never removed, which keeps every handed-out `NodeId` valid for the
//! life of the tree.

use crate::Vec;
use core::sync::atomic::{AtomicU32, Ordering};

use super::kind::{NodeKind, SemanticType};

/// Process-wide node numbering. Zero at process start, bumped on every
/// construction, never reset.
static NODE_NUMS: AtomicU32 = AtomicU32::new(0);

/// Handle to a node inside a [`SyntaxTree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node record: identity, variant, annotation slot, and the four
/// linkage fields owned by the linkage engine.
#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) num: u32,
    pub(crate) kind: NodeKind,
    pub(crate) declared_type: Option<SemanticType>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) next_sib: Option<NodeId>,
    pub(crate) first_sib: NodeId,
    pub(crate) first_child: Option<NodeId>,
}

/// Arena holding every node of one abstract syntax tree.
///
/// Construction normally goes through the facade builders (`make_*`); the
/// lower-level [`new_node`](SyntaxTree::new_node) and the linkage operations
/// are public for traversal clients and tests.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Construct a fresh node of the given kind.
    ///
    /// The new node is its own chain head, with no parent, no sibling and
    /// no children, and gets the next process-wide node number.
    pub fn new_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("arena overflow"));
        let num = NODE_NUMS.fetch_add(1, Ordering::Relaxed) + 1;
        self.nodes.push(NodeData {
            num,
            kind,
            declared_type: None,
            parent: None,
            next_sib: None,
            first_sib: id,
            first_child: None,
        });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes constructed in this tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node's process-unique diagnostic number.
    pub fn node_num(&self, id: NodeId) -> u32 {
        self.node(id).num
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    /// Stable diagnostic name of the node's variant.
    pub fn kind_name(&self, id: NodeId) -> &'static str {
        self.node(id).kind.name()
    }

    /// The semantic-type annotation, if a later pass has attached one.
    pub fn declared_type(&self, id: NodeId) -> Option<&SemanticType> {
        self.node(id).declared_type.as_ref()
    }

    pub fn set_declared_type(&mut self, id: NodeId, ty: SemanticType) {
        self.node_mut(id).declared_type = Some(ty);
    }

    /// Non-owning back reference to the adopting node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sib
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Head of the sibling chain this node belongs to. Every member of a
    /// chain reports the same head.
    pub fn chain_head(&self, id: NodeId) -> NodeId {
        self.node(id).first_sib
    }

    /// Iterate the node's child chain in sibling order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            cur: self.first_child(id),
        }
    }
}

/// Iterator over a node's child chain.
pub struct Children<'t> {
    tree: &'t SyntaxTree,
    cur: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cur?;
        self.cur = self.tree.next_sibling(id);
        Some(id)
    }
}
