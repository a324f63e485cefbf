//! Stable node numbering.
//!
//! [`NumberingService`] is the capability the view resolves nodes through.
//! [`NodeNumbering`] is an insertion-ordered implementation: the n-th
//! distinct node inserted gets `HeapNodeId(n)` and keeps it for the life of
//! the numbering.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::ViewError;
use crate::id::HeapNodeId;

/// Assigns and looks up a stable integer id for every heap node.
pub trait NumberingService {
    type Node;

    /// Returns the id of `node`, or `None` if it was never numbered.
    fn number_of(&self, node: &Self::Node) -> Option<HeapNodeId>;

    /// Returns the node numbered `id`, or `None` if the id is out of range.
    fn node_of(&self, id: HeapNodeId) -> Option<&Self::Node>;

    /// Number of nodes numbered so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense, insertion-ordered numbering backed by an [`IndexSet`].
#[derive(Debug, Clone)]
pub struct NodeNumbering<N> {
    nodes: IndexSet<N>,
}

impl<N: Hash + Eq> NodeNumbering<N> {
    pub fn new() -> Self {
        NodeNumbering {
            nodes: IndexSet::new(),
        }
    }

    /// Numbers `node` if it is new and returns its id either way.
    ///
    /// The boolean is `true` when the node was newly numbered. Fails with
    /// [`ViewError::IdSpaceExhausted`] once every `HeapNodeId` is taken; the
    /// numbering is left unchanged in that case.
    pub fn insert(&mut self, node: N) -> Result<(HeapNodeId, bool), ViewError> {
        if let Some(index) = self.nodes.get_index_of(&node) {
            return Ok((HeapNodeId::try_from(index)?, false));
        }
        let id = HeapNodeId::try_from(self.nodes.len())?;
        self.nodes.insert(node);
        Ok((id, true))
    }

    /// Iterates nodes in id order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, N> {
        self.nodes.iter()
    }
}

impl<N: Hash + Eq> Default for NodeNumbering<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Hash + Eq> NumberingService for NodeNumbering<N> {
    type Node = N;

    fn number_of(&self, node: &N) -> Option<HeapNodeId> {
        self.nodes
            .get_index_of(node)
            .and_then(|index| HeapNodeId::try_from(index).ok())
    }

    fn node_of(&self, id: HeapNodeId) -> Option<&N> {
        self.nodes.get_index(id.index())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
