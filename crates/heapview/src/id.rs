//! Stable ID newtype for heap graph nodes.
//!
//! A [`HeapNodeId`] is the integer a
//! [`NumberingService`](crate::numbering::NumberingService) assigns to a heap
//! node. Raw adjacency and edge suppression are both expressed over these ids
//! rather than over node values.

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Stable heap node identifier. Maps to a petgraph `NodeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeapNodeId(pub u32);

impl HeapNodeId {
    /// Largest usable id. `u32::MAX` is petgraph's `NodeIndex::end()`
    /// sentinel and is never handed out.
    pub const MAX: HeapNodeId = HeapNodeId(u32::MAX - 1);

    /// Returns the id as a `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for HeapNodeId {
    type Error = ViewError;

    fn try_from(index: usize) -> Result<Self, ViewError> {
        match u32::try_from(index) {
            Ok(raw) if raw <= HeapNodeId::MAX.0 => Ok(HeapNodeId(raw)),
            _ => Err(ViewError::IdSpaceExhausted { index }),
        }
    }
}

impl fmt::Display for HeapNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Bridge between HeapNodeId and petgraph's NodeIndex<u32>.

impl From<NodeIndex<u32>> for HeapNodeId {
    fn from(idx: NodeIndex<u32>) -> Self {
        HeapNodeId(idx.index() as u32)
    }
}

impl From<HeapNodeId> for NodeIndex<u32> {
    fn from(id: HeapNodeId) -> Self {
        NodeIndex::new(id.index())
    }
}
