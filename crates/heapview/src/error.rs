//! Error types for heapview.
//!
//! Uses `thiserror` for structured, matchable variants. Unknown nodes are
//! recoverable; an unsupported query is a contract violation and is reported
//! as fatal.

use std::fmt;

use thiserror::Error;

use crate::id::HeapNodeId;

/// Errors produced by the suppressible heap graph view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The numbering service has never seen this node.
    #[error("unknown heap node: {node}")]
    UnknownNode { node: String },

    /// An id outside the numbering service's range.
    #[error("unknown heap node id: HeapNodeId({id})", id = id.0)]
    UnknownId { id: HeapNodeId },

    /// A node index that does not fit in a `HeapNodeId`.
    #[error("heap node id space exhausted at index {index}")]
    IdSpaceExhausted { index: usize },

    /// A raw adjacency path that would bypass edge suppression.
    #[error("unsupported query `{query}`: raw adjacency bypasses edge suppression")]
    UnsupportedQuery { query: &'static str },
}

impl ViewError {
    /// Returns `true` if the error indicates a broken caller contract and the
    /// analysis should abort rather than continue with the result.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ViewError::UnsupportedQuery { .. })
    }

    pub(crate) fn unknown_node<N: fmt::Debug>(node: &N) -> Self {
        ViewError::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}
