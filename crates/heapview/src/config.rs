//! Configuration for graph views.

/// How queries treat a node the numbering service has never seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownNodePolicy {
    /// Fail with [`ViewError::UnknownNode`](crate::error::ViewError::UnknownNode).
    #[default]
    Error,
    /// Treat the node as present but without edges.
    Empty,
}

/// Configuration for a [`SuppressibleGraphView`](crate::view::SuppressibleGraphView).
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    /// Policy for `successors`/`predecessors` on unknown nodes. Suppressing
    /// an edge between unknown nodes is always an error. Default: `Error`.
    pub unknown_nodes: UnknownNodePolicy,
}

impl ViewConfig {
    /// Config that answers queries on unknown nodes with empty results.
    pub fn lenient() -> Self {
        ViewConfig {
            unknown_nodes: UnknownNodePolicy::Empty,
        }
    }
}
