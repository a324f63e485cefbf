//! Suppressible heap graph views for backward refutation.
//!
//! A refutation engine proves heap edges infeasible one at a time and must
//! then keep searching as if those edges were gone. Rebuilding the points-to
//! graph is too expensive, so instead the immutable graph is wrapped in a
//! [`SuppressibleGraphView`] that hides every edge recorded in its
//! session-scoped [`EdgeSuppressionSet`].
//!
//! # Modules
//!
//! - [`id`]: `HeapNodeId` stable node ids
//! - [`node`]: `HeapNode` pointer/instance node type
//! - [`numbering`]: `NumberingService` capability and `NodeNumbering`
//! - [`base`]: `BaseGraph` capability for unfiltered graphs
//! - [`graph`]: `PointsToGraph`, an in-memory `BaseGraph`
//! - [`suppression`]: the append-only `EdgeSuppressionSet`
//! - [`view`]: `SuppressibleGraphView` and its filtered iterators
//! - [`visit`]: petgraph traversal over the filtered view
//! - [`shared`]: `SharedGraphView` for multi-threaded sessions
//! - [`config`], [`error`]

pub mod base;
pub mod config;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod numbering;
pub mod shared;
pub mod suppression;
pub mod view;
pub mod visit;

// Re-export commonly used types
pub use base::BaseGraph;
pub use config::{UnknownNodePolicy, ViewConfig};
pub use error::ViewError;
pub use graph::PointsToGraph;
pub use id::HeapNodeId;
pub use node::HeapNode;
pub use numbering::{NodeNumbering, NumberingService};
pub use shared::SharedGraphView;
pub use suppression::EdgeSuppressionSet;
pub use view::{NeighborIds, Neighbors, SuppressibleGraphView};
