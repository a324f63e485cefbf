//! The [`BaseGraph`] capability: an immutable, unfiltered heap graph.
//!
//! Any points-to analysis adapter implements this trait to be wrapped by a
//! [`SuppressibleGraphView`](crate::view::SuppressibleGraphView). The trait is
//! synchronous and read-only; nothing in this crate mutates a base graph once
//! a view holds it.

use std::fmt;
use std::hash::Hash;

use crate::id::HeapNodeId;
use crate::numbering::NumberingService;

/// Node enumeration plus raw successor/predecessor lookup over stable ids.
pub trait BaseGraph {
    /// The heap node type. Equality and hashing define node identity.
    type Node: Clone + Eq + Hash + fmt::Debug;

    /// The numbering service ids are resolved through.
    type Numbering: NumberingService<Node = Self::Node>;

    /// Iterator over every node, in id order.
    type Nodes<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    /// Iterator over raw neighbour ids. Every id it yields must resolve
    /// through [`numbering`](BaseGraph::numbering).
    type Neighbors<'a>: Iterator<Item = HeapNodeId>
    where
        Self: 'a;

    fn numbering(&self) -> &Self::Numbering;

    /// Every node in the graph.
    fn nodes(&self) -> Self::Nodes<'_>;

    /// Unfiltered successors of `id`. Empty for ids the graph does not hold.
    ///
    /// Yielded ids must all be numbered. Node-level queries on the view skip
    /// any that are not and log a warning.
    fn raw_successors(&self, id: HeapNodeId) -> Self::Neighbors<'_>;

    /// Unfiltered predecessors of `id`. Empty for ids the graph does not hold.
    fn raw_predecessors(&self, id: HeapNodeId) -> Self::Neighbors<'_>;

    fn node_count(&self) -> usize {
        self.numbering().len()
    }
}
