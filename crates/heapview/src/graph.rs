//! PointsToGraph: an in-memory [`BaseGraph`] snapshot.
//!
//! [`PointsToGraph`] stores the nodes and edges a points-to analysis hands
//! it. It performs no analysis of its own. Nodes are numbered through a
//! [`NodeNumbering`] and mirrored one-for-one into a petgraph `StableGraph`,
//! so `HeapNodeId(n)` and `NodeIndex(n)` always name the same node.
//!
//! The builder methods exist for the producer side. Once the graph is
//! wrapped in a view it is only read.

use std::fmt;
use std::hash::Hash;
use std::iter::Map;

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::{Neighbors, StableGraph};
use petgraph::{Directed, Direction};

use crate::base::BaseGraph;
use crate::error::ViewError;
use crate::id::HeapNodeId;
use crate::numbering::{NodeNumbering, NumberingService};

type RawNeighbors<'a> = Map<Neighbors<'a, (), u32>, fn(NodeIndex<u32>) -> HeapNodeId>;

/// Heap graph snapshot: numbered nodes plus a directed edge relation.
#[derive(Debug, Clone)]
pub struct PointsToGraph<N> {
    numbering: NodeNumbering<N>,
    heap: StableGraph<(), (), Directed, u32>,
}

impl<N: Clone + Eq + Hash + fmt::Debug> PointsToGraph<N> {
    pub fn new() -> Self {
        PointsToGraph {
            numbering: NodeNumbering::new(),
            heap: StableGraph::new(),
        }
    }

    /// Builds a graph from an edge list, numbering nodes in first-seen order.
    pub fn from_edges<I>(edges: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (src, dst) in edges {
            graph.add_edge(src, dst)?;
        }
        Ok(graph)
    }

    /// Adds a node and returns its id. Adding an existing node returns the
    /// id it already has.
    ///
    /// Fails with [`ViewError::IdSpaceExhausted`] when the graph already
    /// holds as many nodes as `HeapNodeId` can name.
    pub fn add_node(&mut self, node: N) -> Result<HeapNodeId, ViewError> {
        let (id, inserted) = self.numbering.insert(node)?;
        if inserted {
            let idx = self.heap.add_node(());
            debug_assert_eq!(HeapNodeId::from(idx), id);
        }
        Ok(id)
    }

    /// Adds the edge `src -> dst`, numbering either endpoint if needed.
    ///
    /// Returns `false` if the edge was already present; raw adjacency never
    /// lists the same neighbour twice.
    pub fn add_edge(&mut self, src: N, dst: N) -> Result<bool, ViewError> {
        let src = NodeIndex::from(self.add_node(src)?);
        let dst = NodeIndex::from(self.add_node(dst)?);
        if self.heap.contains_edge(src, dst) {
            return Ok(false);
        }
        self.heap.add_edge(src, dst, ());
        Ok(true)
    }

    /// Total number of edges in the snapshot.
    pub fn edge_count(&self) -> usize {
        self.heap.edge_count()
    }

    fn neighbors(&self, id: HeapNodeId, direction: Direction) -> RawNeighbors<'_> {
        self.heap
            .neighbors_directed(NodeIndex::from(id), direction)
            .map(HeapNodeId::from as fn(NodeIndex<u32>) -> HeapNodeId)
    }
}

impl<N: Clone + Eq + Hash + fmt::Debug> Default for PointsToGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash + fmt::Debug> BaseGraph for PointsToGraph<N> {
    type Node = N;
    type Numbering = NodeNumbering<N>;
    type Nodes<'a>
        = indexmap::set::Iter<'a, N>
    where
        Self: 'a;
    type Neighbors<'a>
        = RawNeighbors<'a>
    where
        Self: 'a;

    fn numbering(&self) -> &NodeNumbering<N> {
        &self.numbering
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.numbering.iter()
    }

    fn raw_successors(&self, id: HeapNodeId) -> Self::Neighbors<'_> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn raw_predecessors(&self, id: HeapNodeId) -> Self::Neighbors<'_> {
        self.neighbors(id, Direction::Incoming)
    }

    fn node_count(&self) -> usize {
        debug_assert_eq!(self.numbering.len(), self.heap.node_count());
        self.numbering.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::node::HeapNode;

    fn ids(iter: impl Iterator<Item = HeapNodeId>) -> BTreeSet<u32> {
        iter.map(|id| id.0).collect()
    }

    #[test]
    fn builds_from_edges_in_first_seen_order() {
        let graph = PointsToGraph::from_edges([("a", "b"), ("a", "c"), ("b", "d")]).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        let order: Vec<_> = graph.nodes().copied().collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn raw_adjacency_in_both_directions() {
        let graph = PointsToGraph::from_edges([("a", "b"), ("a", "c"), ("b", "d")]).unwrap();
        let a = graph.numbering().number_of(&"a").unwrap();
        let d = graph.numbering().number_of(&"d").unwrap();

        assert_eq!(ids(graph.raw_successors(a)), BTreeSet::from([1, 2]));
        assert_eq!(ids(graph.raw_predecessors(d)), BTreeSet::from([1]));
        assert_eq!(ids(graph.raw_predecessors(a)), BTreeSet::new());
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let mut graph = PointsToGraph::new();
        assert!(graph.add_edge("p", "o").unwrap());
        assert!(!graph.add_edge("p", "o").unwrap());

        assert_eq!(graph.edge_count(), 1);
        let p = graph.numbering().number_of(&"p").unwrap();
        assert_eq!(graph.raw_successors(p).count(), 1);
    }

    #[test]
    fn isolated_nodes_are_enumerated() {
        let mut graph: PointsToGraph<HeapNode> = PointsToGraph::new();
        let v = graph.add_node(HeapNode::pointer("Main.main:v1")).unwrap();
        let again = graph.add_node(HeapNode::pointer("Main.main:v1")).unwrap();

        assert_eq!(v, again);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.raw_successors(v).count(), 0);
    }

    #[test]
    fn out_of_range_id_has_no_neighbours() {
        let graph = PointsToGraph::from_edges([(1u32, 2u32)]).unwrap();
        assert_eq!(graph.raw_successors(HeapNodeId(99)).count(), 0);
        assert_eq!(graph.raw_predecessors(HeapNodeId(99)).count(), 0);
    }
}
