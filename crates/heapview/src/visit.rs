//! petgraph traversal over the filtered view.
//!
//! Implements petgraph's visitor traits on [`SuppressibleGraphView`] so the
//! stock `Bfs`, `Dfs`, and `Reversed` adaptors walk the graph with
//! suppressed edges already removed. Neighbour lookups here are infallible:
//! an id the numbering service does not know has no neighbours.

use std::collections::HashSet;

use petgraph::visit::{
    Bfs, GraphBase, IntoNeighbors, IntoNeighborsDirected, Reversed, Visitable,
};
use petgraph::Direction;

use crate::base::BaseGraph;
use crate::error::ViewError;
use crate::id::HeapNodeId;
use crate::numbering::NumberingService;
use crate::view::{filtered_ids, resolve_anchor, NeighborIds, SuppressibleGraphView};

impl<G: BaseGraph> GraphBase for SuppressibleGraphView<G> {
    type NodeId = HeapNodeId;
    type EdgeId = (HeapNodeId, HeapNodeId);
}

impl<G: BaseGraph> Visitable for SuppressibleGraphView<G> {
    type Map = HashSet<HeapNodeId>;

    fn visit_map(&self) -> HashSet<HeapNodeId> {
        HashSet::with_capacity(self.node_count())
    }

    fn reset_map(&self, map: &mut HashSet<HeapNodeId>) {
        map.clear();
    }
}

impl<'a, G: BaseGraph + 'a> IntoNeighbors for &'a SuppressibleGraphView<G> {
    type Neighbors = NeighborIds<'a, G>;

    fn neighbors(self, a: HeapNodeId) -> NeighborIds<'a, G> {
        self.neighbors_directed(a, Direction::Outgoing)
    }
}

impl<'a, G: BaseGraph + 'a> IntoNeighborsDirected for &'a SuppressibleGraphView<G> {
    type NeighborsDirected = NeighborIds<'a, G>;

    fn neighbors_directed(self, n: HeapNodeId, d: Direction) -> NeighborIds<'a, G> {
        let base = self.base();
        let anchor = base.numbering().node_of(n).map(|_| n);
        filtered_ids(base, self.suppressed(), anchor, d)
    }
}

impl<G: BaseGraph> SuppressibleGraphView<G> {
    /// Every node that can reach `target` over non-suppressed edges,
    /// `target` included, in breadth-first order.
    pub fn backward_reachable(&self, target: &G::Node) -> Result<Vec<&G::Node>, ViewError> {
        let Some(start) = resolve_anchor(self.base(), self.config(), target)? else {
            return Ok(Vec::new());
        };
        let reversed = Reversed(self);
        let mut bfs = Bfs::new(reversed, start);
        let mut reached = Vec::new();
        while let Some(id) = bfs.next(reversed) {
            reached.push(self.node_of(id)?);
        }
        Ok(reached)
    }

    /// Every node reachable from `source` over non-suppressed edges,
    /// `source` included, in breadth-first order.
    pub fn forward_reachable(&self, source: &G::Node) -> Result<Vec<&G::Node>, ViewError> {
        let Some(start) = resolve_anchor(self.base(), self.config(), source)? else {
            return Ok(Vec::new());
        };
        let mut bfs = Bfs::new(self, start);
        let mut reached = Vec::new();
        while let Some(id) = bfs.next(self) {
            reached.push(self.node_of(id)?);
        }
        Ok(reached)
    }
}
