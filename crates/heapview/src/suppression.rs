//! Append-only edge suppression relation.
//!
//! An [`EdgeSuppressionSet`] records ordered `(src, dst)` id pairs a
//! refutation session has proven infeasible. It only grows; the only way to
//! start over is to drop it and begin a new session.

use std::collections::HashSet;

use crate::id::HeapNodeId;

/// Ordered id pairs to hide from traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSuppressionSet {
    edges: HashSet<(HeapNodeId, HeapNodeId)>,
}

impl EdgeSuppressionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `src -> dst` as ignored.
    ///
    /// Returns `true` if the pair was not already suppressed. Adding a pair
    /// twice has no further effect.
    pub fn add(&mut self, src: HeapNodeId, dst: HeapNodeId) -> bool {
        self.edges.insert((src, dst))
    }

    /// Returns `true` if `src -> dst` is currently ignored.
    pub fn contains(&self, src: HeapNodeId, dst: HeapNodeId) -> bool {
        self.edges.contains(&(src, dst))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates suppressed pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (HeapNodeId, HeapNodeId)> + '_ {
        self.edges.iter().copied()
    }

    /// Suppressed pairs sorted by `(src, dst)`, for deterministic reporting.
    pub fn sorted_edges(&self) -> Vec<(HeapNodeId, HeapNodeId)> {
        let mut edges: Vec<_> = self.iter().collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let set = EdgeSuppressionSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(HeapNodeId(0), HeapNodeId(1)));
    }

    #[test]
    fn add_is_idempotent() {
        let mut set = EdgeSuppressionSet::new();
        assert!(set.add(HeapNodeId(0), HeapNodeId(1)));
        assert!(!set.add(HeapNodeId(0), HeapNodeId(1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn pairs_are_ordered() {
        let mut set = EdgeSuppressionSet::new();
        set.add(HeapNodeId(0), HeapNodeId(1));

        assert!(set.contains(HeapNodeId(0), HeapNodeId(1)));
        assert!(!set.contains(HeapNodeId(1), HeapNodeId(0)));
    }

    #[test]
    fn self_loops_can_be_suppressed() {
        let mut set = EdgeSuppressionSet::new();
        set.add(HeapNodeId(4), HeapNodeId(4));
        assert!(set.contains(HeapNodeId(4), HeapNodeId(4)));
    }

    #[test]
    fn sorted_edges_is_deterministic() {
        let mut set = EdgeSuppressionSet::new();
        set.add(HeapNodeId(2), HeapNodeId(0));
        set.add(HeapNodeId(0), HeapNodeId(5));
        set.add(HeapNodeId(0), HeapNodeId(3));

        assert_eq!(
            set.sorted_edges(),
            vec![
                (HeapNodeId(0), HeapNodeId(3)),
                (HeapNodeId(0), HeapNodeId(5)),
                (HeapNodeId(2), HeapNodeId(0)),
            ]
        );
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let mut forward = EdgeSuppressionSet::new();
        forward.add(HeapNodeId(0), HeapNodeId(1));
        forward.add(HeapNodeId(2), HeapNodeId(3));

        let mut backward = EdgeSuppressionSet::new();
        backward.add(HeapNodeId(2), HeapNodeId(3));
        backward.add(HeapNodeId(0), HeapNodeId(1));

        assert_eq!(forward, backward);
    }
}
