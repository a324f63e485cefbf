//! Thread-safe variant of the suppressible view.
//!
//! [`SharedGraphView`] shares the base graph read-only behind an `Arc` and
//! guards the suppression set with a single `RwLock`. Adds take the write
//! lock; queries take the read lock and collect their filtered result before
//! releasing it, so a query never observes a half-applied add and every add
//! is ordered against in-flight queries.
//!
//! A poisoned lock is recovered: the relation is append-only, so a panic in
//! another holder cannot leave it inconsistent.

use std::convert::Infallible;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use petgraph::Direction;

use crate::base::BaseGraph;
use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::suppression::EdgeSuppressionSet;
use crate::view::{
    filtered_ids, number_of, record_suppression, resolve_anchor, resolve_neighbor,
    unsupported, SuppressibleGraphView,
};

/// A suppressible view that can be queried and extended from many threads.
#[derive(Debug)]
pub struct SharedGraphView<G: BaseGraph> {
    base: Arc<G>,
    suppressed: RwLock<EdgeSuppressionSet>,
    config: ViewConfig,
}

impl<G: BaseGraph> SharedGraphView<G> {
    pub fn new(base: Arc<G>) -> Self {
        Self::with_config(base, ViewConfig::default())
    }

    pub fn with_config(base: Arc<G>, config: ViewConfig) -> Self {
        SharedGraphView {
            base,
            suppressed: RwLock::new(EdgeSuppressionSet::new()),
            config,
        }
    }

    /// Continues a single-threaded session with its suppression set intact.
    pub fn from_view(view: SuppressibleGraphView<G>) -> Self {
        let config = view.config().clone();
        let (base, suppressed) = view.into_parts();
        SharedGraphView {
            base: Arc::new(base),
            suppressed: RwLock::new(suppressed),
            config,
        }
    }

    pub fn base(&self) -> &Arc<G> {
        &self.base
    }

    /// Copy of the suppression set as of now. Later adds do not affect it.
    pub fn snapshot(&self) -> EdgeSuppressionSet {
        self.read().clone()
    }

    /// Hides `src -> dst`. Serialized against every in-flight query.
    pub fn add_ignore_edge(&self, src: &G::Node, dst: &G::Node) -> Result<bool, ViewError> {
        let src = number_of(self.base.as_ref(), src)?;
        let dst = number_of(self.base.as_ref(), dst)?;
        Ok(record_suppression(&mut self.write(), src, dst))
    }

    pub fn successors(&self, node: &G::Node) -> Result<Vec<G::Node>, ViewError> {
        self.collect(node, Direction::Outgoing)
    }

    pub fn predecessors(&self, node: &G::Node) -> Result<Vec<G::Node>, ViewError> {
        self.collect(node, Direction::Incoming)
    }

    /// Every node of the base graph. Needs no lock.
    pub fn all_nodes(&self) -> G::Nodes<'_> {
        self.base.nodes()
    }

    pub fn successor_numbers(&self, _node: &G::Node) -> Result<Infallible, ViewError> {
        unsupported("successor_numbers")
    }

    pub fn predecessor_numbers(&self, _node: &G::Node) -> Result<Infallible, ViewError> {
        unsupported("predecessor_numbers")
    }

    pub fn has_edge(&self, _src: &G::Node, _dst: &G::Node) -> Result<Infallible, ViewError> {
        unsupported("has_edge")
    }

    fn collect(&self, node: &G::Node, direction: Direction) -> Result<Vec<G::Node>, ViewError> {
        let base = self.base.as_ref();
        let anchor = resolve_anchor(base, &self.config, node)?;
        let numbering = base.numbering();
        let suppressed = self.read();
        let nodes = filtered_ids(base, &suppressed, anchor, direction)
            .filter_map(|id| resolve_neighbor(numbering, id).cloned())
            .collect();
        Ok(nodes)
    }

    fn read(&self) -> RwLockReadGuard<'_, EdgeSuppressionSet> {
        self.suppressed.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EdgeSuppressionSet> {
        self.suppressed.write().unwrap_or_else(PoisonError::into_inner)
    }
}
