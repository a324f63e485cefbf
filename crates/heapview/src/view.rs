//! SuppressibleGraphView: a filtering decorator over a [`BaseGraph`].
//!
//! The view pairs one immutable base graph snapshot with a session-scoped
//! [`EdgeSuppressionSet`]. Every `successors`/`predecessors` call derives its
//! result from the base graph's raw adjacency filtered by the suppression set
//! as it stands at that call. Nothing is cached between calls, so a query
//! issued right after [`add_ignore_edge`](SuppressibleGraphView::add_ignore_edge)
//! always reflects it.
//!
//! Query results are lazy iterators borrowing the view. While one is alive
//! the view cannot be mutated, which is the "mutate, then query" discipline
//! the refutation engine follows anyway.
//!
//! Bulk id-set adjacency (`successor_numbers`, `predecessor_numbers`) and
//! `has_edge` are deliberately unsupported: they would hand out raw
//! adjacency that ignores suppression. They always fail with the fatal
//! [`ViewError::UnsupportedQuery`] and their success type is uninhabited.

use std::convert::Infallible;
use std::fmt;

use petgraph::Direction;

use crate::base::BaseGraph;
use crate::config::{UnknownNodePolicy, ViewConfig};
use crate::error::ViewError;
use crate::id::HeapNodeId;
use crate::numbering::NumberingService;
use crate::suppression::EdgeSuppressionSet;

/// A heap graph view that hides suppressed edges.
#[derive(Debug)]
pub struct SuppressibleGraphView<G: BaseGraph> {
    base: G,
    suppressed: EdgeSuppressionSet,
    config: ViewConfig,
}

impl<G: BaseGraph> SuppressibleGraphView<G> {
    /// Opens a session over `base` with an empty suppression set.
    pub fn new(base: G) -> Self {
        Self::with_config(base, ViewConfig::default())
    }

    pub fn with_config(base: G, config: ViewConfig) -> Self {
        SuppressibleGraphView {
            base,
            suppressed: EdgeSuppressionSet::new(),
            config,
        }
    }

    /// Ends the session, returning the base graph and the final suppression
    /// set.
    pub fn into_parts(self) -> (G, EdgeSuppressionSet) {
        (self.base, self.suppressed)
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn base(&self) -> &G {
        &self.base
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The edges suppressed so far in this session.
    pub fn suppressed(&self) -> &EdgeSuppressionSet {
        &self.suppressed
    }

    /// Resolves `node` to its stable id.
    pub fn number_of(&self, node: &G::Node) -> Result<HeapNodeId, ViewError> {
        number_of(&self.base, node)
    }

    /// Resolves `id` back to its node.
    pub fn node_of(&self, id: HeapNodeId) -> Result<&G::Node, ViewError> {
        self.base
            .numbering()
            .node_of(id)
            .ok_or(ViewError::UnknownId { id })
    }

    // -----------------------------------------------------------------------
    // Suppression
    // -----------------------------------------------------------------------

    /// Hides the edge `src -> dst` for the rest of the session.
    ///
    /// Returns `true` if the edge was not already hidden. Both nodes must be
    /// known to the numbering service; the edge itself need not exist in the
    /// base graph.
    pub fn add_ignore_edge(&mut self, src: &G::Node, dst: &G::Node) -> Result<bool, ViewError> {
        let src = number_of(&self.base, src)?;
        let dst = number_of(&self.base, dst)?;
        Ok(record_suppression(&mut self.suppressed, src, dst))
    }

    /// Id-level variant of [`add_ignore_edge`](Self::add_ignore_edge).
    pub fn add_ignore_edge_ids(
        &mut self,
        src: HeapNodeId,
        dst: HeapNodeId,
    ) -> Result<bool, ViewError> {
        self.node_of(src)?;
        self.node_of(dst)?;
        Ok(record_suppression(&mut self.suppressed, src, dst))
    }

    /// Returns `true` if `src -> dst` has been suppressed in this session.
    pub fn is_suppressed(&self, src: &G::Node, dst: &G::Node) -> Result<bool, ViewError> {
        let src = number_of(&self.base, src)?;
        let dst = number_of(&self.base, dst)?;
        Ok(self.suppressed.contains(src, dst))
    }

    // -----------------------------------------------------------------------
    // Filtered queries
    // -----------------------------------------------------------------------

    /// Nodes `d` with a base edge `node -> d` that is not suppressed.
    pub fn successors(&self, node: &G::Node) -> Result<Neighbors<'_, G>, ViewError> {
        let anchor = resolve_anchor(&self.base, &self.config, node)?;
        Ok(self.filtered_neighbors(anchor, Direction::Outgoing))
    }

    /// Nodes `s` with a base edge `s -> node` that is not suppressed.
    pub fn predecessors(&self, node: &G::Node) -> Result<Neighbors<'_, G>, ViewError> {
        let anchor = resolve_anchor(&self.base, &self.config, node)?;
        Ok(self.filtered_neighbors(anchor, Direction::Incoming))
    }

    /// Id-level [`successors`](Self::successors). Goes through the filter.
    pub fn successor_ids(&self, id: HeapNodeId) -> Result<NeighborIds<'_, G>, ViewError> {
        let anchor = resolve_id(&self.base, &self.config, id)?;
        Ok(filtered_ids(&self.base, &self.suppressed, anchor, Direction::Outgoing))
    }

    /// Id-level [`predecessors`](Self::predecessors). Goes through the filter.
    pub fn predecessor_ids(&self, id: HeapNodeId) -> Result<NeighborIds<'_, G>, ViewError> {
        let anchor = resolve_id(&self.base, &self.config, id)?;
        Ok(filtered_ids(&self.base, &self.suppressed, anchor, Direction::Incoming))
    }

    /// Every node of the base graph. Suppression never hides nodes.
    pub fn all_nodes(&self) -> G::Nodes<'_> {
        self.base.nodes()
    }

    pub fn node_count(&self) -> usize {
        self.base.node_count()
    }

    fn filtered_neighbors(
        &self,
        anchor: Option<HeapNodeId>,
        direction: Direction,
    ) -> Neighbors<'_, G> {
        Neighbors {
            ids: filtered_ids(&self.base, &self.suppressed, anchor, direction),
            numbering: self.base.numbering(),
        }
    }

    // -----------------------------------------------------------------------
    // Unsupported raw paths
    // -----------------------------------------------------------------------

    /// Raw successor id set. Always fails: it would bypass suppression.
    pub fn successor_numbers(&self, _node: &G::Node) -> Result<Infallible, ViewError> {
        unsupported("successor_numbers")
    }

    /// Raw predecessor id set. Always fails: it would bypass suppression.
    pub fn predecessor_numbers(&self, _node: &G::Node) -> Result<Infallible, ViewError> {
        unsupported("predecessor_numbers")
    }

    /// Raw edge test. Always fails: it would bypass suppression.
    pub fn has_edge(&self, _src: &G::Node, _dst: &G::Node) -> Result<Infallible, ViewError> {
        unsupported("has_edge")
    }
}

// ---------------------------------------------------------------------------
// Filtered iterators
// ---------------------------------------------------------------------------

/// Neighbour ids of one anchor node, minus suppressed edges.
pub struct NeighborIds<'a, G: BaseGraph + 'a> {
    /// `None` when the anchor is an unknown node under the lenient policy.
    raw: Option<(HeapNodeId, G::Neighbors<'a>)>,
    direction: Direction,
    suppressed: &'a EdgeSuppressionSet,
}

impl<'a, G: BaseGraph + 'a> Iterator for NeighborIds<'a, G> {
    type Item = HeapNodeId;

    fn next(&mut self) -> Option<HeapNodeId> {
        let (anchor, raw) = self.raw.as_mut()?;
        let anchor = *anchor;
        for other in raw {
            let (src, dst) = match self.direction {
                Direction::Outgoing => (anchor, other),
                Direction::Incoming => (other, anchor),
            };
            if !self.suppressed.contains(src, dst) {
                return Some(other);
            }
        }
        None
    }
}

// The raw iterator is opaque and is left out.
impl<'a, G: BaseGraph + 'a> fmt::Debug for NeighborIds<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeighborIds")
            .field("anchor", &self.raw.as_ref().map(|(anchor, _)| *anchor))
            .field("direction", &self.direction)
            .field("suppressed", &self.suppressed.len())
            .finish_non_exhaustive()
    }
}

/// Neighbour nodes of one anchor node, minus suppressed edges.
///
/// A raw neighbour id the numbering cannot resolve breaks the
/// [`BaseGraph`] contract; it is skipped and logged at `warn`.
pub struct Neighbors<'a, G: BaseGraph + 'a> {
    ids: NeighborIds<'a, G>,
    numbering: &'a G::Numbering,
}

impl<'a, G: BaseGraph + 'a> Iterator for Neighbors<'a, G> {
    type Item = &'a G::Node;

    fn next(&mut self) -> Option<&'a G::Node> {
        let numbering = self.numbering;
        self.ids.find_map(|id| resolve_neighbor(numbering, id))
    }
}

impl<'a, G: BaseGraph + 'a> fmt::Debug for Neighbors<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neighbors")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Helpers shared with SharedGraphView
// ---------------------------------------------------------------------------

pub(crate) fn number_of<G: BaseGraph>(base: &G, node: &G::Node) -> Result<HeapNodeId, ViewError> {
    base.numbering()
        .number_of(node)
        .ok_or_else(|| ViewError::unknown_node(node))
}

/// Resolves a query anchor, applying the unknown-node policy. `Ok(None)`
/// means "no such node, no edges".
pub(crate) fn resolve_anchor<G: BaseGraph>(
    base: &G,
    config: &ViewConfig,
    node: &G::Node,
) -> Result<Option<HeapNodeId>, ViewError> {
    match base.numbering().number_of(node) {
        Some(id) => Ok(Some(id)),
        None => match config.unknown_nodes {
            UnknownNodePolicy::Error => Err(ViewError::unknown_node(node)),
            UnknownNodePolicy::Empty => Ok(None),
        },
    }
}

pub(crate) fn resolve_id<G: BaseGraph>(
    base: &G,
    config: &ViewConfig,
    id: HeapNodeId,
) -> Result<Option<HeapNodeId>, ViewError> {
    if base.numbering().node_of(id).is_some() {
        return Ok(Some(id));
    }
    match config.unknown_nodes {
        UnknownNodePolicy::Error => Err(ViewError::UnknownId { id }),
        UnknownNodePolicy::Empty => Ok(None),
    }
}

pub(crate) fn filtered_ids<'a, G: BaseGraph + 'a>(
    base: &'a G,
    suppressed: &'a EdgeSuppressionSet,
    anchor: Option<HeapNodeId>,
    direction: Direction,
) -> NeighborIds<'a, G> {
    let raw = anchor.map(|id| {
        let raw = match direction {
            Direction::Outgoing => base.raw_successors(id),
            Direction::Incoming => base.raw_predecessors(id),
        };
        (id, raw)
    });
    NeighborIds {
        raw,
        direction,
        suppressed,
    }
}

/// Maps a neighbour id yielded by the base graph back to its node.
pub(crate) fn resolve_neighbor<S: NumberingService>(
    numbering: &S,
    id: HeapNodeId,
) -> Option<&S::Node> {
    let node = numbering.node_of(id);
    if node.is_none() {
        tracing::warn!(%id, "base graph yielded a neighbour id its numbering cannot resolve");
    }
    node
}

pub(crate) fn record_suppression(
    suppressed: &mut EdgeSuppressionSet,
    src: HeapNodeId,
    dst: HeapNodeId,
) -> bool {
    let added = suppressed.add(src, dst);
    if added {
        tracing::debug!(%src, %dst, suppressed = suppressed.len(), "suppressed heap edge");
    } else {
        tracing::trace!(%src, %dst, "heap edge already suppressed");
    }
    added
}

pub(crate) fn unsupported(query: &'static str) -> Result<Infallible, ViewError> {
    tracing::error!(query, "raw adjacency query would bypass edge suppression");
    Err(ViewError::UnsupportedQuery { query })
}
