//! Configuration, statistics, and event types for graph traversal.

use serde::{Deserialize, Serialize};

use crate::digraph::edge::Edge;
use crate::digraph::graph_trait::GraphError;

/// Configuration for a single traversal run.
///
/// The caps are soft: reaching one ends the walk silently after the event
/// that reached it, observable only through [`TraversalStats`]. `None`
/// leaves the corresponding dimension unbounded, which is only safe on
/// graphs that are finite in that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalOptions {
    /// Also report edges whose target has already been visited.
    pub include_edges_with_visited_targets: bool,

    /// Report each vertex after its subtree instead of before (post-order).
    pub yield_node_last: bool,

    /// Report every traversed edge a second time once its subtree is done.
    pub yield_backtracking_edges: bool,

    /// Deepest level the walk may enter; seeds sit at depth 1.
    pub max_depth: Option<usize>,

    /// Cap on vertex events.
    pub max_vertices: Option<usize>,

    /// Cap on edge events (backtracking repeats not counted).
    pub max_edges: Option<usize>,
}

impl TraversalOptions {
    /// Checks the options for contradictions.
    ///
    /// A cap of `Some(0)` would forbid every event and is rejected as a
    /// configuration error rather than treated as a bound.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.max_depth == Some(0) {
            return Err(GraphError::InvalidCap("max_depth"));
        }
        if self.max_vertices == Some(0) {
            return Err(GraphError::InvalidCap("max_vertices"));
        }
        if self.max_edges == Some(0) {
            return Err(GraphError::InvalidCap("max_edges"));
        }
        Ok(())
    }

    /// These options with pre-order vertex reporting.
    pub fn for_depth_first_search(self) -> Self {
        Self {
            yield_node_last: false,
            ..self
        }
    }

    /// These options with post-order vertex reporting.
    pub fn for_depth_last_search(self) -> Self {
        Self {
            yield_node_last: true,
            ..self
        }
    }
}

/// Running counters attached to every traversal event, inclusive of the
/// event that carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Depth of the vertex the event belongs to; an edge event uses the
    /// depth of its source vertex. Seeds sit at depth 1.
    pub depth: usize,

    /// Deepest level entered so far.
    pub max_depth: usize,

    /// Vertex events so far, counting the current one.
    pub vertex_count: usize,

    /// Edge events so far, counting the current one.
    pub edge_count: usize,
}

/// A vertex being reported. Emitted exactly once per visited vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexVisit<V> {
    pub vertex: V,
    pub stats: TraversalStats,
}

/// An edge being reported.
///
/// With [`TraversalOptions::yield_backtracking_edges`] enabled the same
/// edge is reported a second time, at the same depth and with the same
/// `is_new_target`, once the subtree behind it has been fully explored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeVisit<V, L = ()> {
    pub edge: Edge<V, L>,
    pub stats: TraversalStats,

    /// True when the target had not been visited before this edge.
    pub is_new_target: bool,

    /// True on the second, post-subtree report of an edge.
    pub is_backtracking: bool,
}

/// One traversal event: a vertex or an edge, in recursion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TraversalEvent<V, L = ()> {
    Vertex(VertexVisit<V>),
    Edge(EdgeVisit<V, L>),
}

impl<V, L> TraversalEvent<V, L> {
    /// Returns the counters attached to this event.
    pub fn stats(&self) -> TraversalStats {
        match self {
            TraversalEvent::Vertex(visit) => visit.stats,
            TraversalEvent::Edge(visit) => visit.stats,
        }
    }

    /// Returns the vertex visit if this is a vertex event.
    pub fn as_vertex(&self) -> Option<&VertexVisit<V>> {
        match self {
            TraversalEvent::Vertex(visit) => Some(visit),
            TraversalEvent::Edge(_) => None,
        }
    }

    /// Returns the edge visit if this is an edge event.
    pub fn as_edge(&self) -> Option<&EdgeVisit<V, L>> {
        match self {
            TraversalEvent::Vertex(_) => None,
            TraversalEvent::Edge(visit) => Some(visit),
        }
    }
}

/// Push-style callbacks for a traversal run.
///
/// Each edge/vertex handler returns whether the walk should continue;
/// returning `false` aborts the entire walk, remaining seeds included.
/// `on_completed` runs once the walk ends, however it ends. The default
/// implementations observe nothing and never stop.
pub trait TraversalHandlers<V, L = ()> {
    /// Called for every vertex event.
    fn on_vertex(&mut self, _visit: &VertexVisit<V>) -> bool {
        true
    }

    /// Called for every forward edge event.
    fn on_edge(&mut self, _visit: &EdgeVisit<V, L>) -> bool {
        true
    }

    /// Called for every backtracking edge event.
    fn on_backtrack_edge(&mut self, _visit: &EdgeVisit<V, L>) -> bool {
        true
    }

    /// Called once with the final counters.
    fn on_completed(&mut self, _stats: TraversalStats) {}
}
