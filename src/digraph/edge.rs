//! Edge value types shared by graph implementations and the traversal engine.
//!
//! All three shapes are plain data: a full edge carries its source, while the
//! outgoing/incoming forms drop the endpoint that is implied by the vertex
//! they were looked up from. Unlabeled graphs use the default `L = ()`.

use serde::{Deserialize, Serialize};

/// A directed edge from `source` to `target` with a label in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, L = ()> {
    pub source: V,
    pub label: L,
    pub target: V,
}

impl<V, L> Edge<V, L> {
    /// Creates an edge from its three parts.
    pub fn new(source: V, label: L, target: V) -> Self {
        Self {
            source,
            label,
            target,
        }
    }
}

impl<V> Edge<V> {
    /// Creates an unlabeled edge.
    pub fn unlabeled(source: V, target: V) -> Self {
        Self::new(source, (), target)
    }
}

/// An edge as seen from its source vertex.
///
/// This is what [`outgoing_edges`](crate::digraph::IncidenceGraph::outgoing_edges)
/// yields: the source is the vertex the edges were asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutgoingEdge<V, L = ()> {
    pub label: L,
    pub target: V,
}

impl<V, L> OutgoingEdge<V, L> {
    /// Creates a labeled outgoing edge.
    pub fn new(label: L, target: V) -> Self {
        Self { label, target }
    }

    /// Attaches `source`, turning this into a full [`Edge`].
    pub fn into_edge(self, source: V) -> Edge<V, L> {
        Edge::new(source, self.label, self.target)
    }
}

impl<V> OutgoingEdge<V> {
    /// Creates an unlabeled outgoing edge.
    pub fn to(target: V) -> Self {
        Self::new((), target)
    }
}

/// An edge as seen from its target vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncomingEdge<V, L = ()> {
    pub label: L,
    pub source: V,
}

impl<V, L> IncomingEdge<V, L> {
    /// Creates a labeled incoming edge.
    pub fn new(label: L, source: V) -> Self {
        Self { label, source }
    }

    /// Attaches `target`, turning this into a full [`Edge`].
    pub fn into_edge(self, target: V) -> Edge<V, L> {
        Edge::new(self.source, self.label, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_constructors_agree() {
        assert_eq!(Edge::unlabeled(1, 2), Edge::new(1, (), 2));
        assert_eq!(OutgoingEdge::to(5), OutgoingEdge::new((), 5));
    }

    #[test]
    fn test_directed_forms_attach_endpoints() {
        let edge = OutgoingEdge::new("half", 16).into_edge(32);
        assert_eq!(edge, Edge::new(32, "half", 16));

        let edge = IncomingEdge::new("half", 32).into_edge(16);
        assert_eq!(edge, Edge::new(32, "half", 16)); // same edge, seen from 16
    }
}
