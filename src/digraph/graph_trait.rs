//! Graph capability traits for unified access to stored and generated graphs.
//!
//! This module defines the `IncidenceGraph` trait which abstracts over
//! different graph sources, allowing the same traversal code to work with
//! the owned `DirectedGraph` and closure-backed `FunctionGraph`
//! implementations. Further capabilities (incoming edges, membership tests,
//! global listings) live in their own traits so a graph type implements
//! exactly what it can answer.

use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::digraph::edge::{Edge, IncomingEdge, OutgoingEdge};

/// Errors that can occur during graph construction and traversal setup
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Traversal cap `{0}` must be at least 1")]
    InvalidCap(&'static str),

    #[error("Seed vertex {0} does not exist in the graph")]
    UnknownSeed(String),
}

/// Vertex and label vocabulary of a graph.
///
/// Vertex equality and hashing decide when two values name the same vertex,
/// for the traversal engine and every graph type alike. A wrapper vertex
/// type can therefore substitute its own relation (say, case-insensitive
/// strings) without touching any other code.
pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;
    type Label: Clone + Debug;
}

/// The single capability the traversal engine consumes: seed vertices plus
/// a lazy per-vertex outgoing-edge listing.
///
/// Implementations may generate edges on demand, so a graph can be
/// unbounded; consumers are expected to bound their walks instead.
///
/// # Example
/// ```ignore
/// fn reachable_count<G: IncidenceGraph>(graph: &G) -> usize {
///     graph.depth_first_vertices().count()
/// }
/// ```
pub trait IncidenceGraph: Graph {
    /// Iterator over seed vertices.
    type Seeds<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Iterator over the outgoing edges of a single vertex.
    type Outgoing<'a>: Iterator<Item = OutgoingEdge<Self::Vertex, Self::Label>>
    where
        Self: 'a;

    /// Returns the traversal starting points, in order.
    fn seed_vertices(&self) -> Self::Seeds<'_>;

    /// Returns the edges leaving `vertex`.
    ///
    /// The sequence is consumed lazily; nothing should be computed for
    /// edges that are never pulled.
    fn outgoing_edges(&self, vertex: &Self::Vertex) -> Self::Outgoing<'_>;

    /// Returns the number of edges leaving `vertex`.
    #[inline]
    fn outgoing_degree(&self, vertex: &Self::Vertex) -> usize {
        self.outgoing_edges(vertex).count()
    }
}

/// Incidence graphs that can also list edges arriving at a vertex.
pub trait BidirectionalGraph: IncidenceGraph {
    /// Iterator over the incoming edges of a single vertex.
    type Incoming<'a>: Iterator<Item = IncomingEdge<Self::Vertex, Self::Label>>
    where
        Self: 'a;

    /// Returns the edges arriving at `vertex`.
    fn incoming_edges(&self, vertex: &Self::Vertex) -> Self::Incoming<'_>;

    /// Returns the number of edges arriving at `vertex`.
    #[inline]
    fn incoming_degree(&self, vertex: &Self::Vertex) -> usize {
        self.incoming_edges(vertex).count()
    }
}

/// Graphs that can answer membership queries without enumerating anything.
pub trait ImplicitGraph: Graph {
    /// Returns whether `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns the label of the edge from `source` to `target`, if the
    /// graph contains that edge.
    fn edge_label(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Label>;

    /// Returns whether the graph contains an edge from `source` to `target`.
    #[inline]
    fn contains_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.edge_label(source, target).is_some()
    }
}

/// Graphs with a finite, listable vertex set.
pub trait EnumerableGraph: Graph {
    /// Iterator over every vertex.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns every vertex of the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices in the graph.
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// Graphs with a finite, listable edge set.
pub trait ExplicitGraph: EnumerableGraph {
    /// Iterator over every edge.
    type Edges<'a>: Iterator<Item = Edge<Self::Vertex, Self::Label>>
    where
        Self: 'a;

    /// Returns every edge of the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges in the graph.
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
