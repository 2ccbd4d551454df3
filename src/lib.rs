pub mod digraph;
pub mod generators;

pub use digraph::{
    BidirectionalGraph, DirectedGraph, Edge, EnumerableGraph, ExplicitGraph, FunctionGraph, Graph,
    GraphError, ImplicitGraph, IncidenceGraph, IncomingEdge, OutgoingEdge, SeededGraph,
};
pub use digraph::{
    traverse_search, EdgeVisit, IncidenceGraphExt, TraversalEvent, TraversalFormatter,
    TraversalHandlers, TraversalOptions, TraversalStats, VertexVisit, Walk,
};
pub use generators::{CollatzGraph, CollatzRules, DerivationRule, InvertedCollatzGraph};
