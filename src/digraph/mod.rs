pub mod edge;
pub mod graph;
pub mod graph_trait;
pub mod traversal;

pub use edge::{Edge, IncomingEdge, OutgoingEdge};
pub use graph::{DirectedGraph, FunctionGraph, IncomingIter, OutgoingIter, SeededGraph};
pub use graph_trait::{
    BidirectionalGraph, EnumerableGraph, ExplicitGraph, Graph, GraphError, ImplicitGraph,
    IncidenceGraph,
};
pub use traversal::{
    traverse_search, EdgeVisit, IncidenceGraphExt, TraversalEvent, TraversalFormatter,
    TraversalHandlers, TraversalOptions, TraversalStats, VertexVisit, Walk,
};
