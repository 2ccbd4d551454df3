//! Concrete graph implementations: owned adjacency storage, seed-scoped
//! views, and closure-backed generators.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice;

use crate::digraph::edge::{Edge, IncomingEdge, OutgoingEdge};
use crate::digraph::graph_trait::{
    BidirectionalGraph, EnumerableGraph, ExplicitGraph, Graph, GraphError, ImplicitGraph,
    IncidenceGraph,
};
use crate::digraph::traversal::{TraversalEvent, TraversalOptions, Walk};

/// Directed graph stored as vertex and edge lists with adjacency indexes
/// for both directions.
///
/// Vertices deduplicate on insertion and keep first-insertion order, which
/// is also the order `seed_vertices` and `vertices` iterate in. Edges are
/// kept exactly as added (parallel edges stay parallel) and adding an edge
/// inserts any endpoint the graph has not seen yet.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, L = ()> {
    vertices: Vec<V>,
    edges: Vec<Edge<V, L>>,
    index: HashMap<V, usize>,
    /// Edge positions leaving each vertex, indexed by vertex position.
    outgoing: Vec<Vec<usize>>,
    /// Edge positions arriving at each vertex, indexed by vertex position.
    incoming: Vec<Vec<usize>>,
}

impl<V, L> DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Adds `vertex` if not already present. Returns whether it was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let before = self.vertices.len();
        self.ensure_vertex(vertex);
        self.vertices.len() > before
    }

    /// Adds one edge, inserting missing endpoints along the way.
    pub fn add_edge(&mut self, source: V, label: L, target: V) {
        let source_at = self.ensure_vertex(source.clone());
        let target_at = self.ensure_vertex(target.clone());
        let position = self.edges.len();
        self.edges.push(Edge::new(source, label, target));
        self.outgoing[source_at].push(position);
        self.incoming[target_at].push(position);
    }

    /// Builds a graph from `(source, label, target)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, L, V)>) -> Self {
        let mut graph = Self::new();
        for (source, label, target) in edges {
            graph.add_edge(source, label, target);
        }
        graph
    }

    /// Builds a graph from explicit vertices plus edges; isolated vertices
    /// survive this way.
    pub fn from_parts(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, L, V)>,
    ) -> Self {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (source, label, target) in edges {
            graph.add_edge(source, label, target);
        }
        graph
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a traversal view starting from `seeds` instead of from
    /// every vertex. Seeds must already be part of the graph.
    pub fn seeded(
        &self,
        seeds: impl IntoIterator<Item = V>,
    ) -> Result<SeededGraph<'_, V, L>, GraphError> {
        let seeds: Vec<V> = seeds.into_iter().collect();
        for seed in &seeds {
            if !self.index.contains_key(seed) {
                return Err(GraphError::UnknownSeed(format!("{:?}", seed)));
            }
        }
        Ok(SeededGraph { graph: self, seeds })
    }

    /// Materializes any incidence graph by replaying its traversal events.
    ///
    /// Only finite graphs can be captured this way with default options;
    /// use [`Self::from_incidence_with`] and caps for generator-backed
    /// graphs that never run dry.
    pub fn from_incidence<G>(source: &G) -> Self
    where
        G: IncidenceGraph<Vertex = V, Label = L>,
    {
        Self::replay(source, TraversalOptions::default())
    }

    /// Materializes an incidence graph with caller-chosen bounds.
    ///
    /// The walk always reports visited-target edges and runs pre-order
    /// without backtracking repeats, so every examined edge lands in the
    /// snapshot exactly once; caps and `max_depth` are taken from
    /// `options`.
    pub fn from_incidence_with<G>(
        source: &G,
        options: TraversalOptions,
    ) -> Result<Self, GraphError>
    where
        G: IncidenceGraph<Vertex = V, Label = L>,
    {
        options.validate()?;
        Ok(Self::replay(source, options))
    }

    fn replay<G>(source: &G, options: TraversalOptions) -> Self
    where
        G: IncidenceGraph<Vertex = V, Label = L>,
    {
        let options = TraversalOptions {
            include_edges_with_visited_targets: true,
            yield_node_last: false,
            yield_backtracking_edges: false,
            ..options
        };
        let mut graph = Self::new();
        for event in Walk::unchecked(source, options) {
            match event {
                TraversalEvent::Vertex(visit) => {
                    graph.add_vertex(visit.vertex);
                }
                TraversalEvent::Edge(visit) => {
                    let edge = visit.edge;
                    graph.add_edge(edge.source, edge.label, edge.target);
                }
            }
        }
        graph
    }

    fn ensure_vertex(&mut self, vertex: V) -> usize {
        if let Some(&at) = self.index.get(&vertex) {
            return at;
        }
        let at = self.vertices.len();
        self.index.insert(vertex.clone(), at);
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        at
    }
}

impl<V> DirectedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Builds an unlabeled graph from `(source, target)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        for (source, target) in pairs {
            graph.add_edge(source, (), target);
        }
        graph
    }
}

impl<V, L> Default for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the outgoing edges of one vertex, in edge insertion order.
#[derive(Debug, Clone)]
pub struct OutgoingIter<'a, V, L = ()> {
    edges: &'a [Edge<V, L>],
    positions: slice::Iter<'a, usize>,
}

impl<'a, V: Clone, L: Clone> Iterator for OutgoingIter<'a, V, L> {
    type Item = OutgoingEdge<V, L>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let &position = self.positions.next()?;
        let edge = &self.edges[position];
        Some(OutgoingEdge::new(edge.label.clone(), edge.target.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, V: Clone, L: Clone> ExactSizeIterator for OutgoingIter<'a, V, L> {}

/// Iterator over the incoming edges of one vertex, in edge insertion order.
#[derive(Debug, Clone)]
pub struct IncomingIter<'a, V, L = ()> {
    edges: &'a [Edge<V, L>],
    positions: slice::Iter<'a, usize>,
}

impl<'a, V: Clone, L: Clone> Iterator for IncomingIter<'a, V, L> {
    type Item = IncomingEdge<V, L>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let &position = self.positions.next()?;
        let edge = &self.edges[position];
        Some(IncomingEdge::new(edge.label.clone(), edge.source.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, V: Clone, L: Clone> ExactSizeIterator for IncomingIter<'a, V, L> {}

impl<V, L> Graph for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Vertex = V;
    type Label = L;
}

impl<V, L> IncidenceGraph for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Seeds<'a> = std::iter::Cloned<slice::Iter<'a, V>> where Self: 'a;
    type Outgoing<'a> = OutgoingIter<'a, V, L> where Self: 'a;

    /// Every vertex is a seed, in insertion order.
    fn seed_vertices(&self) -> Self::Seeds<'_> {
        self.vertices.iter().cloned()
    }

    fn outgoing_edges(&self, vertex: &V) -> OutgoingIter<'_, V, L> {
        let positions = match self.index.get(vertex) {
            Some(&at) => self.outgoing[at].iter(),
            None => [].iter(),
        };
        OutgoingIter {
            edges: &self.edges,
            positions,
        }
    }

    #[inline]
    fn outgoing_degree(&self, vertex: &V) -> usize {
        self.index
            .get(vertex)
            .map_or(0, |&at| self.outgoing[at].len())
    }
}

impl<V, L> BidirectionalGraph for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Incoming<'a> = IncomingIter<'a, V, L> where Self: 'a;

    fn incoming_edges(&self, vertex: &V) -> IncomingIter<'_, V, L> {
        let positions = match self.index.get(vertex) {
            Some(&at) => self.incoming[at].iter(),
            None => [].iter(),
        };
        IncomingIter {
            edges: &self.edges,
            positions,
        }
    }

    #[inline]
    fn incoming_degree(&self, vertex: &V) -> usize {
        self.index
            .get(vertex)
            .map_or(0, |&at| self.incoming[at].len())
    }
}

impl<V, L> ImplicitGraph for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn edge_label(&self, source: &V, target: &V) -> Option<L> {
        let &at = self.index.get(source)?;
        self.outgoing[at]
            .iter()
            .map(|&position| &self.edges[position])
            .find(|edge| edge.target == *target)
            .map(|edge| edge.label.clone())
    }
}

impl<V, L> EnumerableGraph for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Vertices<'a> = std::iter::Cloned<slice::Iter<'a, V>> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.iter().cloned()
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, L> ExplicitGraph for DirectedGraph<V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Edges<'a> = std::iter::Cloned<slice::Iter<'a, Edge<V, L>>> where Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        self.edges.iter().cloned()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Borrowed view of a [`DirectedGraph`] that traverses from chosen seeds
/// instead of from every vertex. Built by [`DirectedGraph::seeded`].
#[derive(Debug, Clone)]
pub struct SeededGraph<'g, V, L = ()> {
    graph: &'g DirectedGraph<V, L>,
    seeds: Vec<V>,
}

impl<'g, V, L> Graph for SeededGraph<'g, V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Vertex = V;
    type Label = L;
}

impl<'g, V, L> IncidenceGraph for SeededGraph<'g, V, L>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
{
    type Seeds<'a> = std::iter::Cloned<slice::Iter<'a, V>> where Self: 'a;
    type Outgoing<'a> = OutgoingIter<'a, V, L> where Self: 'a;

    fn seed_vertices(&self) -> Self::Seeds<'_> {
        self.seeds.iter().cloned()
    }

    fn outgoing_edges(&self, vertex: &V) -> OutgoingIter<'_, V, L> {
        self.graph.outgoing_edges(vertex)
    }

    #[inline]
    fn outgoing_degree(&self, vertex: &V) -> usize {
        self.graph.outgoing_degree(vertex)
    }
}

/// Incidence graph defined by seed vertices plus an outgoing-edge closure.
///
/// The closure runs once per expanded vertex, when the walk first asks for
/// that vertex's edges, so the graph it describes may be unbounded.
pub struct FunctionGraph<V, F> {
    seeds: Vec<V>,
    outgoing: F,
}

impl<V, F> FunctionGraph<V, F> {
    pub fn new(seeds: impl IntoIterator<Item = V>, outgoing: F) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
            outgoing,
        }
    }
}

impl<V, L, F, I> Graph for FunctionGraph<V, F>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
    F: Fn(&V) -> I,
    I: Iterator<Item = OutgoingEdge<V, L>>,
{
    type Vertex = V;
    type Label = L;
}

impl<V, L, F, I> IncidenceGraph for FunctionGraph<V, F>
where
    V: Clone + Eq + Hash + Debug,
    L: Clone + Debug,
    F: Fn(&V) -> I,
    I: Iterator<Item = OutgoingEdge<V, L>>,
{
    type Seeds<'a> = std::iter::Cloned<slice::Iter<'a, V>> where Self: 'a;
    type Outgoing<'a> = I where Self: 'a;

    fn seed_vertices(&self) -> Self::Seeds<'_> {
        self.seeds.iter().cloned()
    }

    fn outgoing_edges(&self, vertex: &V) -> I {
        (self.outgoing)(vertex)
    }
}
