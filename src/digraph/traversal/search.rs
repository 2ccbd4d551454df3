//! Depth-first search over the incidence contract.
//!
//! One explicit-stack state machine serves both interaction styles: pull
//! consumers iterate a [`Walk`], push consumers hand [`TraversalHandlers`]
//! to [`traverse_search`], which drives the same iterator. The two styles
//! therefore produce identical event sequences by construction. Recursion
//! depth lives on the heap, so deep graphs cannot overflow the call stack.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::digraph::edge::Edge;
use crate::digraph::graph_trait::{GraphError, IncidenceGraph};
use crate::digraph::traversal::types::{
    EdgeVisit, TraversalEvent, TraversalHandlers, TraversalOptions, TraversalStats, VertexVisit,
};

/// One suspended level of the depth-first recursion.
struct Frame<'g, G: IncidenceGraph + 'g> {
    vertex: G::Vertex,
    depth: usize,
    /// Outgoing-edge iterator, created when the frame is first expanded.
    edges: Option<G::Outgoing<'g>>,
    /// Whether the pre-order entry point of this frame has run.
    entered: bool,
    /// Forward edge waiting for its backtracking report, with its
    /// `is_new_target` flag.
    pending: Option<(Edge<G::Vertex, G::Label>, bool)>,
}

/// Lazy depth-first event sequence: the pull interaction style.
///
/// Each pulled event performs one step of traversal work; in particular,
/// `outgoing_edges` is consulted at most once per expanded vertex and its
/// result is consumed one edge at a time, so unbounded generator graphs
/// are fine as long as the consumer (or a cap) bounds the walk. The
/// sequence is single-pass: dropping the iterator abandons the rest of
/// the walk, and there is no rewinding.
pub struct Walk<'g, G: IncidenceGraph> {
    graph: &'g G,
    options: TraversalOptions,
    seeds: G::Seeds<'g>,
    stack: Vec<Frame<'g, G>>,
    visited: HashSet<G::Vertex>,
    max_depth_seen: usize,
    vertex_count: usize,
    edge_count: usize,
    finished: bool,
}

impl<'g, G: IncidenceGraph> Walk<'g, G> {
    /// Starts a walk over `graph`, validating `options` first.
    pub fn new(graph: &'g G, options: TraversalOptions) -> Result<Self, GraphError> {
        options.validate()?;
        Ok(Self::unchecked(graph, options))
    }

    /// Starts a walk with options already known to be valid.
    pub(crate) fn unchecked(graph: &'g G, options: TraversalOptions) -> Self {
        log::debug!("starting depth-first walk with {:?}", options);
        Self {
            graph,
            options,
            seeds: graph.seed_vertices(),
            stack: Vec::new(),
            visited: HashSet::new(),
            max_depth_seen: 0,
            vertex_count: 0,
            edge_count: 0,
            finished: false,
        }
    }

    /// Returns the counters as of the most recent event.
    pub fn stats(&self) -> TraversalStats {
        self.snapshot(self.stack.len())
    }

    fn snapshot(&self, depth: usize) -> TraversalStats {
        TraversalStats {
            depth,
            max_depth: self.max_depth_seen,
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
        }
    }

    fn depth_allowed(&self, depth: usize) -> bool {
        self.options.max_depth.map_or(true, |cap| depth <= cap)
    }

    fn open_vertex(&mut self, vertex: G::Vertex, depth: usize) {
        if depth > self.max_depth_seen {
            self.max_depth_seen = depth;
        }
        self.stack.push(Frame {
            vertex,
            depth,
            edges: None,
            entered: false,
            pending: None,
        });
    }

    fn emit_vertex(
        &mut self,
        vertex: G::Vertex,
        depth: usize,
    ) -> TraversalEvent<G::Vertex, G::Label> {
        self.vertex_count += 1;
        if self
            .options
            .max_vertices
            .is_some_and(|cap| self.vertex_count >= cap)
        {
            log::debug!("vertex cap reached after {} vertices", self.vertex_count);
            self.finished = true;
        }
        log::trace!("vertex {:?} at depth {}", vertex, depth);
        TraversalEvent::Vertex(VertexVisit {
            vertex,
            stats: self.snapshot(depth),
        })
    }
}

impl<'g, G: IncidenceGraph> Iterator for Walk<'g, G> {
    type Item = TraversalEvent<G::Vertex, G::Label>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            // Open the next unvisited seed once the current tree is done.
            let Some(frame) = self.stack.last_mut() else {
                loop {
                    match self.seeds.next() {
                        Some(seed) if self.visited.contains(&seed) => continue,
                        Some(seed) => {
                            self.visited.insert(seed.clone());
                            self.open_vertex(seed, 1);
                            break;
                        }
                        None => {
                            self.finished = true;
                            log::debug!(
                                "walk complete: {} vertices, {} edges, deepest level {}",
                                self.vertex_count,
                                self.edge_count,
                                self.max_depth_seen
                            );
                            return None;
                        }
                    }
                }
                continue;
            };

            // A parked backtracking report goes out before anything else
            // happens on this frame. It reuses the forward edge and depth
            // but takes a fresh counter snapshot, without advancing
            // edge_count.
            if let Some((edge, is_new)) = frame.pending.take() {
                let depth = frame.depth;
                return Some(TraversalEvent::Edge(EdgeVisit {
                    edge,
                    stats: self.snapshot(depth),
                    is_new_target: is_new,
                    is_backtracking: true,
                }));
            }

            if !frame.entered {
                frame.entered = true;
                if !self.options.yield_node_last {
                    let vertex = frame.vertex.clone();
                    let depth = frame.depth;
                    return Some(self.emit_vertex(vertex, depth));
                }
                continue;
            }

            let next_edge = match &mut frame.edges {
                Some(edges) => edges.next(),
                None => {
                    let mut edges = self.graph.outgoing_edges(&frame.vertex);
                    let first = edges.next();
                    frame.edges = Some(edges);
                    first
                }
            };

            match next_edge {
                Some(out) => {
                    let depth = frame.depth;
                    let edge = out.into_edge(frame.vertex.clone());
                    let is_new = !self.visited.contains(&edge.target);
                    if !is_new && !self.options.include_edges_with_visited_targets {
                        continue;
                    }
                    self.edge_count += 1;
                    if self
                        .options
                        .max_edges
                        .is_some_and(|cap| self.edge_count >= cap)
                    {
                        log::debug!("edge cap reached after {} edges", self.edge_count);
                        self.finished = true;
                    }
                    log::trace!("edge {:?} at depth {}", edge, depth);
                    let visit = EdgeVisit {
                        edge: edge.clone(),
                        stats: self.snapshot(depth),
                        is_new_target: is_new,
                        is_backtracking: false,
                    };
                    if !self.finished {
                        if self.options.yield_backtracking_edges {
                            if let Some(top) = self.stack.last_mut() {
                                top.pending = Some((edge.clone(), is_new));
                            }
                        }
                        if is_new {
                            self.visited.insert(edge.target.clone());
                            if self.depth_allowed(depth + 1) {
                                self.open_vertex(edge.target, depth + 1);
                            }
                        }
                    }
                    return Some(TraversalEvent::Edge(visit));
                }
                None => {
                    if let Some(done) = self.stack.pop() {
                        if self.options.yield_node_last {
                            return Some(self.emit_vertex(done.vertex, done.depth));
                        }
                    }
                }
            }
        }
    }
}

impl<'g, G: IncidenceGraph> FusedIterator for Walk<'g, G> {}

/// Runs a push-style depth-first search, dispatching every event to
/// `handlers`.
///
/// Configuration errors surface before any event. A handler returning
/// `false` aborts the walk, remaining seeds included; `on_completed` runs
/// regardless, with the counters at whatever point the walk ended.
pub fn traverse_search<G, H>(
    graph: &G,
    options: TraversalOptions,
    handlers: &mut H,
) -> Result<TraversalStats, GraphError>
where
    G: IncidenceGraph,
    H: TraversalHandlers<G::Vertex, G::Label>,
{
    let mut walk = Walk::new(graph, options)?;
    for event in walk.by_ref() {
        let keep_going = match &event {
            TraversalEvent::Vertex(visit) => handlers.on_vertex(visit),
            TraversalEvent::Edge(visit) if visit.is_backtracking => {
                handlers.on_backtrack_edge(visit)
            }
            TraversalEvent::Edge(visit) => handlers.on_edge(visit),
        };
        if !keep_going {
            log::debug!("traversal stopped by handler");
            break;
        }
    }
    let stats = walk.stats();
    handlers.on_completed(stats);
    Ok(stats)
}

/// Traversal entry points available on every incidence graph.
pub trait IncidenceGraphExt: IncidenceGraph + Sized {
    /// Push-style depth-first search delivering events to `handlers`.
    fn traverse_search<H>(
        &self,
        options: TraversalOptions,
        handlers: &mut H,
    ) -> Result<TraversalStats, GraphError>
    where
        H: TraversalHandlers<Self::Vertex, Self::Label>,
    {
        traverse_search(self, options, handlers)
    }

    /// Pull-style lazy event sequence for the same walk.
    fn walk_events(&self, options: TraversalOptions) -> Result<Walk<'_, Self>, GraphError> {
        Walk::new(self, options)
    }

    /// Pre-order walk with default options.
    fn depth_first(&self) -> Walk<'_, Self> {
        Walk::unchecked(self, TraversalOptions::default().for_depth_first_search())
    }

    /// Post-order walk with default options.
    fn depth_last(&self) -> Walk<'_, Self> {
        Walk::unchecked(self, TraversalOptions::default().for_depth_last_search())
    }

    /// Vertices of [`Self::depth_first`], without the edge events.
    fn depth_first_vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.depth_first().filter_map(|event| match event {
            TraversalEvent::Vertex(visit) => Some(visit.vertex),
            TraversalEvent::Edge(_) => None,
        })
    }
}

impl<G: IncidenceGraph> IncidenceGraphExt for G {}
