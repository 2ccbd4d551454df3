//! Indented tree rendering of a bounded depth-first walk.

use std::fmt::Display;

use crate::digraph::graph_trait::{GraphError, IncidenceGraph};
use crate::digraph::traversal::search::Walk;
use crate::digraph::traversal::types::{TraversalEvent, TraversalOptions};

/// Renders the traversal tree of an incidence graph, one vertex per line.
///
/// Each vertex event prints at its depth, connected to its parent with a
/// `└──` branch and `│` rails. Edges to already-visited vertices print the
/// target one level deeper with an ` ...` marker instead of expanding it,
/// which is how cycles and merges stay readable:
///
/// ```text
/// Seeds: 1
/// 1
/// └───2
/// │   └───3
/// │   │   └───1 ...
/// ```
///
/// The default walk is pre-order, reports visited targets, and stops at
/// depth 10, so generator-backed graphs render without running away.
#[derive(Debug, Clone)]
pub struct TraversalFormatter {
    options: TraversalOptions,
    indent: usize,
}

impl TraversalFormatter {
    pub fn new() -> Self {
        Self {
            options: TraversalOptions {
                include_edges_with_visited_targets: true,
                max_depth: Some(10),
                ..TraversalOptions::default()
            },
            indent: 4,
        }
    }

    /// Sets the per-level indent width, clamped to at least 1.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Replaces the traversal options driving the walk.
    ///
    /// Pre-order reporting and visited-target edges are forced on, since
    /// the rendering depends on both; caps and the rest are taken as given.
    pub fn with_options(mut self, options: TraversalOptions) -> Result<Self, GraphError> {
        options.validate()?;
        self.options = TraversalOptions {
            include_edges_with_visited_targets: true,
            yield_node_last: false,
            ..options
        };
        Ok(self)
    }

    /// Renders the traversal tree of `graph` using `Display` for vertices.
    pub fn format<G>(&self, graph: &G) -> String
    where
        G: IncidenceGraph,
        G::Vertex: Display,
    {
        self.format_with(graph, |vertex| vertex.to_string())
    }

    /// Renders the traversal tree with a caller-supplied vertex renderer.
    pub fn format_with<G>(
        &self,
        graph: &G,
        mut render: impl FnMut(&G::Vertex) -> String,
    ) -> String
    where
        G: IncidenceGraph,
    {
        let mut out = String::new();
        out.push_str("Seeds: ");
        let seeds: Vec<String> = graph.seed_vertices().map(|seed| render(&seed)).collect();
        out.push_str(&seeds.join(", "));
        out.push('\n');

        for event in Walk::unchecked(graph, self.options) {
            match event {
                TraversalEvent::Vertex(visit) => {
                    self.push_line(&mut out, &render(&visit.vertex), visit.stats.depth, "");
                }
                TraversalEvent::Edge(visit) if !visit.is_new_target && !visit.is_backtracking => {
                    // Visited target: show it one level below its source,
                    // marked instead of expanded.
                    let text = render(&visit.edge.target);
                    self.push_line(&mut out, &text, visit.stats.depth + 1, " ...");
                }
                TraversalEvent::Edge(_) => {}
            }
        }
        out
    }

    fn push_line(&self, out: &mut String, text: &str, depth: usize, suffix: &str) {
        if depth > 2 {
            let rail = format!("│{}", " ".repeat(self.indent - 1));
            out.push_str(&rail.repeat(depth - 2));
        }
        if depth > 1 {
            out.push('└');
            out.push_str(&"─".repeat(self.indent - 1));
        }
        out.push_str(text);
        out.push_str(suffix);
        out.push('\n');
    }
}

impl Default for TraversalFormatter {
    fn default() -> Self {
        Self::new()
    }
}
