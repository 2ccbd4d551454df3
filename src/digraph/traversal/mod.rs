//! Graph traversal module for bounded depth-first search.
//!
//! This module provides lazy depth-first traversal over anything that
//! implements the incidence contract. It supports pre- and post-order
//! vertex reporting, visited-target edge reporting, backtracking edge
//! reporting, and soft caps on depth, vertices, and edges, all from one
//! engine that serves both pull (iterator) and push (handler) consumers.
//!
//! # Module Structure
//!
//! - [`types`] - Options, statistics, events, and push-style handlers
//! - [`search`] - The `Walk` iterator, push driver, and extension trait
//! - [`format`] - Indented tree rendering of a bounded walk
//!
//! # Example
//!
//! ```ignore
//! use graphwalk::{IncidenceGraphExt, TraversalOptions};
//!
//! let graph = graphwalk::generators::incidence_inverted([1]);
//! let options = TraversalOptions {
//!     max_depth: Some(6),
//!     ..TraversalOptions::default()
//! };
//! for event in graph.walk_events(options)? {
//!     println!("{:?}", event);
//! }
//! ```

mod format;
mod search;
mod types;


// Re-export public API
pub use format::TraversalFormatter;
pub use search::{traverse_search, IncidenceGraphExt, Walk};
pub use types::{
    EdgeVisit, TraversalEvent, TraversalHandlers, TraversalOptions, TraversalStats, VertexVisit,
};
