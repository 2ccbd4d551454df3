//! Example graph sources built on the Collatz recurrence.
//!
//! These give small, cheap-to-compute graphs whose shapes (chains, merges,
//! unbounded branching) exercise every traversal feature. The forward graph
//! follows the 3n+1 process toward 1; the inverted graph expands outward
//! from 1 and branches wherever (n - 1) / 3 is a whole number, so it never
//! runs dry and needs a bounded walk.

use serde::{Deserialize, Serialize};

use crate::digraph::edge::{IncomingEdge, OutgoingEdge};
use crate::digraph::graph::FunctionGraph;
use crate::digraph::graph_trait::{Graph, ImplicitGraph};

/// Which Collatz rule derived an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivationRule {
    /// Even step: the target is half the source.
    HalfN,
    /// Odd step: the target is three times the source plus one.
    ThreeNPlusOne,
}

/// Outgoing-edge iterator of the forward Collatz graph.
pub type CollatzEdges = std::option::IntoIter<OutgoingEdge<u64, DerivationRule>>;

/// Incoming-edge iterator of the forward Collatz graph.
pub type CollatzIncoming = std::iter::Chain<
    std::option::IntoIter<IncomingEdge<u64, DerivationRule>>,
    std::option::IntoIter<IncomingEdge<u64, DerivationRule>>,
>;

/// Outgoing-edge iterator of the inverted Collatz graph.
pub type InvertedCollatzEdges = std::iter::Chain<
    std::option::IntoIter<OutgoingEdge<u64, DerivationRule>>,
    std::option::IntoIter<OutgoingEdge<u64, DerivationRule>>,
>;

/// Forward Collatz graph type returned by [`incidence`].
pub type CollatzGraph = FunctionGraph<u64, fn(&u64) -> CollatzEdges>;

/// Inverted Collatz graph type returned by [`incidence_inverted`].
pub type InvertedCollatzGraph = FunctionGraph<u64, fn(&u64) -> InvertedCollatzEdges>;

/// One derivation step from `n` toward 1. Values at or below 1 stop.
pub fn outgoing_edges(n: &u64) -> CollatzEdges {
    let n = *n;
    let edge = if n <= 1 {
        None
    } else if n % 2 == 0 {
        Some(OutgoingEdge::new(DerivationRule::HalfN, n / 2))
    } else {
        Some(OutgoingEdge::new(DerivationRule::ThreeNPlusOne, 3 * n + 1))
    };
    edge.into_iter()
}

/// The predecessors of `n` under the Collatz process.
///
/// Every n >= 1 has the predecessor 2n; there is a second predecessor
/// (n - 1) / 3 whenever that value is a whole number of at least 1.
pub fn incoming_edges(n: &u64) -> CollatzIncoming {
    let n = *n;
    let halving = (n >= 1).then(|| IncomingEdge::new(DerivationRule::HalfN, n * 2));
    let tripling = n
        .checked_sub(1)
        .filter(|&rest| rest % 3 == 0)
        .map(|rest| rest / 3)
        .filter(|&parent| parent >= 1)
        .map(|parent| IncomingEdge::new(DerivationRule::ThreeNPlusOne, parent));
    halving.into_iter().chain(tripling)
}

fn inverted_outgoing(n: &u64) -> InvertedCollatzEdges {
    let n = *n;
    let doubling = (n >= 1).then(|| OutgoingEdge::new(DerivationRule::HalfN, n * 2));
    let tripling = n
        .checked_sub(1)
        .filter(|&rest| rest % 3 == 0)
        .map(|rest| rest / 3)
        .filter(|&parent| parent >= 1)
        .map(|parent| OutgoingEdge::new(DerivationRule::ThreeNPlusOne, parent));
    doubling.into_iter().chain(tripling)
}

/// Forward Collatz graph seeded at the given values (values below 1 are
/// dropped).
pub fn incidence(seeds: impl IntoIterator<Item = u64>) -> CollatzGraph {
    let outgoing: fn(&u64) -> CollatzEdges = outgoing_edges;
    FunctionGraph::new(seeds.into_iter().filter(|&n| n >= 1), outgoing)
}

/// Inverted Collatz graph: edges run from each value to its predecessors,
/// so a walk from seed 1 expands outward through everything that reaches 1.
pub fn incidence_inverted(seeds: impl IntoIterator<Item = u64>) -> InvertedCollatzGraph {
    let outgoing: fn(&u64) -> InvertedCollatzEdges = inverted_outgoing;
    FunctionGraph::new(seeds.into_iter().filter(|&n| n >= 1), outgoing)
}

/// Membership-only view of the Collatz graph.
///
/// Answers vertex and edge queries from the rules alone, without
/// generating anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollatzRules;

impl Graph for CollatzRules {
    type Vertex = u64;
    type Label = DerivationRule;
}

impl ImplicitGraph for CollatzRules {
    fn contains_vertex(&self, vertex: &u64) -> bool {
        *vertex >= 1
    }

    fn edge_label(&self, source: &u64, target: &u64) -> Option<DerivationRule> {
        let (source, target) = (*source, *target);
        if source <= 1 {
            return None;
        }
        if source % 2 == 0 {
            (target == source / 2).then_some(DerivationRule::HalfN)
        } else {
            (target == 3 * source + 1).then_some(DerivationRule::ThreeNPlusOne)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::graph_trait::IncidenceGraph;
    use crate::digraph::traversal::IncidenceGraphExt;

    #[test]
    fn test_forward_steps() {
        let steps: Vec<_> = outgoing_edges(&32).collect();
        assert_eq!(steps, vec![OutgoingEdge::new(DerivationRule::HalfN, 16)]);

        let steps: Vec<_> = outgoing_edges(&5).collect();
        assert_eq!(
            steps,
            vec![OutgoingEdge::new(DerivationRule::ThreeNPlusOne, 16)]
        );

        assert_eq!(outgoing_edges(&1).count(), 0); // 1 is terminal
        assert_eq!(outgoing_edges(&0).count(), 0);
    }

    #[test]
    fn test_predecessors() {
        let back: Vec<_> = incoming_edges(&16).collect();
        assert_eq!(
            back,
            vec![
                IncomingEdge::new(DerivationRule::HalfN, 32),
                IncomingEdge::new(DerivationRule::ThreeNPlusOne, 5),
            ]
        );

        // 1 has the lone predecessor 2; (1 - 1) / 3 = 0 does not count
        let back: Vec<_> = incoming_edges(&1).collect();
        assert_eq!(back, vec![IncomingEdge::new(DerivationRule::HalfN, 2)]);

        let back: Vec<_> = incoming_edges(&2).collect();
        assert_eq!(back, vec![IncomingEdge::new(DerivationRule::HalfN, 4)]);

        assert_eq!(incoming_edges(&0).count(), 0);
    }

    #[test]
    fn test_seed_filtering() {
        let graph = incidence([0, 32]);
        assert_eq!(graph.seed_vertices().collect::<Vec<_>>(), vec![32]);
    }

    #[test]
    fn test_inverted_branching() {
        let graph = incidence_inverted([1]);
        let from_four: Vec<_> = graph.outgoing_edges(&4).collect();
        assert_eq!(
            from_four,
            vec![
                OutgoingEdge::new(DerivationRule::HalfN, 8),
                OutgoingEdge::new(DerivationRule::ThreeNPlusOne, 1),
            ]
        );
        assert_eq!(
            graph.outgoing_edges(&2).collect::<Vec<_>>(),
            vec![OutgoingEdge::new(DerivationRule::HalfN, 4)]
        );
    }

    #[test]
    fn test_implicit_rules() {
        let rules = CollatzRules;
        assert!(rules.contains_vertex(&1));
        assert!(!rules.contains_vertex(&0));
        assert_eq!(rules.edge_label(&32, &16), Some(DerivationRule::HalfN));
        assert_eq!(
            rules.edge_label(&5, &16),
            Some(DerivationRule::ThreeNPlusOne)
        );
        assert_eq!(rules.edge_label(&5, &2), None);
        assert_eq!(rules.edge_label(&1, &2), None); // 1 is terminal
        assert!(rules.contains_edge(&10, &5));
    }

    #[test]
    fn test_walk_from_seven_reaches_one() {
        let graph = incidence([7]);
        let vertices: Vec<_> = graph.depth_first_vertices().collect();
        assert_eq!(vertices.len(), 17); // 7, 22, 11, ..., 2, 1
        assert_eq!(vertices.first(), Some(&7));
        assert_eq!(vertices.last(), Some(&1));
    }
}
