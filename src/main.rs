use anyhow::Result;
use graphwalk::generators::{self, DerivationRule};
use graphwalk::{
    DirectedGraph, EdgeVisit, IncidenceGraphExt, TraversalFormatter, TraversalHandlers,
    TraversalOptions,
};

/// Tallies which derivation rule each traversed edge used.
#[derive(Default)]
struct RuleTally {
    halvings: usize,
    triplings: usize,
}

impl TraversalHandlers<u64, DerivationRule> for RuleTally {
    fn on_edge(&mut self, visit: &EdgeVisit<u64, DerivationRule>) -> bool {
        match visit.edge.label {
            DerivationRule::HalfN => self.halvings += 1,
            DerivationRule::ThreeNPlusOne => self.triplings += 1,
        }
        true
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== graphwalk: lazy depth-first graph traversal ===");

    // The forward Collatz graph is a chain from each seed down to 1.
    println!("\n--- Derivation chain of 12 ---");
    let chain = generators::incidence([12]);
    let values: Vec<String> = chain
        .depth_first_vertices()
        .map(|n| n.to_string())
        .collect();
    println!("{}", values.join(" -> "));

    // Push style: handlers observe the walk and can stop it early.
    println!("\n--- Rule usage along the orbit of 27 ---");
    let orbit = generators::incidence([27]);
    let mut tally = RuleTally::default();
    let stats = orbit.traverse_search(TraversalOptions::default(), &mut tally)?;
    println!(
        "{} halvings and {} triplings over {} steps",
        tally.halvings, tally.triplings, stats.edge_count
    );
    println!("the chain held {} values", stats.max_depth);

    // The inverted graph branches forever, so the walk must be bounded.
    println!("\n--- Values reaching 1, grown outward from 1 ---");
    let inverted = generators::incidence_inverted([1]);
    let formatter = TraversalFormatter::new().with_options(TraversalOptions {
        max_depth: Some(7),
        ..TraversalOptions::default()
    })?;
    print!("{}", formatter.format(&inverted));

    // A bounded walk can also be materialized into an owned graph.
    println!("\n--- Snapshot of the same frontier ---");
    let options = TraversalOptions {
        max_depth: Some(7),
        ..TraversalOptions::default()
    };
    let snapshot = DirectedGraph::from_incidence_with(&inverted, options)?;
    println!(
        "captured {} vertices and {} edges",
        snapshot.vertex_count(),
        snapshot.edge_count()
    );

    let reachable: Vec<u64> = snapshot.seeded([5])?.depth_first_vertices().collect();
    println!("reachable from 5 inside the snapshot: {:?}", reachable);

    Ok(())
}
