//! Builds a seeded random population and runs every analysis over it.
//!
//! Run with `cargo run --example community_report`.

use anyhow::{Context, Result};
use sociogram::{
    GeneratorConfig, NodeId, astar, bfs, connected_components, degree_ranking, dfs, dijkstra,
    dijkstra_path, random_social_graph, welsh_powell,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = random_social_graph(&GeneratorConfig::new(40).with_seed(7));
    println!(
        "population: {} members, {} connections",
        store.node_count(),
        store.edge_count()
    );

    let labeling = connected_components(&store);
    println!("communities: {}", labeling.count());
    for (index, members) in labeling.components().iter().enumerate() {
        let label = labeling.label(members[0]);
        println!(
            "  community {index}: {} members, palette color {label}",
            members.len()
        );
    }

    let ranking = degree_ranking(&store);
    println!("most connected:");
    for &(id, degree) in ranking.top(5) {
        let name = &store.get_node(id).context("ranked id missing")?.name;
        println!("  {name}: {degree} connections");
    }

    let coloring = welsh_powell(&store);
    println!("welsh-powell classes: {}", coloring.colors_used());

    let start = NodeId::new(1);
    let goal = NodeId::new(40);

    let breadth = bfs(&store, start)?.len();
    let depth = dfs(&store, start)?.len();
    println!("reachable from member 1: {breadth} (bfs) / {depth} (dfs)");

    let tree = dijkstra(&store, start)?;
    match tree.distance_to(goal) {
        Some(cost) => println!("cheapest route 1 -> 40 costs {cost:.4}"),
        None => println!("members 1 and 40 sit in different communities"),
    }

    let exact = dijkstra_path(&store, start, goal)?;
    let guided = astar(&store, start, goal)?;
    println!(
        "route hops: {} (dijkstra) / {} (astar)",
        exact.len(),
        guided.len()
    );

    Ok(())
}
