//! Cross-algorithm properties over seeded random graphs.

use proptest::prelude::*;
use sociogram_analytics::{
    bfs, connected_components, degree_ranking, dfs, dijkstra, welsh_powell,
};
use sociogram_common::NodeId;
use sociogram_core::{GeneratorConfig, SocialStore, random_social_graph};

fn seeded(nodes: u32, seed: u64) -> SocialStore {
    random_social_graph(&GeneratorConfig::new(nodes).with_seed(seed))
}

proptest! {
    #[test]
    fn prop_traversals_agree_on_reachable_set(nodes in 1u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let start = NodeId::new(1);

        let mut breadth = bfs(&store, start).unwrap();
        let mut depth = dfs(&store, start).unwrap();
        breadth.sort_unstable();
        depth.sort_unstable();
        prop_assert_eq!(breadth, depth);
    }

    #[test]
    fn prop_bfs_matches_component_membership(nodes in 1u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let labeling = connected_components(&store);

        for component in labeling.components() {
            let mut walked = bfs(&store, component[0]).unwrap();
            let mut members = component.clone();
            walked.sort_unstable();
            members.sort_unstable();
            prop_assert_eq!(walked, members);
        }
    }

    #[test]
    fn prop_components_partition_the_graph(nodes in 1u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let labeling = connected_components(&store);

        let total: usize = labeling.components().iter().map(Vec::len).sum();
        prop_assert_eq!(total, store.node_count());
        for id in store.node_ids() {
            prop_assert!(labeling.label(id).is_colored());
        }
    }

    #[test]
    fn prop_dijkstra_distances_are_edge_consistent(nodes in 1u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let start = NodeId::new(1);
        let result = dijkstra(&store, start).unwrap();

        prop_assert_eq!(result.distance_to(start), Some(0.0));

        // A settled distance can never improve across any single edge.
        for edge in store.edges() {
            let (u, v) = edge.endpoints();
            if let (Some(du), Some(dv)) = (result.distance_to(u), result.distance_to(v)) {
                prop_assert!(dv <= du + edge.cost() + 1e-9);
                prop_assert!(du <= dv + edge.cost() + 1e-9);
            }
        }
    }

    #[test]
    fn prop_dijkstra_path_cost_matches_distance(nodes in 2u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let start = NodeId::new(1);
        let goal = NodeId::new(u64::from(nodes));
        let result = dijkstra(&store, start).unwrap();

        let path = result.path_to(goal);
        match result.distance_to(goal) {
            None => prop_assert!(path.is_empty()),
            Some(total) => {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&goal));
                let mut walked = 0.0;
                for pair in path.windows(2) {
                    prop_assert!(store.are_connected(pair[0], pair[1]));
                    walked += store.edge_cost(pair[0], pair[1]).unwrap();
                }
                prop_assert!((walked - total).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_coloring_is_proper(nodes in 1u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let coloring = welsh_powell(&store);

        for edge in store.edges() {
            let (u, v) = edge.endpoints();
            prop_assert_ne!(coloring.color_of(u), coloring.color_of(v));
        }
    }

    #[test]
    fn prop_ranking_covers_all_nodes_in_order(nodes in 1u32..40, seed in any::<u64>()) {
        let store = seeded(nodes, seed);
        let ranking = degree_ranking(&store);

        prop_assert_eq!(ranking.len(), store.node_count());
        for pair in ranking.entries().windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }
}
