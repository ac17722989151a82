//! # Sociogram
//!
//! Analysis core for weighted social and organizational graphs.
//!
//! If you're new here, start with [`SocialStore`] - build a graph with
//! [`SocialStore::add_node`] and [`SocialStore::add_edge`], then hand
//! shared references to the analysis functions. Connection costs come
//! from how similar two members' measures are, so routes through the
//! graph follow the social structure rather than the layout.
//!
//! ## What's in the box
//!
//! | Function | Answers |
//! | -------- | ------- |
//! | [`dijkstra`], [`dijkstra_path`] | cheapest route between members |
//! | [`astar`] | goal-directed route using layout positions |
//! | [`bfs`], [`dfs`] | who is reachable, in discovery order |
//! | [`connected_components`] | which communities exist |
//! | [`welsh_powell`] | a proper coloring of the graph |
//! | [`degree_ranking`] | who has the most direct connections |
//!
//! ## Quick Start
//!
//! ```rust
//! use sociogram::{Node, NodeId, SocialStore, dijkstra_path, welsh_powell};
//!
//! let mut store = SocialStore::new();
//! store.add_node(Node::new(NodeId::new(1), "Ada").with_metrics(7.5, 42, 3));
//! store.add_node(Node::new(NodeId::new(2), "Grace").with_metrics(6.0, 40, 2));
//! store.add_node(Node::new(NodeId::new(3), "Edsger").with_metrics(2.0, 5, 1));
//! store.add_edge(NodeId::new(1), NodeId::new(2));
//! store.add_edge(NodeId::new(2), NodeId::new(3));
//!
//! let path = dijkstra_path(&store, NodeId::new(1), NodeId::new(3))?;
//! assert_eq!(path.len(), 3);
//!
//! let coloring = welsh_powell(&store);
//! assert_eq!(coloring.colors_used(), 2);
//! # Ok::<(), sociogram::Error>(())
//! ```

// Re-export the graph model and store API
pub use sociogram_core::{
    Edge, EdgeKey, GeneratorConfig, NeighborIndex, Node, SocialStore, random_social_graph,
    similarity_cost,
};

// Re-export the analysis functions and their result types
pub use sociogram_analytics::{
    Coloring, ComponentLabeling, DegreeRanking, DijkstraResult, astar, bfs,
    connected_component_count, connected_components, degree_ranking, dfs, dijkstra,
    dijkstra_path, welsh_powell,
};

// Re-export core types - you'll need these for ids, positions, and errors
pub use sociogram_common::{ColorIndex, Error, NodeId, PALETTE_SIZE, Point, Result};
