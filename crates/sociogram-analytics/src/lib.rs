//! # sociogram-analytics
//!
//! Graph analysis algorithms for Sociogram.
//!
//! Every function borrows a [`SocialStore`](sociogram_core::SocialStore)
//! immutably and keeps its working state in local maps, so runs are
//! independent of each other: no analysis can observe leftovers of a
//! previous one, and the borrow checker keeps mutation out for as long
//! as an analysis holds the store.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS and DFS reachability in discovery order
//! - [`shortest_path`] - Dijkstra and A* over connection costs
//! - [`components`] - Connected component labeling
//! - [`coloring`] - Welsh-Powell greedy coloring
//! - [`centrality`] - Degree centrality ranking
//!
//! ## Usage
//!
//! ```
//! use sociogram_analytics::{bfs, connected_components, dijkstra_path};
//! use sociogram_common::NodeId;
//! use sociogram_core::{Node, SocialStore};
//!
//! let mut store = SocialStore::new();
//! for i in 1..=3 {
//!     store.add_node(Node::new(NodeId::new(i), format!("n{i}")));
//! }
//! store.add_edge(NodeId::new(1), NodeId::new(2));
//! store.add_edge(NodeId::new(2), NodeId::new(3));
//!
//! let order = bfs(&store, NodeId::new(1))?;
//! assert_eq!(order.len(), 3);
//!
//! let path = dijkstra_path(&store, NodeId::new(1), NodeId::new(3))?;
//! assert_eq!(path.len(), 3);
//!
//! let labeling = connected_components(&store);
//! assert_eq!(labeling.count(), 1);
//! # Ok::<(), sociogram_common::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod centrality;
pub mod coloring;
pub mod components;
pub mod shortest_path;
pub mod traversal;

// Traversal algorithms
pub use traversal::{bfs, dfs};

// Shortest path algorithms
pub use shortest_path::{DijkstraResult, MinScored, astar, dijkstra, dijkstra_path};

// Component algorithms
pub use components::{ComponentLabeling, connected_component_count, connected_components};

// Coloring algorithms
pub use coloring::{Coloring, welsh_powell};

// Centrality algorithms
pub use centrality::{DegreeRanking, degree_ranking};
