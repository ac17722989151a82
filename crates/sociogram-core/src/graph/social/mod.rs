//! The social graph model.
//!
//! A weighted undirected graph of people. Nodes carry a display name, a
//! layout position, and three numeric measures; each logical connection
//! stores a single cost computed from the endpoints' measures when the
//! connection is made.
//!
//! - [`Node`] - A member of the graph
//! - [`Edge`] / [`EdgeKey`] - A weighted connection and its canonical key
//! - [`SocialStore`] - The mutable container for one graph
//! - [`similarity_cost`] - The edge-weight model

mod edge;
mod node;
mod store;
mod weight;

pub use edge::{Edge, EdgeKey};
pub use node::Node;
pub use store::SocialStore;
pub use weight::similarity_cost;
