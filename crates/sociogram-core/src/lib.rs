//! # sociogram-core
//!
//! Core graph layer for Sociogram: the social graph model, its store, and
//! the structures backing it.
//!
//! This crate owns the data: who is in the graph, how they are connected,
//! and what each connection costs. Everything that walks or ranks the
//! graph lives one layer up in `sociogram-analytics`.
//!
//! ## Modules
//!
//! - [`graph`] - The social graph model (nodes, edges, store, weight model)
//! - [`index`] - Index structures (neighbor adjacency)
//! - [`generate`] - Seeded random population generation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod generate;
pub mod graph;
pub mod index;

// Re-export commonly used types
pub use generate::{GeneratorConfig, random_social_graph};
pub use graph::social::{Edge, EdgeKey, Node, SocialStore, similarity_cost};
pub use index::adjacency::NeighborIndex;
