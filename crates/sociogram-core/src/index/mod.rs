//! Index structures for fast graph queries.
//!
//! - [`adjacency`] - Per-node neighbor lists mirroring the edge set

pub mod adjacency;
