//! Error types shared across the Sociogram crates.

use crate::types::NodeId;
use thiserror::Error;

/// Errors produced by the graph store and the analysis operations.
///
/// Plain absent lookups return `Option`; this type covers the cases
/// where an operation was handed an id it cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The referenced node id is not present in the store.
    #[error("node {0} is not in the graph")]
    NodeNotFound(NodeId),

    /// No edge connects the two referenced nodes.
    #[error("no edge connects node {0} and node {1}")]
    EdgeNotFound(NodeId, NodeId),
}

/// Convenience result alias used across the Sociogram crates.
pub type Result<T> = std::result::Result<T, Error>;
