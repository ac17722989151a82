//! Edge records for the social graph.

use serde::{Deserialize, Serialize};
use sociogram_common::types::NodeId;

/// Canonical identity of an undirected connection: the endpoint pair
/// normalized so the smaller id comes first.
///
/// Keying edges by the unordered pair stores each logical connection
/// exactly once while letting lookups from either endpoint hit the same
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    lo: NodeId,
    hi: NodeId,
}

impl EdgeKey {
    /// Builds the canonical key for the pair `{u, v}`.
    #[must_use]
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// The smaller endpoint id.
    #[must_use]
    pub fn lo(self) -> NodeId {
        self.lo
    }

    /// The larger endpoint id.
    #[must_use]
    pub fn hi(self) -> NodeId {
        self.hi
    }

    /// Returns true if `id` is one of the endpoints.
    #[must_use]
    pub fn touches(self, id: NodeId) -> bool {
        self.lo == id || self.hi == id
    }

    /// The endpoint opposite `id`, or `None` if `id` is not an endpoint.
    #[must_use]
    pub fn other(self, id: NodeId) -> Option<NodeId> {
        if id == self.lo {
            Some(self.hi)
        } else if id == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

/// A weighted undirected connection between two nodes.
///
/// The cost is a snapshot computed from the endpoints' measures when the
/// connection is created; later attribute edits do not touch it until
/// [`SocialStore::recompute_cost`](super::SocialStore::recompute_cost) is
/// called for the pair. Edges are created and mutated only through the
/// store, which is what keeps the adjacency index in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    key: EdgeKey,
    cost: f64,
}

impl Edge {
    pub(crate) fn new(key: EdgeKey, cost: f64) -> Self {
        Self { key, cost }
    }

    /// The normalized endpoint pair.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        self.key
    }

    /// Both endpoints, smaller id first.
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.key.lo, self.key.hi)
    }

    /// The cached connection cost.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub(crate) fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }
}
