//! Neighbor adjacency index.
//!
//! The query-side mirror of the edge set: one insertion-ordered neighbor
//! list per node, kept in step by the store on every mutation. Degree,
//! direct-link, and traversal neighbor queries hit these lists instead of
//! scanning all edges.

use smallvec::SmallVec;
use sociogram_common::types::NodeId;
use sociogram_common::utils::hash::FxHashMap;

/// Inline capacity per neighbor list. Most members of a social graph
/// keep only a handful of direct connections, so typical lists never
/// leave the inline buffer.
const INLINE_NEIGHBORS: usize = 8;

/// Adjacency lists keyed by node id.
///
/// Lists preserve the order connections were made in, which is what makes
/// traversal discovery order deterministic. The index stores `(from, to)`
/// one direction at a time; the store writes both directions for every
/// undirected edge.
#[derive(Debug, Default, Clone)]
pub struct NeighborIndex {
    lists: FxHashMap<NodeId, SmallVec<[NodeId; INLINE_NEIGHBORS]>>,
}

impl NeighborIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `to` to the neighbor list of `from`.
    ///
    /// The caller is responsible for not connecting the same pair twice;
    /// the list is not deduplicated here.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        self.lists.entry(from).or_default().push(to);
    }

    /// Removes `to` from the neighbor list of `from`.
    pub fn disconnect(&mut self, from: NodeId, to: NodeId) {
        if let Some(list) = self.lists.get_mut(&from) {
            list.retain(|n| *n != to);
            if list.is_empty() {
                self.lists.remove(&from);
            }
        }
    }

    /// Drops the neighbor list of `id` entirely.
    pub fn remove_node(&mut self, id: NodeId) {
        self.lists.remove(&id);
    }

    /// Neighbors of `id` in connection insertion order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.lists.get(&id).into_iter().flatten().copied()
    }

    /// Number of neighbors of `id`; `0` for unknown ids.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.lists.get(&id).map_or(0, SmallVec::len)
    }

    /// Drops every list.
    pub fn clear(&mut self) {
        self.lists.clear();
    }
}
