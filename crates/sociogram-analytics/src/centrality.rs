//! Degree centrality ranking.

use std::cmp::Reverse;

use sociogram_common::types::NodeId;
use sociogram_core::SocialStore;

/// Nodes ranked by number of direct connections, most connected first.
///
/// Equal degrees keep store order, so the ranking is deterministic and
/// re-running it on an unchanged graph gives the same sequence.
#[derive(Debug, Clone)]
pub struct DegreeRanking {
    entries: Vec<(NodeId, usize)>,
}

impl DegreeRanking {
    /// Every node with its degree, in rank order.
    #[must_use]
    pub fn entries(&self) -> &[(NodeId, usize)] {
        &self.entries
    }

    /// The `n` highest-ranked nodes; shorter when the graph has fewer.
    #[must_use]
    pub fn top(&self, n: usize) -> &[(NodeId, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of ranked nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for an empty graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ranks every node by its degree with a stable descending sort.
#[must_use]
pub fn degree_ranking(store: &SocialStore) -> DegreeRanking {
    let mut entries: Vec<(NodeId, usize)> = store
        .node_ids()
        .map(|id| (id, store.degree(id)))
        .collect();
    entries.sort_by_key(|&(_, degree)| Reverse(degree));
    DegreeRanking { entries }
}
