//! Connected component labeling.

use sociogram_common::types::{ColorIndex, NodeId};
use sociogram_common::utils::hash::{FxHashMap, FxHashSet};
use sociogram_core::SocialStore;
use tracing::debug;

use crate::traversal::bfs_reachable;

/// Component labeling of a whole graph.
///
/// Components are numbered in the order their seeds appear in the store,
/// and every member of a component wears the same palette label,
/// assigned by [`ColorIndex::from_component`] (labels wrap once the
/// palette runs out, so distinct components can share a label).
#[derive(Debug, Clone)]
pub struct ComponentLabeling {
    labels: FxHashMap<NodeId, ColorIndex>,
    members: Vec<Vec<NodeId>>,
}

impl ComponentLabeling {
    /// Number of connected components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// True when the graph had no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Palette label of `id`; [`ColorIndex::UNCOLORED`] for ids the
    /// labeling never saw.
    #[must_use]
    pub fn label(&self, id: NodeId) -> ColorIndex {
        self.labels
            .get(&id)
            .copied()
            .unwrap_or(ColorIndex::UNCOLORED)
    }

    /// Every labeled node with its palette label.
    pub fn labels(&self) -> impl Iterator<Item = (NodeId, ColorIndex)> + '_ {
        self.labels.iter().map(|(&node, &label)| (node, label))
    }

    /// Member lists, one per component, each in breadth-first discovery
    /// order from its seed.
    #[must_use]
    pub fn components(&self) -> &[Vec<NodeId>] {
        &self.members
    }
}

/// Labels every connected component of the graph.
///
/// Scans nodes in store order; each not-yet-visited node seeds a
/// breadth-first walk that collects its component, so component numbering
/// follows store order and is deterministic.
#[must_use]
pub fn connected_components(store: &SocialStore) -> ComponentLabeling {
    let mut visited = FxHashSet::default();
    let mut labels = FxHashMap::default();
    let mut members = Vec::new();

    for seed in store.node_ids() {
        if visited.contains(&seed) {
            continue;
        }
        let component = bfs_reachable(store, seed, &mut visited);
        let label = ColorIndex::from_component(members.len());
        for &node in &component {
            labels.insert(node, label);
        }
        members.push(component);
    }

    debug!(components = members.len(), nodes = labels.len(), "component labeling complete");
    ComponentLabeling { labels, members }
}

/// Number of connected components in the graph.
#[must_use]
pub fn connected_component_count(store: &SocialStore) -> usize {
    connected_components(store).count()
}
