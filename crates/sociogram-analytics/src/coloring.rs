//! Welsh-Powell greedy graph coloring.

use std::cmp::Reverse;

use sociogram_common::types::{ColorIndex, NodeId};
use sociogram_common::utils::hash::FxHashMap;
use sociogram_core::SocialStore;
use tracing::debug;

/// A proper coloring: no edge connects two nodes of the same class.
///
/// Classes are numbered from 1 in the order they were opened. The
/// Welsh-Powell heuristic keeps the class count close to, and never
/// above, the maximum degree plus one; it makes no minimality promise.
#[derive(Debug, Clone)]
pub struct Coloring {
    colors: FxHashMap<NodeId, ColorIndex>,
    colors_used: u32,
}

impl Coloring {
    /// Color class of `id`; [`ColorIndex::UNCOLORED`] for unknown ids.
    #[must_use]
    pub fn color_of(&self, id: NodeId) -> ColorIndex {
        self.colors
            .get(&id)
            .copied()
            .unwrap_or(ColorIndex::UNCOLORED)
    }

    /// Number of color classes used.
    #[must_use]
    pub fn colors_used(&self) -> u32 {
        self.colors_used
    }

    /// Every colored node with its class.
    pub fn assignments(&self) -> impl Iterator<Item = (NodeId, ColorIndex)> + '_ {
        self.colors.iter().map(|(&node, &color)| (node, color))
    }
}

/// Colors the graph with the Welsh-Powell heuristic.
///
/// Nodes are ordered by descending degree with a stable sort, so ties
/// keep store order and the outcome is deterministic. The first
/// uncolored node in that order opens the next class; the remaining
/// ordered nodes join it whenever they are still uncolored and not
/// directly connected to any current member of the class.
#[must_use]
pub fn welsh_powell(store: &SocialStore) -> Coloring {
    let mut order: Vec<NodeId> = store.node_ids().collect();
    order.sort_by_key(|&id| Reverse(store.degree(id)));

    let mut colors: FxHashMap<NodeId, ColorIndex> = FxHashMap::default();
    let mut colors_used = 0u32;

    for i in 0..order.len() {
        let seed = order[i];
        if colors.contains_key(&seed) {
            continue;
        }
        colors_used += 1;
        let class = ColorIndex::new(colors_used);
        colors.insert(seed, class);

        // Everything before the seed is already colored, so the scan
        // only needs the tail of the order.
        for &candidate in &order[i + 1..] {
            if !colors.contains_key(&candidate) && !touches_class(store, candidate, class, &colors)
            {
                colors.insert(candidate, class);
            }
        }
    }

    debug!(nodes = order.len(), colors = colors_used, "welsh-powell coloring complete");
    Coloring {
        colors,
        colors_used,
    }
}

/// True if any neighbor of `node` already belongs to `class`.
fn touches_class(
    store: &SocialStore,
    node: NodeId,
    class: ColorIndex,
    colors: &FxHashMap<NodeId, ColorIndex>,
) -> bool {
    store
        .neighbors(node)
        .any(|neighbor| colors.get(&neighbor) == Some(&class))
}
