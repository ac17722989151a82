//! Seeded random population generation.
//!
//! Produces the kind of population an interactive session builds by hand:
//! uniformly placed members with random measures, each initiating a few
//! connection attempts. A fixed seed reproduces the exact same graph,
//! which the property tests and benches lean on for stable fixtures.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sociogram_common::types::NodeId;

use crate::graph::social::{Node, SocialStore};

/// Margin kept between generated positions and the canvas border.
const CANVAS_INSET: f64 = 25.0;

/// Parameters for [`random_social_graph`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of members to create.
    pub node_count: u32,
    /// Canvas width positions are drawn from.
    pub width: f64,
    /// Canvas height positions are drawn from.
    pub height: f64,
    /// RNG seed; a fixed seed reproduces the same graph.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Config for `node_count` members on an 800x600 canvas with seed 0.
    #[must_use]
    pub fn new(node_count: u32) -> Self {
        Self {
            node_count,
            width: 800.0,
            height: 600.0,
            seed: 0,
        }
    }

    /// Sets the canvas extent.
    #[must_use]
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Builds a random social graph per `config`.
///
/// Members get ids `1..=node_count`, names `Emp {id}`, positions uniform
/// inside the canvas inset by [`CANVAS_INSET`] on each side, activity in
/// `[0, 10)`, interaction in `0..100`, and projects in `0..20`. Every
/// member then initiates one to three connection attempts at uniformly
/// chosen targets; self-loops and duplicate pairs are quietly rejected by
/// the store, so the realized edge count is below the attempt count.
#[must_use]
pub fn random_social_graph(config: &GeneratorConfig) -> SocialStore {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut store = SocialStore::new();

    let x_span = (config.width - 2.0 * CANVAS_INSET).max(0.0);
    let y_span = (config.height - 2.0 * CANVAS_INSET).max(0.0);

    for i in 1..=u64::from(config.node_count) {
        let node = Node::new(NodeId::new(i), format!("Emp {i}"))
            .at(
                CANVAS_INSET + rng.random_range(0.0..=x_span),
                CANVAS_INSET + rng.random_range(0.0..=y_span),
            )
            .with_metrics(
                rng.random_range(0.0..10.0),
                rng.random_range(0..100_u32),
                rng.random_range(0..20_u32),
            );
        store.add_node(node);
    }

    let ids: Vec<NodeId> = store.node_ids().collect();
    for &id in &ids {
        let attempts = rng.random_range(1..=3_u32);
        for _ in 0..attempts {
            let target = ids[rng.random_range(0..ids.len())];
            if target != id {
                store.add_edge(id, target);
            }
        }
    }

    store
}
