//! Cost-weighted shortest path search: Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sociogram_common::types::NodeId;
use sociogram_common::utils::error::{Error, Result};
use sociogram_common::utils::hash::FxHashMap;
use sociogram_core::SocialStore;
use tracing::debug;

/// Score-value pair that orders by reversed score, turning
/// [`BinaryHeap`] into the min-priority frontier the searches need.
///
/// Scores compare through `PartialOrd` with NaN pinned to the back of
/// the queue, so a NaN score can never shadow real frontier entries.
/// Only the score takes part in the ordering.
#[derive(Copy, Clone, Debug)]
pub struct MinScored<K, T>(
    /// The ordering score.
    pub K,
    /// The carried value; ignored by the ordering.
    pub T,
);

impl<K: PartialOrd, T> PartialEq for MinScored<K, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MinScored<K, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.partial_cmp(&other.0) {
            Some(Ordering::Less) => Ordering::Greater,
            Some(Ordering::Greater) => Ordering::Less,
            Some(Ordering::Equal) => Ordering::Equal,
            None => {
                let a_nan = self.0.ne(&self.0);
                let b_nan = other.0.ne(&other.0);
                if a_nan && b_nan {
                    Ordering::Equal
                } else if a_nan {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

/// Outcome of a cost-weighted search from one start node.
///
/// Distances and predecessors live in maps keyed by node id; a node
/// missing from the distance map was not reached (conceptually at
/// infinite cost). Searches that stop early at a goal cover only the
/// part of the graph settled before the goal came up.
#[derive(Debug, Clone)]
pub struct DijkstraResult {
    start: NodeId,
    distances: FxHashMap<NodeId, f64>,
    predecessors: FxHashMap<NodeId, NodeId>,
}

impl DijkstraResult {
    /// The node the search ran from.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Total cost of the cheapest known route to `node`, if reached.
    #[must_use]
    pub fn distance_to(&self, node: NodeId) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// Every reached node with its route cost.
    pub fn distances(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.distances.iter().map(|(&node, &cost)| (node, cost))
    }

    /// The node before `node` on its cheapest route, if any.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    /// The cheapest route from the start to `goal`, endpoints included.
    ///
    /// Walks the predecessor chain backwards from `goal` and reverses
    /// it. A walk that does not arrive at the start means the goal was
    /// never reached and yields an empty path. `goal == start` yields
    /// the single-element path.
    #[must_use]
    pub fn path_to(&self, goal: NodeId) -> Vec<NodeId> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&previous) = self.predecessors.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        if path.first() == Some(&self.start) {
            path
        } else {
            Vec::new()
        }
    }
}

/// Shared search core for Dijkstra and A*.
///
/// `estimate` biases the frontier priority: zero everywhere gives plain
/// Dijkstra, a distance-to-goal estimate gives A*. With a goal set, the
/// search stops as soon as the goal pops from the frontier, which is
/// sound because connection costs are strictly positive. Stale frontier
/// entries (left behind by a later, cheaper relaxation) are skipped on
/// pop instead of being removed on update.
fn best_first(
    store: &SocialStore,
    start: NodeId,
    goal: Option<NodeId>,
    estimate: impl Fn(NodeId) -> f64,
) -> Result<DijkstraResult> {
    if !store.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }
    if let Some(goal) = goal {
        if !store.contains_node(goal) {
            return Err(Error::NodeNotFound(goal));
        }
    }

    let mut distances: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut frontier = BinaryHeap::new();

    distances.insert(start, 0.0);
    frontier.push(MinScored(estimate(start), (start, 0.0)));

    while let Some(MinScored(_, (current, reached_at))) = frontier.pop() {
        if goal == Some(current) {
            break;
        }
        if reached_at > distances.get(&current).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        for neighbor in store.neighbors(current) {
            let Some(cost) = store.edge_cost(current, neighbor) else {
                continue;
            };
            let tentative = reached_at + cost;
            if tentative < distances.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor, tentative);
                predecessors.insert(neighbor, current);
                frontier.push(MinScored(tentative + estimate(neighbor), (neighbor, tentative)));
            }
        }
    }

    Ok(DijkstraResult {
        start,
        distances,
        predecessors,
    })
}

/// Single-source cheapest routes from `start` to everything reachable.
///
/// Runs Dijkstra to exhaustion and returns the full route tree; use
/// [`DijkstraResult::distance_to`] and [`DijkstraResult::path_to`] to
/// read it out.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start` is not in the graph.
pub fn dijkstra(store: &SocialStore, start: NodeId) -> Result<DijkstraResult> {
    let result = best_first(store, start, None, |_| 0.0)?;
    debug!(start = %start, reached = result.distances.len(), "dijkstra tree complete");
    Ok(result)
}

/// Cheapest route from `start` to `goal`, stopping as soon as the goal
/// is settled.
///
/// Returns the route endpoints included, `[start]` when the two
/// coincide, and an empty vector when the goal is unreachable.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start` or `goal` is not in the graph.
pub fn dijkstra_path(store: &SocialStore, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    let result = best_first(store, start, Some(goal), |_| 0.0)?;
    let path = result.path_to(goal);
    debug!(start = %start, goal = %goal, hops = path.len(), "dijkstra path search done");
    Ok(path)
}

/// Goal-directed route from `start` to `goal` using the straight-line
/// distance between layout positions as the frontier bias.
///
/// The estimate is measured in layout units while connection costs sit
/// in `(0, 1]`, so the bias usually dominates and the search heads hard
/// for the goal: expect fewer settled nodes than Dijkstra and a route
/// that may trade some cost for that speed. Endpoints are included,
/// `start == goal` gives `[start]`, and an unreachable goal gives an
/// empty vector.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start` or `goal` is not in the graph.
pub fn astar(store: &SocialStore, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    let goal_position = store
        .get_node(goal)
        .ok_or(Error::NodeNotFound(goal))?
        .position;
    let estimate = |id: NodeId| {
        store
            .get_node(id)
            .map_or(0.0, |node| node.position.distance_to(goal_position))
    };

    let result = best_first(store, start, Some(goal), estimate)?;
    let path = result.path_to(goal);
    debug!(start = %start, goal = %goal, hops = path.len(), "astar path search done");
    Ok(path)
}
