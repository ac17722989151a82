//! Breadth-first and depth-first traversal.

use std::collections::VecDeque;

use sociogram_common::types::NodeId;
use sociogram_common::utils::error::{Error, Result};
use sociogram_common::utils::hash::FxHashSet;
use sociogram_core::SocialStore;

/// Nodes reachable from `start`, in breadth-first discovery order.
///
/// The start node comes first, then its neighbors in connection insertion
/// order, then theirs, level by level. A node is marked visited when it
/// enters the queue, so each appears exactly once. Connection costs are
/// ignored and the walk runs to exhaustion of the component.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start` is not in the graph.
pub fn bfs(store: &SocialStore, start: NodeId) -> Result<Vec<NodeId>> {
    if !store.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }
    let mut visited = FxHashSet::default();
    Ok(bfs_reachable(store, start, &mut visited))
}

/// Breadth-first walk collecting the reachable set into discovery order.
///
/// `visited` is shared so component labeling can run one walk per seed
/// without revisiting earlier components.
pub(crate) fn bfs_reachable(
    store: &SocialStore,
    start: NodeId,
    visited: &mut FxHashSet<NodeId>,
) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for neighbor in store.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// Nodes reachable from `start`, in depth-first discovery order.
///
/// Iterative with an explicit stack. A node is marked visited when it is
/// popped, not when pushed, so the stack can hold a node more than once;
/// the pop guard keeps the output free of duplicates. Neighbors are
/// pushed in connection insertion order, which means the most recently
/// connected unvisited neighbor is explored first.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if `start` is not in the graph.
pub fn dfs(store: &SocialStore, start: NodeId) -> Result<Vec<NodeId>> {
    if !store.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }

    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        for neighbor in store.neighbors(current) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}
