//! The social graph store.

use indexmap::IndexMap;
use sociogram_common::types::NodeId;
use sociogram_common::utils::error::{Error, Result};

use super::{similarity_cost, Edge, EdgeKey, Node};
use crate::index::adjacency::NeighborIndex;

/// In-memory store for one social graph.
///
/// Nodes and edges keep their insertion order. That order is the default
/// iteration order and the tie-break for every stable sort in the
/// analytics layer, so two runs over the same build sequence see the same
/// graph. A neighbor index mirrors the edge set so degree, direct-link,
/// and neighbor queries cost a hash lookup instead of an edge scan.
///
/// Mutation takes `&mut self` and analysis borrows `&self`, so the borrow
/// checker enforces that no analysis runs against a graph mutating
/// underneath it.
#[derive(Debug, Default, Clone)]
pub struct SocialStore {
    nodes: IndexMap<NodeId, Node>,
    edges: IndexMap<EdgeKey, Edge>,
    adjacency: NeighborIndex,
}

impl SocialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Node Operations ===

    /// Inserts a node, appending it to the insertion order.
    ///
    /// Id uniqueness is the caller's responsibility ([`Self::next_id`]
    /// hands out fresh ids). Re-adding an id that is already present
    /// replaces that node's attributes in place: its spot in the order,
    /// its edges, and their cached costs are untouched.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id(), node);
    }

    /// Removes a node and every edge touching it.
    ///
    /// Returns `false` if the id was not present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }
        let neighbors: Vec<NodeId> = self.adjacency.neighbors(id).collect();
        for neighbor in neighbors {
            self.edges.shift_remove(&EdgeKey::new(id, neighbor));
            self.adjacency.disconnect(neighbor, id);
        }
        self.adjacency.remove_node(id);
        self.nodes.shift_remove(&id);
        true
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable lookup by id.
    ///
    /// Edits to the measures do not refresh cached edge costs; call
    /// [`Self::recompute_cost`] per affected pair afterwards.
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Returns true if the id is present.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// The next free id: one past the largest id present, `1` when the
    /// store is empty.
    #[must_use]
    pub fn next_id(&self) -> NodeId {
        let max = self.nodes.keys().map(|id| id.value()).max().unwrap_or(0);
        NodeId::new(max + 1)
    }

    // === Edge Operations ===

    /// Connects `u` and `v`, computing the cost snapshot once from their
    /// current measures.
    ///
    /// Self-loops, already-connected pairs (in either direction), and
    /// pairs with an endpoint missing from the store are rejected: the
    /// graph is left untouched and `false` comes back. Idempotent
    /// builders can ignore the return value.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if u == v {
            return false;
        }
        let key = EdgeKey::new(u, v);
        if self.edges.contains_key(&key) {
            return false;
        }
        let (Some(a), Some(b)) = (self.nodes.get(&u), self.nodes.get(&v)) else {
            return false;
        };
        let cost = similarity_cost(a, b);
        self.edges.insert(key, Edge::new(key, cost));
        self.adjacency.connect(u, v);
        self.adjacency.connect(v, u);
        true
    }

    /// Removes the connection between `u` and `v`, whichever way round
    /// the endpoints are given.
    ///
    /// Returns `false` if no such connection exists.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if self.edges.shift_remove(&EdgeKey::new(u, v)).is_none() {
            return false;
        }
        self.adjacency.disconnect(u, v);
        self.adjacency.disconnect(v, u);
        true
    }

    /// Recomputes the cost snapshot for the edge between `u` and `v` from
    /// the endpoints' current measures and stores it.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if either endpoint is absent,
    /// [`Error::EdgeNotFound`] if the nodes exist but are not connected.
    pub fn recompute_cost(&mut self, u: NodeId, v: NodeId) -> Result<f64> {
        let a = self.nodes.get(&u).ok_or(Error::NodeNotFound(u))?;
        let b = self.nodes.get(&v).ok_or(Error::NodeNotFound(v))?;
        let cost = similarity_cost(a, b);
        let edge = self
            .edges
            .get_mut(&EdgeKey::new(u, v))
            .ok_or(Error::EdgeNotFound(u, v))?;
        edge.set_cost(cost);
        Ok(cost)
    }

    /// Number of logical connections.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order, one record per logical connection.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    // === Queries ===

    /// True iff a direct edge connects `a` and `b`.
    ///
    /// This is adjacency, not reachability; a node is never connected to
    /// itself.
    #[must_use]
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains_key(&EdgeKey::new(a, b))
    }

    /// Cached cost of the direct edge between `u` and `v`, if one exists.
    #[must_use]
    pub fn edge_cost(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.edges.get(&EdgeKey::new(u, v)).map(Edge::cost)
    }

    /// Number of distinct edges touching `id`; `0` for absent ids.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.degree(id)
    }

    /// Neighbors of `id` in the order their connections were made.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.neighbors(id)
    }

    /// Drops all nodes, edges, and adjacency state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_nodes(n: u64) -> SocialStore {
        let mut store = SocialStore::new();
        for i in 1..=n {
            store.add_node(Node::new(NodeId::new(i), format!("n{i}")));
        }
        store
    }

    #[test]
    fn test_add_and_get_node() {
        let mut store = SocialStore::new();
        store.add_node(Node::new(NodeId::new(1), "Ada").with_metrics(5.0, 10, 2));

        assert_eq!(store.node_count(), 1);
        assert!(store.contains_node(NodeId::new(1)));
        let node = store.get_node(NodeId::new(1)).unwrap();
        assert_eq!(node.name, "Ada");
        assert!(store.get_node(NodeId::new(2)).is_none());
    }

    #[test]
    fn test_readding_id_replaces_in_place() {
        let mut store = store_with_nodes(3);
        store.add_edge(NodeId::new(1), NodeId::new(2));

        store.add_node(Node::new(NodeId::new(1), "renamed"));

        assert_eq!(store.node_count(), 3);
        assert_eq!(store.get_node(NodeId::new(1)).unwrap().name, "renamed");
        // Order and edges survive the replacement.
        let ids: Vec<u64> = store.node_ids().map(NodeId::value).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.are_connected(NodeId::new(1), NodeId::new(2)));
    }

    #[test]
    fn test_edge_is_symmetric() {
        let mut store = store_with_nodes(2);

        assert!(store.add_edge(NodeId::new(1), NodeId::new(2)));

        assert!(store.are_connected(NodeId::new(1), NodeId::new(2)));
        assert!(store.are_connected(NodeId::new(2), NodeId::new(1)));
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.degree(NodeId::new(1)), 1);
        assert_eq!(store.degree(NodeId::new(2)), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut store = store_with_nodes(1);

        assert!(!store.add_edge(NodeId::new(1), NodeId::new(1)));

        assert_eq!(store.edge_count(), 0);
        assert!(!store.are_connected(NodeId::new(1), NodeId::new(1)));
    }

    #[test]
    fn test_duplicate_edge_rejected_either_direction() {
        let mut store = store_with_nodes(2);

        assert!(store.add_edge(NodeId::new(1), NodeId::new(2)));
        assert!(!store.add_edge(NodeId::new(1), NodeId::new(2)));
        assert!(!store.add_edge(NodeId::new(2), NodeId::new(1)));

        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.degree(NodeId::new(1)), 1);
    }

    #[test]
    fn test_edge_with_missing_endpoint_rejected() {
        let mut store = store_with_nodes(1);

        assert!(!store.add_edge(NodeId::new(1), NodeId::new(9)));
        assert!(!store.add_edge(NodeId::new(9), NodeId::new(1)));

        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_remove_node_cascades_to_edges() {
        let mut store = store_with_nodes(4);
        store.add_edge(NodeId::new(1), NodeId::new(2));
        store.add_edge(NodeId::new(1), NodeId::new(3));
        store.add_edge(NodeId::new(2), NodeId::new(3));

        assert!(store.remove_node(NodeId::new(1)));

        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 1);
        assert!(store.are_connected(NodeId::new(2), NodeId::new(3)));
        assert!(!store.are_connected(NodeId::new(1), NodeId::new(2)));
        assert_eq!(store.degree(NodeId::new(2)), 1);
        assert_eq!(store.degree(NodeId::new(3)), 1);
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut store = store_with_nodes(2);

        assert!(!store.remove_node(NodeId::new(5)));
        assert!(!store.remove_edge(NodeId::new(1), NodeId::new(2)));
    }

    #[test]
    fn test_remove_edge_either_direction() {
        let mut store = store_with_nodes(2);
        store.add_edge(NodeId::new(1), NodeId::new(2));

        assert!(store.remove_edge(NodeId::new(2), NodeId::new(1)));

        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.degree(NodeId::new(1)), 0);
        assert_eq!(store.degree(NodeId::new(2)), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = SocialStore::new();
        for id in [5u64, 2, 9, 1] {
            store.add_node(Node::new(NodeId::new(id), format!("n{id}")));
        }

        let ids: Vec<u64> = store.node_ids().map(NodeId::value).collect();
        assert_eq!(ids, vec![5, 2, 9, 1]);
    }

    #[test]
    fn test_neighbors_in_connection_order() {
        let mut store = store_with_nodes(4);
        store.add_edge(NodeId::new(1), NodeId::new(3));
        store.add_edge(NodeId::new(1), NodeId::new(2));
        store.add_edge(NodeId::new(1), NodeId::new(4));

        let neighbors: Vec<u64> = store.neighbors(NodeId::new(1)).map(NodeId::value).collect();
        assert_eq!(neighbors, vec![3, 2, 4]);
    }

    #[test]
    fn test_next_id() {
        let mut store = SocialStore::new();
        assert_eq!(store.next_id(), NodeId::new(1));

        store.add_node(Node::new(NodeId::new(7), "a"));
        store.add_node(Node::new(NodeId::new(3), "b"));
        assert_eq!(store.next_id(), NodeId::new(8));

        store.remove_node(NodeId::new(7));
        assert_eq!(store.next_id(), NodeId::new(4));
    }

    #[test]
    fn test_edge_cost_snapshot_and_recompute() {
        let mut store = SocialStore::new();
        store.add_node(Node::new(NodeId::new(1), "a").with_metrics(1.0, 0, 0));
        store.add_node(Node::new(NodeId::new(2), "b").with_metrics(1.0, 0, 0));
        store.add_edge(NodeId::new(1), NodeId::new(2));

        assert_eq!(store.edge_cost(NodeId::new(1), NodeId::new(2)), Some(1.0));

        // Editing a measure leaves the snapshot stale until recomputed.
        store.get_node_mut(NodeId::new(1)).unwrap().activity = 2.0;
        assert_eq!(store.edge_cost(NodeId::new(1), NodeId::new(2)), Some(1.0));

        let refreshed = store.recompute_cost(NodeId::new(2), NodeId::new(1)).unwrap();
        assert_eq!(refreshed, 0.5);
        assert_eq!(store.edge_cost(NodeId::new(1), NodeId::new(2)), Some(0.5));
    }

    #[test]
    fn test_recompute_cost_errors() {
        let mut store = store_with_nodes(2);

        assert_eq!(
            store.recompute_cost(NodeId::new(1), NodeId::new(9)),
            Err(Error::NodeNotFound(NodeId::new(9)))
        );
        assert_eq!(
            store.recompute_cost(NodeId::new(1), NodeId::new(2)),
            Err(Error::EdgeNotFound(NodeId::new(1), NodeId::new(2)))
        );
    }

    #[test]
    fn test_clear() {
        let mut store = store_with_nodes(3);
        store.add_edge(NodeId::new(1), NodeId::new(2));

        store.clear();

        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.degree(NodeId::new(1)), 0);
        assert_eq!(store.next_id(), NodeId::new(1));
    }
}
