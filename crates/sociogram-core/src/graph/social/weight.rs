//! The edge-weight model.

use super::Node;

/// Cost of a connection between two nodes, derived from their measures:
///
/// `1 / (1 + (Δactivity)² + (Δinteraction)² + (Δprojects)²)`
///
/// The result is always in `(0, 1]`. Identical measure vectors give
/// exactly `1.0`; growing dissimilarity pushes the cost toward zero
/// without ever reaching it, so costs are strictly positive and safe for
/// shortest-path search. The layout position plays no role, and the
/// function is symmetric in its arguments. Every finite input is
/// accepted; there are no error conditions.
#[must_use]
pub fn similarity_cost(a: &Node, b: &Node) -> f64 {
    let activity = (a.activity - b.activity).powi(2);
    let interaction = (f64::from(a.interaction) - f64::from(b.interaction)).powi(2);
    let projects = (f64::from(a.projects) - f64::from(b.projects)).powi(2);
    1.0 / (1.0 + activity + interaction + projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sociogram_common::types::NodeId;

    fn node(id: u64, activity: f64, interaction: u32, projects: u32) -> Node {
        Node::new(NodeId::new(id), format!("n{id}")).with_metrics(activity, interaction, projects)
    }

    #[test]
    fn test_identical_measures_cost_one() {
        let a = node(1, 3.5, 40, 7);
        let b = node(2, 3.5, 40, 7);

        assert_eq!(similarity_cost(&a, &b), 1.0);
    }

    #[test]
    fn test_unit_difference_halves_cost() {
        let a = node(1, 1.0, 0, 0);
        let b = node(2, 2.0, 0, 0);

        assert_eq!(similarity_cost(&a, &b), 0.5);
    }

    #[test]
    fn test_position_does_not_affect_cost() {
        let a = node(1, 2.0, 10, 1).at(0.0, 0.0);
        let b = node(2, 2.0, 10, 1).at(500.0, 500.0);

        assert_eq!(similarity_cost(&a, &b), 1.0);
    }

    #[test]
    fn test_larger_gap_costs_less() {
        let base = node(1, 0.0, 0, 0);
        let near = node(2, 1.0, 0, 0);
        let far = node(3, 9.0, 0, 0);

        assert!(similarity_cost(&base, &far) < similarity_cost(&base, &near));
    }

    proptest! {
        #[test]
        fn prop_cost_in_unit_interval(
            a in 0.0f64..10.0, b in 0.0f64..10.0,
            i in 0u32..100, j in 0u32..100,
            p in 0u32..20, q in 0u32..20,
        ) {
            let cost = similarity_cost(&node(1, a, i, p), &node(2, b, j, q));
            prop_assert!(cost > 0.0);
            prop_assert!(cost <= 1.0);
        }

        #[test]
        fn prop_cost_is_symmetric(
            a in 0.0f64..10.0, b in 0.0f64..10.0,
            i in 0u32..100, j in 0u32..100,
            p in 0u32..20, q in 0u32..20,
        ) {
            let x = node(1, a, i, p);
            let y = node(2, b, j, q);
            prop_assert_eq!(similarity_cost(&x, &y), similarity_cost(&y, &x));
        }
    }
}
