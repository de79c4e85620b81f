//! Sequence order normalization.
//!
//! The layout engine itself only needs [`normalize_sequence_order`]. The other
//! two helpers serve the editor, which owns the contract that orders are
//! unique before layout.

use std::collections::HashSet;

use super::LearningNode;

/// Normalize a raw sequence order.
///
/// Returns the value itself when it is a positive finite integer that fits in
/// a `u32`, and `1` for anything else (missing, zero, negative, fractional,
/// NaN, infinite).
pub fn normalize_sequence_order(raw: Option<f64>) -> u32 {
    match raw {
        Some(value)
            if value.is_finite()
                && value >= 1.0
                && value.fract() == 0.0
                && value <= f64::from(u32::MAX) =>
        {
            value as u32
        }
        _ => 1,
    }
}

/// Report the normalized orders that occur more than once, in first-seen order.
pub fn duplicate_sequence_orders(nodes: &[LearningNode]) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(nodes.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for node in nodes {
        let order = normalize_sequence_order(node.sequence_order);
        if !seen.insert(order) && reported.insert(order) {
            duplicates.push(order);
        }
    }

    duplicates
}

/// Rewrite duplicate orders to their array index + 1.
///
/// The first node holding a given order keeps it; every later node with the
/// same normalized order is renumbered to `index + 1`, or to the next order
/// above that not already taken. Every order in the result is unique.
/// Returns a fresh list, the input is left untouched.
pub fn normalize_sequence_orders(nodes: &[LearningNode]) -> Vec<LearningNode> {
    let mut seen = HashSet::with_capacity(nodes.len());

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let order = normalize_sequence_order(node.sequence_order);
            let mut out = node.clone();
            if seen.insert(order) {
                out.sequence_order = Some(f64::from(order));
            } else {
                let mut fallback = (index + 1) as u32;
                while !seen.insert(fallback) {
                    fallback = fallback.wrapping_add(1).max(1);
                }
                out.sequence_order = Some(f64::from(fallback));
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_orders_pass_through() {
        assert_eq!(normalize_sequence_order(Some(1.0)), 1);
        assert_eq!(normalize_sequence_order(Some(7.0)), 7);
        assert_eq!(normalize_sequence_order(Some(1200.0)), 1200);
    }

    #[test]
    fn test_invalid_orders_become_one() {
        for raw in [
            None,
            Some(0.0),
            Some(-5.0),
            Some(f64::NAN),
            Some(f64::INFINITY),
            Some(f64::NEG_INFINITY),
            Some(2.5),
            Some(1e20),
        ] {
            assert_eq!(normalize_sequence_order(raw), 1, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_duplicates_reported_once() {
        let nodes = vec![
            LearningNode::new("a", 1),
            LearningNode::new("b", 2),
            LearningNode::new("c", 2),
            LearningNode::new("d", 2),
            LearningNode {
                sequence_order: None,
                ..LearningNode::new("e", 0)
            },
        ];
        assert_eq!(duplicate_sequence_orders(&nodes), vec![2, 1]);
    }

    #[test]
    fn test_no_duplicates() {
        let nodes: Vec<_> = (1..=5).map(|i| LearningNode::new(format!("n{i}"), i)).collect();
        assert!(duplicate_sequence_orders(&nodes).is_empty());
    }

    #[test]
    fn test_normalize_rewrites_duplicates_to_index() {
        let nodes = vec![
            LearningNode::new("a", 1),
            LearningNode::new("b", 1),
            LearningNode {
                sequence_order: Some(f64::NAN),
                ..LearningNode::new("c", 0)
            },
        ];
        let normalized = normalize_sequence_orders(&nodes);
        let orders: Vec<_> = normalized.iter().map(|n| n.sequence_order).collect();
        assert_eq!(orders, vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert!(duplicate_sequence_orders(&normalized).is_empty());

        // Input untouched
        assert!(nodes[2].sequence_order.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_normalize_skips_taken_index_order() {
        let nodes = vec![
            LearningNode::new("a", 1),
            LearningNode::new("b", 3),
            LearningNode::new("c", 1),
        ];
        let normalized = normalize_sequence_orders(&nodes);
        let orders: Vec<_> = normalized.iter().map(|n| n.sequence_order).collect();
        assert_eq!(orders, vec![Some(1.0), Some(3.0), Some(4.0)]);
        assert!(duplicate_sequence_orders(&normalized).is_empty());
    }

    #[test]
    fn test_normalize_always_unique() {
        // Every node claims order 2
        let nodes: Vec<_> = (0..10).map(|i| LearningNode::new(format!("n{i}"), 2)).collect();
        let normalized = normalize_sequence_orders(&nodes);
        assert!(duplicate_sequence_orders(&normalized).is_empty());
        assert_eq!(normalized[0].sequence_order, Some(2.0));
    }
}
