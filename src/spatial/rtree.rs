//! R-tree hit index over node footprints, using the rstar crate.
//!
//! Provides O(log n) queries for:
//! - Which node's footprint contains a point
//! - Nearest node center within a radius

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::layout::{FlowLayout, LayoutConfig};

/// A node's square footprint, tagged with its index in the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFootprint {
    /// Index into `FlowLayout::nodes`.
    pub index: usize,
    pub center: [f64; 2],
    pub half_size: f64,
}

impl NodeFootprint {
    pub fn new(index: usize, x: f64, y: f64, half_size: f64) -> Self {
        Self {
            index,
            center: [x, y],
            half_size,
        }
    }
}

impl RTreeObject for NodeFootprint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let [x, y] = self.center;
        let h = self.half_size;
        AABB::from_corners([x - h, y - h], [x + h, y + h])
    }
}

impl PointDistance for NodeFootprint {
    /// Squared distance to the node center.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.center[0] - point[0];
        let dy = self.center[1] - point[1];
        dx * dx + dy * dy
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        (self.center[0] - point[0]).abs() <= self.half_size
            && (self.center[1] - point[1]).abs() <= self.half_size
    }
}

/// Hit index for one layout pass.
///
/// Built from a [`FlowLayout`] and discarded with it.
pub struct NodeHitIndex {
    tree: RTree<NodeFootprint>,
}

impl NodeHitIndex {
    /// Bulk load the footprints of every node in `layout`.
    pub fn build(layout: &FlowLayout, config: &LayoutConfig) -> Self {
        let half = config.half_size();
        let footprints: Vec<_> = layout
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| NodeFootprint::new(index, node.position.x, node.position.y, half))
            .collect();

        Self {
            tree: RTree::bulk_load(footprints),
        }
    }

    /// Index of the node whose footprint contains the point.
    ///
    /// Overlapping footprints (duplicate orders) resolve to the lowest index.
    pub fn node_at(&self, x: f64, y: f64) -> Option<usize> {
        self.tree
            .locate_all_at_point(&[x, y])
            .map(|footprint| footprint.index)
            .min()
    }

    /// Index of the nearest node center within `max_distance`.
    pub fn nearest_within(&self, x: f64, y: f64, max_distance: f64) -> Option<usize> {
        let max_distance_sq = max_distance * max_distance;
        self.tree
            .nearest_neighbor(&[x, y])
            .filter(|footprint| footprint.distance_2(&[x, y]) <= max_distance_sq)
            .map(|footprint| footprint.index)
    }

    /// Get the number of nodes in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::LearningNode;

    fn index_for(count: u32) -> NodeHitIndex {
        let config = LayoutConfig::standard();
        let nodes: Vec<_> = (1..=count).map(|i| LearningNode::new(format!("n{i}"), i)).collect();
        let layout = FlowLayout::compute(&nodes, 800.0, &config);
        NodeHitIndex::build(&layout, &config)
    }

    #[test]
    fn test_node_at_center_and_edge() {
        let index = index_for(3);
        assert_eq!(index.len(), 3);

        // Node 2 is centered at (560, 250)
        assert_eq!(index.node_at(560.0, 250.0), Some(1));
        assert_eq!(index.node_at(614.0, 300.0), Some(1));
        assert_eq!(index.node_at(400.0, 100.0), Some(0));
    }

    #[test]
    fn test_miss_between_nodes() {
        let index = index_for(3);
        assert_eq!(index.node_at(100.0, 100.0), None);
        assert_eq!(index.node_at(400.0, 250.0), None);
    }

    #[test]
    fn test_nearest_within() {
        let index = index_for(3);
        assert_eq!(index.nearest_within(410.0, 390.0, 30.0), Some(2));
        assert_eq!(index.nearest_within(100.0, 100.0, 50.0), None);
    }

    #[test]
    fn test_overlap_resolves_to_first() {
        let config = LayoutConfig::standard();
        let nodes = vec![LearningNode::new("a", 1), LearningNode::new("b", 1)];
        let layout = FlowLayout::compute(&nodes, 800.0, &config);
        let index = NodeHitIndex::build(&layout, &config);
        assert_eq!(index.node_at(400.0, 100.0), Some(0));
    }

    #[test]
    fn test_empty() {
        let index = index_for(0);
        assert!(index.is_empty());
        assert_eq!(index.node_at(400.0, 100.0), None);
        assert_eq!(index.nearest_within(400.0, 100.0, 1000.0), None);
    }
}
