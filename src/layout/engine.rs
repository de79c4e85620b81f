//! FlowLayout - one complete layout pass.
//!
//! Positions every node, draws one connector per array-adjacent pair, and
//! resolves each node's visual state. The result is a plain value; nothing is
//! cached between passes, so the same input always yields the same output.

use serde::Serialize;

use super::{ConnectionPath, LayoutConfig, build_path, column_for_order, position_for_order};
use crate::console_warn;
use crate::flow::{
    LearningNode, PositionedNode, duplicate_sequence_orders, normalize_sequence_order,
};
use crate::visual::{VisualState, resolve_visual};

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLayout {
    /// Nodes in input order, each with its computed center.
    pub nodes: Vec<PositionedNode>,
    /// `connections[i]` joins `nodes[i]` to `nodes[i + 1]`.
    pub connections: Vec<ConnectionPath>,
    /// `visuals[i]` belongs to `nodes[i]`.
    pub visuals: Vec<VisualState>,
    /// Height the scroll container needs to show every node.
    pub content_height: f64,
}

impl FlowLayout {
    /// Run the full layout pass over `nodes`.
    ///
    /// Never fails. Duplicate sequence orders and configurations whose bends
    /// cannot fit are reported on the console and laid out anyway.
    pub fn compute(nodes: &[LearningNode], container_width: f64, config: &LayoutConfig) -> Self {
        if !config.is_consistent(container_width) {
            console_warn!(
                "corner radius {} does not fit spacing {} at width {}",
                config.corner_radius,
                config.node_spacing,
                container_width
            );
        }

        let duplicates = duplicate_sequence_orders(nodes);
        if !duplicates.is_empty() {
            console_warn!("duplicate sequence orders {:?}; connectors may overlap", duplicates);
        }

        let positioned: Vec<PositionedNode> = nodes
            .iter()
            .map(|node| {
                let order = normalize_sequence_order(node.sequence_order);
                PositionedNode {
                    node: node.clone(),
                    order,
                    column: column_for_order(order),
                    position: position_for_order(order, container_width, config),
                }
            })
            .collect();

        let connections = positioned
            .windows(2)
            .map(|pair| build_path(&pair[0], &pair[1], config))
            .collect();

        let visuals = nodes.iter().map(|node| resolve_visual(node, config)).collect();

        let content_height = positioned
            .iter()
            .map(|n| n.position.y)
            .fold(None, |max: Option<f64>, y| Some(max.map_or(y, |m| m.max(y))))
            .map_or(config.start_y, |max_y| max_y + config.node_spacing);

        Self {
            nodes: positioned,
            connections,
            visuals,
            content_height,
        }
    }

    /// Interleaved node centers `[x0, y0, x1, y1, ...]`.
    pub fn positions_buffer(&self) -> Vec<f64> {
        self.nodes
            .iter()
            .flat_map(|n| [n.position.x, n.position.y])
            .collect()
    }

    /// SVG path data for every connector, in connector order.
    pub fn svg_paths(&self) -> Vec<String> {
        self.connections.iter().map(ConnectionPath::to_svg_path).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
