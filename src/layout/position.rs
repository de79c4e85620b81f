//! Column pattern and row placement.
//!
//! Nodes snake down the container in a fixed 12-step pattern:
//!
//! ```text
//! center, right, center, left, center, right, center, left, ...
//! ```
//!
//! Every other node sits in the center lane and the outer lanes alternate, so
//! a center node never has the same outer neighbor on both sides. Rows are a
//! fixed `node_spacing` apart starting at `start_y`.

use serde::{Deserialize, Serialize};

use super::LayoutConfig;
use crate::flow::{Point, normalize_sequence_order};

/// One of the three horizontal lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// The repeating lane pattern, indexed by `order - 1`.
pub const COLUMN_PATTERN: [Column; 12] = [
    Column::Center,
    Column::Right,
    Column::Center,
    Column::Left,
    Column::Center,
    Column::Right,
    Column::Center,
    Column::Left,
    Column::Center,
    Column::Right,
    Column::Center,
    Column::Left,
];

/// Lane of the node at a normalized 1-based order.
#[inline]
pub fn column_for_order(order: u32) -> Column {
    let index = (order.max(1) - 1) as usize % COLUMN_PATTERN.len();
    COLUMN_PATTERN[index]
}

/// Lane of the node with a raw sequence order.
#[inline]
pub fn column_class(sequence_order: Option<f64>) -> Column {
    column_for_order(normalize_sequence_order(sequence_order))
}

/// Center of the node at a normalized order.
pub fn position_for_order(order: u32, container_width: f64, config: &LayoutConfig) -> Point {
    let row = f64::from(order.max(1) - 1);
    let column = column_for_order(order);
    Point::new(
        container_width * config.column_offset(column),
        config.start_y + row * config.node_spacing,
    )
}

/// Center of the node with a raw sequence order.
///
/// Total over its input: malformed orders lay out as order 1.
pub fn assign_position(
    sequence_order: Option<f64>,
    container_width: f64,
    config: &LayoutConfig,
) -> Point {
    position_for_order(
        normalize_sequence_order(sequence_order),
        container_width,
        config,
    )
}
