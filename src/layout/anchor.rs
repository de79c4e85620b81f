//! Anchor points on a node's square footprint.

use serde::{Deserialize, Serialize};

use crate::flow::{Point, PositionedNode};

/// A face of the node footprint, or its center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Center,
}

impl Side {
    /// Parse a side name. Unknown names resolve to [`Side::Center`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }
}

impl From<String> for Side {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Face-center of a square of side `node_size` centered at `center`.
pub fn anchor_point(center: Point, side: Side, node_size: f64) -> Point {
    let half = node_size / 2.0;
    match side {
        Side::Top => Point::new(center.x, center.y - half),
        Side::Bottom => Point::new(center.x, center.y + half),
        Side::Left => Point::new(center.x - half, center.y),
        Side::Right => Point::new(center.x + half, center.y),
        Side::Center => center,
    }
}

/// Anchor of a positioned node.
#[inline]
pub fn anchor(node: &PositionedNode, side: Side, node_size: f64) -> Point {
    anchor_point(node.position, side, node_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(100.0, 200.0);

    #[test]
    fn test_faces() {
        assert_eq!(anchor_point(CENTER, Side::Top, 110.0), Point::new(100.0, 145.0));
        assert_eq!(anchor_point(CENTER, Side::Bottom, 110.0), Point::new(100.0, 255.0));
        assert_eq!(anchor_point(CENTER, Side::Left, 110.0), Point::new(45.0, 200.0));
        assert_eq!(anchor_point(CENTER, Side::Right, 110.0), Point::new(155.0, 200.0));
        assert_eq!(anchor_point(CENTER, Side::Center, 110.0), CENTER);
    }

    #[test]
    fn test_unknown_side_is_center() {
        let side = Side::from_name("diagonal");
        assert_eq!(side, Side::Center);
        assert_eq!(anchor_point(CENTER, side, 110.0), CENTER);

        let decoded: Side = serde_json::from_str(r#""upper-left""#).unwrap();
        assert_eq!(decoded, Side::Center);
    }
}
