//! Column transition table and connector endpoint selection.
//!
//! Moving out of the center lane, a connector leaves from the face pointing at
//! the destination and lands on the destination's top. Moving back toward the
//! center it leaves from the bottom and lands on the face pointing back at the
//! origin. Everything else runs bottom to top.
//!
//! | from   | to     | start  | end   | bend               |
//! |--------|--------|--------|-------|--------------------|
//! | center | right  | right  | top   | horizontal first   |
//! | right  | center | bottom | right | vertical first     |
//! | center | left   | left   | top   | horizontal first   |
//! | left   | center | bottom | left  | vertical first     |
//! | center | center | bottom | top   | straight           |
//! | other  |        | bottom | top   | by relative x      |

use serde::Serialize;

use super::anchor::{Side, anchor};
use super::{Column, LayoutConfig};
use crate::flow::{Point, PositionedNode};

/// Shape of the connector between the two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Bend {
    /// Single straight segment.
    Straight,
    /// Horizontal leg, rounded corner, vertical leg.
    HorizontalFirst,
    /// Vertical leg, rounded corner, horizontal leg.
    VerticalFirst,
    /// Decided from the endpoints: straight when they share an axis,
    /// horizontal first when the target lies to the right, vertical first
    /// otherwise.
    Auto,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub start: Side,
    pub end: Side,
    pub bend: Bend,
}

impl Transition {
    const fn new(start: Side, end: Side, bend: Bend) -> Self {
        Self { start, end, bend }
    }
}

/// Look up how a connector from `from` to `to` is drawn.
pub const fn transition(from: Column, to: Column) -> Transition {
    use Column::{Center, Left, Right};

    match (from, to) {
        (Center, Right) => Transition::new(Side::Right, Side::Top, Bend::HorizontalFirst),
        (Right, Center) => Transition::new(Side::Bottom, Side::Right, Bend::VerticalFirst),
        (Center, Left) => Transition::new(Side::Left, Side::Top, Bend::HorizontalFirst),
        (Left, Center) => Transition::new(Side::Bottom, Side::Left, Bend::VerticalFirst),
        (Center, Center) => Transition::new(Side::Bottom, Side::Top, Bend::Straight),
        _ => Transition::new(Side::Bottom, Side::Top, Bend::Auto),
    }
}

/// Start and end points of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionPoints {
    pub start: Point,
    pub end: Point,
}

/// Pick the anchors for the connector from `current` to `next`.
pub fn connection_points(
    current: &PositionedNode,
    next: &PositionedNode,
    config: &LayoutConfig,
) -> ConnectionPoints {
    let Transition { start, end, .. } = transition(current.column, next.column);
    ConnectionPoints {
        start: anchor(current, start, config.node_size),
        end: anchor(next, end, config.node_size),
    }
}
