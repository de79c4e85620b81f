//! Connector path synthesis.
//!
//! A connector is a flat list of drawing commands: a move to the start
//! anchor, an optional rounded L-bend, and a line to the end anchor. Bends
//! use one quadratic curve whose control point is the sharp corner, so the
//! straight legs stop `corner_radius` short of the corner on either side.

use std::fmt::Write as _;

use serde::Serialize;

use super::LayoutConfig;
use super::connection::{Bend, ConnectionPoints, transition};
use crate::flow::{Point, PositionedNode};

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve through `control` ending at `to`.
    QuadTo { control: Point, to: Point },
}

impl PathCommand {
    /// Point the pen sits on after this command.
    #[inline]
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => p,
            Self::QuadTo { to, .. } => to,
        }
    }
}

/// Drawing instructions for one connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConnectionPath {
    commands: Vec<PathCommand>,
}

impl ConnectionPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// First point of the path.
    pub fn start(&self) -> Option<Point> {
        self.commands.first().map(PathCommand::end_point)
    }

    /// Last point of the path.
    pub fn end(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::end_point)
    }

    /// Number of rounded corners.
    pub fn bend_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Serialize to SVG path data (`M x y L x y Q cx cy x y`).
    pub fn to_svg_path(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 24);
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
                PathCommand::QuadTo { control, to } => {
                    write!(d, "Q {} {} {} {}", control.x, control.y, to.x, to.y)
                }
            };
        }
        d
    }
}

/// Lay out the commands for a connector between two anchors.
///
/// Bends collapse to a straight segment whenever the anchors share an x or a
/// y, since no corner is needed. Corner offsets follow the direction of
/// travel on each axis, so a connector that runs upward or leftward (shuffled
/// or duplicate orders, negative widths) still rounds its corner inside the
/// L instead of overshooting it.
pub fn path_between(points: ConnectionPoints, bend: Bend, corner_radius: f64) -> ConnectionPath {
    let ConnectionPoints { start, end } = points;
    let aligned = start.x == end.x || start.y == end.y;

    let bend = match bend {
        _ if aligned => Bend::Straight,
        Bend::Auto if end.x > start.x => Bend::HorizontalFirst,
        Bend::Auto => Bend::VerticalFirst,
        other => other,
    };

    let dx = (end.x - start.x).signum();
    let dy = (end.y - start.y).signum();
    let r = corner_radius;

    let commands = match bend {
        Bend::HorizontalFirst => vec![
            PathCommand::MoveTo(start),
            PathCommand::LineTo(Point::new(end.x - r * dx, start.y)),
            PathCommand::QuadTo {
                control: Point::new(end.x, start.y),
                to: Point::new(end.x, start.y + r * dy),
            },
            PathCommand::LineTo(end),
        ],
        Bend::VerticalFirst => vec![
            PathCommand::MoveTo(start),
            PathCommand::LineTo(Point::new(start.x, end.y - r * dy)),
            PathCommand::QuadTo {
                control: Point::new(start.x, end.y),
                to: Point::new(start.x + r * dx, end.y),
            },
            PathCommand::LineTo(end),
        ],
        Bend::Straight | Bend::Auto => vec![PathCommand::MoveTo(start), PathCommand::LineTo(end)],
    };

    ConnectionPath { commands }
}

/// Build the connector from `current` to `next`.
pub fn build_path(
    current: &PositionedNode,
    next: &PositionedNode,
    config: &LayoutConfig,
) -> ConnectionPath {
    let bend = transition(current.column, next.column).bend;
    let points = super::connection_points(current, next, config);
    path_between(points, bend, config.corner_radius)
}
