//! Flow layout pipeline.
//!
//! Ordered nodes are placed on a snaking three-lane path, then each pair of
//! neighbors is joined by a connector with at most one rounded bend:
//!
//! 1. `position`: lane pattern and row placement
//! 2. `anchor`: face-center points on a node's footprint
//! 3. `connection`: which faces a connector joins, per lane transition
//! 4. `path`: the drawing commands for a connector
//! 5. `engine`: the complete pass over a flow

pub mod anchor;
pub mod config;
pub mod connection;
pub mod engine;
pub mod path;
pub mod position;

pub use anchor::{Side, anchor, anchor_point};
pub use config::LayoutConfig;
pub use connection::{Bend, ConnectionPoints, Transition, connection_points, transition};
pub use engine::FlowLayout;
pub use path::{ConnectionPath, PathCommand, build_path, path_between};
pub use position::{
    COLUMN_PATTERN, Column, assign_position, column_class, column_for_order, position_for_order,
};
