//! Flow data model.
//!
//! A flow is an ordered list of learning nodes as handed over by the editor.
//! The layout engine never mutates these records; every layout pass builds
//! fresh [`PositionedNode`] values from them.

mod node;
mod sequence;

pub use node::{
    Difficulty, LearningNode, NodeId, NodeKind, NodeStatus, Point, PositionedNode,
    deserialize_sequence_order,
};
pub use sequence::{duplicate_sequence_orders, normalize_sequence_order, normalize_sequence_orders};
