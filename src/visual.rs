//! Per-node visual state.
//!
//! Status picks size, color pair, icon and interactivity. Difficulty picks the
//! corner badge and nothing else. The two are looked up independently.

use serde::Serialize;

use crate::flow::{Difficulty, LearningNode, NodeKind, NodeStatus};
use crate::layout::LayoutConfig;

/// Fill and shadow colors of a node, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub fill: &'static str,
    pub shadow: &'static str,
}

impl ColorPair {
    const fn new(fill: &'static str, shadow: &'static str) -> Self {
        Self { fill, shadow }
    }
}

pub const LOCKED_COLORS: ColorPair = ColorPair::new("#E5E5E5", "#AFAFAF");
pub const SUCCESS_COLORS: ColorPair = ColorPair::new("#FFC800", "#E0A800");
pub const IN_PROGRESS_COLORS: ColorPair = ColorPair::new("#58CC02", "#58A700");

pub const LOCKED_SCALE: f64 = 0.8;
pub const COMPLETED_SCALE: f64 = 0.9;
pub const FULL_SCALE: f64 = 1.0;

/// Icon shown inside a node. Names match the editor's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Lock,
    Check,
    Play,
    Book,
    HelpCircle,
    Video,
    FileText,
    Dumbbell,
}

/// Difficulty badge in the node's corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

/// Everything the renderer needs to draw one node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    /// Rendered side length.
    pub size: f64,
    /// Multiplier applied to the configured node size.
    pub scale: f64,
    pub colors: ColorPair,
    pub icon: Icon,
    /// Locked nodes are drawn disabled and ignore input.
    pub interactive: bool,
    pub badge: Badge,
}

/// Base colors of each node kind, used while a node is available.
pub fn kind_colors(kind: NodeKind) -> ColorPair {
    match kind {
        NodeKind::Lesson => ColorPair::new("#1CB0F6", "#1899D6"),
        NodeKind::Quiz => ColorPair::new("#CE82FF", "#A568CC"),
        NodeKind::Video => ColorPair::new("#FF4B4B", "#EA2B2B"),
        NodeKind::Reading => ColorPair::new("#FF9600", "#CC7800"),
        NodeKind::Practice => ColorPair::new("#2B70C9", "#1F5A9E"),
    }
}

/// Base icon of each node kind.
pub fn kind_icon(kind: NodeKind) -> Icon {
    match kind {
        NodeKind::Lesson => Icon::Book,
        NodeKind::Quiz => Icon::HelpCircle,
        NodeKind::Video => Icon::Video,
        NodeKind::Reading => Icon::FileText,
        NodeKind::Practice => Icon::Dumbbell,
    }
}

pub fn difficulty_badge(difficulty: Difficulty) -> Badge {
    match difficulty {
        Difficulty::Easy => Badge {
            label: "E",
            color: "#58CC02",
        },
        Difficulty::Medium => Badge {
            label: "M",
            color: "#FF9600",
        },
        Difficulty::Hard => Badge {
            label: "H",
            color: "#FF4B4B",
        },
    }
}

/// Resolve how a node is drawn.
pub fn resolve_visual(node: &LearningNode, config: &LayoutConfig) -> VisualState {
    let (scale, colors, icon, interactive) = match node.status {
        NodeStatus::Locked => (LOCKED_SCALE, LOCKED_COLORS, Icon::Lock, false),
        NodeStatus::Completed => (COMPLETED_SCALE, SUCCESS_COLORS, Icon::Check, true),
        NodeStatus::Current => (FULL_SCALE, IN_PROGRESS_COLORS, Icon::Play, true),
        NodeStatus::Available => (FULL_SCALE, kind_colors(node.kind), kind_icon(node.kind), true),
    };

    VisualState {
        size: config.node_size * scale,
        scale,
        colors,
        icon,
        interactive,
        badge: difficulty_badge(node.difficulty),
    }
}
