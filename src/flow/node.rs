//! Learning node records and their positioned counterparts.
//!
//! Each node carries:
//! - An opaque identifier, unique within its flow
//! - A sequence order (possibly missing or malformed, see [`normalize_sequence_order`])
//! - Status, difficulty and kind, which only select visual parameters
//! - XP reward and title, passed through untouched
//!
//! [`normalize_sequence_order`]: super::normalize_sequence_order

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::layout::Column;

/// A point in flow space (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Opaque node identifier, as issued by the hosting database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<&str> for NodeId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Progress status of a node for the current learner.
///
/// Unknown names decode as [`NodeStatus::Available`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeStatus {
    Locked,
    #[default]
    Available,
    Completed,
    Current,
}

impl NodeStatus {
    pub fn from_name(name: &str) -> Self {
        match name {
            "locked" => Self::Locked,
            "completed" => Self::Completed,
            "current" => Self::Current,
            _ => Self::Available,
        }
    }
}

impl From<String> for NodeStatus {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Difficulty tier. Unknown names decode as [`Difficulty::Easy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_name(name: &str) -> Self {
        match name {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }
}

impl From<String> for Difficulty {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Content type of a node. Selects the base color pair and icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeKind {
    #[default]
    Lesson,
    Quiz,
    Video,
    Reading,
    Practice,
}

impl NodeKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "quiz" => Self::Quiz,
            "video" => Self::Video,
            "reading" => Self::Reading,
            "practice" => Self::Practice,
            _ => Self::Lesson,
        }
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// One step of a flow, as supplied by the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningNode {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: NodeId,
    /// Raw sequence order. Anything that is not a positive finite integer
    /// lays out as order 1.
    #[serde(default, deserialize_with = "deserialize_sequence_order")]
    pub sequence_order: Option<f64>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub status: NodeStatus,
    #[serde(default, deserialize_with = "lenient_name")]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "lenient_name")]
    pub kind: NodeKind,
    #[serde(default, deserialize_with = "lenient_xp")]
    pub xp_reward: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
}

impl LearningNode {
    /// Create an available, easy lesson node with the given order.
    pub fn new(id: impl Into<NodeId>, sequence_order: u32) -> Self {
        Self {
            id: id.into(),
            sequence_order: Some(f64::from(sequence_order)),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Any JSON-like scalar, with everything else collapsed into `Other`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Decode a sequence order leniently.
///
/// Accepts a number or a numeric string; anything else (null, undefined,
/// objects, arrays) becomes `None` rather than an error.
pub fn deserialize_sequence_order<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Number(n) => Some(n),
        RawScalar::Text(s) => s.trim().parse().ok(),
        RawScalar::Other(_) => None,
    })
}

/// Enum names: strings go through `From<String>`, anything else is the default.
fn lenient_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => T::from(s),
        _ => T::default(),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => s,
        _ => String::new(),
    })
}

/// Database ids may arrive as numbers; they are kept as their decimal text.
fn lenient_id<'de, D>(deserializer: D) -> Result<NodeId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => NodeId(s),
        RawScalar::Number(n) => NodeId(n.to_string()),
        RawScalar::Other(_) => NodeId::default(),
    })
}

/// XP is clamped into `0..=u32::MAX`; non-numbers count as zero.
fn lenient_xp<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match RawScalar::deserialize(deserializer)? {
        RawScalar::Number(n) => Some(n),
        RawScalar::Text(s) => s.trim().parse::<f64>().ok(),
        RawScalar::Other(_) => None,
    };
    Ok(match raw {
        Some(n) if n.is_finite() && n > 0.0 => n.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    })
}

/// A learning node with its computed place in the flow.
///
/// Built fresh on every layout pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    #[serde(flatten)]
    pub node: LearningNode,
    /// Normalized 1-based sequence order the position was derived from.
    pub order: u32,
    pub column: Column,
    /// Center of the node's square footprint.
    pub position: Point,
}

impl PositionedNode {
    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.node.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("intro");
        assert_eq!(id.as_str(), "intro");
        assert_eq!(format!("{}", id), "Node(intro)");
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(NodeStatus::from_name("archived"), NodeStatus::Available);
        assert_eq!(Difficulty::from_name("extreme"), Difficulty::Easy);
        assert_eq!(NodeKind::from_name("podcast"), NodeKind::Lesson);
    }

    #[test]
    fn test_decode_editor_record() {
        let json = r#"{
            "id": "n-1",
            "sequenceOrder": 3,
            "status": "current",
            "difficulty": "hard",
            "kind": "quiz",
            "xpReward": 50,
            "title": "Fractions"
        }"#;
        let node: LearningNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, NodeId::new("n-1"));
        assert_eq!(node.sequence_order, Some(3.0));
        assert_eq!(node.status, NodeStatus::Current);
        assert_eq!(node.difficulty, Difficulty::Hard);
        assert_eq!(node.kind, NodeKind::Quiz);
        assert_eq!(node.xp_reward, 50);
        assert_eq!(node.title, "Fractions");
    }

    #[test]
    fn test_decode_sparse_record() {
        let node: LearningNode =
            serde_json::from_str(r#"{"id": "n-2", "status": "mystery"}"#).unwrap();
        assert_eq!(node.sequence_order, None);
        assert_eq!(node.status, NodeStatus::Available);
        assert_eq!(node.difficulty, Difficulty::Easy);
        assert_eq!(node.xp_reward, 0);
    }

    #[test]
    fn test_decode_malformed_order() {
        let null: LearningNode =
            serde_json::from_str(r#"{"id": "a", "sequenceOrder": null}"#).unwrap();
        assert_eq!(null.sequence_order, None);

        let text: LearningNode =
            serde_json::from_str(r#"{"id": "b", "sequenceOrder": " 4 "}"#).unwrap();
        assert_eq!(text.sequence_order, Some(4.0));

        let junk: LearningNode =
            serde_json::from_str(r#"{"id": "c", "sequenceOrder": [1, 2]}"#).unwrap();
        assert_eq!(junk.sequence_order, None);
    }

    #[test]
    fn test_decode_null_fields_fall_back() {
        let json = r#"[{
            "id": "a",
            "sequenceOrder": 1,
            "status": null,
            "difficulty": null,
            "kind": null,
            "title": null,
            "xpReward": -1
        }]"#;
        let nodes: Vec<LearningNode> = serde_json::from_str(json).unwrap();
        let node = &nodes[0];
        assert_eq!(node.status, NodeStatus::Available);
        assert_eq!(node.difficulty, Difficulty::Easy);
        assert_eq!(node.kind, NodeKind::Lesson);
        assert_eq!(node.title, "");
        assert_eq!(node.xp_reward, 0);
    }

    #[test]
    fn test_decode_odd_scalar_types() {
        let node: LearningNode = serde_json::from_str(
            r#"{"id": 42, "status": 3, "xpReward": "15", "title": {"en": "Hi"}}"#,
        )
        .unwrap();
        assert_eq!(node.id, NodeId::new("42"));
        assert_eq!(node.status, NodeStatus::Available);
        assert_eq!(node.xp_reward, 15);
        assert_eq!(node.title, "");

        let huge: LearningNode =
            serde_json::from_str(r#"{"id": "h", "xpReward": 1e12}"#).unwrap();
        assert_eq!(huge.xp_reward, u32::MAX);
    }

    #[test]
    fn test_standalone_order_decoding() {
        let order = |value: serde_json::Value| deserialize_sequence_order(value).unwrap();
        assert_eq!(order(serde_json::json!(3)), Some(3.0));
        assert_eq!(order(serde_json::json!("3")), Some(3.0));
        assert_eq!(order(serde_json::json!(null)), None);
        assert_eq!(order(serde_json::json!({"n": 3})), None);
    }

    #[test]
    fn test_positioned_node_shape() {
        let positioned = PositionedNode {
            node: LearningNode::new("n-1", 2).with_title("Intro"),
            order: 2,
            column: Column::Right,
            position: Point::new(560.0, 250.0),
        };
        let value = serde_json::to_value(&positioned).unwrap();
        assert_eq!(value["id"], "n-1");
        assert_eq!(value["sequenceOrder"], 2.0);
        assert_eq!(value["column"], "right");
        assert_eq!(value["position"]["x"], 560.0);
        assert_eq!(value["position"]["y"], 250.0);
    }
}
