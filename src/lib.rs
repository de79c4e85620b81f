//! Flowpath - WASM Module
//!
//! This module lays out "learning flows" for the course editor: ordered lesson
//! nodes placed on a snaking three-lane path, joined by rounded L-shaped
//! connectors. It is compiled to WebAssembly and exposes a JavaScript-friendly
//! API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `flow`: Learning node records and sequence order normalization
//! - `layout`: Lane pattern, anchors, transition table and connector paths
//! - `visual`: Status/difficulty to size, colors, icon and badge
//! - `spatial`: R-tree hit testing over node footprints
//!
//! Every layout pass is a pure function of the node list, the container width
//! and the configuration.

use js_sys::Float64Array;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

pub mod console;
pub mod flow;
pub mod layout;
pub mod spatial;
pub mod visual;

use flow::{LearningNode, Point};
use layout::{FlowLayout, LayoutConfig, Side};
use spatial::NodeHitIndex;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log!("layout engine ready");
}

/// Decode a JS value, naming what failed to decode.
fn decode<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsError::new(&format!("invalid {what}: {err}")).into())
}

/// Decode a standalone sequence order the same way node records do.
///
/// Numbers and numeric strings pass through; anything else is `None`.
fn decode_order(value: JsValue) -> Option<f64> {
    flow::deserialize_sequence_order(serde_wasm_bindgen::Deserializer::from(value))
        .ok()
        .flatten()
}

/// Encode a value as plain JS objects and arrays.
fn encode<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|err| JsError::new(&format!("failed to encode result: {err}")).into())
}

/// Rewrite duplicate sequence orders to their array index + 1.
///
/// Returns a new array of node records; the input array is not modified.
#[wasm_bindgen(js_name = normalizeSequenceOrders)]
pub fn normalize_sequence_orders(nodes: JsValue) -> Result<JsValue, JsValue> {
    let nodes: Vec<LearningNode> = decode(nodes, "node list")?;
    encode(&flow::normalize_sequence_orders(&nodes))
}

/// Main entry point for flow layout.
///
/// Holds only the configuration; every call lays out the nodes it is given
/// from scratch.
#[wasm_bindgen]
pub struct FlowLayoutEngine {
    config: LayoutConfig,
}

#[wasm_bindgen]
impl FlowLayoutEngine {
    /// Create an engine from an optional partial config object.
    ///
    /// Missing fields take the standard profile's values.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FlowLayoutEngine, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            LayoutConfig::standard()
        } else {
            decode(config, "layout config")?
        };
        Ok(Self { config })
    }

    /// Create an engine using the compact profile.
    pub fn compact() -> FlowLayoutEngine {
        Self::with_config(LayoutConfig::compact())
    }

    /// The active configuration as a plain object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        encode(&self.config)
    }

    /// Whether connector bends fit at the given container width.
    #[wasm_bindgen(js_name = isConsistent)]
    pub fn is_consistent(&self, container_width: f64) -> bool {
        self.config.is_consistent(container_width)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lay out a flow.
    ///
    /// Returns `{ nodes, connections, visuals, contentHeight }`, where
    /// `connections[i]` joins `nodes[i]` and `nodes[i + 1]`.
    pub fn layout(&self, nodes: JsValue, container_width: f64) -> Result<JsValue, JsValue> {
        encode(&self.compute(nodes, container_width)?)
    }

    /// Center of the node with the given sequence order.
    ///
    /// Returns `{ x, y }`. Non-numeric or malformed orders lay out as order 1.
    #[wasm_bindgen(js_name = assignPosition)]
    pub fn assign_position(
        &self,
        sequence_order: JsValue,
        container_width: f64,
    ) -> Result<JsValue, JsValue> {
        let order = decode_order(sequence_order);
        encode(&layout::assign_position(order, container_width, &self.config))
    }

    /// Lane of the node with the given sequence order: "left", "center" or "right".
    #[wasm_bindgen(js_name = columnClass)]
    pub fn column_class(&self, sequence_order: JsValue) -> String {
        layout::column_class(decode_order(sequence_order)).as_str().to_owned()
    }

    /// Anchor point on the footprint of a node centered at `(x, y)`.
    ///
    /// `side` is "top", "bottom", "left", "right" or "center"; anything else
    /// resolves to the center. Returns `{ x, y }`.
    pub fn anchor(&self, x: f64, y: f64, side: JsValue) -> Result<JsValue, JsValue> {
        let side: Side = serde_wasm_bindgen::from_value(side).unwrap_or_default();
        encode(&layout::anchor_point(Point::new(x, y), side, self.config.node_size))
    }

    /// Visual state of a single node record.
    #[wasm_bindgen(js_name = resolveVisual)]
    pub fn resolve_visual(&self, node: JsValue) -> Result<JsValue, JsValue> {
        let node: LearningNode = decode(node, "node")?;
        encode(&visual::resolve_visual(&node, &self.config))
    }

    /// SVG path data for every connector of a flow.
    #[wasm_bindgen(js_name = svgPaths)]
    pub fn svg_paths(&self, nodes: JsValue, container_width: f64) -> Result<Vec<String>, JsValue> {
        Ok(self.compute(nodes, container_width)?.svg_paths())
    }

    // =========================================================================
    // Buffers and Hit Testing
    // =========================================================================

    /// Node centers as a Float64Array `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen(js_name = positionsBuffer)]
    pub fn positions_buffer(
        &self,
        nodes: JsValue,
        container_width: f64,
    ) -> Result<Float64Array, JsValue> {
        let positions = self.compute(nodes, container_width)?.positions_buffer();
        Ok(Float64Array::from(&positions[..]))
    }

    /// Index of the node under `(x, y)`, or undefined.
    #[wasm_bindgen(js_name = hitTest)]
    pub fn hit_test(
        &self,
        nodes: JsValue,
        container_width: f64,
        x: f64,
        y: f64,
    ) -> Result<Option<u32>, JsValue> {
        let layout = self.compute(nodes, container_width)?;
        let index = NodeHitIndex::build(&layout, &self.config);
        Ok(index.node_at(x, y).map(|i| i as u32))
    }

    /// Index of the node whose center is nearest `(x, y)` within
    /// `max_distance`, or undefined.
    #[wasm_bindgen(js_name = nearestNode)]
    pub fn nearest_node(
        &self,
        nodes: JsValue,
        container_width: f64,
        x: f64,
        y: f64,
        max_distance: f64,
    ) -> Result<Option<u32>, JsValue> {
        let layout = self.compute(nodes, container_width)?;
        let index = NodeHitIndex::build(&layout, &self.config);
        Ok(index.nearest_within(x, y, max_distance).map(|i| i as u32))
    }
}

impl FlowLayoutEngine {
    /// Create an engine with an explicit configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn compute(&self, nodes: JsValue, container_width: f64) -> Result<FlowLayout, JsValue> {
        let nodes: Vec<LearningNode> = decode(nodes, "node list")?;
        Ok(FlowLayout::compute(&nodes, container_width, &self.config))
    }
}

impl Default for FlowLayoutEngine {
    fn default() -> Self {
        Self::with_config(LayoutConfig::standard())
    }
}
