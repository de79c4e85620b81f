//! Layout configuration and the built-in density profiles.

use serde::{Deserialize, Serialize};

use super::Column;

/// Geometry constants shared by every stage of the layout pass.
///
/// The corner radius must stay strictly below half the row spacing and half
/// the narrowest column gap, otherwise bends fold back over themselves.
/// [`LayoutConfig::is_consistent`] checks this for a given container width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Side length of a node's square footprint.
    pub node_size: f64,
    /// Y of the first row.
    pub start_y: f64,
    /// Vertical distance between consecutive rows.
    pub node_spacing: f64,
    /// Radius of the rounded corner on bent connectors.
    pub corner_radius: f64,
    /// Column centers as fractions of the container width.
    pub left_offset: f64,
    pub center_offset: f64,
    pub right_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl LayoutConfig {
    /// The default profile.
    pub const fn standard() -> Self {
        Self {
            node_size: 110.0,
            start_y: 100.0,
            node_spacing: 150.0,
            corner_radius: 20.0,
            left_offset: 0.3,
            center_offset: 0.5,
            right_offset: 0.7,
        }
    }

    /// Denser profile for long flows and narrow containers.
    pub const fn compact() -> Self {
        Self {
            node_size: 90.0,
            start_y: 100.0,
            node_spacing: 140.0,
            corner_radius: 12.0,
            left_offset: 0.25,
            center_offset: 0.5,
            right_offset: 0.75,
        }
    }

    /// Fraction of the container width at which a column's nodes are centered.
    #[inline]
    pub fn column_offset(&self, column: Column) -> f64 {
        match column {
            Column::Left => self.left_offset,
            Column::Center => self.center_offset,
            Column::Right => self.right_offset,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f64 {
        self.node_size / 2.0
    }

    /// Check that bends fit between rows and columns at this width.
    ///
    /// Besides the half-spacing and half-gap limits, the straight legs of a
    /// bend need room between the node edges: the radius may not exceed the
    /// space left once half a node is taken off the spacing or the gap.
    pub fn is_consistent(&self, container_width: f64) -> bool {
        let values = [
            self.node_size,
            self.start_y,
            self.node_spacing,
            self.corner_radius,
            container_width,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return false;
        }

        let gap = (self.center_offset - self.left_offset)
            .min(self.right_offset - self.center_offset)
            * container_width;
        let half = self.half_size();
        let r = self.corner_radius;

        self.node_size > 0.0
            && self.node_spacing > 0.0
            && r >= 0.0
            && gap > 0.0
            && r < self.node_spacing / 2.0
            && r < gap / 2.0
            && r <= self.node_spacing - half
            && r <= gap - half
    }
}
