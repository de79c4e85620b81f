//! Spatial indexing for hit testing laid-out nodes.
//!
//! This module provides an R-tree over node footprints so the editor can map
//! a click back to the node under the pointer.

mod rtree;

pub use rtree::NodeHitIndex;
