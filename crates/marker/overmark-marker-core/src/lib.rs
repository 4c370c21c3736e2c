//! overmark-marker-core (engine-agnostic)
//!
//! Turns raw corner detections from a marker-decoding library into a stable
//! 2D anchor point and a renderer-agnostic overlay description. The decoding
//! library itself is a black box: this crate starts at "ordered list of 2D
//! points" and ends at "data describing what to draw."

pub mod classify;
pub mod detection;
pub mod resolve;
pub mod sketch;
pub mod tracker;

// Re-exports for consumers (adapters)
pub use classify::{classify, ShapeClass};
pub use detection::DetectionEvent;
pub use resolve::{anchor_of_quad, anchor_of_tri, AnchorClass, ResolvedAnchor};
pub use sketch::{build_sketch, OverlaySketch, ANCHOR_DOT_RADIUS};
pub use tracker::MarkerTracker;
