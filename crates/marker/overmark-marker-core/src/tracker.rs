//! Per-class anchor tracking across detections.

use crate::classify::{classify, ShapeClass};
use crate::detection::DetectionEvent;
use crate::resolve::{anchor_of_quad, anchor_of_tri, AnchorClass, ResolvedAnchor};
use crate::sketch::{build_sketch, OverlaySketch};

/// Routes each detection to the matching resolver and keeps the latest
/// resolved anchor per class. The tri and quad slots are independent: a tri
/// result never overwrites the quad slot and vice versa.
///
/// Failed resolutions (unclassified counts, degenerate geometry) are dropped
/// with no error accumulation; the previous slot content stays.
#[derive(Debug, Default)]
pub struct MarkerTracker {
    tri: Option<ResolvedAnchor>,
    quad: Option<ResolvedAnchor>,
}

impl MarkerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one detection. Returns the slot updated by this event, or
    /// `None` when the event was discarded.
    pub fn observe(&mut self, event: &DetectionEvent) -> Option<&ResolvedAnchor> {
        match classify(event.points()) {
            ShapeClass::Quad(corners) => {
                let anchor = anchor_of_quad(&corners).ok()?;
                self.quad = Some(ResolvedAnchor {
                    class: AnchorClass::Quad,
                    anchor,
                    corners: corners.to_vec(),
                });
                self.quad.as_ref()
            }
            ShapeClass::Tri(corners) => {
                let anchor = anchor_of_tri(&corners);
                self.tri = Some(ResolvedAnchor {
                    class: AnchorClass::Tri,
                    anchor,
                    corners: corners.to_vec(),
                });
                self.tri.as_ref()
            }
            ShapeClass::Unclassified { .. } => None,
        }
    }

    #[inline]
    pub fn resolved(&self, class: AnchorClass) -> Option<&ResolvedAnchor> {
        match class {
            AnchorClass::Tri => self.tri.as_ref(),
            AnchorClass::Quad => self.quad.as_ref(),
        }
    }

    /// Build the overlay sketch for a slot, if it holds an anchor.
    pub fn sketch(&self, class: AnchorClass) -> Option<OverlaySketch> {
        self.resolved(class).map(build_sketch)
    }
}
