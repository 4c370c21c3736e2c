//! Renderer-agnostic overlay description.

use serde::{Deserialize, Serialize};

use overmark_api_core::Point2;

use crate::resolve::{AnchorClass, ResolvedAnchor};

/// Radius of the filled anchor dot, in source pixels.
pub const ANCHOR_DOT_RADIUS: f32 = 10.0;

/// Everything the presentation layer needs to draw one resolved marker:
/// a filled circle at the anchor, the corners joined in input order, brace
/// segments (corner-to-anchor spokes for a tri, both diagonals for a quad),
/// and each corner's input-order index as a numeric label.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OverlaySketch {
    pub class: AnchorClass,
    pub anchor: Point2,
    pub dot_radius: f32,
    /// Corner points joined as an open polyline, in input order.
    pub outline: Vec<Point2>,
    /// Tri: one spoke per corner ending at the anchor. Quad: the diagonals
    /// p0-p2 and p1-p3.
    pub braces: Vec<(Point2, Point2)>,
    /// (input-order index, corner position) label pairs.
    pub labels: Vec<(usize, Point2)>,
}

/// Assemble the sketch for a resolved anchor.
pub fn build_sketch(resolved: &ResolvedAnchor) -> OverlaySketch {
    let corners = &resolved.corners;
    let braces = match resolved.class {
        AnchorClass::Tri => corners.iter().map(|&c| (c, resolved.anchor)).collect(),
        AnchorClass::Quad => {
            let mut braces = Vec::with_capacity(2);
            if corners.len() >= 4 {
                braces.push((corners[0], corners[2]));
                braces.push((corners[1], corners[3]));
            }
            braces
        }
    };
    OverlaySketch {
        class: resolved.class,
        anchor: resolved.anchor,
        dot_radius: ANCHOR_DOT_RADIUS,
        outline: corners.clone(),
        braces,
        labels: corners.iter().copied().enumerate().collect(),
    }
}
