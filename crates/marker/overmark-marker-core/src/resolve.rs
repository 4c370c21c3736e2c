//! Anchor-point resolution for classified corner sets.

use serde::{Deserialize, Serialize};

use overmark_api_core::{CoreError, Point2};

/// Which resolver produced an anchor. Tri and quad anchors are tracked and
/// visualized separately; they never share a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AnchorClass {
    Tri,
    Quad,
}

/// A resolved anchor plus the corners that produced it, kept in input order
/// for the overlay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedAnchor {
    pub class: AnchorClass,
    pub anchor: Point2,
    pub corners: Vec<Point2>,
}

/// Three-corner anchor: the midpoint of the axis-aligned bounding box spanned
/// by the first and third corners, per axis independently. The second corner
/// is not used.
///
/// Deliberately a bbox midpoint, not a centroid: it is the true center only
/// when the first and third corners are diagonal extremes, which holds for
/// the near-square markers the decoder emits.
pub fn anchor_of_tri(corners: &[Point2; 3]) -> Point2 {
    Point2::midpoint_aabb(corners[0], corners[2])
}

/// Four-corner anchor: intersection of the diagonals p0-p2 and p1-p3 via
/// signed-area interpolation.
///
/// Corners arrive in the cyclic order p1 top-left, p2 top-right, p3
/// bottom-right, p0 bottom-left. `s1` and `s2` are the signed areas of the
/// triangles formed by the diagonal p0-p2 with each endpoint of p1-p3; their
/// ratio is the interpolation fraction along p1-p3 where it crosses p0-p2.
pub fn anchor_of_quad(corners: &[Point2; 4]) -> Result<Point2, CoreError> {
    let [p0, p1, p2, p3] = *corners;
    let diag = p2 - p0;
    let s1 = diag.cross(p1 - p0) / 2.0;
    let s2 = diag.cross(p0 - p3) / 2.0;
    let total = s1 + s2;
    if total == 0.0 {
        // Parallel or collinear diagonals (zero-area input): the interpolation
        // fraction is undefined.
        return Err(CoreError::Indeterminate);
    }
    let anchor = p1.lerp(p3, s1 / total);
    if !anchor.is_finite() {
        return Err(CoreError::Indeterminate);
    }
    Ok(anchor)
}
