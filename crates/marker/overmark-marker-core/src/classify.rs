//! Count-based classification of a detection's point list.

use serde::{Deserialize, Serialize};

use overmark_api_core::Point2;

/// Classification of one detection by point count.
///
/// The decoding library emits a variable-length list: a clean QR read yields
/// four finder/alignment corners, a partial read yields three, and noisy reads
/// yield anything. Counts that are a positive multiple of 4 take the quad
/// path, remaining positive multiples of 3 take the tri path, and everything
/// else is `Unclassified` and produces no anchor. Only the leading 4 (or 3)
/// points are kept; the decoder's winding order makes those the corners of
/// the first detected shape.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum ShapeClass {
    Quad([Point2; 4]),
    Tri([Point2; 3]),
    Unclassified { count: usize },
}

/// Classify a point list. The `% 4` arm is tested before the `% 3` arm, so a
/// count of 12 routes to the quad resolver.
pub fn classify(points: &[Point2]) -> ShapeClass {
    let n = points.len();
    if n == 0 {
        return ShapeClass::Unclassified { count: 0 };
    }
    if n % 4 == 0 {
        ShapeClass::Quad([points[0], points[1], points[2], points[3]])
    } else if n % 3 == 0 {
        ShapeClass::Tri([points[0], points[1], points[2]])
    } else {
        ShapeClass::Unclassified { count: n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(n: usize) -> Vec<Point2> {
        (0..n).map(|i| Point2::new(i as f32, i as f32 + 1.0)).collect()
    }

    /// it should route counts by the residue rule, quad arm first
    #[test]
    fn residue_routing() {
        for n in [0usize, 1, 2, 5, 7, 10, 11] {
            assert!(
                matches!(classify(&pts(n)), ShapeClass::Unclassified { count } if count == n),
                "count {n} should be unclassified"
            );
        }
        for n in [3usize, 6, 9] {
            assert!(matches!(classify(&pts(n)), ShapeClass::Tri(_)), "count {n}");
        }
        for n in [4usize, 8, 12] {
            assert!(matches!(classify(&pts(n)), ShapeClass::Quad(_)), "count {n}");
        }
    }

    /// it should keep only the leading points of an oversized detection
    #[test]
    fn truncates_to_leading_points() {
        let points = pts(8);
        if let ShapeClass::Quad(corners) = classify(&points) {
            assert_eq!(&corners[..], &points[..4]);
        } else {
            panic!("count 8 should classify as quad");
        }

        let points = pts(9);
        if let ShapeClass::Tri(corners) = classify(&points) {
            assert_eq!(&corners[..], &points[..3]);
        } else {
            panic!("count 9 should classify as tri");
        }
    }
}
