//! One decode attempt's output.

use serde::{Deserialize, Serialize};

use overmark_api_core::Point2;

/// An ordered sequence of corner points emitted by the decoding library for
/// one decode attempt. The order is the library's winding order and is assumed
/// stable frame-to-frame; the length is not fixed. Decode metadata beyond the
/// point list (payload text, format) is ignored by the core and not modeled.
///
/// Events are ephemeral: consumed by value, never retained.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectionEvent {
    points: Vec<Point2>,
}

impl DetectionEvent {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(f32, f32)> for DetectionEvent {
    fn from_iter<I: IntoIterator<Item = (f32, f32)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(|(x, y)| Point2::new(x, y)).collect(),
        }
    }
}
