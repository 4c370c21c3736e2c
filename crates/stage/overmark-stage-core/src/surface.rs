//! Lazily initialized overlay surface state.

use serde::{Deserialize, Serialize};

use overmark_api_core::CoreError;

/// The drawing surface the two pipelines share. It cannot exist until the
/// video source reports its dimensions, so it starts `Pending` and makes a
/// single one-way transition to `Ready`; consumers treat `Pending` as "skip
/// this draw," not as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlaySurface {
    #[default]
    Pending,
    Ready {
        width: u32,
        height: u32,
    },
}

impl OverlaySurface {
    /// Transition to `Ready` on the first dimension notification. Returns
    /// whether this call performed the transition; later calls are ignored.
    pub fn make_ready(&mut self, width: u32, height: u32) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Ready { width, height };
                true
            }
            Self::Ready { .. } => false,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match *self {
            Self::Pending => None,
            Self::Ready { width, height } => Some((width, height)),
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Error-shaped variant of [`dimensions`](Self::dimensions) for callers
    /// that propagate.
    pub fn require(&self) -> Result<(u32, u32), CoreError> {
        self.dimensions().ok_or(CoreError::NotReady)
    }
}
