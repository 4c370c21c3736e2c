//! Messages feeding the stage's single-threaded core.

use serde::{Deserialize, Serialize};

use overmark_api_core::Point2;

/// One message from an external driver. The render scheduler and the decode
/// poller only *enqueue*; all mutation happens inside `Stage::step()`, so the
/// "no concurrent mutation" invariant is carried by the architecture instead
/// of an implicit single-thread execution model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum StageEvent {
    /// Frame clock tick from the render loop, with elapsed delta time in
    /// seconds.
    FrameTick { dt: f32 },
    /// One decode attempt's corner points, in the decoder's winding order.
    Detection { points: Vec<Point2> },
    /// The capture collaborator's dimension notification. Only the first one
    /// takes effect.
    SourceSized { width: u32, height: u32 },
}
