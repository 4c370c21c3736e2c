//! Output contracts from the cycle scheduler.
//!
//! Outputs carry the mixer commands for this tick, an optional caption
//! update, and a list of semantic events. Adapters apply commands to the host
//! mixer and transport events.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ClipId;
use crate::mixer::MixerCommand;

/// Published on every index change, including the initial hard start.
/// Renders as `"<name> : <index>"`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CaptionChange {
    pub name: String,
    pub index: usize,
}

impl fmt::Display for CaptionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.index)
    }
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum CycleEvent {
    /// The startup delay expired and the first clip hard-started.
    CycleStarted { clip: ClipId, index: usize },
    /// A crossfade began: `from` is fading out, `to` is fading in.
    TransitionBegan { from: usize, to: usize },
    /// The transition target wrapped back to index 0.
    CycleWrapped,
}

/// Outputs returned by `CycleScheduler::step()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SchedulerOutputs {
    #[serde(default)]
    pub commands: Vec<MixerCommand>,
    #[serde(default)]
    pub caption: Option<CaptionChange>,
    #[serde(default)]
    pub events: Vec<CycleEvent>,
}

impl SchedulerOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
        self.caption = None;
        self.events.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.caption.is_none() && self.events.is_empty()
    }
}
