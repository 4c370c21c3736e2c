//! The animation cycle scheduler.

use serde::{Deserialize, Serialize};

use overmark_api_core::CoreError;

use crate::clip::ClipLibrary;
use crate::mixer::{ClipMixer, MixerCommand};
use crate::outputs::{CaptionChange, CycleEvent, SchedulerOutputs};

/// Timing knobs for the cycle. `Default` is the shipped timing: 1s startup
/// delay, 90% transition threshold, 0.3s crossfade.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleConfig {
    /// Delay between construction and the first clip's hard start, seconds.
    pub startup_delay: f32,
    /// Playthrough fraction past which the next transition fires (strict
    /// comparison).
    pub transition_ratio: f32,
    /// Crossfade window, seconds, independent of clip durations.
    pub crossfade: f32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            startup_delay: 1.0,
            transition_ratio: 0.9,
            crossfade: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CycleState {
    /// Accumulating the startup delay; nothing is playing yet.
    Pending { elapsed: f32 },
    /// Clip `idx` is primary and drives progress measurement.
    Playing { idx: usize },
}

/// State machine over clip indices `0..N-1`.
///
/// Each frame-clock tick reads the primary clip's local time from the mixer,
/// and once the playthrough ratio strictly exceeds the threshold it fades the
/// primary out while restarting and fading in the next clip (wrapping mod N).
/// Exactly one clip is primary at any time; during the fade window two clips
/// are concurrently active on the mixer side.
#[derive(Debug)]
pub struct CycleScheduler {
    cfg: CycleConfig,
    library: ClipLibrary,
    state: CycleState,
    outputs: SchedulerOutputs,
}

impl CycleScheduler {
    /// N = library length; N >= 1 is required.
    pub fn new(library: ClipLibrary, cfg: CycleConfig) -> Result<Self, CoreError> {
        if library.is_empty() {
            return Err(CoreError::EmptyCycle);
        }
        Ok(Self {
            cfg,
            library,
            state: CycleState::Pending { elapsed: 0.0 },
            outputs: SchedulerOutputs::default(),
        })
    }

    pub fn library(&self) -> &ClipLibrary {
        &self.library
    }

    pub fn config(&self) -> &CycleConfig {
        &self.cfg
    }

    /// Index of the primary clip, `None` until the startup delay expires.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            CycleState::Pending { .. } => None,
            CycleState::Playing { idx } => Some(idx),
        }
    }

    /// Advance the state machine by one frame-clock tick.
    ///
    /// The caller drives `mixer.advance(dt)` before this and applies the
    /// returned commands after it, so time accumulation and command
    /// application stay in one place. A tick whose primary clip has no mixer
    /// time yet is a no-op: startup sequencing, not runtime checks,
    /// guarantees initialization.
    pub fn step(&mut self, dt: f32, mixer: &dyn ClipMixer) -> &SchedulerOutputs {
        self.outputs.clear();

        match self.state {
            CycleState::Pending { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed < self.cfg.startup_delay {
                    self.state = CycleState::Pending { elapsed };
                    return &self.outputs;
                }
                // Hard start for the very first clip: no fade-in.
                let Some(clip) = self.library.at(0) else {
                    return &self.outputs;
                };
                let Some(id) = clip.id else {
                    return &self.outputs;
                };
                self.outputs.commands.push(MixerCommand::Start { clip: id });
                self.outputs.caption = Some(CaptionChange {
                    name: clip.name.clone(),
                    index: 0,
                });
                self.outputs
                    .events
                    .push(CycleEvent::CycleStarted { clip: id, index: 0 });
                self.state = CycleState::Playing { idx: 0 };
            }
            CycleState::Playing { idx } => {
                let Some(clip) = self.library.at(idx) else {
                    return &self.outputs;
                };
                let Some(id) = clip.id else {
                    return &self.outputs;
                };
                let Some(time) = mixer.clip_time(id) else {
                    // NotReady: skip this tick.
                    return &self.outputs;
                };
                if clip.duration <= 0.0 {
                    return &self.outputs;
                }
                let ratio = time / clip.duration;
                if ratio > self.cfg.transition_ratio {
                    self.transition(idx);
                }
            }
        }

        &self.outputs
    }

    fn transition(&mut self, idx: usize) {
        let next = (idx + 1) % self.library.len();
        let outgoing = self.library.at(idx).and_then(|c| c.id);
        let Some(incoming) = self.library.at(next) else {
            return;
        };
        let Some(incoming_id) = incoming.id else {
            return;
        };

        if let Some(outgoing_id) = outgoing {
            self.outputs.commands.push(MixerCommand::FadeOut {
                clip: outgoing_id,
                duration: self.cfg.crossfade,
            });
        }
        self.outputs.commands.push(MixerCommand::Restart {
            clip: incoming_id,
            fade_in: self.cfg.crossfade,
        });
        self.outputs.caption = Some(CaptionChange {
            name: incoming.name.clone(),
            index: next,
        });
        self.outputs
            .events
            .push(CycleEvent::TransitionBegan { from: idx, to: next });
        if next == 0 {
            self.outputs.events.push(CycleEvent::CycleWrapped);
        }
        self.state = CycleState::Playing { idx: next };
    }
}
