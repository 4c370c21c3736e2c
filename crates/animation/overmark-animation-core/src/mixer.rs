//! The seam to the host rendering engine's animation mixer.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::ids::ClipId;

/// Discrete instructions the scheduler issues to a mixer. Serializable so
/// host adapters can transport them to the real engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum MixerCommand {
    /// Hard start: weight 1 immediately, local time zeroed. Used once, for
    /// the very first clip.
    Start { clip: ClipId },
    /// Ramp the clip's weight down to zero over `duration`, then stop it.
    FadeOut { clip: ClipId, duration: f32 },
    /// Zero the clip's local time and ramp its weight up over `fade_in`.
    Restart { clip: ClipId, fade_in: f32 },
}

/// What the scheduler needs from a mixer: per-tick time accumulation, the
/// current local time of a clip, and command application. `clip_time` returns
/// `None` while a clip's handle is not initialized; the scheduler treats that
/// tick as a no-op.
pub trait ClipMixer {
    fn advance(&mut self, dt: f32);
    fn clip_time(&self, clip: ClipId) -> Option<f32>;
    fn apply(&mut self, cmd: &MixerCommand);
}

#[derive(Debug, Clone, Copy, Default)]
struct Channel {
    time: f32,
    weight: f32,
    running: bool,
    /// Signed weight change per second; 0 when no fade is in flight.
    ramp: f32,
}

/// The crate's own mixer: linear weight ramps over the fade window, local
/// time per running clip. Outside a transition window at most one channel has
/// non-zero weight; inside one, at most two (outgoing 1 to 0, incoming 0
/// to 1 over the same window).
#[derive(Debug, Default)]
pub struct LocalMixer {
    channels: HashMap<ClipId, Channel>,
}

impl LocalMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the handle for a clip. Idempotent.
    pub fn register(&mut self, clip: ClipId) {
        self.channels.entry(clip).or_default();
    }

    pub fn weight(&self, clip: ClipId) -> Option<f32> {
        self.channels.get(&clip).map(|c| c.weight)
    }

    pub fn is_running(&self, clip: ClipId) -> bool {
        self.channels.get(&clip).map(|c| c.running).unwrap_or(false)
    }

    /// Channels currently contributing to the pose.
    pub fn active_count(&self) -> usize {
        self.channels
            .values()
            .filter(|c| c.running && c.weight > 0.0)
            .count()
    }
}

impl ClipMixer for LocalMixer {
    fn advance(&mut self, dt: f32) {
        for ch in self.channels.values_mut() {
            if !ch.running {
                continue;
            }
            ch.time += dt;
            if ch.ramp != 0.0 {
                ch.weight += ch.ramp * dt;
                if ch.weight >= 1.0 {
                    ch.weight = 1.0;
                    ch.ramp = 0.0;
                } else if ch.weight <= 0.0 {
                    ch.weight = 0.0;
                    ch.ramp = 0.0;
                    ch.running = false;
                }
            }
        }
    }

    fn clip_time(&self, clip: ClipId) -> Option<f32> {
        self.channels
            .get(&clip)
            .filter(|c| c.running)
            .map(|c| c.time)
    }

    fn apply(&mut self, cmd: &MixerCommand) {
        match *cmd {
            MixerCommand::Start { clip } => {
                if let Some(ch) = self.channels.get_mut(&clip) {
                    ch.time = 0.0;
                    ch.weight = 1.0;
                    ch.running = true;
                    ch.ramp = 0.0;
                }
            }
            MixerCommand::FadeOut { clip, duration } => {
                if let Some(ch) = self.channels.get_mut(&clip) {
                    if !ch.running {
                        return;
                    }
                    if duration > 0.0 {
                        // Full-scale rate: a channel at weight w reaches zero
                        // in w * duration <= duration.
                        ch.ramp = -1.0 / duration;
                    } else {
                        ch.weight = 0.0;
                        ch.ramp = 0.0;
                        ch.running = false;
                    }
                }
            }
            MixerCommand::Restart { clip, fade_in } => {
                if let Some(ch) = self.channels.get_mut(&clip) {
                    ch.time = 0.0;
                    ch.running = true;
                    if fade_in > 0.0 {
                        ch.ramp = 1.0 / fade_in;
                    } else {
                        ch.weight = 1.0;
                        ch.ramp = 0.0;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_clip_has_no_time() {
        let mixer = LocalMixer::new();
        assert_eq!(mixer.clip_time(ClipId(0)), None);
    }

    #[test]
    fn start_zeroes_time_and_runs_at_full_weight() {
        let mut mixer = LocalMixer::new();
        mixer.register(ClipId(0));
        assert_eq!(mixer.clip_time(ClipId(0)), None, "registered but not started");
        mixer.apply(&MixerCommand::Start { clip: ClipId(0) });
        mixer.advance(0.25);
        assert_eq!(mixer.clip_time(ClipId(0)), Some(0.25));
        assert_eq!(mixer.weight(ClipId(0)), Some(1.0));
    }

    #[test]
    fn crossfade_keeps_at_most_two_active_and_completes() {
        let (a, b, c) = (ClipId(0), ClipId(1), ClipId(2));
        let mut mixer = LocalMixer::new();
        for id in [a, b, c] {
            mixer.register(id);
        }
        mixer.apply(&MixerCommand::Start { clip: a });
        mixer.advance(1.0);

        mixer.apply(&MixerCommand::FadeOut {
            clip: a,
            duration: 0.3,
        });
        mixer.apply(&MixerCommand::Restart {
            clip: b,
            fade_in: 0.3,
        });
        assert_eq!(mixer.clip_time(b), Some(0.0), "restart zeroes local time");

        mixer.advance(0.15);
        assert_eq!(mixer.active_count(), 2);
        let wa = mixer.weight(a).unwrap();
        let wb = mixer.weight(b).unwrap();
        assert!((wa - 0.5).abs() < 1e-5, "outgoing mid-fade, got {wa}");
        assert!((wb - 0.5).abs() < 1e-5, "incoming mid-fade, got {wb}");

        mixer.advance(0.2);
        assert_eq!(mixer.active_count(), 1);
        assert!(!mixer.is_running(a));
        assert_eq!(mixer.weight(a), Some(0.0));
        assert_eq!(mixer.weight(b), Some(1.0));
    }
}
