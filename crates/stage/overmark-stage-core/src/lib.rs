//! overmark-stage
//!
//! Wires the marker pipeline and the animation cycle behind one event queue.
//! External drivers (the render scheduler's frame clock, the decode poller,
//! the capture collaborator) enqueue [`StageEvent`]s; `Stage::step()` drains
//! them in arrival order on one logical thread and assembles a [`StageFrame`]
//! for the host: overlay sketches, an optional caption update, and the mixer
//! commands issued this step.

pub mod config;
pub mod events;
pub mod surface;

use std::collections::VecDeque;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use overmark_animation_core::{
    CaptionChange, ClipLibrary, ClipMixer, CycleScheduler, LocalMixer, MixerCommand, MotionClip,
};
use overmark_marker_core::{AnchorClass, DetectionEvent, MarkerTracker, OverlaySketch};

pub use crate::config::{parse_stage_config_json, ClipEntry, StageConfig};
pub use crate::events::StageEvent;
pub use crate::surface::OverlaySurface;

/// What one `step()` hands the host.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct StageFrame {
    pub epoch: u64,
    /// At most one sketch per anchor class, present only for classes whose
    /// slot was updated this step while the surface is ready.
    pub sketches: Vec<OverlaySketch>,
    /// The last caption change of this step, if any transition (or the
    /// initial start) happened.
    pub caption: Option<CaptionChange>,
    /// Mixer commands issued this step, in order, for host mixer adapters.
    /// The stage's own mixer has already applied them.
    pub commands: Vec<MixerCommand>,
}

/// The single-threaded event-processing core.
#[derive(Debug)]
pub struct Stage {
    queue: VecDeque<StageEvent>,
    tracker: MarkerTracker,
    scheduler: CycleScheduler,
    mixer: LocalMixer,
    surface: OverlaySurface,
    poll_interval_ms: u64,
    epoch: u64,
}

impl Stage {
    /// Build the stage from a validated manifest: clip library and mixer
    /// handles in manifest order, scheduler, tracker, surface, queue.
    pub fn from_config(cfg: &StageConfig) -> Result<Self> {
        cfg.validate()?;

        let mut library = ClipLibrary::new();
        let mut mixer = LocalMixer::new();
        for entry in &cfg.clips {
            let clip = MotionClip::new(entry.name.clone(), entry.source.clone(), entry.duration);
            clip.validate_basic().map_err(anyhow::Error::msg)?;
            let id = library.load_clip(clip);
            mixer.register(id);
        }
        let scheduler = CycleScheduler::new(library, cfg.cycle.clone())?;

        Ok(Self {
            queue: VecDeque::new(),
            tracker: MarkerTracker::new(),
            scheduler,
            mixer,
            surface: OverlaySurface::default(),
            poll_interval_ms: cfg.poll_interval_ms,
            epoch: 0,
        })
    }

    /// Enqueue one event. Non-blocking; drivers call this from their own
    /// callbacks.
    pub fn push_event(&mut self, event: StageEvent) {
        self.queue.push_back(event);
    }

    /// Interval the host's decode poller should use, milliseconds.
    #[inline]
    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }

    pub fn surface(&self) -> &OverlaySurface {
        &self.surface
    }

    pub fn scheduler(&self) -> &CycleScheduler {
        &self.scheduler
    }

    pub fn tracker(&self) -> &MarkerTracker {
        &self.tracker
    }

    pub fn mixer(&self) -> &LocalMixer {
        &self.mixer
    }

    /// Drain the queue in arrival order and assemble this step's frame.
    ///
    /// Every failure path inside is a local skip: an unclassified or
    /// degenerate detection leaves the tracker untouched, a Pending surface
    /// withholds sketches, and a not-yet-initialized mixer handle makes the
    /// scheduler tick a no-op. Nothing is retried and no error state
    /// accumulates.
    pub fn step(&mut self) -> StageFrame {
        self.epoch = self.epoch.wrapping_add(1);
        let mut frame = StageFrame {
            epoch: self.epoch,
            ..StageFrame::default()
        };
        let mut touched_tri = false;
        let mut touched_quad = false;

        while let Some(event) = self.queue.pop_front() {
            match event {
                StageEvent::SourceSized { width, height } => {
                    self.surface.make_ready(width, height);
                }
                StageEvent::Detection { points } => {
                    let detection = DetectionEvent::new(points);
                    if let Some(resolved) = self.tracker.observe(&detection) {
                        match resolved.class {
                            AnchorClass::Tri => touched_tri = true,
                            AnchorClass::Quad => touched_quad = true,
                        }
                    }
                }
                StageEvent::FrameTick { dt } => {
                    self.mixer.advance(dt);
                    let out = self.scheduler.step(dt, &self.mixer);
                    let commands = out.commands.clone();
                    let caption = out.caption.clone();
                    for cmd in &commands {
                        self.mixer.apply(cmd);
                    }
                    frame.commands.extend(commands);
                    if caption.is_some() {
                        frame.caption = caption;
                    }
                }
            }
        }

        // NotReady surface: skip the draw, keep the tracker state.
        if self.surface.require().is_ok() {
            if touched_tri {
                frame.sketches.extend(self.tracker.sketch(AnchorClass::Tri));
            }
            if touched_quad {
                frame.sketches.extend(self.tracker.sketch(AnchorClass::Quad));
            }
        }

        frame
    }
}
