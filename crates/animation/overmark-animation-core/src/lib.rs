//! overmark-animation-core (engine-agnostic)
//!
//! Owns the ordered motion-clip library and the cycle scheduler that advances
//! through it on frame-clock ticks, crossfading at each transition. The host
//! rendering engine's mixer sits behind the [`ClipMixer`] trait; the crate
//! ships a [`LocalMixer`] so the scheduler runs (and is tested) without a
//! host.

pub mod clip;
pub mod cycle;
pub mod ids;
pub mod mixer;
pub mod outputs;

// Re-exports for consumers (adapters)
pub use clip::{ClipLibrary, MotionClip};
pub use cycle::{CycleConfig, CycleScheduler};
pub use ids::{ClipId, IdAllocator};
pub use mixer::{ClipMixer, LocalMixer, MixerCommand};
pub use outputs::{CaptionChange, CycleEvent, SchedulerOutputs};
