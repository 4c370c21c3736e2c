//! Stage configuration manifest.
//!
//! The manifest is fixed at startup: an ordered clip list plus the timing
//! knobs. JSON keys are camelCase to match the host tooling that authors
//! these files.

use serde::{Deserialize, Serialize};

use overmark_api_core::CoreError;
use overmark_animation_core::CycleConfig;

fn default_poll_interval_ms() -> u64 {
    100
}

/// One clip in cycle order: the asset identifier the host loader understands,
/// the display name used in captions, and the clip duration in seconds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClipEntry {
    pub source: String,
    pub name: String,
    pub duration: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageConfig {
    /// Ordered clip manifest; cycle order is list order.
    pub clips: Vec<ClipEntry>,
    /// Interval between decode attempts, for the host's polling loop. The
    /// core itself never sleeps.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub cycle: CycleConfig,
}

impl StageConfig {
    /// Validate manifest invariants before any loop starts.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.clips.is_empty() {
            return Err(CoreError::Config {
                reason: "clip list must not be empty".to_string(),
            });
        }
        for entry in &self.clips {
            if !entry.duration.is_finite() || entry.duration <= 0.0 {
                return Err(CoreError::Config {
                    reason: format!(
                        "clip '{}' duration must be finite and > 0, got {}",
                        entry.name, entry.duration
                    ),
                });
            }
        }
        let cycle = &self.cycle;
        if !cycle.startup_delay.is_finite() || cycle.startup_delay < 0.0 {
            return Err(CoreError::Config {
                reason: format!("startupDelay must be >= 0, got {}", cycle.startup_delay),
            });
        }
        if !cycle.crossfade.is_finite() || cycle.crossfade < 0.0 {
            return Err(CoreError::Config {
                reason: format!("crossfade must be >= 0, got {}", cycle.crossfade),
            });
        }
        if !cycle.transition_ratio.is_finite()
            || cycle.transition_ratio <= 0.0
            || cycle.transition_ratio >= 1.0
        {
            return Err(CoreError::Config {
                reason: format!(
                    "transitionRatio must be in (0, 1), got {}",
                    cycle.transition_ratio
                ),
            });
        }
        Ok(())
    }
}

/// Parse and validate a JSON manifest.
pub fn parse_stage_config_json(s: &str) -> Result<StageConfig, CoreError> {
    let cfg: StageConfig = serde_json::from_str(s).map_err(|e| CoreError::Config {
        reason: format!("parse error: {e}"),
    })?;
    cfg.validate()?;
    Ok(cfg)
}
