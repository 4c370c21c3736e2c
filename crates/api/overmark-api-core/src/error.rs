//! Error types shared across the overmark crates.

use serde::{Deserialize, Serialize};

/// Failure taxonomy for the core pipelines.
///
/// `Indeterminate` and `NotReady` are transient: the consuming tick skips its
/// output and nothing is surfaced to the host. The remaining variants are
/// construction-time validation failures and are returned eagerly, before any
/// loop starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CoreError {
    /// Degenerate geometry: the combined signed area of the diagonal split is
    /// zero, or the interpolated anchor is non-finite.
    #[error("indeterminate geometry")]
    Indeterminate,

    /// A lazily initialized resource (overlay surface, mixer handle) is not
    /// available yet.
    #[error("resource not ready")]
    NotReady,

    /// A cycle scheduler needs at least one clip.
    #[error("cycle requires at least one clip")]
    EmptyCycle,

    /// Malformed stage configuration.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

impl CoreError {
    /// Transient failures degrade to "no output this tick" and are never
    /// propagated past the tick that hit them.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Indeterminate | Self::NotReady)
    }
}
