//! Motion clip data model and the ordered clip library.

use serde::{Deserialize, Serialize};

use crate::ids::{ClipId, IdAllocator};

/// A named, finite-duration motion clip. `source` is the opaque asset
/// identifier the host's loader understands (the core never opens it);
/// `duration` is in seconds. Clips are loaded once at startup and immutable
/// thereafter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MotionClip {
    /// Internal id assigned when loaded into a library.
    #[serde(skip)]
    pub id: Option<ClipId>,
    pub name: String,
    pub source: String,
    pub duration: f32,
}

impl MotionClip {
    pub fn new(name: impl Into<String>, source: impl Into<String>, duration: f32) -> Self {
        Self {
            id: None,
            name: name.into(),
            source: source.into(),
            duration,
        }
    }

    /// Validate basic invariants (finite, positive duration).
    pub fn validate_basic(&self) -> Result<(), String> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(format!(
                "clip '{}' duration must be finite and > 0, got {}",
                self.name, self.duration
            ));
        }
        Ok(())
    }
}

/// Fixed, ordered clip storage. The cycle order is the load order.
#[derive(Default, Debug)]
pub struct ClipLibrary {
    items: Vec<MotionClip>,
    ids: IdAllocator,
}

impl ClipLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a clip, assigning its ClipId. Cycle position is load order.
    pub fn load_clip(&mut self, mut clip: MotionClip) -> ClipId {
        let id = self.ids.alloc_clip();
        clip.id = Some(id);
        self.items.push(clip);
        id
    }

    pub fn get(&self, id: ClipId) -> Option<&MotionClip> {
        self.items.iter().find(|c| c.id == Some(id))
    }

    /// Clip at a cycle position.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&MotionClip> {
        self.items.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotionClip> {
        self.items.iter()
    }
}
