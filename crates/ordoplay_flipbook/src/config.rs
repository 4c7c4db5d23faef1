// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation configuration and its RON file format.

use crate::error::ConfigError;
use crate::lifecycle::{OnActivateBehavior, OnDeactivateBehavior};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Loop count meaning "repeat forever"
pub const INFINITE_LOOPS: i32 = -1;

/// Frame rate used by [`AnimationConfig::default`]
pub const DEFAULT_FRAMES_PER_SECOND: f32 = 12.0;

/// Clamp a frame rate to `>= 0`. NaN becomes 0.
pub fn clamp_frames_per_second(frames_per_second: f32) -> f32 {
    frames_per_second.max(0.0)
}

/// Clamp a loop count to `>= -1`
pub fn clamp_loops(loops: i32) -> i32 {
    loops.max(INFINITE_LOOPS)
}

/// Playback parameters of one animation.
///
/// Changes apply from the next tick on; nothing already shown is redone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Playback rate. Zero stalls on the current frame.
    pub frames_per_second: f32,
    /// Number of passes before ending, or [`INFINITE_LOOPS`]
    pub loops: i32,
    /// Action when the owning entity is activated
    pub on_activate: OnActivateBehavior,
    /// Action when the owning entity is deactivated
    pub on_deactivate: OnDeactivateBehavior,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            loops: INFINITE_LOOPS,
            on_activate: OnActivateBehavior::None,
            on_deactivate: OnDeactivateBehavior::None,
        }
    }
}

impl AnimationConfig {
    /// Copy of this config with numeric fields clamped into range
    pub fn sanitized(self) -> Self {
        Self {
            frames_per_second: clamp_frames_per_second(self.frames_per_second),
            loops: clamp_loops(self.loops),
            ..self
        }
    }

    /// Whether the animation repeats forever
    pub fn is_infinite(&self) -> bool {
        self.loops == INFINITE_LOOPS
    }

    /// Parse from RON, clamping out-of-range values
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: AnimationConfig = ron::from_str(source)?;
        Ok(config.sanitized())
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default().struct_names(true);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Save to a RON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
