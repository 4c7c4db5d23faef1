// SPDX-License-Identifier: MIT OR Apache-2.0
//! Preview settings file.

use ordoplay_flipbook::{AnimationConfig, ConfigError, OnActivateBehavior, OnDeactivateBehavior};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to preview and how long to run it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Animation display name
    pub name: String,
    /// Playback configuration
    pub animation: AnimationConfig,
    /// Frame names, in playback order
    pub frames: Vec<String>,
    /// Simulated host frames per second
    pub tick_rate: f32,
    /// Simulated run length (seconds)
    pub duration: f32,
    /// Time at which the owning entity is deactivated
    pub deactivate_at: Option<f32>,
    /// Time at which the owning entity is activated again
    pub reactivate_at: Option<f32>,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            name: "preview".to_string(),
            animation: AnimationConfig {
                frames_per_second: 8.0,
                loops: 2,
                on_activate: OnActivateBehavior::Play,
                on_deactivate: OnDeactivateBehavior::Pause,
            },
            frames: (0..4).map(|i| format!("frame_{i}")).collect(),
            tick_rate: 60.0,
            duration: 2.0,
            deactivate_at: None,
            reactivate_at: None,
        }
    }
}

impl PreviewSettings {
    /// Load from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: PreviewSettings = ron::from_str(&content)?;
        settings.animation = settings.animation.sanitized();
        Ok(settings)
    }
}
