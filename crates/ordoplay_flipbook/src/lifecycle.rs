// SPDX-License-Identifier: MIT OR Apache-2.0
//! Activation/deactivation policy for animations.
//!
//! When the entity owning an animation is enabled or disabled, the host
//! notifies the animation, and the [`LifecycleBinder`] decides which
//! playback command (if any) to run.

use crate::command::PlaybackCommand;
use serde::{Deserialize, Serialize};

/// What to do when the owning entity becomes active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OnActivateBehavior {
    /// Leave playback as it is
    #[default]
    None,
    /// Restart from the first frame
    Play,
    /// Continue from the paused position
    Resume,
}

impl OnActivateBehavior {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Play => "Play",
            Self::Resume => "Resume",
        }
    }

    /// Get all behaviors
    pub fn all() -> &'static [OnActivateBehavior] {
        &[Self::None, Self::Play, Self::Resume]
    }
}

/// What to do when the owning entity becomes inactive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OnDeactivateBehavior {
    /// Leave playback as it is
    #[default]
    None,
    /// Hold the current frame, keeping position
    Pause,
    /// Rewind to the first frame and hold
    Stop,
}

impl OnDeactivateBehavior {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Pause => "Pause",
            Self::Stop => "Stop",
        }
    }

    /// Get all behaviors
    pub fn all() -> &'static [OnDeactivateBehavior] {
        &[Self::None, Self::Pause, Self::Stop]
    }
}

/// Stateless policy table mapping lifecycle signals to commands
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleBinder;

impl LifecycleBinder {
    /// Command to run when the owner is activated
    pub fn on_activate(behavior: OnActivateBehavior) -> Option<PlaybackCommand> {
        match behavior {
            OnActivateBehavior::None => None,
            OnActivateBehavior::Play => Some(PlaybackCommand::Play),
            OnActivateBehavior::Resume => Some(PlaybackCommand::Resume),
        }
    }

    /// Command to run when the owner is deactivated
    pub fn on_deactivate(behavior: OnDeactivateBehavior) -> Option<PlaybackCommand> {
        match behavior {
            OnDeactivateBehavior::None => None,
            OnDeactivateBehavior::Pause => Some(PlaybackCommand::Pause),
            OnDeactivateBehavior::Stop => Some(PlaybackCommand::Stop),
        }
    }
}
