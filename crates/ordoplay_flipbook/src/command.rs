// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback control commands.

use serde::{Deserialize, Serialize};

/// A control operation that can be dispatched to an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackCommand {
    /// Restart from the first frame and play
    Play,
    /// Hold the current frame
    Pause,
    /// Continue from where playback was paused
    Resume,
    /// Rewind to the first frame and hold
    Stop,
}

impl PlaybackCommand {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Stop => "Stop",
        }
    }

    /// Get all commands
    pub fn all() -> &'static [PlaybackCommand] {
        &[Self::Play, Self::Pause, Self::Resume, Self::Stop]
    }
}
