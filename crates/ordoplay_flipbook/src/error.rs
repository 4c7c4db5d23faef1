// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for flipbook playback and configuration.

/// Rejection of a playback operation.
///
/// Raised when no usable sequence exists, or after the animation was
/// destroyed. The rejected operation leaves all playback state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// An empty frame list was passed as the animation sequence
    #[error("Animation sequence cannot be empty")]
    EmptySequence,

    /// A control operation was invoked before any sequence was set
    #[error("No animation sequence has been set")]
    NoSequence,

    /// The animation was destroyed and accepts no further control
    #[error("Animation has been destroyed")]
    Destroyed,
}

/// Error loading or saving an animation configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid RON for the expected structure
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The configuration could not be written as RON
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
