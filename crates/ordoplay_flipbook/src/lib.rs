// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame-sequence (flipbook) animation for OrdoPlay.
//!
//! This crate plays a fixed list of frames at a configurable rate:
//! - Play, pause, resume and stop control
//! - Finite or infinite looping
//! - Playback events (played, paused, resumed, stopped, ended)
//! - Activation/deactivation behaviors
//! - Inspector panel for the editor
//!
//! ## Architecture
//!
//! The playback core is built on:
//! - [`PlaybackClock`] turning elapsed time into whole frames
//! - [`SequenceState`] holding position, loop count and play flag
//! - [`EventHub`] broadcasting transitions to observers
//! - [`LifecycleBinder`] mapping entity activation to commands
//!
//! Frames are displayed through a [`FrameSink`] supplied by the host; the
//! core never draws anything itself. Time comes from the host too, one
//! [`SequenceAnimation::tick`] call per frame.

pub mod animation;
pub mod clock;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod sequence;
pub mod sink;
pub mod state;
pub mod ui;

pub use animation::{AnimationId, SequenceAnimation};
pub use clock::PlaybackClock;
pub use command::PlaybackCommand;
pub use config::{AnimationConfig, DEFAULT_FRAMES_PER_SECOND, INFINITE_LOOPS};
pub use driver::{AnimationDriver, DriverError};
pub use error::{ConfigError, SequenceError};
pub use events::{EventHub, PlaybackEvent, SubscriptionId};
pub use lifecycle::{LifecycleBinder, OnActivateBehavior, OnDeactivateBehavior};
pub use sequence::FrameSequence;
pub use sink::{FrameSink, FrameSlot, RecordingSink};
pub use state::SequenceState;
pub use ui::{SequenceAnimationInspector, CONTROL_ROWS};
