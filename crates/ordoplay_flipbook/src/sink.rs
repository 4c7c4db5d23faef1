// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame sinks: where the current frame gets displayed.
//!
//! The playback core never draws anything. Hosts supply a [`FrameSink`]
//! for whatever actually shows a frame (a UI image, a sprite renderer,
//! a sprite mask). Adapters provided here:
//! - [`FrameSlot`] holds the currently displayed frame
//! - [`RecordingSink`] keeps every frame pushed, in order
//! - any `FnMut(&F)` closure

/// Capability to display one frame
pub trait FrameSink<F> {
    /// Show `frame`, replacing whatever was displayed before
    fn set_frame(&mut self, frame: &F);
}

impl<F, T> FrameSink<F> for T
where
    T: FnMut(&F),
{
    fn set_frame(&mut self, frame: &F) {
        self(frame);
    }
}

/// Sink holding the frame currently on display.
///
/// This is the shape of an image or sprite component: one slot that is
/// overwritten on every push.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSlot<F> {
    current: Option<F>,
    updates: u64,
}

impl<F> FrameSlot<F> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            current: None,
            updates: 0,
        }
    }

    /// The frame on display, if any frame was ever pushed
    pub fn current(&self) -> Option<&F> {
        self.current.as_ref()
    }

    /// How many times a frame was pushed
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl<F> Default for FrameSlot<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> FrameSink<F> for FrameSlot<F> {
    fn set_frame(&mut self, frame: &F) {
        self.current = Some(frame.clone());
        self.updates += 1;
    }
}

/// Sink recording every pushed frame
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSink<F> {
    frames: Vec<F>,
}

impl<F> RecordingSink<F> {
    /// Create an empty recording
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Frames pushed so far, oldest first
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Most recently pushed frame
    pub fn last(&self) -> Option<&F> {
        self.frames.last()
    }

    /// Take the recorded frames, leaving the recording empty
    pub fn take(&mut self) -> Vec<F> {
        std::mem::take(&mut self.frames)
    }
}

impl<F> Default for RecordingSink<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> FrameSink<F> for RecordingSink<F> {
    fn set_frame(&mut self, frame: &F) {
        self.frames.push(frame.clone());
    }
}
