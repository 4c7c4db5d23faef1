// SPDX-License-Identifier: MIT OR Apache-2.0
//! Immutable, shared frame sequences.

use crate::error::SequenceError;
use std::sync::Arc;

/// An ordered, non-empty list of frame handles.
///
/// The frames are shared, not copied: cloning a `FrameSequence` only bumps a
/// reference count, so many animations can reference the same sprite sheet.
#[derive(Debug)]
pub struct FrameSequence<F> {
    frames: Arc<[F]>,
}

impl<F> FrameSequence<F> {
    /// Create a sequence, rejecting an empty frame list
    pub fn new(frames: impl Into<Arc<[F]>>) -> Result<Self, SequenceError> {
        let frames = frames.into();
        if frames.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        Ok(Self { frames })
    }

    /// Number of frames (always at least one)
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    /// The first frame, shown whenever playback is reset
    pub fn first(&self) -> &F {
        &self.frames[0]
    }

    /// All frames in order
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Whether two sequences reference the same frame storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.frames, &other.frames)
    }
}

impl<F> Clone for FrameSequence<F> {
    fn clone(&self) -> Self {
        Self {
            frames: Arc::clone(&self.frames),
        }
    }
}
