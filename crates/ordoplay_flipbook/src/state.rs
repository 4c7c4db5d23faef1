// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sequence playback state: frame position, loop counter, play flag.

use crate::clock::PlaybackClock;
use crate::config::INFINITE_LOOPS;
use crate::error::SequenceError;
use crate::sequence::FrameSequence;
use crate::sink::FrameSink;

/// Mutable playback state owned by a single animation
#[derive(Debug, Clone)]
pub struct SequenceState<F> {
    sequence: Option<FrameSequence<F>>,
    frame_index: usize,
    completed_loops: u32,
    is_playing: bool,
    ended: bool,
    clock: PlaybackClock,
}

impl<F> SequenceState<F> {
    /// Create a state with no sequence
    pub fn new() -> Self {
        Self {
            sequence: None,
            frame_index: 0,
            completed_loops: 0,
            is_playing: false,
            ended: false,
            clock: PlaybackClock::new(),
        }
    }

    /// The current sequence, if one was ever set
    pub fn sequence(&self) -> Option<&FrameSequence<F>> {
        self.sequence.as_ref()
    }

    /// The current sequence, or [`SequenceError::NoSequence`]
    pub fn require_sequence(&self) -> Result<&FrameSequence<F>, SequenceError> {
        self.sequence.as_ref().ok_or(SequenceError::NoSequence)
    }

    /// Index of the frame pushed on the next advance
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Full passes over the sequence since the last reset
    pub fn completed_loops(&self) -> u32 {
        self.completed_loops
    }

    /// Time carried toward the next frame (seconds)
    pub fn accumulated_time(&self) -> f32 {
        self.clock.accumulated()
    }

    /// Whether ticks currently advance frames
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the loop limit was hit since the last reset
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Set the play flag without touching position
    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Swap in a new sequence. Call [`Self::reset`] afterwards.
    pub fn replace_sequence(&mut self, sequence: FrameSequence<F>) {
        self.sequence = Some(sequence);
        self.is_playing = false;
    }

    /// Return to frame 0, loop 0, time 0 and push frame 0 to `sink`.
    ///
    /// Does nothing without a sequence.
    pub fn reset<S: FrameSink<F>>(&mut self, sink: &mut S) {
        let Some(sequence) = &self.sequence else {
            return;
        };

        self.frame_index = 0;
        sink.set_frame(sequence.first());

        self.clock.reset();
        self.completed_loops = 0;
        self.ended = false;
    }

    /// Whether a finite loop count has been used up
    pub fn loop_limit_reached(&self, loops: i32) -> bool {
        loops != INFINITE_LOOPS && i64::from(self.completed_loops) >= i64::from(loops)
    }

    /// Stop playing because the loop limit was reached.
    ///
    /// Returns `true` only the first time per reset cycle.
    pub fn end(&mut self) -> bool {
        self.is_playing = false;
        !std::mem::replace(&mut self.ended, true)
    }

    /// Allow the next loop-limit hit to report an end again
    pub fn clear_ended(&mut self) {
        self.ended = false;
    }

    /// Feed `delta_time` into the clock and push one frame per whole frame
    /// elapsed. Returns how many frames were advanced.
    pub fn advance<S: FrameSink<F>>(
        &mut self,
        delta_time: f32,
        frames_per_second: f32,
        loops: i32,
        sink: &mut S,
    ) -> u32 {
        let Some(sequence) = &self.sequence else {
            return 0;
        };

        let frames = self.clock.advance(delta_time, frames_per_second);

        // Only the last full pass can still be seen; fast-forward the rest.
        let len = sequence.len() as u64;
        let mut pending = u64::from(frames);
        if pending > len {
            let target = self.frame_index as u64 + (pending - len);
            let wraps = target / len;
            self.frame_index = (target % len) as usize;
            if loops != INFINITE_LOOPS {
                let wraps = u32::try_from(wraps).unwrap_or(u32::MAX);
                self.completed_loops = self.completed_loops.saturating_add(wraps);
            }
            pending = len;
        }

        for _ in 0..pending {
            if let Some(frame) = sequence.get(self.frame_index) {
                sink.set_frame(frame);
            }

            self.frame_index += 1;
            if self.frame_index >= sequence.len() {
                self.frame_index = 0;

                if loops != INFINITE_LOOPS {
                    self.completed_loops = self.completed_loops.saturating_add(1);
                }
            }
        }
        frames
    }
}

impl<F> Default for SequenceState<F> {
    fn default() -> Self {
        Self::new()
    }
}
