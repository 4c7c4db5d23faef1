// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback clock: turns elapsed time into whole frame advances.

/// Accumulates elapsed time and converts it into whole frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackClock {
    accumulated: f32,
}

impl PlaybackClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self { accumulated: 0.0 }
    }

    /// Time carried over that has not yet produced a frame (seconds)
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Discard any carried-over time
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Seconds per frame for a rate. A rate of zero gives infinite frame time.
    pub fn frame_time(frames_per_second: f32) -> f32 {
        1.0 / frames_per_second
    }

    /// Add `delta_time` seconds and drain every whole frame that fits.
    ///
    /// Returns the number of frames to advance. Large deltas yield several
    /// frames at once (catch-up, not skipping); the count saturates at
    /// `u32::MAX`. A zero or non-finite frame
    /// time never yields a frame, so playback stalls on its current frame.
    pub fn advance(&mut self, delta_time: f32, frames_per_second: f32) -> u32 {
        self.accumulated += delta_time.max(0.0);

        let frame_time = f64::from(Self::frame_time(frames_per_second));
        if !frame_time.is_finite() || frame_time <= 0.0 {
            return 0;
        }

        // Float-to-int `as` saturates, so huge backlogs clamp to u32::MAX.
        let accumulated = f64::from(self.accumulated);
        let frames = (accumulated / frame_time).floor() as u32;
        let remainder = if frames == u32::MAX {
            accumulated.rem_euclid(frame_time)
        } else {
            (accumulated - f64::from(frames) * frame_time).max(0.0)
        };
        self.accumulated = remainder as f32;
        frames
    }
}
