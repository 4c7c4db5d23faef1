// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host-side driver owning and ticking many animations.
//!
//! The driver stands in for the host's per-frame update loop: it forwards
//! each frame's delta time to every animation, routes entity
//! activation/deactivation signals and destroys animations on removal.

use crate::animation::{AnimationId, SequenceAnimation};
use crate::command::PlaybackCommand;
use crate::error::SequenceError;
use crate::sink::FrameSink;
use indexmap::IndexMap;

/// Error addressing an animation through the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// No animation with this ID is registered
    #[error("Animation not found: {0:?}")]
    AnimationNotFound(AnimationId),

    /// The animation rejected the operation
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Owns animations and drives them once per host frame
#[derive(Debug)]
pub struct AnimationDriver<F, S> {
    animations: IndexMap<AnimationId, SequenceAnimation<F, S>>,
    /// Time scale applied to every delta (1.0 = normal speed)
    pub time_scale: f32,
    /// Host frames ticked so far
    frame_count: u64,
}

impl<F, S: FrameSink<F>> AnimationDriver<F, S> {
    /// Create an empty driver
    pub fn new() -> Self {
        Self {
            animations: IndexMap::new(),
            time_scale: 1.0,
            frame_count: 0,
        }
    }

    /// Register an animation. Returns its ID.
    pub fn add(&mut self, animation: SequenceAnimation<F, S>) -> AnimationId {
        let id = animation.id();
        self.animations.insert(id, animation);
        id
    }

    /// Unregister an animation and hand it back, still alive
    pub fn remove(&mut self, id: AnimationId) -> Option<SequenceAnimation<F, S>> {
        self.animations.shift_remove(&id)
    }

    /// Unregister and destroy an animation, closing its event channels
    pub fn destroy(&mut self, id: AnimationId) -> bool {
        match self.animations.shift_remove(&id) {
            Some(mut animation) => {
                animation.destroy();
                true
            }
            None => false,
        }
    }

    /// Get an animation
    pub fn get(&self, id: AnimationId) -> Option<&SequenceAnimation<F, S>> {
        self.animations.get(&id)
    }

    /// Get a mutable animation
    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut SequenceAnimation<F, S>> {
        self.animations.get_mut(&id)
    }

    /// All animations, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SequenceAnimation<F, S>> {
        self.animations.values()
    }

    /// All animations mutably, in registration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SequenceAnimation<F, S>> {
        self.animations.values_mut()
    }

    /// Number of registered animations
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Whether no animation is registered
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Host frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance every animation by one host frame. Returns total frames advanced.
    pub fn tick(&mut self, delta_time: f32) -> u32 {
        let scaled = delta_time * self.time_scale.max(0.0);
        self.frame_count += 1;

        self.animations
            .values_mut()
            .map(|animation| animation.tick(scaled))
            .sum()
    }

    /// Forward an activation change of the owning entity
    pub fn set_active(&mut self, id: AnimationId, active: bool) -> Result<(), DriverError> {
        let animation = self
            .animations
            .get_mut(&id)
            .ok_or(DriverError::AnimationNotFound(id))?;

        if active {
            animation.activate()?;
        } else {
            animation.deactivate()?;
        }
        Ok(())
    }

    /// Run a command on one animation
    pub fn apply(&mut self, id: AnimationId, command: PlaybackCommand) -> Result<(), DriverError> {
        let animation = self
            .animations
            .get_mut(&id)
            .ok_or(DriverError::AnimationNotFound(id))?;
        animation.apply(command)?;
        Ok(())
    }

    /// Run a command on every animation. Returns how many accepted it.
    pub fn apply_all(&mut self, command: PlaybackCommand) -> usize {
        self.animations
            .values_mut()
            .map(|animation| animation.apply(command))
            .filter(Result::is_ok)
            .count()
    }
}

impl<F, S: FrameSink<F>> Default for AnimationDriver<F, S> {
    fn default() -> Self {
        Self::new()
    }
}
