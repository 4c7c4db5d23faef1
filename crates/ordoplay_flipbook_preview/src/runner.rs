// SPDX-License-Identifier: MIT OR Apache-2.0
//! Simulated host loop for previewing an animation.

use crate::settings::PreviewSettings;
use ordoplay_flipbook::{PlaybackEvent, SequenceAnimation, SequenceError};
use std::cell::RefCell;
use std::rc::Rc;

/// Error running a preview
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The animation rejected its sequence or a command
    #[error("Animation error: {0}")]
    Sequence(#[from] SequenceError),

    /// Tick rate must be a positive number
    #[error("Invalid tick rate: {0}")]
    InvalidTickRate(f32),
}

/// What happened during a preview run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewReport {
    /// Frames pushed to the display, in order
    pub frames_shown: Vec<String>,
    /// Playback events, in order
    pub events: Vec<PlaybackEvent>,
    /// Host ticks simulated
    pub ticks: u32,
}

/// Run `settings` through a fixed-rate simulated host loop
pub fn run(settings: &PreviewSettings) -> Result<PreviewReport, PreviewError> {
    if settings.tick_rate <= 0.0 || !settings.tick_rate.is_finite() {
        return Err(PreviewError::InvalidTickRate(settings.tick_rate));
    }

    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let shown = Rc::clone(&shown);
        move |frame: &String| {
            tracing::info!(frame = %frame, "Frame shown");
            shown.borrow_mut().push(frame.clone());
        }
    };

    let mut animation = SequenceAnimation::new(settings.name.clone(), sink)
        .with_config(settings.animation);
    animation.set_animation_sequence(settings.frames.clone())?;

    let events = Rc::new(RefCell::new(Vec::new()));
    for event in PlaybackEvent::all() {
        let events = Rc::clone(&events);
        let event = *event;
        animation.subscribe(event, move || {
            tracing::info!(event = event.display_name(), "Playback event");
            events.borrow_mut().push(event);
        });
    }

    let delta_time = 1.0 / settings.tick_rate;
    let ticks = (settings.duration.max(0.0) * settings.tick_rate).ceil() as u32;

    animation.activate()?;
    for tick in 0..ticks {
        let now = tick as f32 * delta_time;

        if crossed(settings.deactivate_at, now, delta_time) {
            animation.deactivate()?;
        }
        if crossed(settings.reactivate_at, now, delta_time) {
            animation.activate()?;
        }

        animation.tick(delta_time);
    }
    animation.destroy();

    let frames_shown = shown.borrow().clone();
    let events = events.borrow().clone();
    Ok(PreviewReport {
        frames_shown,
        events,
        ticks,
    })
}

/// Whether `at` falls inside the tick starting at `now`
fn crossed(at: Option<f32>, now: f32, delta_time: f32) -> bool {
    at.is_some_and(|at| at >= now && at < now + delta_time)
}
