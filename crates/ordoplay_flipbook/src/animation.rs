// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame-sequence animation: the playback state machine.
//!
//! A [`SequenceAnimation`] steps through a [`FrameSequence`] at a fixed rate,
//! pushing each frame to its [`FrameSink`]. The host drives it by calling
//! [`SequenceAnimation::tick`] once per frame with the elapsed time.
//!
//! ## Tick subscription
//!
//! The first control call (`play`, `pause`, `resume`, `stop`) subscribes the
//! animation to ticks. The subscription is kept while paused; ticks are then
//! simply ignored, so pause/resume cycles never re-subscribe. Replacing the
//! sequence or destroying the animation cancels the subscription.

use crate::command::PlaybackCommand;
use crate::config::{clamp_frames_per_second, clamp_loops, AnimationConfig};
use crate::error::SequenceError;
use crate::events::{EventHub, PlaybackEvent, SubscriptionId};
use crate::lifecycle::{LifecycleBinder, OnActivateBehavior, OnDeactivateBehavior};
use crate::sequence::FrameSequence;
use crate::sink::FrameSink;
use crate::state::SequenceState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for an animation instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub Uuid);

impl AnimationId {
    /// Create a new random animation ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Timed playback of a frame sequence into a sink
#[derive(Debug)]
pub struct SequenceAnimation<F, S> {
    id: AnimationId,
    name: String,
    config: AnimationConfig,
    state: SequenceState<F>,
    sink: S,
    events: EventHub,
    tick_subscribed: bool,
    active: bool,
    stall_reported: bool,
}

impl<F, S: FrameSink<F>> SequenceAnimation<F, S> {
    /// Create an animation with no sequence and default configuration
    pub fn new(name: impl Into<String>, sink: S) -> Self {
        Self {
            id: AnimationId::new(),
            name: name.into(),
            config: AnimationConfig::default(),
            state: SequenceState::new(),
            sink,
            events: EventHub::new(),
            tick_subscribed: false,
            active: false,
            stall_reported: false,
        }
    }

    /// Builder: use `config` (clamped)
    pub fn with_config(mut self, config: AnimationConfig) -> Self {
        self.config = config.sanitized();
        self
    }

    /// Instance ID
    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the animation
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // ---- Configuration ----

    /// Current configuration
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Replace the configuration (clamped). Applies from the next tick.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config.sanitized();
    }

    /// Playback rate
    pub fn frames_per_second(&self) -> f32 {
        self.config.frames_per_second
    }

    /// Set the playback rate; negative values become 0
    pub fn set_frames_per_second(&mut self, frames_per_second: f32) {
        self.config.frames_per_second = clamp_frames_per_second(frames_per_second);
    }

    /// Loop count, `-1` for infinite
    pub fn loops(&self) -> i32 {
        self.config.loops
    }

    /// Set the loop count; values below `-1` become `-1`
    pub fn set_loops(&mut self, loops: i32) {
        self.config.loops = clamp_loops(loops);
    }

    /// Behavior on activation
    pub fn on_activate_behavior(&self) -> OnActivateBehavior {
        self.config.on_activate
    }

    /// Set the behavior on activation
    pub fn set_on_activate_behavior(&mut self, behavior: OnActivateBehavior) {
        self.config.on_activate = behavior;
    }

    /// Behavior on deactivation
    pub fn on_deactivate_behavior(&self) -> OnDeactivateBehavior {
        self.config.on_deactivate
    }

    /// Set the behavior on deactivation
    pub fn set_on_deactivate_behavior(&mut self, behavior: OnDeactivateBehavior) {
        self.config.on_deactivate = behavior;
    }

    // ---- State ----

    /// Whether ticks currently advance frames
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Index of the frame pushed on the next advance
    pub fn current_frame_index(&self) -> usize {
        self.state.frame_index()
    }

    /// Time carried toward the next frame (seconds)
    pub fn accumulated_time(&self) -> f32 {
        self.state.accumulated_time()
    }

    /// Full passes completed since the last reset (finite loop counts only)
    pub fn completed_loops(&self) -> u32 {
        self.state.completed_loops()
    }

    /// The current sequence
    pub fn sequence(&self) -> Option<&FrameSequence<F>> {
        self.state.sequence()
    }

    /// Whether the animation receives ticks
    pub fn is_ticking(&self) -> bool {
        self.tick_subscribed
    }

    /// Whether the owning entity is currently active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The frame sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The frame sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // ---- Events ----

    /// Event channels
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Event channels, mutably (for subscribing and unsubscribing)
    pub fn events_mut(&mut self) -> &mut EventHub {
        &mut self.events
    }

    /// Observe `event`. Returns `None` once the animation is destroyed.
    pub fn subscribe(
        &mut self,
        event: PlaybackEvent,
        on_next: impl FnMut() + 'static,
    ) -> Option<SubscriptionId> {
        self.events.subscribe(event, on_next)
    }

    // ---- Control ----

    /// Replace the frame sequence.
    ///
    /// Cancels any playback in flight and shows the first frame, but does not
    /// start playing and emits no event. An empty list is rejected and the
    /// previous sequence is kept.
    pub fn set_animation_sequence(
        &mut self,
        frames: impl Into<Arc<[F]>>,
    ) -> Result<(), SequenceError> {
        if self.events.is_closed() {
            tracing::error!(animation = %self.name, "Cannot set sequence: {}", SequenceError::Destroyed);
            return Err(SequenceError::Destroyed);
        }

        let sequence = match FrameSequence::new(frames) {
            Ok(sequence) => sequence,
            Err(e) => {
                tracing::error!(animation = %self.name, "{e}");
                return Err(e);
            }
        };

        self.tick_subscribed = false;
        self.stall_reported = false;

        tracing::debug!(animation = %self.name, frames = sequence.len(), "Animation sequence set");
        self.state.replace_sequence(sequence);
        self.state.reset(&mut self.sink);
        Ok(())
    }

    /// Restart from the first frame and play
    pub fn play(&mut self) -> Result<(), SequenceError> {
        self.ensure_sequence(PlaybackCommand::Play)?;

        self.state.reset(&mut self.sink);
        self.stall_reported = false;
        self.state.set_playing(true);

        self.transition(PlaybackEvent::Played);
        Ok(())
    }

    /// Hold the current frame, keeping position, time and loop count
    pub fn pause(&mut self) -> Result<(), SequenceError> {
        self.ensure_sequence(PlaybackCommand::Pause)?;

        self.state.set_playing(false);

        self.transition(PlaybackEvent::Paused);
        Ok(())
    }

    /// Continue from the current position.
    ///
    /// If the loop count was raised after playback ended, the new limit
    /// will emit `Ended` again when reached.
    pub fn resume(&mut self) -> Result<(), SequenceError> {
        self.ensure_sequence(PlaybackCommand::Resume)?;

        if !self.state.loop_limit_reached(self.config.loops) {
            self.state.clear_ended();
        }
        self.state.set_playing(true);

        self.transition(PlaybackEvent::Resumed);
        Ok(())
    }

    /// Rewind to the first frame and hold
    pub fn stop(&mut self) -> Result<(), SequenceError> {
        self.ensure_sequence(PlaybackCommand::Stop)?;

        self.state.reset(&mut self.sink);
        self.stall_reported = false;
        self.state.set_playing(false);

        self.transition(PlaybackEvent::Stopped);
        Ok(())
    }

    /// Run a control command
    pub fn apply(&mut self, command: PlaybackCommand) -> Result<(), SequenceError> {
        match command {
            PlaybackCommand::Play => self.play(),
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::Resume => self.resume(),
            PlaybackCommand::Stop => self.stop(),
        }
    }

    fn ensure_sequence(&self, command: PlaybackCommand) -> Result<(), SequenceError> {
        let checked = if self.events.is_closed() {
            Err(SequenceError::Destroyed)
        } else {
            self.state.require_sequence().map(|_| ())
        };

        if let Err(e) = checked {
            tracing::error!(
                animation = %self.name,
                command = command.display_name(),
                "Cannot run playback command: {e}"
            );
            return Err(e);
        }
        Ok(())
    }

    fn transition(&mut self, event: PlaybackEvent) {
        self.tick_subscribed = true;
        tracing::debug!(animation = %self.name, event = event.display_name(), "Playback transition");
        self.events.emit(event);
    }

    // ---- Host signals ----

    /// Advance playback by `delta_time` seconds.
    ///
    /// Called by the host once per frame. Does nothing unless subscribed and
    /// playing. Returns the number of frames advanced.
    pub fn tick(&mut self, delta_time: f32) -> u32 {
        if !self.tick_subscribed || !self.state.is_playing() {
            return 0;
        }

        if self.state.loop_limit_reached(self.config.loops) {
            if self.state.end() {
                tracing::debug!(animation = %self.name, loops = self.config.loops, "Animation ended");
                self.events.emit(PlaybackEvent::Ended);
            }
            return 0;
        }

        if self.config.frames_per_second <= 0.0 && !self.stall_reported {
            tracing::warn!(
                animation = %self.name,
                "Frame rate is 0, animation holds its current frame"
            );
            self.stall_reported = true;
        }

        let advanced = self.state.advance(
            delta_time,
            self.config.frames_per_second,
            self.config.loops,
            &mut self.sink,
        );
        if advanced > 0 {
            tracing::trace!(
                animation = %self.name,
                advanced,
                frame = self.state.frame_index(),
                "Frames advanced"
            );
        }
        advanced
    }

    /// The owning entity became active: run the activation behavior.
    ///
    /// Repeated activation without a deactivation in between is ignored.
    pub fn activate(&mut self) -> Result<(), SequenceError> {
        if self.active {
            return Ok(());
        }
        self.active = true;

        match LifecycleBinder::on_activate(self.config.on_activate) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// The owning entity became inactive: run the deactivation behavior.
    ///
    /// Repeated deactivation without an activation in between is ignored.
    pub fn deactivate(&mut self) -> Result<(), SequenceError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        match LifecycleBinder::on_deactivate(self.config.on_deactivate) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// Tear down: cancel the tick subscription and close every event channel.
    ///
    /// Every later control call is rejected with [`SequenceError::Destroyed`].
    /// Dropping the animation closes the channels too.
    pub fn destroy(&mut self) {
        self.tick_subscribed = false;
        self.state.set_playing(false);
        self.events.close();
    }

    /// Whether [`Self::destroy`] was called
    pub fn is_destroyed(&self) -> bool {
        self.events.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INFINITE_LOOPS;
    use crate::sink::RecordingSink;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    type TestAnimation = SequenceAnimation<u32, RecordingSink<u32>>;

    fn make_animation(frame_count: u32, fps: f32, loops: i32) -> TestAnimation {
        let mut animation = SequenceAnimation::new("test", RecordingSink::new()).with_config(
            AnimationConfig {
                frames_per_second: fps,
                loops,
                ..AnimationConfig::default()
            },
        );
        animation
            .set_animation_sequence((0..frame_count).collect::<Vec<_>>())
            .unwrap();
        animation.sink_mut().take();
        animation
    }

    fn record_events(animation: &mut TestAnimation) -> Rc<RefCell<Vec<PlaybackEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for event in PlaybackEvent::all() {
            let log = Rc::clone(&log);
            let event = *event;
            animation.subscribe(event, move || log.borrow_mut().push(event));
        }
        log
    }

    fn snapshot(animation: &TestAnimation) -> (usize, f32, u32, bool) {
        (
            animation.current_frame_index(),
            animation.accumulated_time(),
            animation.completed_loops(),
            animation.is_playing(),
        )
    }

    #[test]
    fn test_play_shows_first_frame_and_emits() {
        let mut animation = make_animation(4, 2.0, 1);
        let events = record_events(&mut animation);

        animation.play().unwrap();

        assert!(animation.is_playing());
        assert!(animation.is_ticking());
        assert_eq!(animation.sink().frames(), &[0]);
        assert_eq!(*events.borrow(), vec![PlaybackEvent::Played]);
    }

    #[test]
    fn test_finite_loop_scenario() {
        let mut animation = make_animation(4, 2.0, 1);
        let events = record_events(&mut animation);

        animation.play().unwrap();
        for _ in 0..4 {
            assert_eq!(animation.tick(0.5), 1);
        }

        assert_eq!(animation.sink().frames(), &[0, 0, 1, 2, 3]);
        assert_eq!(animation.current_frame_index(), 0);
        assert_eq!(animation.completed_loops(), 1);
        assert!(animation.is_playing());

        // The loop limit is checked before any time is added.
        assert_eq!(animation.tick(0.5), 0);
        assert!(!animation.is_playing());
        assert_eq!(animation.sink().frames().len(), 5);
        assert_eq!(
            *events.borrow(),
            vec![PlaybackEvent::Played, PlaybackEvent::Ended]
        );

        animation.tick(0.5);
        assert_eq!(animation.sink().frames().len(), 5);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_ended_once_per_cycle_even_after_resume() {
        let mut animation = make_animation(2, 4.0, 1);
        let events = record_events(&mut animation);

        animation.play().unwrap();
        animation.tick(0.5);
        animation.tick(0.25);
        animation.resume().unwrap();
        animation.tick(0.25);

        let ended = events
            .borrow()
            .iter()
            .filter(|event| **event == PlaybackEvent::Ended)
            .count();
        assert_eq!(ended, 1);
        assert!(!animation.is_playing());

        animation.play().unwrap();
        animation.tick(0.5);
        animation.tick(0.25);
        let ended = events
            .borrow()
            .iter()
            .filter(|event| **event == PlaybackEvent::Ended)
            .count();
        assert_eq!(ended, 2);
    }

    #[test]
    fn test_infinite_loops_never_end() {
        let mut animation = make_animation(3, 8.0, INFINITE_LOOPS);
        let events = record_events(&mut animation);

        animation.play().unwrap();
        for _ in 0..100 {
            animation.tick(0.25);
            assert!(animation.current_frame_index() < 3);
        }

        assert!(animation.is_playing());
        assert_eq!(animation.completed_loops(), 0);
        assert!(!events.borrow().contains(&PlaybackEvent::Ended));
    }

    #[test]
    fn test_catch_up_within_one_tick() {
        let mut animation = make_animation(8, 10.0, INFINITE_LOOPS);
        animation.play().unwrap();
        animation.sink_mut().take();

        assert_eq!(animation.tick(0.35), 3);
        assert_eq!(animation.sink().frames(), &[0, 1, 2]);
        assert_eq!(animation.current_frame_index(), 3);
        assert!((animation.accumulated_time() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_pause_twice_is_idempotent() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        let events = record_events(&mut animation);

        animation.play().unwrap();
        animation.tick(0.375);
        animation.pause().unwrap();
        let first = snapshot(&animation);
        animation.pause().unwrap();

        assert_eq!(snapshot(&animation), first);
        assert_eq!(
            *events.borrow(),
            vec![PlaybackEvent::Played, PlaybackEvent::Paused, PlaybackEvent::Paused]
        );
    }

    #[test]
    fn test_paused_ticks_are_ignored() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        animation.play().unwrap();
        animation.tick(0.25);
        animation.pause().unwrap();
        let paused = snapshot(&animation);

        assert_eq!(animation.tick(10.0), 0);
        assert_eq!(snapshot(&animation), paused);
        assert!(animation.is_ticking());

        animation.resume().unwrap();
        assert_eq!(animation.current_frame_index(), paused.0);
        assert_eq!(animation.tick(0.25), 1);
    }

    #[test]
    fn test_play_then_stop_resets() {
        let mut animation = make_animation(4, 4.0, 3);
        animation.play().unwrap();
        animation.tick(1.125);
        animation.tick(0.5);

        animation.stop().unwrap();

        assert_eq!(snapshot(&animation), (0, 0.0, 0, false));
        assert_eq!(animation.sink().last(), Some(&0));
    }

    #[test]
    fn test_control_without_sequence_fails() {
        let mut animation: TestAnimation = SequenceAnimation::new("empty", RecordingSink::new());
        let events = record_events(&mut animation);

        assert_eq!(animation.play(), Err(SequenceError::NoSequence));
        assert_eq!(animation.pause(), Err(SequenceError::NoSequence));
        assert_eq!(animation.resume(), Err(SequenceError::NoSequence));
        assert_eq!(animation.stop(), Err(SequenceError::NoSequence));

        assert!(!animation.is_playing());
        assert!(!animation.is_ticking());
        assert!(events.borrow().is_empty());
        assert!(animation.sink().frames().is_empty());
    }

    #[test]
    fn test_empty_sequence_keeps_previous() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        animation.play().unwrap();
        animation.tick(0.5);
        let before = snapshot(&animation);
        let pushed = animation.sink().frames().len();

        let result = animation.set_animation_sequence(Vec::<u32>::new());

        assert_eq!(result, Err(SequenceError::EmptySequence));
        assert_eq!(snapshot(&animation), before);
        assert_eq!(animation.sequence().map(FrameSequence::len), Some(4));
        assert_eq!(animation.sink().frames().len(), pushed);
        assert!(animation.is_ticking());
    }

    #[test]
    fn test_set_sequence_cancels_playback() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        let events = record_events(&mut animation);
        animation.play().unwrap();
        animation.tick(0.5);

        animation.set_animation_sequence(vec![10_u32, 11]).unwrap();

        assert!(!animation.is_playing());
        assert!(!animation.is_ticking());
        assert_eq!(animation.current_frame_index(), 0);
        assert_eq!(animation.sink().last(), Some(&10));
        assert_eq!(animation.tick(1.0), 0);
        assert_eq!(*events.borrow(), vec![PlaybackEvent::Played]);
    }

    #[test]
    fn test_config_changes_apply_next_tick() {
        let mut animation = make_animation(8, 4.0, INFINITE_LOOPS);
        animation.play().unwrap();
        assert_eq!(animation.tick(0.25), 1);

        animation.set_frames_per_second(8.0);
        assert_eq!(animation.tick(0.25), 2);

        animation.set_frames_per_second(-3.0);
        assert_eq!(animation.frames_per_second(), 0.0);
        animation.set_loops(-10);
        assert_eq!(animation.loops(), INFINITE_LOOPS);
    }

    #[test]
    fn test_zero_fps_stalls_without_error() {
        let mut animation = make_animation(4, 0.0, INFINITE_LOOPS);
        animation.play().unwrap();

        for _ in 0..10 {
            assert_eq!(animation.tick(1.0), 0);
        }
        assert!(animation.is_playing());
        assert_eq!(animation.current_frame_index(), 0);
    }

    #[test]
    fn test_resume_on_activate_preserves_position() {
        let mut animation = make_animation(6, 4.0, 3);
        animation.set_on_activate_behavior(OnActivateBehavior::Resume);
        animation.set_on_deactivate_behavior(OnDeactivateBehavior::Pause);

        animation.activate().unwrap();
        animation.tick(1.625);
        animation.tick(0.125);
        let mid_loop = snapshot(&animation);
        assert_eq!(mid_loop.2, 1);

        animation.deactivate().unwrap();
        assert!(!animation.is_playing());
        animation.tick(3.0);

        animation.activate().unwrap();
        assert_eq!(snapshot(&animation), (mid_loop.0, mid_loop.1, mid_loop.2, true));
    }

    #[test]
    fn test_lifecycle_signals_apply_once() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        animation.set_on_activate_behavior(OnActivateBehavior::Play);
        animation.set_on_deactivate_behavior(OnDeactivateBehavior::Stop);
        let events = record_events(&mut animation);

        animation.activate().unwrap();
        animation.activate().unwrap();
        animation.deactivate().unwrap();
        animation.deactivate().unwrap();

        assert_eq!(
            *events.borrow(),
            vec![PlaybackEvent::Played, PlaybackEvent::Stopped]
        );
    }

    #[test]
    fn test_destroy_closes_events() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        let events = record_events(&mut animation);
        animation.play().unwrap();

        animation.destroy();
        assert!(animation.is_destroyed());
        assert!(!animation.is_ticking());
        assert_eq!(animation.tick(1.0), 0);

        assert!(animation.subscribe(PlaybackEvent::Stopped, || {}).is_none());
        assert_eq!(*events.borrow(), vec![PlaybackEvent::Played]);
    }

    #[test]
    fn test_control_after_destroy_rejected() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        animation.play().unwrap();
        animation.tick(0.5);
        animation.destroy();
        let pushed = animation.sink().frames().len();
        let before = snapshot(&animation);

        for command in PlaybackCommand::all() {
            assert_eq!(animation.apply(*command), Err(SequenceError::Destroyed));
        }
        assert_eq!(
            animation.set_animation_sequence(vec![7_u32]),
            Err(SequenceError::Destroyed)
        );

        assert_eq!(snapshot(&animation), before);
        assert!(!animation.is_playing());
        assert!(!animation.is_ticking());
        assert_eq!(animation.sink().frames().len(), pushed);
        assert_eq!(animation.sequence().map(FrameSequence::len), Some(4));
    }

    #[test]
    fn test_raised_loop_limit_ends_again_after_resume() {
        let mut animation = make_animation(2, 4.0, 1);
        let events = record_events(&mut animation);
        let ended = |events: &Rc<RefCell<Vec<PlaybackEvent>>>| {
            events
                .borrow()
                .iter()
                .filter(|event| **event == PlaybackEvent::Ended)
                .count()
        };

        animation.play().unwrap();
        animation.tick(0.5);
        animation.tick(0.25);
        assert_eq!(ended(&events), 1);

        animation.set_loops(3);
        animation.resume().unwrap();
        for _ in 0..10 {
            animation.tick(0.25);
        }

        assert_eq!(animation.completed_loops(), 3);
        assert!(!animation.is_playing());
        assert_eq!(ended(&events), 2);
    }

    #[test]
    fn test_huge_delta_does_not_overflow() {
        let mut animation = make_animation(3, 1000.0, INFINITE_LOOPS);
        animation.play().unwrap();

        animation.tick(1.0e8);

        assert!(animation.is_playing());
        assert!(animation.current_frame_index() < 3);
        assert!(animation.sink().frames().len() <= 4);
        assert!(animation.accumulated_time() <= 0.001);
    }

    #[test]
    fn test_large_backlog_reaches_loop_limit() {
        let mut animation = make_animation(3, 8.0, 5);
        let events = record_events(&mut animation);
        animation.play().unwrap();

        assert_eq!(animation.tick(1024.0), 8192);
        assert_eq!(animation.completed_loops(), 8192 / 3);

        assert_eq!(animation.tick(0.125), 0);
        assert!(!animation.is_playing());
        assert_eq!(
            *events.borrow(),
            vec![PlaybackEvent::Played, PlaybackEvent::Ended]
        );
    }

    /// Counts ERROR-level events seen while it is the active subscriber
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_errors(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_rejections_log_one_diagnostic_each() {
        let mut animation = make_animation(4, 4.0, INFINITE_LOOPS);
        let errors = count_errors(|| {
            let _ = animation.set_animation_sequence(Vec::<u32>::new());
        });
        assert_eq!(errors, 1);

        let mut unset: TestAnimation = SequenceAnimation::new("unset", RecordingSink::new());
        for command in PlaybackCommand::all() {
            let errors = count_errors(|| {
                let _ = unset.apply(*command);
            });
            assert_eq!(errors, 1, "{}", command.display_name());
        }

        let errors = count_errors(|| {
            animation.play().unwrap();
            animation.tick(1.0);
            animation.pause().unwrap();
        });
        assert_eq!(errors, 0);

        animation.destroy();
        let errors = count_errors(|| {
            let _ = animation.resume();
        });
        assert_eq!(errors, 1);
    }
}
