// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback event channels.
//!
//! Each animation owns an [`EventHub`] with one channel per lifecycle
//! transition. Observers are plain closures, invoked synchronously and in
//! registration order at the moment the transition happens. When the hub is
//! closed (explicitly or by being dropped with its animation) every observer
//! is released and no further signal is ever delivered.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playback lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// `play` was called
    Played,
    /// `pause` was called
    Paused,
    /// `resume` was called
    Resumed,
    /// `stop` was called
    Stopped,
    /// A finite loop count ran out
    Ended,
}

impl PlaybackEvent {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Played => "Played",
            Self::Paused => "Paused",
            Self::Resumed => "Resumed",
            Self::Stopped => "Stopped",
            Self::Ended => "Ended",
        }
    }

    /// Get all events
    pub fn all() -> &'static [PlaybackEvent] {
        &[
            Self::Played,
            Self::Paused,
            Self::Resumed,
            Self::Stopped,
            Self::Ended,
        ]
    }
}

/// Handle identifying one observer registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Observer {
    on_next: Box<dyn FnMut()>,
    on_closed: Option<Box<dyn FnOnce()>>,
}

/// Multi-channel broadcast of [`PlaybackEvent`]s
pub struct EventHub {
    channels: IndexMap<PlaybackEvent, IndexMap<SubscriptionId, Observer>>,
    next_id: u64,
    closed: bool,
}

impl EventHub {
    /// Create a hub with an empty channel for every event
    pub fn new() -> Self {
        let channels = PlaybackEvent::all()
            .iter()
            .map(|event| (*event, IndexMap::new()))
            .collect();

        Self {
            channels,
            next_id: 0,
            closed: false,
        }
    }

    /// Register `on_next` for `event`.
    ///
    /// Returns `None` if the hub is already closed; the closure is dropped
    /// without being called.
    pub fn subscribe(
        &mut self,
        event: PlaybackEvent,
        on_next: impl FnMut() + 'static,
    ) -> Option<SubscriptionId> {
        self.insert(event, Box::new(on_next), None)
    }

    /// Register `on_next` for `event`, plus `on_closed` to run once when the
    /// hub closes.
    ///
    /// On an already closed hub `on_closed` runs immediately and `None` is
    /// returned.
    pub fn subscribe_with_close(
        &mut self,
        event: PlaybackEvent,
        on_next: impl FnMut() + 'static,
        on_closed: impl FnOnce() + 'static,
    ) -> Option<SubscriptionId> {
        self.insert(event, Box::new(on_next), Some(Box::new(on_closed)))
    }

    fn insert(
        &mut self,
        event: PlaybackEvent,
        on_next: Box<dyn FnMut()>,
        on_closed: Option<Box<dyn FnOnce()>>,
    ) -> Option<SubscriptionId> {
        if self.closed {
            if let Some(on_closed) = on_closed {
                on_closed();
            }
            return None;
        }

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.channels
            .entry(event)
            .or_default()
            .insert(id, Observer { on_next, on_closed });
        Some(id)
    }

    /// Remove an observer. Its close callback is dropped without running.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.channels
            .values_mut()
            .any(|observers| observers.shift_remove(&id).is_some())
    }

    /// Signal `event` to its observers, in registration order
    pub fn emit(&mut self, event: PlaybackEvent) {
        if self.closed {
            return;
        }

        if let Some(observers) = self.channels.get_mut(&event) {
            for observer in observers.values_mut() {
                (observer.on_next)();
            }
        }
    }

    /// Number of observers on a channel
    pub fn observer_count(&self, event: PlaybackEvent) -> usize {
        self.channels.get(&event).map_or(0, IndexMap::len)
    }

    /// Whether the hub has been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close every channel permanently, releasing all observers
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        for observers in self.channels.values_mut() {
            for (_, observer) in observers.drain(..) {
                if let Some(on_closed) = observer.on_closed {
                    on_closed();
                }
            }
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHub {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<_> = self
            .channels
            .iter()
            .map(|(event, observers)| (*event, observers.len()))
            .collect();

        f.debug_struct("EventHub")
            .field("observers", &counts)
            .field("closed", &self.closed)
            .finish()
    }
}
