//! Per-connection subscription manager.
//!
//! Tracks which event types a WebSocket client is subscribed to and
//! provides server-side event filtering.

use std::collections::HashSet;

/// Manages the set of event-type subscriptions for a single connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed event types. If `subscribe_all` is true, this set is ignored.
    event_types: HashSet<String>,
    /// Whether the client subscribes to every event type (wildcard `"*"`).
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds event types to the subscription set. `"*"` enables the wildcard.
    pub fn subscribe<S: AsRef<str>>(&mut self, event_types: &[S]) {
        for event_type in event_types {
            match event_type.as_ref() {
                "*" => self.subscribe_all = true,
                other => {
                    self.event_types.insert(other.to_string());
                }
            }
        }
    }

    /// Removes event types from the subscription set. `"*"` clears the
    /// wildcard.
    pub fn unsubscribe<S: AsRef<str>>(&mut self, event_types: &[S]) {
        for event_type in event_types {
            match event_type.as_ref() {
                "*" => self.subscribe_all = false,
                other => {
                    self.event_types.remove(other);
                }
            }
        }
    }

    /// Returns `true` if the event type matches the subscription filter.
    #[must_use]
    pub fn matches(&self, event_type: &str) -> bool {
        self.subscribe_all || self.event_types.contains(event_type)
    }

    /// Returns the number of explicitly subscribed event types.
    #[must_use]
    pub fn count(&self) -> usize {
        self.event_types.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}
