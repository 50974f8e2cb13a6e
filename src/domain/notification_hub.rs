//! Publish/subscribe delivery of notification strings to readers.
//!
//! Subscriptions behave as an insertion-ordered set: subscribing twice has
//! no further effect, and unsubscribing a reader who is not subscribed is
//! a no-op. Delivered messages land in a bounded per-reader inbox that
//! survives unsubscription; once full, the oldest message is evicted.
//! Nothing is replayed to late subscribers.

use std::collections::{HashMap, VecDeque};

use super::reader::Reader;

/// Inbox size used by [`NotificationHub::new`].
pub const DEFAULT_INBOX_CAPACITY: usize = 100;

/// Holds the subscriber list and each reader's most recent messages.
#[derive(Debug)]
pub struct NotificationHub {
    subscribers: Vec<String>,
    inboxes: HashMap<String, VecDeque<String>>,
    inbox_capacity: usize,
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationHub {
    /// Creates a hub with no subscribers and the default inbox size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_inbox_capacity(DEFAULT_INBOX_CAPACITY)
    }

    /// Creates a hub whose inboxes keep at most `capacity` messages.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_inbox_capacity(capacity: usize) -> Self {
        Self {
            subscribers: Vec::new(),
            inboxes: HashMap::new(),
            inbox_capacity: capacity.max(1),
        }
    }

    /// Subscribes a reader. Returns `false` if already subscribed.
    pub fn subscribe(&mut self, reader: &Reader) -> bool {
        if self.is_subscribed(reader.name()) {
            return false;
        }
        self.subscribers.push(reader.name().to_string());
        true
    }

    /// Unsubscribes a reader. Returns `false` if they were not subscribed.
    pub fn unsubscribe(&mut self, reader: &Reader) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|name| name != reader.name());
        self.subscribers.len() != before
    }

    /// Delivers `message` to every subscriber in subscription order.
    ///
    /// Returns the number of readers the message reached.
    pub fn notify(&mut self, message: &str) -> usize {
        for name in &self.subscribers {
            let inbox = self.inboxes.entry(name.clone()).or_default();
            if inbox.len() == self.inbox_capacity {
                inbox.pop_front();
            }
            inbox.push_back(message.to_string());
        }
        self.subscribers.len()
    }

    /// Returns `true` if the named reader is subscribed.
    #[must_use]
    pub fn is_subscribed(&self, name: &str) -> bool {
        self.subscribers.iter().any(|s| s == name)
    }

    /// Returns subscriber names in subscription order.
    #[must_use]
    pub fn subscribers(&self) -> &[String] {
        &self.subscribers
    }

    /// Returns the messages retained for the named reader, oldest first.
    #[must_use]
    pub fn inbox(&self, name: &str) -> Vec<String> {
        self.inboxes
            .get(name)
            .map(|inbox| inbox.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Drops a reader's subscription and inbox entirely.
    pub fn forget(&mut self, name: &str) {
        self.subscribers.retain(|s| s != name);
        self.inboxes.remove(name);
    }
}
