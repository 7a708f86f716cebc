use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A short message shown to the user, e.g. in the options page status line.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            ttl,
        }
    }

    /// A brief status flash, such as "saved!".
    pub fn flash(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(NotificationLevel::Info, message, ttl)
    }

    /// Creates a warning notification with an 8-second TTL.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message, Duration::from_secs(8))
    }

    /// Creates an error notification with a 10-second TTL.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message, Duration::from_secs(10))
    }

    /// Returns `true` if this notification has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of notifications that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notification, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Remove and return every notification, expired or not.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }

    /// Returns all currently visible (non-expired) notifications.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.evict_expired();
        self.items.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_is_info() {
        let n = Notification::flash("saved!", Duration::from_millis(750));
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.message, "saved!");
        assert_eq!(n.ttl, Duration::from_millis(750));
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let n = Notification::flash("gone", Duration::ZERO);
        assert!(n.is_expired());
    }

    #[test]
    fn queue_evicts_oldest_at_capacity() {
        let mut queue = NotificationQueue::new(2);
        queue.push(Notification::warning("one"));
        queue.push(Notification::warning("two"));
        queue.push(Notification::error("three"));
        let messages: Vec<&str> = queue.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn visible_hides_expired() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::flash("gone", Duration::ZERO));
        queue.push(Notification::warning("stays"));
        assert_eq!(queue.visible().len(), 1);
    }

    #[test]
    fn drain_empties_queue() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::error("boom"));
        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
