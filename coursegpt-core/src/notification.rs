//! Single-slot transient notification.
//!
//! One message at a time. Showing a new message replaces the old one and
//! restarts the countdown, so only the latest deadline ever applies.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    shown_at: Instant,
}

impl Notification {
    /// Instant after which the slot clears this message.
    pub fn expires_at(&self) -> Instant {
        self.shown_at + NOTIFICATION_TTL
    }
}

#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text`, overwriting whatever is in the slot.
    pub fn show(&mut self, text: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            text: text.into(),
            kind,
            shown_at: now,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the message once its deadline has passed. Returns `true` if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.expires_at() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_three_seconds_after_show() {
        let start = Instant::now();
        let mut slot = NotificationSlot::new();
        slot.show("Module created successfully!", NotificationKind::Success, start);

        assert!(!slot.tick(start + Duration::from_millis(2999)));
        assert_eq!(slot.current().map(|n| n.text.as_str()), Some("Module created successfully!"));

        assert!(slot.tick(start + NOTIFICATION_TTL));
        assert!(slot.current().is_none());
    }

    #[test]
    fn newer_message_owns_the_deadline() {
        let start = Instant::now();
        let mut slot = NotificationSlot::new();
        slot.show("first", NotificationKind::Success, start);
        slot.show("second", NotificationKind::Error, start + Duration::from_secs(2));

        // First deadline passes, second message survives.
        assert!(!slot.tick(start + Duration::from_secs(3)));
        let current = slot.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.kind, NotificationKind::Error);

        assert!(slot.tick(start + Duration::from_secs(5)));
        assert!(slot.current().is_none());
    }

    #[test]
    fn tick_on_empty_slot_is_noop() {
        let mut slot = NotificationSlot::new();
        assert!(!slot.tick(Instant::now()));
    }
}
