//! Toast notifications (pure state).
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one; each expires after a fixed timeout measured from when it
//! was shown.

use crate::model::NotificationKind;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default lifetime of a notification.
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    timeout: Duration,
}

impl NotificationCenter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            timeout,
        }
    }

    /// Show a notification, replacing any visible one.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        let message = message.into();
        debug!(kind = ?kind, message = %message, "Showing notification");
        self.current = Some(Notification {
            message,
            kind,
            expires_at: now + self.timeout,
        });
    }

    /// Close the visible notification. No-op if nothing is shown.
    pub fn dismiss(&mut self) {
        if self.current.take().is_some() {
            debug!("Notification dismissed");
        }
    }

    /// Expire the visible notification once its time is up.
    ///
    /// Returns `true` if a notification was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notification) if now >= notification.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert!(NotificationCenter::default().current().is_none());
    }

    #[test]
    fn new_notification_replaces_existing() {
        let now = Instant::now();
        let mut center = NotificationCenter::default();
        center.show("first", NotificationKind::Info, now);
        center.show("second", NotificationKind::Warning, now);

        let current = center.current().expect("notification visible");
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NotificationKind::Warning);
    }

    #[test]
    fn tick_before_timeout_keeps_notification() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_millis(4000));
        center.show("hello", NotificationKind::Success, now);

        assert!(!center.tick(now + Duration::from_millis(3999)));
        assert!(center.current().is_some());
    }

    #[test]
    fn tick_at_timeout_removes_notification() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_millis(4000));
        center.show("hello", NotificationKind::Success, now);

        assert!(center.tick(now + Duration::from_millis(4000)));
        assert!(center.current().is_none());
    }

    #[test]
    fn replacement_restarts_the_timer() {
        let now = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_secs(4));
        center.show("first", NotificationKind::Info, now);
        center.show("second", NotificationKind::Info, now + Duration::from_secs(3));

        assert!(!center.tick(now + Duration::from_secs(5)));
        assert!(center.tick(now + Duration::from_secs(7)));
    }

    #[test]
    fn dismiss_clears_and_is_idempotent() {
        let mut center = NotificationCenter::default();
        center.show("bye", NotificationKind::Info, Instant::now());
        center.dismiss();
        center.dismiss();
        assert!(center.current().is_none());
    }

    #[test]
    fn tick_without_notification_is_noop() {
        let mut center = NotificationCenter::default();
        assert!(!center.tick(Instant::now()));
    }
}
