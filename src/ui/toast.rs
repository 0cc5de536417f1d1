//! Toast notifications for the copy action.
//!
//! A [`Notification`] describes what happened; a [`Toast`] is a notification
//! on screen, auto-dismissed after [`TOAST_DURATION`]. Toasts are advisory
//! only: they never block input and never trigger a navigation transition.
//! When notifications overlap, the last one to arrive wins on screen.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A fire-and-forget message for the toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn copy_success() -> Self {
        Self {
            title: "Script Copied!".to_string(),
            message: "The script has been copied to your clipboard.".to_string(),
            severity: Severity::Success,
        }
    }

    pub fn copy_failure() -> Self {
        Self {
            title: "Copy Failed".to_string(),
            message: "Failed to copy script to clipboard.".to_string(),
            severity: Severity::Error,
        }
    }
}

/// A notification currently on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    shown_at: Instant,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::new(Notification::copy_success());
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_old_toast_is_expired() {
        let shown_at = Instant::now()
            .checked_sub(TOAST_DURATION)
            .expect("clock is older than the toast duration");
        let toast = Toast {
            notification: Notification::copy_failure(),
            shown_at,
        };
        assert!(toast.is_expired());
    }

    #[test]
    fn test_notification_severities() {
        assert_eq!(Notification::copy_success().severity, Severity::Success);
        assert_eq!(Notification::copy_failure().severity, Severity::Error);
    }
}
