// SPDX-License-Identifier: MPL-2.0
//! Toast payload: a severity and a message key with optional arguments.

use crate::app::config::{TOAST_LONG_DISMISS_MS, TOAST_SHORT_DISMISS_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies a toast for dismissal. Unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Picks the accent color and how long the toast stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Action completed (green, short duration).
    #[default]
    Success,
    /// Informational message (blue, short duration).
    Info,
    /// Something degraded but the portal keeps working (amber, long duration).
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Time on screen before the toast closes itself.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_millis(TOAST_SHORT_DISMISS_MS),
            Severity::Warning => Duration::from_millis(TOAST_LONG_DISMISS_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// i18n key resolved at render time, so a locale switch retranslates it.
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Adds a Fluent argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether both toasts would display the same text.
    #[must_use]
    pub fn same_message(&self, other: &Notification) -> bool {
        self.severity == other.severity
            && self.message_key == other.message_key
            && self.message_args == other.message_args
    }

    /// Whether a toast shown for `elapsed` should close.
    #[must_use]
    pub fn outlived(&self, elapsed: Duration) -> bool {
        elapsed >= self.severity.auto_dismiss_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration()
        );
    }

    #[test]
    fn info_closes_after_short_duration() {
        let notification = Notification::info("test");
        assert!(!notification.outlived(Duration::ZERO));
        assert!(notification.outlived(Duration::from_millis(TOAST_SHORT_DISMISS_MS)));
    }

    #[test]
    fn warnings_outlast_info_toasts() {
        let elapsed = Duration::from_millis(TOAST_SHORT_DISMISS_MS);
        assert!(Notification::info("test").outlived(elapsed));
        assert!(!Notification::warning("test").outlived(elapsed));
        assert!(Notification::warning("test").outlived(Duration::from_millis(TOAST_LONG_DISMISS_MS)));
    }

    #[test]
    fn same_message_compares_text_not_identity() {
        let first = Notification::info("feature-unavailable").with_arg("feature", "Export");
        let again = Notification::info("feature-unavailable").with_arg("feature", "Export");
        let other = Notification::info("feature-unavailable").with_arg("feature", "Print");
        assert!(first.same_message(&again));
        assert!(!first.same_message(&other));
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::info("feature-unavailable").with_arg("feature", "Export");

        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.message_key(), "feature-unavailable");
        assert_eq!(
            notification.message_args(),
            &[("feature".to_string(), "Export".to_string())]
        );
    }
}
