// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle: which toasts are on screen, which wait for a slot, and
//! when each one closes.
//!
//! A toast's dismiss timer starts when it becomes visible, not when it is
//! pushed, so a queued toast still gets its full time on screen. Repeating a
//! message that is already up or waiting adds nothing, and the waiting queue
//! is bounded.

use super::notification::{Notification, NotificationId, Severity};
use crate::app::config::{MAX_QUEUED_TOASTS, MAX_VISIBLE_TOASTS};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed on a toast.
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    since: Instant,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, oldest first.
    shown: Vec<Shown>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if a slot is free, otherwise queues it.
    /// Warnings are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, notification: Notification, now: Instant) {
        if self.is_pending(&notification) {
            tracing::debug!(key = notification.message_key(), "duplicate toast skipped");
            return;
        }
        if notification.severity() == Severity::Warning {
            tracing::warn!(key = notification.message_key(), "warning toast");
        }

        if self.shown.len() < MAX_VISIBLE_TOASTS {
            self.shown.push(Shown {
                notification,
                since: now,
            });
            return;
        }
        if self.waiting.len() >= MAX_QUEUED_TOASTS {
            self.waiting.pop_front();
        }
        self.waiting.push_back(notification);
    }

    fn is_pending(&self, notification: &Notification) -> bool {
        self.shown
            .iter()
            .map(|s| &s.notification)
            .chain(&self.waiting)
            .any(|other| other.same_message(notification))
    }

    /// Removes a toast, visible or queued. Returns `false` if the id is unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(index) = self.shown.iter().position(|s| s.notification.id() == id) {
            self.shown.remove(index);
            self.fill_slots(now);
            return true;
        }
        let before = self.waiting.len();
        self.waiting.retain(|n| n.id() != id);
        self.waiting.len() != before
    }

    /// Closes every visible toast whose time is up at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.shown.retain(|s| {
            !s.notification
                .outlived(now.saturating_duration_since(s.since))
        });
        self.fill_slots(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter().rev().map(|s| &s.notification)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    /// Whether anything is visible or queued. Drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn fill_slots(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE_TOASTS {
            let Some(notification) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push(Shown {
                notification,
                since: now,
            });
        }
    }
}
