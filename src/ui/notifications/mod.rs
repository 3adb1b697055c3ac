// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient feedback.
//!
//! Toasts report things like a saved profile or an unavailable export
//! without blocking interaction. They are distinct from the portal's
//! in-app alerts, which are business records listed on the support page.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-profile-saved"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts last 3s, warnings 5s. At most three are visible;
//! up to five more wait in a queue and their timer starts once they are
//! shown. A message already on screen or waiting is not repeated.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
