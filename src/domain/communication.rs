// SPDX-License-Identifier: MPL-2.0
//! Support chat, in-app alerts and support tickets.

use super::{at, day};
use super::search::{Categorized, Searchable};
use chrono::{NaiveDate, NaiveDateTime};

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Support,
    User,
    System,
}

impl Sender {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Sender::Support => "chat-sender-support",
            Sender::User => "chat-sender-user",
            Sender::System => "chat-sender-system",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Message,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub kind: MessageKind,
}

/// Live chat transcript with a local composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a user message. Blank text is ignored.
    ///
    /// Returns `true` if a message was appended.
    pub fn send(&mut self, text: &str, timestamp: NaiveDateTime) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(ChatMessage {
            id,
            sender: Sender::User,
            text: text.to_string(),
            timestamp,
            kind: MessageKind::Message,
        });
        true
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(sample_messages())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
    Info,
}

/// In-app notification listed under the Notifications sub-tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
    /// Relative label such as "2 hours ago".
    pub timestamp: String,
    pub read: bool,
}

#[must_use]
pub fn unread_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|alert| !alert.read).count()
}

pub fn mark_all_read(alerts: &mut [Alert]) {
    for alert in alerts {
        alert.read = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TicketStatus::Open => "ticket-status-open",
            TicketStatus::InProgress => "ticket-status-in-progress",
            TicketStatus::Resolved => "ticket-status-resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Priority::High => "ticket-priority-high",
            Priority::Medium => "ticket-priority-medium",
            Priority::Low => "ticket-priority-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub created: NaiveDate,
    pub last_update: NaiveDate,
    pub assignee: String,
}

impl Searchable for SupportTicket {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.subject]
    }
}

impl Categorized for SupportTicket {
    type Category = TicketStatus;

    fn category(&self) -> TicketStatus {
        self.status
    }
}

#[must_use]
pub fn sample_messages() -> Vec<ChatMessage> {
    let message = |id, sender, text: &str, timestamp, kind| ChatMessage {
        id,
        sender,
        text: text.to_string(),
        timestamp,
        kind,
    };
    vec![
        message(
            1,
            Sender::Support,
            "Your order ORD-2024-001 has been successfully shipped and is now in transit.",
            at(2024, 1, 15, 14, 30),
            MessageKind::Info,
        ),
        message(
            2,
            Sender::User,
            "Thank you for the update. Could you provide the expected delivery time?",
            at(2024, 1, 15, 14, 35),
            MessageKind::Message,
        ),
        message(
            3,
            Sender::Support,
            "The estimated delivery is January 18th, 2024. You'll receive tracking updates as the shipment progresses.",
            at(2024, 1, 15, 14, 37),
            MessageKind::Message,
        ),
        message(
            4,
            Sender::System,
            "Customs clearance completed for order ORD-2024-002",
            at(2024, 1, 15, 16, 20),
            MessageKind::Success,
        ),
    ]
}

#[must_use]
pub fn sample_alerts() -> Vec<Alert> {
    let alert = |id, title: &str, message: &str, kind, timestamp: &str, read| Alert {
        id,
        title: title.to_string(),
        message: message.to_string(),
        kind,
        timestamp: timestamp.to_string(),
        read,
    };
    vec![
        alert(
            1,
            "Shipment Delayed",
            "Order ORD-2024-004 has been delayed due to weather conditions. New ETA: Jan 22",
            AlertKind::Warning,
            "2 hours ago",
            false,
        ),
        alert(
            2,
            "Customs Clearance",
            "Order ORD-2024-002 has successfully cleared customs in Amsterdam",
            AlertKind::Success,
            "4 hours ago",
            false,
        ),
        alert(
            3,
            "Low Stock Alert",
            "SKU-002 (Steel Pipes 2m) is running low - only 120 units remaining",
            AlertKind::Warning,
            "6 hours ago",
            true,
        ),
        alert(
            4,
            "Order Delivered",
            "Order ORD-2024-003 has been successfully delivered to BuildCo Ltd",
            AlertKind::Success,
            "1 day ago",
            true,
        ),
    ]
}

#[must_use]
pub fn sample_tickets() -> Vec<SupportTicket> {
    let ticket = |id: &str,
                  subject: &str,
                  status,
                  priority,
                  created,
                  last_update,
                  assignee: &str| SupportTicket {
        id: id.to_string(),
        subject: subject.to_string(),
        status,
        priority,
        created,
        last_update,
        assignee: assignee.to_string(),
    };
    vec![
        ticket(
            "TKT-001",
            "Damage claim for shipment ORD-2024-003",
            TicketStatus::Open,
            Priority::High,
            day(2024, 1, 14),
            day(2024, 1, 15),
            "Sarah Johnson",
        ),
        ticket(
            "TKT-002",
            "Request for expedited shipping",
            TicketStatus::InProgress,
            Priority::Medium,
            day(2024, 1, 13),
            day(2024, 1, 15),
            "Mike Chen",
        ),
        ticket(
            "TKT-003",
            "Invoice discrepancy inquiry",
            TicketStatus::Resolved,
            Priority::Low,
            day(2024, 1, 10),
            day(2024, 1, 12),
            "Lisa Rodriguez",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{RowFilter, Selection};

    #[test]
    fn sample_alerts_start_with_two_unread() {
        assert_eq!(unread_count(&sample_alerts()), 2);
    }

    #[test]
    fn mark_all_read_zeroes_unread_count() {
        let mut alerts = sample_alerts();
        mark_all_read(&mut alerts);
        assert_eq!(unread_count(&alerts), 0);
        assert_eq!(alerts.len(), 4);
    }

    #[test]
    fn send_appends_user_message() {
        let mut chat = Conversation::default();
        assert!(chat.send("Any update?", at(2024, 1, 16, 9, 0)));
        let last = chat.messages().last().expect("message");
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "Any update?");
        assert_eq!(last.id, 5);
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut chat = Conversation::default();
        assert!(!chat.send("   \t", at(2024, 1, 16, 9, 0)));
        assert!(!chat.send("", at(2024, 1, 16, 9, 0)));
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn ticket_status_filter_selects_matching_tickets() {
        let tickets = sample_tickets();
        let filter = RowFilter {
            query: String::new(),
            selection: Selection::Only(TicketStatus::InProgress),
        };
        let rows = filter.apply(&tickets);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].assignee, "Mike Chen");
    }
}
