// SPDX-License-Identifier: MPL-2.0
//! Support tab: live chat, in-app notifications and support tickets.
//!
//! The alert list also feeds the sidebar badge and the header bell, so the
//! application reads [`State::unread_alerts`] and [`State::alert_count`]
//! when rendering the portal chrome.

use crate::domain::communication::{
    mark_all_read, sample_alerts, sample_tickets, unread_count, Alert, AlertKind, ChatMessage,
    Conversation, MessageKind, Priority, Sender, SupportTicket, TicketStatus,
};
use crate::domain::search::{RowFilter, Selection};
use crate::domain::settings::DateFormat;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, counter, Tone};
use crate::ui::components::card::{card, page_heading, section};
use crate::ui::components::form::{selected_choice, selection_choices};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use chrono::NaiveDateTime;
use iced::alignment::Vertical;
use iced::widget::{
    button, container, pick_list, scrollable, text, text_input, Column, Container, Row, Space,
};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportTab {
    #[default]
    Chat,
    Notifications,
    Tickets,
}

impl SupportTab {
    const ALL: [SupportTab; 3] = [
        SupportTab::Chat,
        SupportTab::Notifications,
        SupportTab::Tickets,
    ];

    fn i18n_key(self) -> &'static str {
        match self {
            SupportTab::Chat => "support-tab-chat",
            SupportTab::Notifications => "support-tab-notifications",
            SupportTab::Tickets => "support-tab-tickets",
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    tab: SupportTab,
    conversation: Conversation,
    draft: String,
    alerts: Vec<Alert>,
    tickets: Vec<SupportTicket>,
    ticket_filter: RowFilter<TicketStatus>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            tab: SupportTab::default(),
            conversation: Conversation::default(),
            draft: String::new(),
            alerts: sample_alerts(),
            tickets: sample_tickets(),
            ticket_filter: RowFilter::new(),
        }
    }
}

impl State {
    #[must_use]
    pub fn tab(&self) -> SupportTab {
        self.tab
    }

    /// Switches to a sub-tab, e.g. when the header bell is pressed.
    pub fn open(&mut self, tab: SupportTab) {
        self.tab = tab;
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        self.conversation.messages()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn unread_alerts(&self) -> usize {
        unread_count(&self.alerts)
    }

    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Tickets passing the status filter.
    #[must_use]
    pub fn visible_tickets(&self) -> Vec<&SupportTicket> {
        self.ticket_filter.apply(&self.tickets)
    }

    /// Sends the current draft with the given timestamp. Blank drafts are
    /// ignored and left untouched.
    pub fn send_draft(&mut self, timestamp: NaiveDateTime) -> bool {
        let sent = self.conversation.send(&self.draft, timestamp);
        if sent {
            self.draft.clear();
        }
        sent
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub date_format: DateFormat,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(SupportTab),
    DraftChanged(String),
    Send,
    MarkAllRead,
    TicketStatusSelected(Selection<TicketStatus>),
    CallSupport,
    EmailSupport,
    NewTicket,
    ViewTicket(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Carries the message key naming the feature.
    FeatureUnavailable(&'static str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => state.open(tab),
        Message::DraftChanged(draft) => state.draft = draft,
        Message::Send => {
            if state.send_draft(chrono::Local::now().naive_local()) {
                tracing::debug!(count = state.messages().len(), "chat message sent");
            }
        }
        Message::MarkAllRead => mark_all_read(&mut state.alerts),
        Message::TicketStatusSelected(selection) => state.ticket_filter.selection = selection,
        Message::CallSupport => return Event::FeatureUnavailable("support-call"),
        Message::EmailSupport => return Event::FeatureUnavailable("support-email"),
        Message::NewTicket => return Event::FeatureUnavailable("support-new-ticket"),
        Message::ViewTicket(_) => return Event::FeatureUnavailable("support-view-ticket"),
    }
    Event::None
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let contact = Row::new()
        .spacing(spacing::XS)
        .push(outline_button(
            icons::phone(),
            i18n.tr("support-call"),
            Message::CallSupport,
        ))
        .push(outline_button(
            icons::chat(),
            i18n.tr("support-email"),
            Message::EmailSupport,
        ));

    let unread = state.unread_alerts();
    let tabs = SupportTab::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tab| {
            let mut label = Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(text(i18n.tr(tab.i18n_key())).size(typography::BODY));
            if tab == SupportTab::Notifications {
                label = label.push(counter(unread, Tone::Danger));
            }
            row.push(
                button(label)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::tab(tab == state.tab))
                    .on_press(Message::TabSelected(tab)),
            )
        });

    let body = match state.tab {
        SupportTab::Chat => chat(&ctx),
        SupportTab::Notifications => notifications(i18n, state),
        SupportTab::Tickets => tickets(&ctx),
    };

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(page_heading(
            i18n.tr("support-title"),
            i18n.tr("support-description"),
            Some(contact.into()),
        ))
        .push(tabs)
        .push(body)
        .into()
}

fn outline_button<'a>(
    glyph: iced::widget::Text<'static>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(glyph)
            .push(text(label)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary)
    .on_press(message)
    .into()
}

fn chat<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Column::new()
        .push(text(i18n.tr("chat-title")).size(typography::TITLE_SM))
        .push(
            text(i18n.tr("chat-connected"))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    let transcript = state.messages().iter().fold(
        Column::new().spacing(spacing::MD).padding(spacing::XS),
        |column, message| column.push(chat_bubble(ctx, message)),
    );

    let composer = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            text_input(&i18n.tr("chat-placeholder"), &state.draft)
                .on_input(Message::DraftChanged)
                .on_submit(Message::Send)
                .padding(spacing::XS),
        )
        .push(
            button(icons::send())
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Send),
        );

    card(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(
                scrollable(transcript)
                    .height(Length::Fixed(CHAT_HEIGHT))
                    .anchor_bottom(),
            )
            .push(composer),
    )
    .into()
}

const CHAT_HEIGHT: f32 = 360.0;

fn chat_bubble<'a>(ctx: &ViewContext<'a>, message: &ChatMessage) -> Element<'a, Message> {
    let own = message.sender == Sender::User;
    let accent = match message.kind {
        MessageKind::Success => Some(Tone::Success),
        MessageKind::Info => Some(Tone::Info),
        MessageKind::Message => None,
    };

    let mut meta = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(ctx.i18n.tr(message.sender.i18n_key())).size(typography::CAPTION))
        .push(
            text(ctx.date_format.render_time(message.timestamp))
                .size(typography::CAPTION),
        );
    if let Some(tone) = accent {
        meta = meta.push(
            icons::sized(icons::dot(), sizing::ICON_SM / 2.0)
                .style(styles::text::colored(tone.color())),
        );
    }

    let bubble = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(message.text.clone()).size(typography::BODY))
            .push(meta),
    )
    .padding(spacing::SM)
    .max_width(BUBBLE_MAX_WIDTH)
    .style(styles::container::bubble(own));

    let row = Row::new().width(Length::Fill);
    if own {
        row.push(Space::new().width(Length::Fill)).push(bubble).into()
    } else {
        row.push(bubble).push(Space::new().width(Length::Fill)).into()
    }
}

const BUBBLE_MAX_WIDTH: f32 = 520.0;

fn alert_tone(kind: AlertKind) -> Tone {
    match kind {
        AlertKind::Warning => Tone::Warning,
        AlertKind::Success => Tone::Success,
        AlertKind::Info => Tone::Info,
    }
}

fn notifications<'a>(i18n: &I18n, state: &'a State) -> Element<'a, Message> {
    let mark_all = button(text(i18n.tr("alerts-mark-all-read")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary)
        .on_press_maybe((state.unread_alerts() > 0).then_some(Message::MarkAllRead));

    let list = state.alerts.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, alert| column.push(alert_row(alert)),
    );

    section(i18n.tr("alerts-title"), Some(mark_all.into()), list).into()
}

fn alert_row<'a>(alert: &Alert) -> Element<'a, Message> {
    let tone = alert_tone(alert.kind);
    let background: fn(&Theme) -> container::Style = if alert.read {
        styles::container::table_header
    } else {
        styles::container::card
    };
    let glyph = match alert.kind {
        AlertKind::Warning => icons::warning(),
        AlertKind::Success => icons::checkmark(),
        AlertKind::Info => icons::bell(),
    };
    let title = text(alert.title.clone()).size(typography::BODY_LG);
    let body = text(alert.message.clone()).size(typography::BODY_SM);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Row::new()
                .align_y(Vertical::Center)
                .push(if alert.read { title.style(styles::text::muted) } else { title })
                .push(Space::new().width(Length::Fill))
                .push(
                    text(alert.timestamp.clone())
                        .size(typography::BODY_SM)
                        .style(styles::text::muted),
                ),
        )
        .push(if alert.read { body.style(styles::text::muted) } else { body });

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .push(icons::sized(glyph, sizing::ICON_MD).style(styles::text::colored(tone.color())))
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(background)
    .into()
}

fn ticket_status_tone(status: TicketStatus) -> Tone {
    match status {
        TicketStatus::Open => Tone::Danger,
        TicketStatus::InProgress => Tone::Info,
        TicketStatus::Resolved => Tone::Success,
    }
}

fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Danger,
        Priority::Medium => Tone::Warning,
        Priority::Low => Tone::Success,
    }
}

fn tickets<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let choices = selection_choices(
        i18n.tr("tickets-filter-all"),
        TicketStatus::ALL
            .iter()
            .map(|status| (*status, i18n.tr(status.i18n_key()))),
    );
    let selected = selected_choice(&choices, &state.ticket_filter.selection);
    let filter = pick_list(choices, selected, |choice| {
        Message::TicketStatusSelected(choice.value)
    })
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::FILTER_WIDTH));

    let new_ticket = button(text(i18n.tr("support-new-ticket")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::NewTicket);

    let trailing = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(filter)
        .push(new_ticket);

    let visible = state.visible_tickets();
    let list: Element<'a, Message> = if visible.is_empty() {
        Container::new(text(i18n.tr("table-empty")).style(styles::text::muted))
            .padding(spacing::LG)
            .center_x(Length::Fill)
            .into()
    } else {
        visible
            .into_iter()
            .fold(Column::new().spacing(spacing::MD), |column, ticket| {
                column.push(ticket_card(ctx, ticket))
            })
            .into()
    };

    section(i18n.tr("tickets-title"), Some(trailing.into()), list).into()
}

fn ticket_card<'a>(ctx: &ViewContext<'a>, ticket: &SupportTicket) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let created = ctx.date_format.render(ticket.created);
    let updated = ctx.date_format.render(ticket.last_update);

    let top = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(ticket.id.clone()).size(typography::BODY_SM))
        .push(badge(
            i18n.tr(ticket.status.i18n_key()),
            ticket_status_tone(ticket.status),
        ))
        .push(badge(
            i18n.tr(ticket.priority.i18n_key()),
            priority_tone(ticket.priority),
        ))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("support-view-ticket")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary)
                .on_press(Message::ViewTicket(ticket.id.clone())),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(top)
            .push(text(ticket.subject.clone()).size(typography::BODY_LG))
            .push(
                text(i18n.tr_with_args(
                    "tickets-assigned-to",
                    &[("assignee", ticket.assignee.as_str())],
                ))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
            )
            .push(
                text(i18n.tr_with_args(
                    "tickets-dates",
                    &[("created", created.as_str()), ("updated", updated.as_str())],
                ))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sending_appends_user_message_and_clears_draft() {
        let mut state = State::default();
        let before = state.messages().len();
        update(&mut state, Message::DraftChanged("Any update?".to_string()));
        update(&mut state, Message::Send);

        assert_eq!(state.messages().len(), before + 1);
        let last = state.messages().last().expect("message appended");
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "Any update?");
        assert!(state.draft().is_empty());
    }

    #[test]
    fn whitespace_draft_is_not_sent() {
        let mut state = State::default();
        let before = state.messages().len();
        update(&mut state, Message::DraftChanged("   ".to_string()));
        update(&mut state, Message::Send);
        assert_eq!(state.messages().len(), before);
        assert_eq!(state.draft(), "   ");
    }

    #[test]
    fn mark_all_read_zeroes_unread_count() {
        let mut state = State::default();
        assert!(state.unread_alerts() > 0);
        let total = state.alert_count();
        update(&mut state, Message::MarkAllRead);
        assert_eq!(state.unread_alerts(), 0);
        assert_eq!(state.alert_count(), total);
    }

    #[test]
    fn ticket_filter_selects_by_status() {
        let mut state = State::default();
        update(
            &mut state,
            Message::TicketStatusSelected(Selection::Only(TicketStatus::Resolved)),
        );
        let visible = state.visible_tickets();
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|ticket| ticket.status == TicketStatus::Resolved));
    }

    #[test]
    fn sample_chat_timestamps_follow_date_format() {
        let state = State::default();
        let first = state.messages().first().expect("sample message");
        assert_eq!(
            DateFormat::MonthDayYear.render_time(first.timestamp),
            "01/15/2024 14:30"
        );
    }
}
