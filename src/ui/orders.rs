// SPDX-License-Identifier: MPL-2.0
//! Orders tab: active order table, order history and track & trace.

use crate::domain::orders::{sample_orders, tracking_history, Order, OrderStatus, TrackingEvent};
use crate::domain::search::{RowFilter, Selection};
use crate::domain::settings::DateFormat;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, Tone};
use crate::ui::components::card::{card, page_heading, section};
use crate::ui::components::form::{filter_bar, selection_choices, tab_bar};
use crate::ui::components::table::{cell, table, TableColumn};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrdersTab {
    #[default]
    Active,
    History,
    Track,
}

impl OrdersTab {
    const ALL: [OrdersTab; 3] = [OrdersTab::Active, OrdersTab::History, OrdersTab::Track];

    fn i18n_key(self) -> &'static str {
        match self {
            OrdersTab::Active => "orders-tab-active",
            OrdersTab::History => "orders-tab-history",
            OrdersTab::Track => "orders-tab-track",
        }
    }
}

/// Outcome of the last tracking lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingResult {
    pub tracking_number: String,
    /// `None` when the number is unknown.
    pub events: Option<Vec<TrackingEvent>>,
}

#[derive(Debug, Clone)]
pub struct State {
    tab: OrdersTab,
    orders: Vec<Order>,
    filter: RowFilter<OrderStatus>,
    tracking_query: String,
    tracking: Option<TrackingResult>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            tab: OrdersTab::default(),
            orders: sample_orders(),
            filter: RowFilter::new(),
            tracking_query: String::new(),
            tracking: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn visible_orders(&self) -> Vec<&Order> {
        self.filter.apply(&self.orders)
    }

    #[must_use]
    pub fn tracking(&self) -> Option<&TrackingResult> {
        self.tracking.as_ref()
    }

    #[must_use]
    pub fn tab(&self) -> OrdersTab {
        self.tab
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub date_format: DateFormat,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(OrdersTab),
    SearchChanged(String),
    StatusSelected(Selection<OrderStatus>),
    TrackingQueryChanged(String),
    Track,
    NewOrder,
    ViewOrder(String),
    LoadHistory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Carries the message key naming the feature.
    FeatureUnavailable(&'static str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => state.tab = tab,
        Message::SearchChanged(query) => state.filter.query = query,
        Message::StatusSelected(selection) => state.filter.selection = selection,
        Message::TrackingQueryChanged(query) => state.tracking_query = query,
        Message::Track => {
            let number = state.tracking_query.trim();
            if number.is_empty() {
                return Event::None;
            }
            state.tracking = Some(TrackingResult {
                tracking_number: number.to_uppercase(),
                events: tracking_history(number),
            });
        }
        Message::NewOrder => return Event::FeatureUnavailable("orders-new"),
        Message::ViewOrder(_) => return Event::FeatureUnavailable("orders-view"),
        Message::LoadHistory => return Event::FeatureUnavailable("orders-load-history"),
    }
    Event::None
}

fn status_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Processing => Tone::Info,
        OrderStatus::InTransit => Tone::Alert,
        OrderStatus::Delivered => Tone::Success,
        OrderStatus::Delayed => Tone::Danger,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let new_order = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::plus())
            .push(text(i18n.tr("orders-new"))),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::NewOrder);

    let tabs = tab_bar(
        OrdersTab::ALL.map(|tab| (tab, i18n.tr(tab.i18n_key()))),
        ctx.state.tab,
        Message::TabSelected,
    );

    let body = match ctx.state.tab {
        OrdersTab::Active => active_orders(&ctx),
        OrdersTab::History => history(i18n),
        OrdersTab::Track => track_and_trace(&ctx),
    };

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(page_heading(
            i18n.tr("orders-title"),
            i18n.tr("orders-description"),
            Some(new_order.into()),
        ))
        .push(tabs)
        .push(body)
        .into()
}

fn active_orders<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let choices = selection_choices(
        i18n.tr("orders-filter-all"),
        OrderStatus::ALL
            .iter()
            .map(|status| (*status, i18n.tr(status.i18n_key()))),
    );
    let filters = card(filter_bar(
        &i18n.tr("orders-search-placeholder"),
        &state.filter.query,
        Message::SearchChanged,
        choices,
        state.filter.selection,
        Message::StatusSelected,
    ))
    .padding(spacing::MD);

    let columns = [
        TableColumn::new(i18n.tr("orders-column-number"), 2),
        TableColumn::new(i18n.tr("orders-column-customer"), 2),
        TableColumn::new(i18n.tr("orders-column-products"), 3),
        TableColumn::new(i18n.tr("orders-column-quantity"), 1),
        TableColumn::new(i18n.tr("orders-column-status"), 2),
        TableColumn::new(i18n.tr("orders-column-route"), 3),
        TableColumn::new(i18n.tr("orders-column-eta"), 2),
        TableColumn::new(i18n.tr("orders-column-value"), 2),
        TableColumn::new(i18n.tr("orders-column-actions"), 1),
    ];

    let rows = state
        .visible_orders()
        .into_iter()
        .map(|order| {
            let route = Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(icons::sized(icons::pin(), sizing::ICON_SM).style(styles::text::muted))
                .push(text(order.route()).size(typography::BODY_SM));
            let view_button = button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(icons::eye(), sizing::ICON_SM))
                    .push(text(i18n.tr("orders-view")).size(typography::BODY_SM)),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::secondary)
            .on_press(Message::ViewOrder(order.order_number.clone()));

            vec![
                cell(&order.order_number),
                cell(&order.customer),
                cell(&order.products),
                cell(order.quantity),
                badge(i18n.tr(order.status.i18n_key()), status_tone(order.status)),
                route.into(),
                cell(ctx.date_format.render(order.eta)),
                cell(order.value_label()),
                view_button.into(),
            ]
        })
        .collect();

    Column::new()
        .spacing(spacing::MD)
        .push(filters)
        .push(card(table(&columns, rows, i18n.tr("table-empty"))).padding(0.0))
        .into()
}

fn history<'a>(i18n: &I18n) -> Element<'a, Message> {
    section(
        i18n.tr("orders-history-title"),
        None,
        Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("orders-history-description")).style(styles::text::muted))
            .push(
                button(text(i18n.tr("orders-load-history")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::secondary)
                    .on_press(Message::LoadHistory),
            ),
    )
    .into()
}

fn track_and_trace<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let lookup = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            text_input(&i18n.tr("orders-track-placeholder"), &ctx.state.tracking_query)
                .on_input(Message::TrackingQueryChanged)
                .on_submit(Message::Track)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::FORM_FIELD_WIDTH)),
        )
        .push(
            button(text(i18n.tr("orders-track-submit")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Track),
        );

    let mut content = Column::new().spacing(spacing::LG).push(lookup);

    if let Some(result) = &ctx.state.tracking {
        let heading = text(i18n.tr_with_args(
            "orders-tracking-heading",
            &[("number", result.tracking_number.as_str())],
        ))
        .size(typography::TITLE_SM);

        let timeline: Element<'a, Message> = match &result.events {
            Some(events) => events
                .iter()
                .enumerate()
                .fold(Column::new().spacing(spacing::SM), |column, (index, event)| {
                    column.push(timeline_entry(index, event))
                })
                .into(),
            None => text(i18n.tr("orders-tracking-not-found"))
                .style(styles::text::muted)
                .into(),
        };

        content = content.push(
            Column::new()
                .spacing(spacing::SM)
                .push(heading)
                .push(timeline),
        );
    }

    section(i18n.tr("orders-track-title"), None, content).into()
}

fn timeline_entry<'a>(index: usize, event: &TrackingEvent) -> Element<'a, Message> {
    // Newest step first: delivered, then in progress, then history.
    let tone = match index {
        0 => Tone::Success,
        1 => Tone::Info,
        _ => Tone::Neutral,
    };
    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::dot(), sizing::ICON_SM).style(styles::text::colored(tone.color())))
            .push(
                Column::new()
                    .push(text(event.description.clone()).size(typography::BODY))
                    .push(
                        text(format!("{} - {}", event.place, event.time))
                            .size(typography::BODY_SM)
                            .style(styles::text::muted),
                    ),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::table_header)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::SAMPLE_TRACKING_NUMBER;

    #[test]
    fn status_filter_and_search_combine() {
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("corp".to_string()));
        let customers: Vec<_> = state
            .visible_orders()
            .iter()
            .map(|order| order.customer.as_str())
            .collect();
        assert_eq!(customers, vec!["TechCorp Solutions", "MegaCorp Industries"]);

        update(
            &mut state,
            Message::StatusSelected(Selection::Only(OrderStatus::Delayed)),
        );
        let numbers: Vec<_> = state
            .visible_orders()
            .iter()
            .map(|order| order.order_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["ORD-2024-004"]);
    }

    #[test]
    fn tracking_lookup_finds_sample_history() {
        let mut state = State::default();
        update(&mut state, Message::TabSelected(OrdersTab::Track));
        update(
            &mut state,
            Message::TrackingQueryChanged(" trk-001-2024 ".to_string()),
        );
        update(&mut state, Message::Track);

        let result = state.tracking().expect("lookup ran");
        assert_eq!(result.tracking_number, SAMPLE_TRACKING_NUMBER);
        assert_eq!(result.events.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn unknown_tracking_number_reports_not_found() {
        let mut state = State::default();
        update(&mut state, Message::TrackingQueryChanged("TRK-999".to_string()));
        update(&mut state, Message::Track);
        assert_eq!(state.tracking().and_then(|r| r.events.as_ref()), None);
    }

    #[test]
    fn blank_tracking_query_is_ignored() {
        let mut state = State::default();
        update(&mut state, Message::TrackingQueryChanged("   ".to_string()));
        update(&mut state, Message::Track);
        assert!(state.tracking().is_none());
    }

    #[test]
    fn placeholder_actions_report_unavailable() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::NewOrder),
            Event::FeatureUnavailable("orders-new")
        );
    }
}
