// SPDX-License-Identifier: MPL-2.0
//! Inventory tab: searchable stock table with quick stats.

use crate::domain::inventory::{
    sample_items, CustomsStatus, InventoryItem, StockStatus, StockSummary,
};
use crate::domain::search::{RowFilter, Selection};
use crate::domain::settings::DateFormat;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, Tone};
use crate::ui::components::card::{card, page_heading, stat_tile};
use crate::ui::components::form::{filter_bar, selection_choices};
use crate::ui::components::table::{cell, muted_cell, table, TableColumn};
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    items: Vec<InventoryItem>,
    filter: RowFilter<StockStatus>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            items: sample_items(),
            filter: RowFilter::new(),
        }
    }
}

impl State {
    /// Rows passing the current search and status filter.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&InventoryItem> {
        self.filter.apply(&self.items)
    }

    /// Quick stats over the whole stock list, not the filtered rows.
    #[must_use]
    pub fn summary(&self) -> StockSummary {
        StockSummary::of(&self.items)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub date_format: DateFormat,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    StatusSelected(Selection<StockStatus>),
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A control without a backing implementation was used. Carries the
    /// message key naming the feature.
    FeatureUnavailable(&'static str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.filter.query = query;
            Event::None
        }
        Message::StatusSelected(selection) => {
            state.filter.selection = selection;
            Event::None
        }
        Message::Export => Event::FeatureUnavailable("inventory-export"),
    }
}

fn stock_tone(status: StockStatus) -> Tone {
    match status {
        StockStatus::InStock => Tone::Success,
        StockStatus::LowStock => Tone::Warning,
        StockStatus::OutOfStock => Tone::Danger,
    }
}

fn customs_tone(customs: CustomsStatus) -> Tone {
    match customs {
        CustomsStatus::Cleared => Tone::Success,
        CustomsStatus::Pending => Tone::Alert,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let export = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::download())
            .push(text(i18n.tr("inventory-export"))),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary)
    .on_press(Message::Export);

    let heading = page_heading(
        i18n.tr("inventory-title"),
        i18n.tr("inventory-description"),
        Some(export.into()),
    );

    let choices = selection_choices(
        i18n.tr("inventory-filter-all"),
        StockStatus::ALL
            .iter()
            .map(|status| (*status, i18n.tr(status.i18n_key()))),
    );
    let filters = card(filter_bar(
        &i18n.tr("inventory-search-placeholder"),
        &state.filter.query,
        Message::SearchChanged,
        choices,
        state.filter.selection,
        Message::StatusSelected,
    ))
    .padding(spacing::MD);

    let columns = [
        TableColumn::new(i18n.tr("inventory-column-sku"), 2),
        TableColumn::new(i18n.tr("inventory-column-product"), 3),
        TableColumn::new(i18n.tr("inventory-column-category"), 2),
        TableColumn::new(i18n.tr("inventory-column-quantity"), 1),
        TableColumn::new(i18n.tr("inventory-column-location"), 2),
        TableColumn::new(i18n.tr("inventory-column-status"), 2),
        TableColumn::new(i18n.tr("inventory-column-customs"), 2),
        TableColumn::new(i18n.tr("inventory-column-barcode"), 2),
        TableColumn::new(i18n.tr("inventory-column-last-updated"), 2),
    ];

    let rows = state
        .visible_items()
        .into_iter()
        .map(|item| {
            vec![
                cell(&item.sku),
                cell(&item.product),
                cell(&item.category),
                cell(item.quantity),
                cell(&item.location),
                badge(i18n.tr(item.status.i18n_key()), stock_tone(item.status)),
                badge(i18n.tr(item.customs.i18n_key()), customs_tone(item.customs)),
                muted_cell(&item.barcode),
                cell(ctx.date_format.render(item.last_updated)),
            ]
        })
        .collect();

    let summary = state.summary();
    let stats = Row::new()
        .spacing(spacing::MD)
        .push(stat_tile(
            i18n.tr("inventory-stat-total"),
            summary.total_products.to_string(),
            None,
            None,
        ))
        .push(stat_tile(
            i18n.tr("inventory-stat-low-stock"),
            summary.low_stock.to_string(),
            Some((i18n.tr("stock-low-stock"), Tone::Warning)),
            None,
        ))
        .push(stat_tile(
            i18n.tr("inventory-stat-out-of-stock"),
            summary.out_of_stock.to_string(),
            Some((i18n.tr("stock-out-of-stock"), Tone::Danger)),
            None,
        ));

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(heading)
        .push(filters)
        .push(card(table(&columns, rows, i18n.tr("table-empty"))).padding(0.0))
        .push(stats)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skus(state: &State) -> Vec<&str> {
        state
            .visible_items()
            .into_iter()
            .map(|item| item.sku.as_str())
            .collect()
    }

    #[test]
    fn all_rows_visible_by_default() {
        let state = State::default();
        assert_eq!(state.visible_items().len(), state.items.len());
    }

    #[test]
    fn search_matches_sku_case_insensitively() {
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("sku-002".to_string()));
        assert_eq!(skus(&state), vec!["SKU-002"]);
    }

    #[test]
    fn status_filter_and_search_combine() {
        let mut state = State::default();
        update(
            &mut state,
            Message::StatusSelected(Selection::Only(StockStatus::InStock)),
        );
        assert!(state
            .visible_items()
            .iter()
            .all(|item| item.status == StockStatus::InStock));

        update(&mut state, Message::SearchChanged("no such product".to_string()));
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn summary_ignores_filter() {
        let mut state = State::default();
        let before = state.summary();
        update(&mut state, Message::SearchChanged("zzz".to_string()));
        assert_eq!(state.summary(), before);
    }

    #[test]
    fn export_is_forwarded() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::Export),
            Event::FeatureUnavailable("inventory-export")
        );
    }
}
