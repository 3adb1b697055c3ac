// SPDX-License-Identifier: MPL-2.0
//! Documents tab: category tabs over a searchable document table, plus the
//! quick-upload drop zone.

use crate::domain::documents::{
    sample_documents, Document, DocumentCategory, DocumentType, VerificationStatus,
};
use crate::domain::search::{RowFilter, Selection};
use crate::domain::settings::DateFormat;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, Tone};
use crate::ui::components::card::{card, page_heading, section};
use crate::ui::components::form::{filter_bar, selection_choices, tab_bar};
use crate::ui::components::table::{cell, muted_cell, table, TableColumn};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    documents: Vec<Document>,
    category: DocumentCategory,
    filter: RowFilter<DocumentType>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            documents: sample_documents(),
            category: DocumentCategory::default(),
            filter: RowFilter::new(),
        }
    }
}

impl State {
    /// Rows passing the search, the type filter and the category tab.
    #[must_use]
    pub fn visible_documents(&self) -> Vec<&Document> {
        self.filter
            .apply(&self.documents)
            .into_iter()
            .filter(|document| self.category.includes(document.kind))
            .collect()
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub date_format: DateFormat,
}

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(DocumentCategory),
    SearchChanged(String),
    TypeSelected(Selection<DocumentType>),
    Upload,
    Preview(String),
    Download(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Carries the message key naming the feature.
    FeatureUnavailable(&'static str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CategorySelected(category) => state.category = category,
        Message::SearchChanged(query) => state.filter.query = query,
        Message::TypeSelected(selection) => state.filter.selection = selection,
        Message::Upload => return Event::FeatureUnavailable("documents-upload"),
        Message::Preview(_) => return Event::FeatureUnavailable("documents-preview"),
        Message::Download(_) => return Event::FeatureUnavailable("documents-download"),
    }
    Event::None
}

fn status_tone(status: VerificationStatus) -> Tone {
    match status {
        VerificationStatus::Verified => Tone::Success,
        VerificationStatus::Pending => Tone::Warning,
        VerificationStatus::UnderReview => Tone::Alert,
    }
}

fn type_glyph(kind: DocumentType) -> Text<'static> {
    match kind {
        DocumentType::Photos => icons::eye(),
        DocumentType::DamageReport => icons::warning(),
        _ => icons::file(),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let upload = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::upload())
            .push(text(i18n.tr("documents-upload"))),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::Upload);

    let tabs = tab_bar(
        DocumentCategory::ALL.map(|category| (category, i18n.tr(category.i18n_key()))),
        state.category,
        Message::CategorySelected,
    );

    let choices = selection_choices(
        i18n.tr("documents-filter-all"),
        DocumentType::ALL
            .iter()
            .map(|kind| (*kind, i18n.tr(kind.i18n_key()))),
    );
    let filters = card(filter_bar(
        &i18n.tr("documents-search-placeholder"),
        &state.filter.query,
        Message::SearchChanged,
        choices,
        state.filter.selection,
        Message::TypeSelected,
    ))
    .padding(spacing::MD);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(page_heading(
            i18n.tr("documents-title"),
            i18n.tr("documents-description"),
            Some(upload.into()),
        ))
        .push(tabs)
        .push(filters);

    if let Some(key) = state.category.description_key() {
        content = content.push(text(i18n.tr(key)).style(styles::text::muted));
    }

    content
        .push(card(document_table(&ctx)).padding(0.0))
        .push(quick_upload(i18n))
        .into()
}

fn document_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let columns = [
        TableColumn::new(i18n.tr("documents-column-document"), 4),
        TableColumn::new(i18n.tr("documents-column-type"), 2),
        TableColumn::new(i18n.tr("documents-column-order"), 2),
        TableColumn::new(i18n.tr("documents-column-uploaded"), 2),
        TableColumn::new(i18n.tr("documents-column-size"), 1),
        TableColumn::new(i18n.tr("documents-column-status"), 2),
        TableColumn::new(i18n.tr("documents-column-actions"), 2),
    ];

    let rows = ctx
        .state
        .visible_documents()
        .into_iter()
        .map(|document| {
            let name = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::sized(type_glyph(document.kind), sizing::ICON_MD))
                .push(
                    Column::new()
                        .push(text(document.name.clone()).size(typography::BODY))
                        .push(muted_cell(&document.description)),
                );
            let actions = Row::new()
                .spacing(spacing::XS)
                .push(action_button(
                    icons::eye(),
                    Message::Preview(document.id.clone()),
                ))
                .push(action_button(
                    icons::download(),
                    Message::Download(document.id.clone()),
                ));

            vec![
                name.into(),
                badge(i18n.tr(document.kind.i18n_key()), Tone::Neutral),
                cell(&document.order_number),
                cell(ctx.date_format.render(document.upload_date)),
                muted_cell(&document.size),
                badge(i18n.tr(document.status.i18n_key()), status_tone(document.status)),
                actions.into(),
            ]
        })
        .collect();

    table(&columns, rows, i18n.tr("table-empty"))
}

fn action_button<'a>(glyph: Text<'static>, message: Message) -> Element<'a, Message> {
    button(icons::sized(glyph, sizing::ICON_SM))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::secondary)
        .on_press(message)
        .into()
}

fn quick_upload<'a>(i18n: &I18n) -> Element<'a, Message> {
    let zone = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(icons::sized(icons::upload(), sizing::ICON_XL).style(styles::text::muted))
            .push(text(i18n.tr("documents-drop-hint")).style(styles::text::muted))
            .push(
                text(i18n.tr("documents-supported-formats"))
                    .size(typography::BODY_SM)
                    .style(styles::text::muted),
            )
            .push(
                button(text(i18n.tr("documents-choose-files")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::secondary)
                    .on_press(Message::Upload),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .center_x(Length::Fill)
    .style(styles::container::drop_zone);

    section(i18n.tr("documents-quick-upload"), None, zone).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &State) -> Vec<&str> {
        state
            .visible_documents()
            .into_iter()
            .map(|document| document.id.as_str())
            .collect()
    }

    #[test]
    fn category_tab_narrows_search_results() {
        let mut state = State::default();
        let all = ids(&state).len();

        update(
            &mut state,
            Message::CategorySelected(DocumentCategory::Reports),
        );
        let reports = ids(&state);
        assert!(reports.len() < all);
        assert!(state
            .visible_documents()
            .iter()
            .all(|document| DocumentCategory::Reports.includes(document.kind)));

        update(&mut state, Message::SearchChanged("nothing-like-this".to_string()));
        assert!(ids(&state).is_empty());
    }

    #[test]
    fn search_matches_order_number() {
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("ord-2024-002".to_string()));
        assert_eq!(ids(&state), vec!["DOC-004"]);
    }

    #[test]
    fn type_filter_applies() {
        let mut state = State::default();
        update(
            &mut state,
            Message::TypeSelected(Selection::Only(DocumentType::Cmr)),
        );
        assert!(state
            .visible_documents()
            .iter()
            .all(|document| document.kind == DocumentType::Cmr));
    }
}
