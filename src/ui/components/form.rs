// SPDX-License-Identifier: MPL-2.0
//! Form building blocks: labeled fields, option lists and tab bars.

use crate::domain::search::Selection;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, text, text_input, Column, Row};
use iced::{Element, Length};
use std::fmt;

/// Label stacked above an input widget.
pub fn field<'a, Message: 'a>(
    label: String,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(input)
        .width(Length::Fill)
        .into()
}

/// Label and description to the left of a control (settings rows).
pub fn setting_row<'a, Message: 'a>(
    label: String,
    description: Option<String>,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut labels = Column::new()
        .spacing(spacing::XXS / 2.0)
        .push(text(label).size(typography::BODY));
    if let Some(description) = description {
        labels = labels.push(
            text(description)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );
    }

    Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(labels.width(Length::Fill))
        .push(control)
        .into()
}

/// Localized entry for a `pick_list`: carries a value plus its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: String) -> Self {
        Self { value, label }
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Returns the choice whose value equals `value`.
pub fn selected_choice<T: PartialEq + Clone>(choices: &[Choice<T>], value: &T) -> Option<Choice<T>> {
    choices.iter().find(|choice| choice.value == *value).cloned()
}

/// Horizontal row of sub-tab buttons; the one equal to `active` is highlighted.
pub fn tab_bar<'a, T, Message>(
    tabs: impl IntoIterator<Item = (T, String)>,
    active: T,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq,
    Message: Clone + 'a,
{
    tabs.into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (tab, label)| {
            row.push(
                button(text(label).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::tab(tab == active))
                    .on_press(on_select(tab)),
            )
        })
        .into()
}

/// Dropdown choices for a filter: "All" first, then one per category.
pub fn selection_choices<T: Copy>(
    all_label: String,
    categories: impl IntoIterator<Item = (T, String)>,
) -> Vec<Choice<Selection<T>>> {
    std::iter::once(Choice::new(Selection::All, all_label))
        .chain(
            categories
                .into_iter()
                .map(|(value, label)| Choice::new(Selection::Only(value), label)),
        )
        .collect()
}

/// Search box followed by a category dropdown.
pub fn filter_bar<'a, T, Message>(
    placeholder: &str,
    query: &str,
    on_search: impl Fn(String) -> Message + 'a,
    choices: Vec<Choice<Selection<T>>>,
    selected: Selection<T>,
    on_select: impl Fn(Selection<T>) -> Message + 'a,
) -> Element<'a, Message>
where
    T: Copy + PartialEq + 'a,
    Message: Clone + 'a,
{
    let current = selected_choice(&choices, &selected);
    let search = text_input(placeholder, query)
        .on_input(on_search)
        .padding(spacing::XS)
        .width(Length::Fill);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::search(), sizing::ICON_MD).style(styles::text::muted))
        .push(search)
        .push(
            pick_list(choices, current, move |choice: Choice<Selection<T>>| {
                on_select(choice.value)
            })
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::FILTER_WIDTH)),
        )
        .into()
}
