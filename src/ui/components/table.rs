// SPDX-License-Identifier: MPL-2.0
//! Proportional-width data table.
//!
//! Every page of the portal renders its records the same way: a tinted
//! header row, then one row per record with cells sized by `FillPortion`.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{text, Column, Container, Row};
use iced::{Element, Length};

/// Header label and relative width of one column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub portion: u16,
}

impl TableColumn {
    pub fn new(header: String, portion: u16) -> Self {
        Self { header, portion }
    }
}

/// Plain text cell.
pub fn cell<'a, Message: 'a>(value: impl ToString) -> Element<'a, Message> {
    text(value.to_string()).size(typography::BODY).into()
}

/// Secondary text cell.
pub fn muted_cell<'a, Message: 'a>(value: impl ToString) -> Element<'a, Message> {
    text(value.to_string())
        .size(typography::BODY_SM)
        .style(styles::text::muted)
        .into()
}

/// Lays out `rows` under `columns`. Shows `empty_label` when there are no rows.
///
/// Each row must hold exactly one element per column; extra cells are dropped.
pub fn table<'a, Message: 'a>(
    columns: &[TableColumn],
    rows: Vec<Vec<Element<'a, Message>>>,
    empty_label: String,
) -> Element<'a, Message> {
    let header = columns.iter().fold(
        Row::new().spacing(spacing::SM).align_y(Vertical::Center),
        |row, column| {
            row.push(
                Container::new(
                    text(column.header.to_uppercase())
                        .size(typography::CAPTION),
                )
                .width(Length::FillPortion(column.portion)),
            )
        },
    );

    let mut body = Column::new().push(
        Container::new(header)
            .padding([spacing::SM, spacing::MD])
            .width(Length::Fill)
            .style(styles::container::table_header),
    );

    if rows.is_empty() {
        body = body.push(
            Container::new(text(empty_label).style(styles::text::muted))
                .padding(spacing::LG)
                .width(Length::Fill)
                .center_x(Length::Fill),
        );
    }

    for cells in rows {
        let row = cells.into_iter().zip(columns).fold(
            Row::new().spacing(spacing::SM).align_y(Vertical::Center),
            |row, (cell, column)| {
                row.push(Container::new(cell).width(Length::FillPortion(column.portion)))
            },
        );
        body = body.push(
            Container::new(row)
                .padding([spacing::SM, spacing::MD])
                .width(Length::Fill)
                .style(styles::container::table_row),
        );
    }

    body.width(Length::Fill).into()
}
