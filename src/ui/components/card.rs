// SPDX-License-Identifier: MPL-2.0
//! Cards, page headings and stat tiles.

use super::badge::Tone;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{scrollable, text, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Bordered card around arbitrary content.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
}

/// Card with a title row (and optional trailing widget) above its content.
pub fn section<'a, Message: 'a>(
    title: String,
    trailing: Option<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    let mut header = Row::new()
        .align_y(Vertical::Center)
        .push(text(title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill));
    if let Some(widget) = trailing {
        header = header.push(widget);
    }

    card(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(content),
    )
}

/// Page heading with a muted description line.
pub fn page_heading<'a, Message: 'a>(
    title: String,
    description: String,
    trailing: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(text(title).size(typography::TITLE_LG))
        .push(
            text(description)
                .size(typography::BODY)
                .style(styles::text::muted),
        );

    let mut row = Row::new()
        .align_y(Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill));
    if let Some(widget) = trailing {
        row = row.push(widget);
    }
    row.into()
}

/// Quick-stat tile: label, large value and an optional colored footnote.
pub fn stat_tile<'a, Message: 'a>(
    label: String,
    value: String,
    footnote: Option<(String, Tone)>,
    glyph: Option<iced::widget::Text<'a>>,
) -> Element<'a, Message> {
    let mut figures = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(label)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(text(value).size(typography::TITLE_LG));
    if let Some((note, tone)) = footnote {
        figures = figures.push(
            text(note)
                .size(typography::CAPTION)
                .style(styles::text::colored(tone.color())),
        );
    }

    let mut row = Row::new()
        .align_y(Vertical::Center)
        .push(figures)
        .push(Space::new().width(Length::Fill));
    if let Some(glyph) = glyph {
        row = row.push(glyph.size(sizing::ICON_XL).style(styles::text::brand));
    }

    card(row).into()
}

/// Round avatar with the user's initials.
pub fn avatar<'a, Message: 'a>(initials: String, size: f32) -> Element<'a, Message> {
    Container::new(text(initials).size(size * 0.4))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar)
        .into()
}

/// Colored panel beside the login and registration forms: headline, pitch,
/// one tile per selling point and a footer row.
pub fn pitch_panel<'a, Message: 'a>(
    headline: String,
    pitch: String,
    tiles: impl IntoIterator<Item = (Text<'static>, String, String)>,
    footer: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let tiles = tiles.into_iter().fold(
        Column::new().spacing(spacing::MD),
        |column, (glyph, title, body)| {
            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(glyph.size(sizing::ICON_LG))
                        .push(text(title).size(typography::TITLE_SM))
                        .push(text(body).size(typography::BODY_SM)),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::callout(palette::WHITE)),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            text(headline)
                .size(typography::DISPLAY)
                .align_x(Horizontal::Center),
        )
        .push(
            text(pitch)
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        )
        .push(tiles)
        .push(footer);

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::FEATURE_PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::XXL)
        .center_y(Length::Fill)
        .style(styles::container::brand_panel)
        .into()
}
