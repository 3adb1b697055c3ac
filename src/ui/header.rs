// SPDX-License-Identifier: MPL-2.0
//! Portal header: active page title, alert bell and avatar.

use crate::domain::session::UserProfile;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{self, Tone};
use crate::ui::components::card::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sidebar::Tab;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    pub user: &'a UserProfile,
    /// Count shown on the bell.
    pub alert_count: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    BellPressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenAlerts,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::BellPressed => Event::OpenAlerts,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .push(text(ctx.i18n.tr(ctx.active.i18n_key())).size(typography::TITLE_MD))
        .push(
            text(ctx.i18n.tr("header-subtitle"))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    let mut bell_content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::bell(), sizing::ICON_MD));
    if ctx.alert_count > 0 {
        bell_content = bell_content.push(badge::counter(ctx.alert_count, Tone::Danger));
    }
    let bell = button(bell_content)
        .padding(spacing::XS)
        .style(styles::button::ghost)
        .on_press(Message::BellPressed);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(bell)
        .push(avatar(ctx.user.initials(), sizing::AVATAR_MD));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}
