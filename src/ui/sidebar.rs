// SPDX-License-Identifier: MPL-2.0
//! Portal sidebar: brand, tab list, user footer and sign-out.

use crate::domain::session::UserProfile;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{self, Tone};
use crate::ui::components::card::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, rule, text, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Portal section shown in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Inventory,
    Orders,
    Documents,
    Communication,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Inventory,
        Tab::Orders,
        Tab::Documents,
        Tab::Communication,
        Tab::Settings,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::Dashboard => "nav-dashboard",
            Tab::Inventory => "nav-inventory",
            Tab::Orders => "nav-orders",
            Tab::Documents => "nav-documents",
            Tab::Communication => "nav-support",
            Tab::Settings => "nav-settings",
        }
    }

    /// Tab for a 1-based keyboard shortcut digit.
    #[must_use]
    pub fn from_shortcut(digit: u8) -> Option<Tab> {
        let index = usize::from(digit).checked_sub(1)?;
        Tab::ALL.get(index).copied()
    }

    fn icon(self) -> Text<'static> {
        match self {
            Tab::Dashboard => icons::grid(),
            Tab::Inventory => icons::package(),
            Tab::Orders => icons::truck(),
            Tab::Documents => icons::file(),
            Tab::Communication => icons::chat(),
            Tab::Settings => icons::gear(),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    pub user: &'a UserProfile,
    /// Shown as a counter on the Support entry when non-zero.
    pub unread_alerts: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Tab),
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TabSelected(Tab),
    SignOut,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Select(tab) => Event::TabSelected(tab),
        Message::SignOut => Event::SignOut,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            icons::sized(icons::truck(), sizing::ICON_XL).style(styles::text::brand),
        )
        .push(
            Column::new()
                .push(text(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
                .push(
                    text(ctx.i18n.tr("sidebar-subtitle"))
                        .size(typography::CAPTION)
                        .style(styles::text::muted),
                ),
        );

    let nav = Tab::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, tab| column.push(nav_entry(&ctx, tab)),
    );

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(avatar(ctx.user.initials(), sizing::AVATAR_SM))
        .push(
            Column::new()
                .width(Length::Fill)
                .push(text(ctx.user.name.clone()).size(typography::BODY))
                .push(
                    text(ctx.user.role.clone())
                        .size(typography::CAPTION)
                        .style(styles::text::muted),
                ),
        );

    let sign_out = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::logout())
            .push(text(ctx.i18n.tr("sidebar-sign-out"))),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::ghost)
    .on_press(Message::SignOut);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(brand)
        .push(nav)
        .push(Space::new().height(Length::Fill))
        .push(rule::horizontal(1))
        .push(footer)
        .push(sign_out);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::chrome)
        .into()
}

fn nav_entry<'a>(ctx: &ViewContext<'a>, tab: Tab) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(tab.icon(), sizing::ICON_MD))
        .push(text(ctx.i18n.tr(tab.i18n_key())).width(Length::Fill));

    if tab == Tab::Communication && ctx.unread_alerts > 0 {
        row = row.push(badge::counter(ctx.unread_alerts, Tone::Danger));
    }

    button(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_item(tab == ctx.active))
        .on_press(Message::Select(tab))
        .into()
}
