// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the login or register page, or the portal shell around the
//! active tab, with the toast overlay stacked on top.

use super::config::Config;
use super::{Message, Screen};
use crate::domain::session::UserProfile;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::communication;
use crate::ui::dashboard;
use crate::ui::design_tokens::spacing;
use crate::ui::documents;
use crate::ui::header;
use crate::ui::inventory;
use crate::ui::login;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::orders;
use crate::ui::register;
use crate::ui::settings;
use crate::ui::sidebar::{self, Tab};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub tab: Tab,
    pub user: Option<&'a UserProfile>,
    pub auth_error: Option<&'a Error>,
    pub login: &'a login::State,
    pub register: &'a register::State,
    pub dashboard: &'a dashboard::State,
    pub inventory: &'a inventory::State,
    pub orders: &'a orders::State,
    pub documents: &'a documents::State,
    pub communication: &'a communication::State,
    pub settings: &'a settings::State,
    pub config: &'a Config,
    pub notifications: &'a Manager,
}

/// Renders the current screen with toasts on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.user) {
        (Screen::Portal, Some(user)) => view_portal(&ctx, user),
        (Screen::Register, _) => register::view(register::ViewContext {
            i18n: ctx.i18n,
            state: ctx.register,
        })
        .map(Message::Register),
        // A portal without a user cannot be shown; fall back to login.
        (Screen::Login | Screen::Portal, _) => login::view(login::ViewContext {
            i18n: ctx.i18n,
            state: ctx.login,
            error: ctx.auth_error,
        })
        .map(Message::Login),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_portal<'a>(ctx: &ViewContext<'a>, user: &'a UserProfile) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let sidebar = sidebar::view(sidebar::ViewContext {
        i18n,
        active: ctx.tab,
        user,
        unread_alerts: ctx.communication.unread_alerts(),
    })
    .map(Message::Sidebar);

    let header = header::view(header::ViewContext {
        i18n,
        active: ctx.tab,
        user,
        alert_count: ctx.communication.alert_count(),
    })
    .map(Message::Header);

    let date_format = ctx.config.regional.date_format;
    let content: Element<'a, Message> = match ctx.tab {
        Tab::Dashboard => dashboard::view(dashboard::ViewContext {
            i18n,
            state: ctx.dashboard,
            user,
        }),
        Tab::Inventory => inventory::view(inventory::ViewContext {
            i18n,
            state: ctx.inventory,
            date_format,
        })
        .map(Message::Inventory),
        Tab::Orders => orders::view(orders::ViewContext {
            i18n,
            state: ctx.orders,
            date_format,
        })
        .map(Message::Orders),
        Tab::Documents => documents::view(documents::ViewContext {
            i18n,
            state: ctx.documents,
            date_format,
        })
        .map(Message::Documents),
        Tab::Communication => communication::view(communication::ViewContext {
            i18n,
            state: ctx.communication,
            date_format,
        })
        .map(Message::Communication),
        Tab::Settings => settings::view(settings::ViewContext {
            i18n,
            state: ctx.settings,
            config: ctx.config,
        })
        .map(Message::Settings),
    };

    let main = Column::new()
        .push(header)
        .push(
            scrollable(Container::new(content).padding(spacing::LG).width(Length::Fill))
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Row::new()
        .push(sidebar)
        .push(main)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
