// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Child components return `Event`s; the handlers here turn them into
//! state transitions on [`App`] and, where needed, [`Task`]s.

use super::{persistence, App, Message, Screen};
use crate::domain::session::{self, UserProfile};
use crate::error::Result;
use crate::ui::communication::{self, Event as CommunicationEvent, SupportTab};
use crate::ui::dashboard;
use crate::ui::documents::{self, Event as DocumentsEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::inventory::{self, Event as InventoryEvent};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::notifications::Notification;
use crate::ui::orders::{self, Event as OrdersEvent};
use crate::ui::register::{self, Event as RegisterEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::sidebar::{self, Event as SidebarEvent, Tab};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Login(message) => {
            let event = login::update(&mut app.login, message);
            handle_login_event(app, event)
        }
        Message::LoginFinished(result) => {
            handle_login_finished(app, result);
            Task::none()
        }
        Message::Register(message) => {
            let event = register::update(&mut app.register, message);
            handle_register_event(app, event)
        }
        Message::RegisterFinished(user) => {
            app.register.finish_loading();
            if app.screen == Screen::Register {
                tracing::info!(user = %user.name, "registration completed");
                sign_in(app, user);
            }
            Task::none()
        }
        Message::Sidebar(message) => {
            match sidebar::update(message) {
                SidebarEvent::TabSelected(tab) => select_tab(app, tab),
                SidebarEvent::SignOut => sign_out(app),
            }
            Task::none()
        }
        Message::Header(message) => {
            match header::update(message) {
                HeaderEvent::OpenAlerts => {
                    app.communication.open(SupportTab::Notifications);
                    select_tab(app, Tab::Communication);
                }
            }
            Task::none()
        }
        Message::Inventory(message) => {
            match inventory::update(&mut app.inventory, message) {
                InventoryEvent::None => {}
                InventoryEvent::FeatureUnavailable(key) => notify_unavailable(app, key),
            }
            Task::none()
        }
        Message::Orders(message) => {
            match orders::update(&mut app.orders, message) {
                OrdersEvent::None => {}
                OrdersEvent::FeatureUnavailable(key) => notify_unavailable(app, key),
            }
            Task::none()
        }
        Message::Documents(message) => {
            match documents::update(&mut app.documents, message) {
                DocumentsEvent::None => {}
                DocumentsEvent::FeatureUnavailable(key) => notify_unavailable(app, key),
            }
            Task::none()
        }
        Message::Communication(message) => {
            match communication::update(&mut app.communication, message) {
                CommunicationEvent::None => {}
                CommunicationEvent::FeatureUnavailable(key) => notify_unavailable(app, key),
            }
            Task::none()
        }
        Message::Settings(message) => {
            let event = settings::update(&mut app.settings, message);
            handle_settings_event(app, event);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_login_event(app: &mut App, event: LoginEvent) -> Task<Message> {
    match event {
        LoginEvent::None => Task::none(),
        LoginEvent::Submit { email, password } => {
            app.auth_error = None;
            tracing::info!("sign-in requested");
            let delay = app.config.session.login_delay();
            Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    session::authenticate(&email, &password)
                },
                Message::LoginFinished,
            )
        }
        LoginEvent::ShowRegister => {
            app.auth_error = None;
            app.screen = Screen::Register;
            Task::none()
        }
    }
}

fn handle_login_finished(app: &mut App, result: Result<UserProfile>) {
    app.login.finish_loading();
    if app.screen != Screen::Login {
        return;
    }
    match result {
        Ok(user) => {
            tracing::info!(user = %user.name, "signed in");
            sign_in(app, user);
        }
        Err(error) => {
            tracing::warn!(%error, "sign-in rejected");
            app.auth_error = Some(error);
        }
    }
}

fn handle_register_event(app: &mut App, event: RegisterEvent) -> Task<Message> {
    match event {
        RegisterEvent::None => Task::none(),
        RegisterEvent::Submit(user) => {
            tracing::info!(company = %user.company, "registration submitted");
            let delay = app.config.session.register_delay();
            Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    user
                },
                Message::RegisterFinished,
            )
        }
        RegisterEvent::BackToLogin => {
            app.screen = Screen::Login;
            Task::none()
        }
    }
}

fn handle_settings_event(app: &mut App, event: SettingsEvent) {
    match event {
        SettingsEvent::None => {}
        SettingsEvent::ProfileSaved(user) => {
            tracing::info!(user = %user.name, "profile saved");
            app.user = Some(user);
            app.notifications
                .push(Notification::success("notification-profile-saved"));
        }
        SettingsEvent::PreferenceChanged(preference) => {
            tracing::debug!(?preference, "preference changed");
            let theme_changed = matches!(preference, settings::Preference::ThemeMode(_));
            preference.apply(&mut app.config);
            if theme_changed {
                app.theme = app.config.general.theme_mode.theme();
            }
            save_config(app);
        }
        SettingsEvent::LanguageChanged(locale) => {
            app.i18n.set_locale(locale);
            app.config.general.language = Some(app.i18n.current_locale().to_string());
            save_config(app);
        }
        SettingsEvent::FeatureUnavailable(key) => notify_unavailable(app, key),
    }
}

fn save_config(app: &mut App) {
    if let Some(warning) = persistence::persist_config(&app.config, app.config_dir.clone()) {
        app.notifications.push(warning);
    }
}

fn select_tab(app: &mut App, tab: Tab) {
    if app.screen != Screen::Portal {
        return;
    }
    if app.tab != tab {
        tracing::debug!(?tab, "tab selected");
    }
    app.tab = tab;
}

fn notify_unavailable(app: &mut App, key: &'static str) {
    let feature = app.i18n.tr(key);
    app.notifications
        .push(Notification::info("feature-unavailable").with_arg("feature", feature));
}

/// Enters the portal on the dashboard for `user`.
fn sign_in(app: &mut App, user: UserProfile) {
    app.settings = settings::State::new(&user);
    app.user = Some(user);
    app.auth_error = None;
    app.screen = Screen::Portal;
    app.tab = Tab::Dashboard;
    app.login = login::State::default();
    app.register = register::State::default();
}

/// Drops the session user and every per-tab state.
fn sign_out(app: &mut App) {
    tracing::info!("signed out");
    app.user = None;
    app.auth_error = None;
    app.screen = Screen::Login;
    app.tab = Tab::Dashboard;
    app.login = login::State::default();
    app.register = register::State::default();
    app.dashboard = dashboard::State::default();
    app.inventory = inventory::State::default();
    app.orders = orders::State::default();
    app.documents = documents::State::default();
    app.communication = communication::State::default();
    app.settings = settings::State::default();
}
