// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the authentication
//! pages and the portal.
//!
//! The `App` struct owns the session, the per-tab view states and the loaded
//! preferences, and translates child [`Event`](crate::ui::login::Event)s
//! into side effects like the simulated sign-in delay, config persistence
//! or toast notifications.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::domain::session::UserProfile;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::communication;
use crate::ui::dashboard;
use crate::ui::documents;
use crate::ui::inventory;
use crate::ui::login;
use crate::ui::notifications::{self, Notification};
use crate::ui::orders;
use crate::ui::register;
use crate::ui::settings;
use crate::ui::sidebar::Tab;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    tab: Tab,
    /// Present exactly while `screen` is [`Screen::Portal`].
    user: Option<UserProfile>,
    auth_error: Option<Error>,
    login: login::State,
    register: register::State,
    dashboard: dashboard::State,
    inventory: inventory::State,
    orders: orders::State,
    documents: documents::State,
    communication: communication::State,
    settings: settings::State,
    config: Config,
    /// Resolved from `config.general.theme_mode` at startup and whenever the
    /// mode changes. System mode queries the desktop only then.
    theme: Theme,
    /// Explicit settings directory; `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("tab", &self.tab)
            .field("signed_in", &self.user.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), Config::default(), None)
    }
}

impl App {
    /// Loads preferences, resolves the locale and starts on the login page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_config(i18n, config, None);
        if let Some(error) = config_warning {
            app.notifications.push(Notification::warning(error.i18n_key()));
        }

        tracing::info!(
            theme = ?app.config.general.theme_mode,
            locale = %app.i18n.current_locale(),
            "application started"
        );
        (app, Task::none())
    }

    fn with_config(i18n: I18n, config: Config, config_dir: Option<PathBuf>) -> Self {
        let theme = config.general.theme_mode.theme();
        Self {
            i18n,
            screen: Screen::default(),
            tab: Tab::default(),
            user: None,
            auth_error: None,
            login: login::State::default(),
            register: register::State::default(),
            dashboard: dashboard::State::default(),
            inventory: inventory::State::default(),
            orders: orders::State::default(),
            documents: documents::State::default(),
            communication: communication::State::default(),
            settings: settings::State::default(),
            config,
            theme,
            config_dir,
            notifications: notifications::Manager::new(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn auth_error(&self) -> Option<&Error> {
        self.auth_error.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Login | Screen::Register => app_name,
            Screen::Portal => format!("{} - {app_name}", self.i18n.tr(self.tab.i18n_key())),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_shortcut_subscription(self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            tab: self.tab,
            user: self.user.as_ref(),
            auth_error: self.auth_error.as_ref(),
            login: &self.login,
            register: &self.register,
            dashboard: &self.dashboard,
            inventory: &self.inventory,
            orders: &self.orders,
            documents: &self.documents,
            communication: &self.communication,
            settings: &self.settings,
            config: &self.config,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{DEMO_EMAIL, DEMO_PASSWORD};
    use crate::error::AuthError;
    use crate::ui::header;
    use crate::ui::settings::{NotificationSwitch, Preference};
    use crate::ui::sidebar;
    use crate::ui::theming::{dark_palette, light_palette, ThemeMode};
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> App {
        App::with_config(I18n::default(), Config::default(), Some(dir.to_path_buf()))
    }

    fn type_credentials(app: &mut App, email: &str, password: &str) {
        let _ = app.update(Message::Login(login::Message::EmailChanged(email.to_string())));
        let _ = app.update(Message::Login(login::Message::PasswordChanged(
            password.to_string(),
        )));
    }

    /// Drives the login form, then delivers the result the delayed task
    /// would produce.
    fn sign_in_with(app: &mut App, email: &str, password: &str) {
        type_credentials(app, email, password);
        let _ = app.update(Message::Login(login::Message::Submit));
        let result = crate::domain::session::authenticate(email, password);
        let _ = app.update(Message::LoginFinished(result));
    }

    #[test]
    fn new_app_starts_on_login() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.tab(), Tab::Dashboard);
        assert!(app.user().is_none());
        assert!(app.auth_error().is_none());
    }

    #[test]
    fn demo_credentials_open_the_portal() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);

        assert_eq!(app.screen(), Screen::Portal);
        assert_eq!(app.tab(), Tab::Dashboard);
        assert_eq!(app.user(), Some(&UserProfile::demo()));
        assert!(app.auth_error().is_none());
    }

    #[test]
    fn submit_puts_login_form_into_loading_state() {
        let mut app = App::default();
        type_credentials(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
        let _ = app.update(Message::Login(login::Message::Submit));

        assert!(app.login.is_loading());
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn wrong_password_stays_on_login_with_error() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, "wrong");

        assert_eq!(app.screen(), Screen::Login);
        assert!(matches!(
            app.auth_error(),
            Some(Error::Auth(AuthError::InvalidCredentials))
        ));
        assert!(app.user().is_none());
        assert!(!app.login.is_loading());
    }

    #[test]
    fn sidebar_selection_changes_tab_and_title() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);

        let _ = app.update(Message::Sidebar(sidebar::Message::Select(Tab::Orders)));
        assert_eq!(app.tab(), Tab::Orders);
        assert!(app.title().starts_with(&app.i18n.tr("nav-orders")));
    }

    #[test]
    fn logout_resets_session() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
        let _ = app.update(Message::Sidebar(sidebar::Message::Select(Tab::Settings)));
        let _ = app.update(Message::Inventory(inventory::Message::SearchChanged(
            "pallet".to_string(),
        )));

        let _ = app.update(Message::Sidebar(sidebar::Message::SignOut));

        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.tab(), Tab::Dashboard);
        assert!(app.user().is_none());
        assert!(app.auth_error().is_none());
        assert_eq!(
            app.inventory.visible_items().len(),
            inventory::State::default().visible_items().len()
        );
    }

    #[test]
    fn failed_login_error_clears_when_leaving_for_register() {
        let mut app = App::default();
        sign_in_with(&mut app, "someone@example.com", "secret");
        assert!(app.auth_error().is_some());

        let _ = app.update(Message::Login(login::Message::ShowRegister));
        assert_eq!(app.screen(), Screen::Register);
        assert!(app.auth_error().is_none());
    }

    #[test]
    fn registration_signs_in_the_new_user() {
        let mut app = App::default();
        let _ = app.update(Message::Login(login::Message::ShowRegister));
        let profile = UserProfile {
            name: "Ada Lovelace".to_string(),
            role: "Operations Manager".to_string(),
            company: "Analytical Freight".to_string(),
        };
        let _ = app.update(Message::RegisterFinished(profile.clone()));

        assert_eq!(app.screen(), Screen::Portal);
        assert_eq!(app.user(), Some(&profile));
    }

    #[test]
    fn bell_opens_support_alerts() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
        let _ = app.update(Message::Header(header::Message::BellPressed));

        assert_eq!(app.tab(), Tab::Communication);
        assert_eq!(
            app.communication.tab(),
            communication::SupportTab::Notifications
        );
    }

    #[test]
    fn unavailable_feature_shows_toast() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
        let _ = app.update(Message::Inventory(inventory::Message::Export));

        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn saving_profile_updates_session_user() {
        let mut app = App::default();
        sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
        let _ = app.update(Message::Settings(settings::Message::ProfileChanged(
            settings::ProfileField::Company,
            "XYZ Logistics".to_string(),
        )));
        let _ = app.update(Message::Settings(settings::Message::SaveProfile));

        assert_eq!(
            app.user().map(|user| user.company.as_str()),
            Some("XYZ Logistics")
        );
    }

    #[test]
    fn preference_change_is_persisted() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        let _ = app.update(Message::Settings(settings::Message::PreferenceChanged(
            Preference::Notification(NotificationSwitch::Sms, true),
        )));

        assert!(app.config().notifications.sms);
        let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(loaded.notifications.sms);
    }

    #[test]
    fn language_change_switches_locale_and_persists() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        let dutch: unic_langid::LanguageIdentifier = "nl".parse().expect("valid locale");
        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            dutch.clone(),
        )));

        assert_eq!(app.i18n.current_locale(), &dutch);
        let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(loaded.general.language.as_deref(), Some("nl"));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sign_in_log_omits_credentials() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut app = App::default();
            sign_in_with(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
        });

        let log = buffer
            .0
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default();
        assert!(log.contains("sign-in requested"));
        assert!(!log.contains(DEMO_EMAIL));
        assert!(!log.contains(DEMO_PASSWORD));
    }

    #[test]
    fn theme_follows_mode_preference() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let mut app = App::with_config(I18n::default(), config, Some(dir.path().to_path_buf()));
        assert_eq!(app.theme().palette().background, light_palette().background);

        let _ = app.update(Message::Settings(settings::Message::PreferenceChanged(
            Preference::ThemeMode(ThemeMode::Dark),
        )));
        assert_eq!(app.theme().palette().background, dark_palette().background);

        // Other preferences leave the resolved theme alone.
        let _ = app.update(Message::Settings(settings::Message::PreferenceChanged(
            Preference::Notification(NotificationSwitch::Sms, true),
        )));
        assert_eq!(app.theme().palette().background, dark_palette().background);
    }
}
