// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::session::UserProfile;
use crate::error::Result;
use crate::ui::communication;
use crate::ui::documents;
use crate::ui::header;
use crate::ui::inventory;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::orders;
use crate::ui::register;
use crate::ui::settings;
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Register(register::Message),
    Sidebar(sidebar::Message),
    Header(header::Message),
    Inventory(inventory::Message),
    Orders(orders::Message),
    Documents(documents::Message),
    Communication(communication::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// The simulated sign-in round-trip completed.
    LoginFinished(Result<UserProfile>),
    /// The simulated registration round-trip completed.
    RegisterFinished(UserProfile),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LOGI_PORTAL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
