// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Preferences are written back to `settings.toml` as soon as they change.

use super::config::{self, Config};
use crate::ui::notifications::Notification;
use std::path::PathBuf;

/// Saves `config`, returning the warning toast to show when that fails.
///
/// Without an explicit `base_dir`, unit tests skip the write so they never
/// touch the real settings file.
pub fn persist_config(config: &Config, base_dir: Option<PathBuf>) -> Option<Notification> {
    if cfg!(test) && base_dir.is_none() {
        return None;
    }

    match config::save_with_override(config, base_dir) {
        Ok(()) => {
            tracing::debug!("settings saved");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            Some(Notification::warning(error.i18n_key()))
        }
    }
}
