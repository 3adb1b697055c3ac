// SPDX-License-Identifier: MPL-2.0
//! Location of the preferences directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`LOGI_PORTAL_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "LogiPortal";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOGI_PORTAL_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/LogiPortal/`
/// - macOS: `~/Library/Application Support/LogiPortal/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LogiPortal\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
