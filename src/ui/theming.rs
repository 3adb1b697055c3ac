// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the matching Iced palettes.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Portal defaults to light when detection fails
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings-theme-light",
            ThemeMode::Dark => "settings-theme-dark",
            ThemeMode::System => "settings-theme-system",
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::custom(String::from("LogiPortal Dark"), dark_palette())
        } else {
            Theme::custom(String::from("LogiPortal Light"), light_palette())
        }
    }
}

/// Brand palette on a light slate background.
#[must_use]
pub fn light_palette() -> Palette {
    let mut colors = Theme::Light.palette();
    colors.background = palette::GRAY_50;
    colors.text = palette::GRAY_900;
    colors.primary = palette::PRIMARY_600;
    colors.success = palette::SUCCESS_500;
    colors.danger = palette::ERROR_500;
    colors
}

/// Brand palette on a dark slate background.
#[must_use]
pub fn dark_palette() -> Palette {
    let mut colors = Theme::Dark.palette();
    colors.background = palette::GRAY_900;
    colors.text = palette::GRAY_100;
    colors.primary = palette::PRIMARY_500;
    colors.success = palette::SUCCESS_500;
    colors.danger = palette::ERROR_500;
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_has_light_background() {
        assert!(light_palette().background.r > 0.9);
    }

    #[test]
    fn dark_palette_has_dark_background() {
        assert!(dark_palette().background.r < 0.2);
    }

    #[test]
    fn both_palettes_share_brand_hue() {
        assert!(light_palette().primary.b > light_palette().primary.r);
        assert!(dark_palette().primary.b > dark_palette().primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the desktop, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_build_matching_themes() {
        assert_eq!(
            ThemeMode::Dark.theme().palette().background,
            dark_palette().background
        );
        assert_eq!(
            ThemeMode::Light.theme().palette().background,
            light_palette().background
        );
    }
}
