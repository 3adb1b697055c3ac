// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::{Color, Theme};

/// Secondary text (subtitles, timestamps, table metadata).
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(if theme.extended_palette().is_dark {
            palette::GRAY_400
        } else {
            palette::GRAY_500
        }),
    }
}

/// Text in a fixed accent color.
pub fn colored(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}

/// Brand-colored emphasis.
pub fn brand(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::PRIMARY_600),
    }
}

/// Error message text.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
