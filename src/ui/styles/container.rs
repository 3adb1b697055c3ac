// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Surfaces derive from the active `Theme`, so cards and panels stay readable
//! in both light and dark modes without hard-coding colors per mode.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn surface(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::GRAY_800
    } else {
        palette::WHITE
    }
}

fn outline(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    }
}

/// Returns `color` at the badge/banner tint opacity.
#[must_use]
pub fn tint(color: Color) -> Color {
    Color {
        a: opacity::TINT,
        ..color
    }
}

/// Content card with a hairline border.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: outline(theme),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Sidebar and header chrome.
pub fn chrome(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: outline(theme),
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Window background behind cards.
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Solid brand panel (login features panel, dashboard welcome banner).
pub fn brand_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Tinted callout with a colored border (error banner, demo hint, info note).
pub fn callout(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint(accent))),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Pill badge: tinted background, colored text.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tint(accent))),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

/// Solid circular counter (sidebar unread count, bell count).
pub fn counter(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(accent)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Round avatar showing user initials.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Table header row.
pub fn table_header(theme: &Theme) -> container::Style {
    let background = if theme.extended_palette().is_dark {
        palette::GRAY_900
    } else {
        palette::GRAY_50
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette::GRAY_500),
        ..Default::default()
    }
}

/// Table body row separated by a hairline.
pub fn table_row(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: outline(theme),
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Chat bubble. Own messages use the brand color, others a neutral tint.
pub fn bubble(own: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (background, text) = if own {
            (palette::PRIMARY_600, palette::WHITE)
        } else if theme.extended_palette().is_dark {
            (palette::GRAY_700, palette::GRAY_100)
        } else {
            (palette::GRAY_100, palette::GRAY_900)
        };
        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// Dashed-looking drop zone for the informational upload panel.
pub fn drop_zone(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_adapts_to_theme() {
        let light = card(&Theme::Light);
        let dark = card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn badge_uses_tinted_accent() {
        let style = badge(palette::SUCCESS_500)(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::SUCCESS_500));
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::TINT),
            other => panic!("expected tinted background, got {other:?}"),
        }
    }

    #[test]
    fn own_bubble_uses_brand_color() {
        let style = bubble(true)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
    }
}
