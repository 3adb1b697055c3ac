// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn rounded(color: Color, width: f32) -> Border {
    Border {
        color,
        width,
        radius: radius::MD.into(),
    }
}

/// Filled brand button for the main action of a form or card.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_600, 1.0),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_700, 1.0),
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_700, 1.0),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::DISABLED,
                ..palette::PRIMARY_600
            })),
            text_color: Color {
                a: 0.8,
                ..WHITE
            },
            border: rounded(Color::TRANSPARENT, 0.0),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined button for secondary actions (Export, Filter, Cancel).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (bg, hover_bg, text_color) = if is_dark {
        (palette::GRAY_800, palette::GRAY_700, palette::GRAY_100)
    } else {
        (WHITE, palette::GRAY_100, palette::GRAY_700)
    };
    let edge = if is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: rounded(edge, 1.0),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg)),
            text_color,
            border: rounded(palette::PRIMARY_400, 1.0),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg)),
            text_color: palette::GRAY_400,
            border: rounded(edge, 1.0),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless text button (links, show/hide toggles, dismiss crosses).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::GRAY_400
    };

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
            _ => None,
        },
        text_color: match status {
            button::Status::Disabled => palette::GRAY_400,
            _ => text_color,
        },
        border: rounded(Color::TRANSPARENT, 0.0),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Brand-colored link without background.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
            button::Status::Disabled => palette::GRAY_400,
            button::Status::Active => palette::PRIMARY_600,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar entry. The active entry is tinted with the brand color.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_dark = theme.extended_palette().is_dark;
        let idle_text = if is_dark {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };

        if active {
            return button::Style {
                background: Some(Background::Color(if is_dark {
                    palette::PRIMARY_700
                } else {
                    palette::PRIMARY_100
                })),
                text_color: if is_dark { WHITE } else { palette::PRIMARY_700 },
                border: rounded(Color::TRANSPARENT, 0.0),
                shadow: shadow::NONE,
                snap: true,
            };
        }

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(if is_dark {
                    palette::GRAY_800
                } else {
                    palette::GRAY_100
                }))
            }
            _ => None,
        };

        button::Style {
            background,
            text_color: idle_text,
            border: rounded(Color::TRANSPARENT, 0.0),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Sub-tab header. The active tab gets the brand color and a filled chip.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return selected(theme, status);
        }
        ghost(theme, status)
    }
}

/// Style for selected/active button state in toggle groups.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_500, 1.0),
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: rounded(palette::PRIMARY_600, 1.0),
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Red button for destructive actions (Sign out, Revoke).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        },
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::ERROR_500,
        border: rounded(palette::ERROR_500, 1.0),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_600))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn disabled_primary_is_translucent() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn active_nav_item_differs_from_idle() {
        let active = nav_item(true)(&Theme::Light, button::Status::Active);
        let idle = nav_item(false)(&Theme::Light, button::Status::Active);
        assert_ne!(active.background, idle.background);
        assert!(idle.background.is_none());
    }

    #[test]
    fn ghost_button_highlights_on_hover() {
        let normal = ghost(&Theme::Dark, button::Status::Active);
        let hover = ghost(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn inactive_tab_matches_ghost() {
        let tab_style = tab(false)(&Theme::Light, button::Status::Active);
        let ghost_style = ghost(&Theme::Light, button::Status::Active);
        assert_eq!(tab_style.background, ghost_style.background);
    }
}
