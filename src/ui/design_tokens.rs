// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every screen of the portal.

## Organization

- **Palette**: Brand, neutral and status colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes (sidebar, header, cards, avatars)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Card and toast shadows

## Examples

```
use logi_portal::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let tinted = Color {
    a: opacity::TINT,
    ..palette::SUCCESS_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals (slate scale)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Status colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.918, 0.702, 0.031);
    pub const ALERT_500: Color = Color::from_rgb(0.976, 0.451, 0.086);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const ACCENT_500: Color = Color::from_rgb(0.545, 0.361, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Badge and banner backgrounds tinted with a status color
    pub const TINT: f32 = 0.15;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const DISABLED: f32 = 0.45;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 14.0;
    pub const ICON_MD: f32 = 18.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 32.0;

    // Avatars
    pub const AVATAR_SM: f32 = 32.0;
    pub const AVATAR_MD: f32 = 40.0;

    // Shell layout
    pub const SIDEBAR_WIDTH: f32 = 256.0;
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Cards and panels
    pub const AUTH_CARD_WIDTH: f32 = 440.0;
    pub const FEATURE_PANEL_WIDTH: f32 = 520.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const FILTER_WIDTH: f32 = 200.0;
    pub const FORM_FIELD_WIDTH: f32 = 360.0;

    // Progress bars
    pub const PROGRESS_HEIGHT: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale:
    //! - Titles: Page and card headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Hero headline on the login features panel
    pub const DISPLAY: f32 = 36.0;

    /// Large title - Page headings, stat values
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - App name, card headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 17.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 15.0;

    /// Standard body - Most UI text, table cells
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, table rows, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents, active tab underline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.12,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::AVATAR_MD > sizing::AVATAR_SM);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn status_colors_are_distinct() {
        let colors = [
            palette::ERROR_500,
            palette::WARNING_500,
            palette::ALERT_500,
            palette::SUCCESS_500,
            palette::ACCENT_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
