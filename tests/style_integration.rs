// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use logi_portal::ui::components::badge::Tone;
    use logi_portal::ui::design_tokens::{opacity, palette, sizing, spacing};
    use logi_portal::ui::styles::{button, container};
    use logi_portal::ui::theming::{dark_palette, light_palette, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = ThemeMode::Light.theme();

        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::secondary(&theme, iced::widget::button::Status::Hovered);
        let _ = button::nav_item(true)(&theme, iced::widget::button::Status::Active);
        let _ = container::card(&theme);
        let _ = container::bubble(true)(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::TINT;
        let _ = sizing::SIDEBAR_WIDTH;
    }

    #[test]
    fn spacing_scale_is_increasing() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn theming_switches_correctly() {
        let light = light_palette();
        let dark = dark_palette();

        assert!(light.background.r > dark.background.r);
        assert!(light.text.r < dark.text.r);
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert!(!matches!(ThemeMode::Dark.theme(), Theme::Light));
    }

    #[test]
    fn status_tones_are_distinct() {
        let tones = [
            Tone::Success,
            Tone::Warning,
            Tone::Alert,
            Tone::Danger,
            Tone::Info,
            Tone::Accent,
        ];
        for (index, tone) in tones.iter().enumerate() {
            for other in &tones[index + 1..] {
                assert_ne!(tone.color(), other.color(), "{tone:?} vs {other:?}");
            }
        }
    }
}
