// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: a stack of cards in the top-right corner of the window,
//! each with a colored accent strip for its severity.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length, Theme};

/// Width of the severity strip on the leading edge of a toast.
const ACCENT_STRIP: f32 = 4.0;

pub struct Toast;

impl Toast {
    /// Renders one toast card.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let strip = Container::new(Space::new().width(ACCENT_STRIP))
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(accent.into()),
                ..Default::default()
            });

        let body = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                icons::sized(severity_glyph(notification.severity()), sizing::ICON_MD)
                    .style(styles::text::colored(accent)),
            )
            .push(
                text(localized_message(notification, i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(
                button(icons::sized(icons::cross(), sizing::ICON_SM))
                    .on_press(Message::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(styles::button::ghost),
            );

        Container::new(
            Row::new()
                .push(strip)
                .push(Container::new(body).padding(spacing::SM).width(Length::Fill))
                .height(Length::Shrink),
        )
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
    }

    /// Renders every visible toast, newest on top, pinned under the header.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if !manager.has_notifications() {
            return Space::new().into();
        }

        let stack = manager.visible().fold(
            Column::new().spacing(spacing::XS).align_x(Horizontal::Right),
            |column, notification| column.push(Self::view(notification, i18n)),
        );

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top)
            .padding([sizing::HEADER_HEIGHT + spacing::XS, spacing::MD])
            .into()
    }
}

/// Resolves the notification text, substituting its arguments if any.
fn localized_message(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn severity_glyph(severity: Severity) -> Text<'static> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning => icons::warning(),
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: iced::Border {
            color: Color { a: 0.4, ..accent },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn card_border_is_tinted_with_accent() {
        let style = card_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color.r, palette::SUCCESS_500.r);
        assert!(style.border.color.a < 1.0);
        assert!(style.background.is_some());
    }

    #[test]
    fn message_arguments_are_substituted() {
        let i18n = I18n::default();
        let toast = Notification::info("feature-unavailable").with_arg("feature", "Export");
        let message = localized_message(&toast, &i18n);
        assert!(message.contains("Export"));
        assert!(!message.starts_with("MISSING"));
    }
}
