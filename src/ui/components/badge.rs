// SPDX-License-Identifier: MPL-2.0
//! Status pills and counters.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Container};
use iced::{Color, Element};

/// Color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    /// Yellow: pending, medium priority, low stock.
    Warning,
    /// Orange: under review, in-progress work.
    Alert,
    Danger,
    Info,
    /// Purple: processing orders.
    Accent,
    Neutral,
}

impl Tone {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tone::Success => palette::SUCCESS_500,
            Tone::Warning => palette::WARNING_500,
            Tone::Alert => palette::ALERT_500,
            Tone::Danger => palette::ERROR_500,
            Tone::Info => palette::INFO_500,
            Tone::Accent => palette::ACCENT_500,
            Tone::Neutral => palette::GRAY_500,
        }
    }
}

/// Tinted pill with a short label.
pub fn badge<'a, Message: 'a>(label: String, tone: Tone) -> Element<'a, Message> {
    Container::new(text(label).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge(tone.color()))
        .into()
}

/// Solid round counter, e.g. the unread alert count.
pub fn counter<'a, Message: 'a>(count: usize, tone: Tone) -> Element<'a, Message> {
    Container::new(text(count.to_string()).size(typography::CAPTION))
        .padding([0.0, spacing::XS - 2.0])
        .style(styles::container::counter(tone.color()))
        .into()
}
