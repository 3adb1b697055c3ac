// SPDX-License-Identifier: MPL-2.0
//! Login page: credential form on the left, product pitch on the right.
//!
//! The page only collects input. Credential checking happens in the
//! application after the simulated network delay, which then reports back
//! through [`State::finish_loading`] and the `error` field of the context.

use crate::domain::session::{self, DEMO_EMAIL, DEMO_PASSWORD};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::card::{card, pitch_panel};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row};
use iced::{Element, Length};

/// Controlled input state of the login form.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    show_password: bool,
    is_loading: bool,
}

impl State {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Called once the pending sign-in resolved, whatever the outcome.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub error: Option<&'a Error>,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    ToggleShowPassword,
    Submit,
    ShowRegister,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Credentials to check once the sign-in delay elapsed.
    Submit { email: String, password: String },
    ShowRegister,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            Event::None
        }
        Message::ToggleShowPassword => {
            state.show_password = !state.show_password;
            Event::None
        }
        Message::Submit => {
            if state.is_loading || !session::can_submit(&state.email, &state.password) {
                return Event::None;
            }
            state.is_loading = true;
            Event::Submit {
                email: state.email.clone(),
                password: state.password.clone(),
            }
        }
        Message::ShowRegister if state.is_loading => Event::None,
        Message::ShowRegister => Event::ShowRegister,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .push(
            Container::new(scrollable(form_column(&ctx)))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(styles::container::page),
        )
        .push(feature_panel(ctx.i18n))
        .height(Length::Fill)
        .into()
}

fn form_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let heading = card(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(icons::sized(icons::truck(), sizing::ICON_XL).style(styles::text::brand))
            .push(text(i18n.tr("login-title")).size(typography::TITLE_LG))
            .push(
                text(i18n.tr("login-subtitle"))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            ),
    );

    let mut email = text_input(&i18n.tr("login-email-placeholder"), &state.email)
        .padding(spacing::SM)
        .size(typography::BODY_LG);
    let mut password = text_input(&i18n.tr("login-password-placeholder"), &state.password)
        .secure(!state.show_password)
        .padding(spacing::SM)
        .size(typography::BODY_LG);
    // Without `on_input` the inputs render disabled.
    if !state.is_loading {
        email = email
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit);
        password = password
            .on_input(Message::PasswordChanged)
            .on_submit(Message::Submit);
    }

    let reveal = button(if state.show_password {
        icons::eye_closed()
    } else {
        icons::eye()
    })
    .padding(spacing::XS)
    .style(styles::button::ghost)
    .on_press_maybe((!state.is_loading).then_some(Message::ToggleShowPassword));

    let submit_label = if state.is_loading {
        i18n.tr("login-submitting")
    } else {
        i18n.tr("login-submit")
    };
    let submit = button(
        text(submit_label)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe((!state.is_loading).then_some(Message::Submit));

    let mut form = Column::new().spacing(spacing::MD);
    if let Some(error) = ctx.error {
        form = form.push(
            Container::new(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(icons::warning().style(styles::text::error))
                    .push(text(i18n.tr(error.i18n_key())).style(styles::text::error)),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::callout(palette::ERROR_500)),
        );
    }
    form = form
        .push(email)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(password)
                .push(reveal),
        )
        .push(submit)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(
                    text(i18n.tr("login-new-here"))
                        .size(typography::BODY_SM)
                        .style(styles::text::muted),
                )
                .push(
                    button(text(i18n.tr("login-create-account")).size(typography::BODY_SM))
                        .padding(0.0)
                        .style(styles::button::link)
                        .on_press_maybe((!state.is_loading).then_some(Message::ShowRegister)),
                ),
        );

    let demo_hint = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                text(i18n.tr("login-demo-access"))
                    .size(typography::BODY_SM)
                    .style(styles::text::muted),
            )
            .push(text(format!("{DEMO_EMAIL} / {DEMO_PASSWORD}")).size(typography::BODY_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::callout(palette::ACCENT_500));

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::AUTH_CARD_WIDTH)
        .push(heading)
        .push(card(form))
        .push(demo_hint)
        .into()
}

fn feature_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    let features = [
        (icons::truck(), "login-feature-tracking", "login-feature-tracking-description"),
        (icons::chart(), "login-feature-analytics", "login-feature-analytics-description"),
        (icons::globe(), "login-feature-network", "login-feature-network-description"),
        (icons::shield(), "login-feature-security", "login-feature-security-description"),
    ];

    let stats = [
        ("50+", "login-stat-countries"),
        ("99.9%", "login-stat-uptime"),
        ("24/7", "login-stat-support"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XL), |row, (figure, label)| {
        row.push(
            Column::new()
                .align_x(Horizontal::Center)
                .push(text(figure).size(typography::TITLE_LG))
                .push(text(i18n.tr(label)).size(typography::BODY_SM)),
        )
    });

    pitch_panel(
        i18n.tr("login-headline"),
        i18n.tr("login-pitch"),
        features
            .into_iter()
            .map(|(glyph, title, body)| (glyph, i18n.tr(title), i18n.tr(body))),
        stats,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> State {
        let mut state = State::default();
        update(&mut state, Message::EmailChanged(email.to_string()));
        update(&mut state, Message::PasswordChanged(password.to_string()));
        state
    }

    #[test]
    fn empty_fields_do_not_submit() {
        let mut state = filled("demo@loendersloot.com", "");
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_enters_loading_and_forwards_credentials() {
        let mut state = filled("a@b.c", "secret");
        let event = update(&mut state, Message::Submit);
        assert_eq!(
            event,
            Event::Submit {
                email: "a@b.c".to_string(),
                password: "secret".to_string()
            }
        );
        assert!(state.is_loading());
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut state = filled("a@b.c", "secret");
        update(&mut state, Message::Submit);
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert_eq!(update(&mut state, Message::ShowRegister), Event::None);
        state.finish_loading();
        assert_eq!(update(&mut state, Message::ShowRegister), Event::ShowRegister);
    }

    #[test]
    fn toggle_reveals_password() {
        let mut state = State::default();
        update(&mut state, Message::ToggleShowPassword);
        assert!(state.show_password);
        update(&mut state, Message::ToggleShowPassword);
        assert!(!state.show_password);
    }
}
