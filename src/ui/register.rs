// SPDX-License-Identifier: MPL-2.0
//! Registration page.

use crate::domain::registration::{RegistrationForm, Role, StrengthLevel};
use crate::domain::session::UserProfile;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::Tone;
use crate::ui::components::card::{card, pitch_panel};
use crate::ui::components::form::{selected_choice, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, checkbox, pick_list, progress_bar, scrollable, text, text_input, Column, Container,
    Row, Space,
};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    form: RegistrationForm,
    show_password: bool,
    show_confirm: bool,
    is_loading: bool,
}

impl State {
    #[must_use]
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone, Copy)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    RoleSelected(Role),
    ToggleShowPassword,
    ToggleShowConfirm,
    AcceptTerms(bool),
    AcceptPrivacy(bool),
    Submit,
    BackToLogin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Profile to sign in with once the registration delay elapsed.
    Submit(UserProfile),
    BackToLogin,
}

pub fn update(state: &mut State, message: Message) -> Event {
    if state.is_loading {
        return Event::None;
    }

    match message {
        Message::FieldChanged(field, value) => {
            let form = &mut state.form;
            let target = match field {
                Field::FirstName => &mut form.first_name,
                Field::LastName => &mut form.last_name,
                Field::Email => &mut form.email,
                Field::Phone => &mut form.phone,
                Field::Company => &mut form.company,
                Field::Password => &mut form.password,
                Field::ConfirmPassword => &mut form.confirm_password,
            };
            *target = value;
        }
        Message::RoleSelected(role) => state.form.role = Some(role),
        Message::ToggleShowPassword => state.show_password = !state.show_password,
        Message::ToggleShowConfirm => state.show_confirm = !state.show_confirm,
        Message::AcceptTerms(accepted) => state.form.accept_terms = accepted,
        Message::AcceptPrivacy(accepted) => state.form.accept_privacy = accepted,
        Message::Submit => {
            if !state.form.is_valid() {
                return Event::None;
            }
            state.is_loading = true;
            return Event::Submit(state.form.to_profile());
        }
        Message::BackToLogin => return Event::BackToLogin,
    }
    Event::None
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .push(
            Container::new(scrollable(form_column(&ctx)))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL)
                .center_x(Length::Fill)
                .style(styles::container::page),
        )
        .push(benefits_panel(ctx.i18n))
        .height(Length::Fill)
        .into()
}

fn input<'a>(
    placeholder: &str,
    value: &str,
    field: Field,
    enabled: bool,
) -> iced::widget::TextInput<'a, Message> {
    let widget = text_input(placeholder, value).padding(spacing::SM);
    if enabled {
        widget.on_input(move |value| Message::FieldChanged(field, value))
    } else {
        widget
    }
}

fn form_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let form = &state.form;
    let enabled = !state.is_loading;

    let heading = card(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(icons::sized(icons::truck(), sizing::ICON_XL).style(styles::text::brand))
            .push(text(i18n.tr("register-title")).size(typography::TITLE_LG))
            .push(
                text(i18n.tr("register-subtitle"))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            ),
    );

    let names = Row::new()
        .spacing(spacing::SM)
        .push(input(
            &i18n.tr("register-first-name"),
            &form.first_name,
            Field::FirstName,
            enabled,
        ))
        .push(input(
            &i18n.tr("register-last-name"),
            &form.last_name,
            Field::LastName,
            enabled,
        ));

    let roles: Vec<Choice<Role>> = Role::ALL
        .iter()
        .map(|role| Choice::new(*role, i18n.tr(role.i18n_key())))
        .collect();
    let selected_role = form.role.and_then(|role| selected_choice(&roles, &role));
    let role_picker = pick_list(roles, selected_role, |choice| {
        Message::RoleSelected(choice.value)
    })
    .placeholder(i18n.tr("register-role-placeholder"))
    .width(Length::Fill)
    .padding(spacing::SM);

    let password = password_row(
        input(
            &i18n.tr("register-password"),
            &form.password,
            Field::Password,
            enabled,
        )
        .secure(!state.show_password),
        state.show_password,
        enabled.then_some(Message::ToggleShowPassword),
    );

    let confirm = password_row(
        input(
            &i18n.tr("register-confirm-password"),
            &form.confirm_password,
            Field::ConfirmPassword,
            enabled,
        )
        .secure(!state.show_confirm),
        state.show_confirm,
        enabled.then_some(Message::ToggleShowConfirm),
    );

    let mut fields = Column::new()
        .spacing(spacing::SM)
        .push(names)
        .push(input(&i18n.tr("register-email"), &form.email, Field::Email, enabled))
        .push(input(&i18n.tr("register-phone"), &form.phone, Field::Phone, enabled))
        .push(input(
            &i18n.tr("register-company"),
            &form.company,
            Field::Company,
            enabled,
        ))
        .push(role_picker)
        .push(password);

    if !form.password.is_empty() {
        fields = fields.push(strength_meter(i18n, form.password_strength()));
    }
    fields = fields.push(confirm);
    if !form.confirm_password.is_empty() {
        fields = fields.push(match_indicator(i18n, form.passwords_match()));
    }

    let mut terms = checkbox(form.accept_terms)
        .label(i18n.tr("register-accept-terms"))
        .text_size(typography::BODY_SM);
    let mut privacy = checkbox(form.accept_privacy)
        .label(i18n.tr("register-accept-privacy"))
        .text_size(typography::BODY_SM);
    if enabled {
        terms = terms.on_toggle(Message::AcceptTerms);
        privacy = privacy.on_toggle(Message::AcceptPrivacy);
    }

    let submit_label = if state.is_loading {
        i18n.tr("register-submitting")
    } else {
        i18n.tr("register-submit")
    };
    let submit = button(
        text(submit_label)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary)
    .on_press_maybe((enabled && form.is_valid()).then_some(Message::Submit));

    let back = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            text(i18n.tr("register-have-account"))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            button(text(i18n.tr("register-sign-in")).size(typography::BODY_SM))
                .padding(0.0)
                .style(styles::button::link)
                .on_press_maybe(enabled.then_some(Message::BackToLogin)),
        );

    let body = Column::new()
        .spacing(spacing::MD)
        .push(fields)
        .push(terms)
        .push(privacy)
        .push(submit)
        .push(back);

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::AUTH_CARD_WIDTH)
        .push(heading)
        .push(card(body))
        .into()
}

fn password_row<'a>(
    field: iced::widget::TextInput<'a, Message>,
    revealed: bool,
    on_toggle: Option<Message>,
) -> Element<'a, Message> {
    let glyph = if revealed {
        icons::eye_closed()
    } else {
        icons::eye()
    };
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(field)
        .push(
            button(glyph)
                .padding(spacing::XS)
                .style(styles::button::ghost)
                .on_press_maybe(on_toggle),
        )
        .into()
}

fn strength_meter<'a>(i18n: &I18n, score: u8) -> Element<'a, Message> {
    let level = StrengthLevel::from_score(score);
    let tone = match level {
        StrengthLevel::Strong => Tone::Success,
        StrengthLevel::Medium => Tone::Warning,
        StrengthLevel::Weak => Tone::Danger,
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .push(
                    text(i18n.tr("register-strength-label"))
                        .size(typography::CAPTION)
                        .style(styles::text::muted),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    text(i18n.tr(level.i18n_key()))
                        .size(typography::CAPTION)
                        .style(styles::text::colored(tone.color())),
                ),
        )
        .push(
            progress_bar(0.0..=100.0, f32::from(score))
                .girth(sizing::PROGRESS_HEIGHT),
        )
        .into()
}

fn match_indicator<'a>(i18n: &I18n, matches: bool) -> Element<'a, Message> {
    let (glyph, key, tone) = if matches {
        (icons::checkmark(), "register-passwords-match", Tone::Success)
    } else {
        (icons::cross(), "register-passwords-mismatch", Tone::Danger)
    };
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(glyph.style(styles::text::colored(tone.color())))
        .push(
            text(i18n.tr(key))
                .size(typography::CAPTION)
                .style(styles::text::colored(tone.color())),
        )
        .into()
}

fn benefits_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    let benefits = [
        (icons::chart(), "register-benefit-efficiency", "register-benefit-efficiency-description"),
        (icons::chat(), "register-benefit-support", "register-benefit-support-description"),
        (icons::checkmark(), "register-benefit-results", "register-benefit-results-description"),
    ];

    let trust = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("register-trusted-by")).size(typography::BODY_SM))
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(text(i18n.tr("register-trust-iso")).size(typography::CAPTION))
                .push(text(i18n.tr("register-trust-gdpr")).size(typography::CAPTION))
                .push(text(i18n.tr("register-trust-aeo")).size(typography::CAPTION)),
        );

    pitch_panel(
        i18n.tr("register-headline"),
        i18n.tr("register-pitch"),
        benefits
            .into_iter()
            .map(|(glyph, title, body)| (glyph, i18n.tr(title), i18n.tr(body))),
        trust,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State) {
        let fields = [
            (Field::FirstName, "Ada"),
            (Field::LastName, "Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::Phone, "+31 20 000 0000"),
            (Field::Company, "Analytical Engines BV"),
            (Field::Password, "Secure123"),
            (Field::ConfirmPassword, "Secure123"),
        ];
        for (field, value) in fields {
            update(state, Message::FieldChanged(field, value.to_string()));
        }
        update(state, Message::RoleSelected(Role::TransportCoordinator));
        update(state, Message::AcceptTerms(true));
    }

    #[test]
    fn submit_requires_every_agreement() {
        let mut state = State::default();
        fill(&mut state);
        assert_eq!(update(&mut state, Message::Submit), Event::None);

        update(&mut state, Message::AcceptPrivacy(true));
        let Event::Submit(profile) = update(&mut state, Message::Submit) else {
            panic!("valid form should submit");
        };
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.role, "Transport Coordinator");
        assert_eq!(profile.company, "Analytical Engines BV");
        assert!(state.is_loading());
    }

    #[test]
    fn input_is_frozen_while_loading() {
        let mut state = State::default();
        fill(&mut state);
        update(&mut state, Message::AcceptPrivacy(true));
        update(&mut state, Message::Submit);

        update(
            &mut state,
            Message::FieldChanged(Field::FirstName, "Grace".to_string()),
        );
        assert_eq!(state.form().first_name, "Ada");
        assert_eq!(update(&mut state, Message::BackToLogin), Event::None);

        state.finish_loading();
        assert_eq!(update(&mut state, Message::BackToLogin), Event::BackToLogin);
    }

    #[test]
    fn weak_password_blocks_submit() {
        let mut state = State::default();
        fill(&mut state);
        update(&mut state, Message::AcceptPrivacy(true));
        for field in [Field::Password, Field::ConfirmPassword] {
            update(&mut state, Message::FieldChanged(field, "password".to_string()));
        }
        assert_eq!(update(&mut state, Message::Submit), Event::None);
    }
}
