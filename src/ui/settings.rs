// SPDX-License-Identifier: MPL-2.0
//! Settings tab: profile, notification switches, language and region, team
//! and security.
//!
//! Preference changes are reported upward as [`Event`]s; the application
//! applies them to its [`Config`] and persists the file. The page itself
//! only keeps the form drafts it edits.

use crate::app::config::{Config, NotificationConfig};
use crate::domain::session::UserProfile;
use crate::domain::settings::{
    sample_sessions, sample_team, ActiveSession, Currency, DateFormat, MemberStatus, ProfileForm,
    TeamMember, TeamRole, Timezone, UnitSystem,
};
use crate::i18n::fluent::I18n;
use crate::ui::components::badge::{badge, Tone};
use crate::ui::components::card::{avatar, page_heading, section};
use crate::ui::components::form::{field, selected_choice, setting_row, tab_bar, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{
    button, pick_list, rule, text, text_input, toggler, Column, Container, Row, Space,
};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Language,
    Team,
    Security,
}

impl SettingsTab {
    const ALL: [SettingsTab; 5] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Language,
        SettingsTab::Team,
        SettingsTab::Security,
    ];

    fn i18n_key(self) -> &'static str {
        match self {
            SettingsTab::Profile => "settings-tab-profile",
            SettingsTab::Notifications => "settings-tab-notifications",
            SettingsTab::Language => "settings-tab-language",
            SettingsTab::Team => "settings-tab-team",
            SettingsTab::Security => "settings-tab-security",
        }
    }
}

/// One of the notification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSwitch {
    Email,
    Push,
    Sms,
    OrderUpdates,
    ShipmentDelays,
    InventoryAlerts,
    DocumentUploads,
    SystemMaintenance,
}

impl NotificationSwitch {
    const CHANNELS: [NotificationSwitch; 3] = [
        NotificationSwitch::Email,
        NotificationSwitch::Push,
        NotificationSwitch::Sms,
    ];

    const TYPES: [NotificationSwitch; 5] = [
        NotificationSwitch::OrderUpdates,
        NotificationSwitch::ShipmentDelays,
        NotificationSwitch::InventoryAlerts,
        NotificationSwitch::DocumentUploads,
        NotificationSwitch::SystemMaintenance,
    ];

    #[must_use]
    pub fn get(self, config: &NotificationConfig) -> bool {
        match self {
            NotificationSwitch::Email => config.email,
            NotificationSwitch::Push => config.push,
            NotificationSwitch::Sms => config.sms,
            NotificationSwitch::OrderUpdates => config.order_updates,
            NotificationSwitch::ShipmentDelays => config.shipment_delays,
            NotificationSwitch::InventoryAlerts => config.inventory_alerts,
            NotificationSwitch::DocumentUploads => config.document_uploads,
            NotificationSwitch::SystemMaintenance => config.system_maintenance,
        }
    }

    pub fn set(self, config: &mut NotificationConfig, enabled: bool) {
        let slot = match self {
            NotificationSwitch::Email => &mut config.email,
            NotificationSwitch::Push => &mut config.push,
            NotificationSwitch::Sms => &mut config.sms,
            NotificationSwitch::OrderUpdates => &mut config.order_updates,
            NotificationSwitch::ShipmentDelays => &mut config.shipment_delays,
            NotificationSwitch::InventoryAlerts => &mut config.inventory_alerts,
            NotificationSwitch::DocumentUploads => &mut config.document_uploads,
            NotificationSwitch::SystemMaintenance => &mut config.system_maintenance,
        };
        *slot = enabled;
    }

    fn i18n_key(self) -> &'static str {
        match self {
            NotificationSwitch::Email => "settings-notify-email",
            NotificationSwitch::Push => "settings-notify-push",
            NotificationSwitch::Sms => "settings-notify-sms",
            NotificationSwitch::OrderUpdates => "settings-notify-order-updates",
            NotificationSwitch::ShipmentDelays => "settings-notify-shipment-delays",
            NotificationSwitch::InventoryAlerts => "settings-notify-inventory-alerts",
            NotificationSwitch::DocumentUploads => "settings-notify-document-uploads",
            NotificationSwitch::SystemMaintenance => "settings-notify-system-maintenance",
        }
    }

    fn description_key(self) -> Option<&'static str> {
        match self {
            NotificationSwitch::Email => Some("settings-notify-email-description"),
            NotificationSwitch::Push => Some("settings-notify-push-description"),
            NotificationSwitch::Sms => Some("settings-notify-sms-description"),
            _ => None,
        }
    }
}

/// A persisted preference changed on this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Notification(NotificationSwitch, bool),
    DateFormat(DateFormat),
    Currency(Currency),
    UnitSystem(UnitSystem),
    Timezone(Timezone),
    ThemeMode(ThemeMode),
}

impl Preference {
    /// Writes this preference into `config`.
    pub fn apply(self, config: &mut Config) {
        match self {
            Preference::Notification(switch, enabled) => {
                switch.set(&mut config.notifications, enabled);
            }
            Preference::DateFormat(format) => config.regional.date_format = format,
            Preference::Currency(currency) => config.regional.currency = currency,
            Preference::UnitSystem(units) => config.regional.unit_system = units,
            Preference::Timezone(timezone) => config.regional.timezone = timezone,
            Preference::ThemeMode(mode) => config.general.theme_mode = mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Company,
    Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

#[derive(Debug, Clone)]
pub struct State {
    tab: SettingsTab,
    profile: ProfileForm,
    current_password: String,
    new_password: String,
    confirm_password: String,
    team: Vec<TeamMember>,
    sessions: Vec<ActiveSession>,
}

impl State {
    /// Settings page for a freshly signed-in user.
    #[must_use]
    pub fn new(user: &UserProfile) -> Self {
        Self {
            tab: SettingsTab::default(),
            profile: ProfileForm::from_user(user),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            team: sample_team(),
            sessions: sample_sessions(),
        }
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileForm {
        &self.profile
    }

    #[must_use]
    pub fn tab(&self) -> SettingsTab {
        self.tab
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&UserProfile::default())
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub config: &'a Config,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(SettingsTab),
    ProfileChanged(ProfileField, String),
    SaveProfile,
    PreferenceChanged(Preference),
    LanguageSelected(LanguageIdentifier),
    PasswordChanged(PasswordField, String),
    ChangeAvatar,
    InviteMember,
    EditMember(String),
    UpdatePassword,
    EnableTwoFactor,
    RevokeSession(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ProfileSaved(UserProfile),
    PreferenceChanged(Preference),
    LanguageChanged(LanguageIdentifier),
    /// Carries the message key naming the feature.
    FeatureUnavailable(&'static str),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => state.tab = tab,
        Message::ProfileChanged(field, value) => {
            let profile = &mut state.profile;
            let slot = match field {
                ProfileField::Name => &mut profile.name,
                ProfileField::Email => &mut profile.email,
                ProfileField::Phone => &mut profile.phone,
                ProfileField::Company => &mut profile.company,
                ProfileField::Role => &mut profile.role,
            };
            *slot = value;
        }
        Message::SaveProfile => return Event::ProfileSaved(state.profile.to_profile()),
        Message::PreferenceChanged(preference) => return Event::PreferenceChanged(preference),
        Message::LanguageSelected(locale) => return Event::LanguageChanged(locale),
        Message::PasswordChanged(field, value) => {
            let slot = match field {
                PasswordField::Current => &mut state.current_password,
                PasswordField::New => &mut state.new_password,
                PasswordField::Confirm => &mut state.confirm_password,
            };
            *slot = value;
        }
        Message::ChangeAvatar => return Event::FeatureUnavailable("settings-change-avatar"),
        Message::InviteMember => return Event::FeatureUnavailable("team-invite"),
        Message::EditMember(_) => return Event::FeatureUnavailable("team-edit"),
        Message::UpdatePassword => return Event::FeatureUnavailable("security-update-password"),
        Message::EnableTwoFactor => return Event::FeatureUnavailable("security-enable-2fa"),
        Message::RevokeSession(_) => return Event::FeatureUnavailable("security-revoke"),
    }
    Event::None
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let tabs = tab_bar(
        SettingsTab::ALL.map(|tab| (tab, i18n.tr(tab.i18n_key()))),
        ctx.state.tab,
        Message::TabSelected,
    );

    let body = match ctx.state.tab {
        SettingsTab::Profile => profile(&ctx),
        SettingsTab::Notifications => notifications(&ctx),
        SettingsTab::Language => language_and_region(&ctx),
        SettingsTab::Team => team(&ctx),
        SettingsTab::Security => security(&ctx),
    };

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(page_heading(
            i18n.tr("settings-title"),
            i18n.tr("settings-description"),
            None,
        ))
        .push(tabs)
        .push(body)
        .into()
}

fn profile_input<'a>(
    i18n: &I18n,
    label_key: &str,
    value: &str,
    target: ProfileField,
) -> Element<'a, Message> {
    field(
        i18n.tr(label_key),
        text_input("", value)
            .on_input(move |value| Message::ProfileChanged(target, value))
            .padding(spacing::XS),
    )
}

fn profile<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let form = &ctx.state.profile;

    let identity = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(avatar(crate::domain::session::initials(&form.name), sizing::AVATAR_MD * 2.0))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text(form.name.clone()).size(typography::TITLE_SM))
                .push(text(form.role.clone()).style(styles::text::muted))
                .push(
                    button(text(i18n.tr("settings-change-avatar")).size(typography::BODY_SM))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::button::secondary)
                        .on_press(Message::ChangeAvatar),
                ),
        );

    let timezones: Vec<Choice<Timezone>> = Timezone::ALL
        .iter()
        .map(|zone| Choice::new(*zone, zone.label().to_string()))
        .collect();
    let current_zone = selected_choice(&timezones, &ctx.config.regional.timezone);
    let timezone = field(
        i18n.tr("settings-profile-timezone"),
        pick_list(timezones, current_zone, |choice| {
            Message::PreferenceChanged(Preference::Timezone(choice.value))
        })
        .width(Length::Fill)
        .padding(spacing::XS),
    );

    let left = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(profile_input(i18n, "settings-profile-name", &form.name, ProfileField::Name))
        .push(profile_input(i18n, "settings-profile-email", &form.email, ProfileField::Email))
        .push(profile_input(i18n, "settings-profile-phone", &form.phone, ProfileField::Phone));
    let right = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(profile_input(
            i18n,
            "settings-profile-company",
            &form.company,
            ProfileField::Company,
        ))
        .push(profile_input(i18n, "settings-profile-role", &form.role, ProfileField::Role))
        .push(timezone);

    let save = button(text(i18n.tr("settings-profile-save")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::SaveProfile);

    section(
        i18n.tr("settings-profile-title"),
        None,
        Column::new()
            .spacing(spacing::LG)
            .push(identity)
            .push(Row::new().spacing(spacing::LG).push(left).push(right))
            .push(Row::new().push(Space::new().width(Length::Fill)).push(save)),
    )
    .into()
}

fn switch_row<'a>(
    i18n: &I18n,
    switch: NotificationSwitch,
    config: &NotificationConfig,
) -> Element<'a, Message> {
    let control = toggler(switch.get(config))
        .on_toggle(move |enabled| Message::PreferenceChanged(Preference::Notification(switch, enabled)));
    setting_row(
        i18n.tr(switch.i18n_key()),
        switch.description_key().map(|key| i18n.tr(key)),
        control,
    )
}

fn notifications<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let config = &ctx.config.notifications;

    let channels = NotificationSwitch::CHANNELS.into_iter().fold(
        Column::new().spacing(spacing::MD),
        |column, switch| column.push(switch_row(i18n, switch, config)),
    );
    let types = NotificationSwitch::TYPES.into_iter().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("settings-notify-types")).size(typography::TITLE_SM)),
        |column, switch| column.push(switch_row(i18n, switch, config)),
    );

    section(
        i18n.tr("settings-notify-title"),
        None,
        Column::new()
            .spacing(spacing::LG)
            .push(channels)
            .push(rule::horizontal(1))
            .push(types),
    )
    .into()
}

/// Display name of a locale, e.g. "Nederlands (nl)".
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let key = format!("language-name-{locale}");
    let name = i18n.tr(&key);
    if name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{name} ({locale})")
    }
}

fn language_and_region<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let regional = &ctx.config.regional;

    let languages: Vec<Choice<LanguageIdentifier>> = i18n
        .available_locales
        .iter()
        .map(|locale| Choice::new(locale.clone(), language_label(i18n, locale)))
        .collect();
    let current_language = selected_choice(&languages, i18n.current_locale());
    let language = pick_list(languages, current_language, |choice| {
        Message::LanguageSelected(choice.value)
    });

    let date_formats: Vec<Choice<DateFormat>> = DateFormat::ALL
        .iter()
        .map(|format| Choice::new(*format, format.label().to_string()))
        .collect();
    let current_format = selected_choice(&date_formats, &regional.date_format);
    let date_format = pick_list(date_formats, current_format, |choice| {
        Message::PreferenceChanged(Preference::DateFormat(choice.value))
    });

    let currencies: Vec<Choice<Currency>> = Currency::ALL
        .iter()
        .map(|currency| Choice::new(*currency, currency.label().to_string()))
        .collect();
    let current_currency = selected_choice(&currencies, &regional.currency);
    let currency = pick_list(currencies, current_currency, |choice| {
        Message::PreferenceChanged(Preference::Currency(choice.value))
    });

    let unit_systems: Vec<Choice<UnitSystem>> = UnitSystem::ALL
        .iter()
        .map(|units| Choice::new(*units, i18n.tr(units.i18n_key())))
        .collect();
    let current_units = selected_choice(&unit_systems, &regional.unit_system);
    let units = pick_list(unit_systems, current_units, |choice| {
        Message::PreferenceChanged(Preference::UnitSystem(choice.value))
    });

    let theme_modes: Vec<Choice<ThemeMode>> = ThemeMode::ALL
        .iter()
        .map(|mode| Choice::new(*mode, i18n.tr(mode.i18n_key())))
        .collect();
    let current_mode = selected_choice(&theme_modes, &ctx.config.general.theme_mode);
    let theme = pick_list(theme_modes, current_mode, |choice| {
        Message::PreferenceChanged(Preference::ThemeMode(choice.value))
    });

    let width = Length::Fixed(sizing::FORM_FIELD_WIDTH);
    let rows = Column::new()
        .spacing(spacing::MD)
        .push(setting_row(
            i18n.tr("settings-language"),
            Some(i18n.tr("settings-language-description")),
            language.width(width),
        ))
        .push(setting_row(
            i18n.tr("settings-date-format"),
            None,
            date_format.width(width),
        ))
        .push(setting_row(
            i18n.tr("settings-currency"),
            None,
            currency.width(width),
        ))
        .push(setting_row(
            i18n.tr("settings-units"),
            None,
            units.width(width),
        ))
        .push(setting_row(
            i18n.tr("settings-theme"),
            None,
            theme.width(width),
        ));

    section(
        i18n.tr("settings-language-title"),
        Some(icons::globe().into()),
        rows,
    )
    .into()
}

fn team<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let invite = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::plus())
            .push(text(i18n.tr("team-invite"))),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::InviteMember);

    let members = ctx.state.team.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, member| column.push(member_row(i18n, ctx.config.regional.date_format, member)),
    );

    section(i18n.tr("team-title"), Some(invite.into()), members).into()
}

fn member_row<'a>(
    i18n: &I18n,
    date_format: DateFormat,
    member: &TeamMember,
) -> Element<'a, Message> {
    let role_tone = match member.role {
        TeamRole::Admin => Tone::Danger,
        TeamRole::Editor => Tone::Info,
        TeamRole::Viewer => Tone::Neutral,
    };
    let status_tone = match member.status {
        MemberStatus::Active => Tone::Success,
        MemberStatus::Inactive => Tone::Neutral,
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(member.name.clone()).size(typography::BODY_LG))
        .push(
            text(member.email.clone())
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            text(i18n.tr_with_args(
                "team-last-login",
                &[("time", date_format.render_time(member.last_login).as_str())],
            ))
            .size(typography::CAPTION)
            .style(styles::text::muted),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(avatar(crate::domain::session::initials(&member.name), sizing::AVATAR_MD))
            .push(details)
            .push(badge(i18n.tr(member.role.i18n_key()), role_tone))
            .push(badge(i18n.tr(member.status.i18n_key()), status_tone))
            .push(
                button(text(i18n.tr("team-edit")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::secondary)
                    .on_press(Message::EditMember(member.email.clone())),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn password_input<'a>(
    i18n: &I18n,
    placeholder_key: &str,
    value: &str,
    target: PasswordField,
) -> Element<'a, Message> {
    text_input(&i18n.tr(placeholder_key), value)
        .secure(true)
        .on_input(move |value| Message::PasswordChanged(target, value))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::FORM_FIELD_WIDTH))
        .into()
}

fn security<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let password = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("security-change-password")).size(typography::TITLE_SM))
        .push(password_input(
            i18n,
            "security-current-password",
            &state.current_password,
            PasswordField::Current,
        ))
        .push(password_input(
            i18n,
            "security-new-password",
            &state.new_password,
            PasswordField::New,
        ))
        .push(password_input(
            i18n,
            "security-confirm-password",
            &state.confirm_password,
            PasswordField::Confirm,
        ))
        .push(
            button(text(i18n.tr("security-update-password")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::UpdatePassword),
        );

    let two_factor = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr("security-2fa-title")).size(typography::TITLE_SM))
        .push(setting_row(
            i18n.tr("security-2fa-description"),
            Some(i18n.tr("security-2fa-disabled")),
            button(text(i18n.tr("security-enable-2fa")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::EnableTwoFactor),
        ));

    let sessions = state.sessions.iter().enumerate().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("security-sessions-title")).size(typography::TITLE_SM)),
        |column, (index, session)| {
            let control: Element<'a, Message> = if session.current {
                badge(i18n.tr("security-session-active"), Tone::Success)
            } else {
                button(text(i18n.tr("security-revoke")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::secondary)
                    .on_press(Message::RevokeSession(index))
                    .into()
            };
            column.push(setting_row(
                i18n.tr(session.title_key),
                Some(session.device.clone()),
                control,
            ))
        },
    );

    section(
        i18n.tr("security-title"),
        Some(icons::shield().into()),
        Column::new()
            .spacing(spacing::LG)
            .push(password)
            .push(rule::horizontal(1))
            .push(two_factor)
            .push(rule::horizontal(1))
            .push(sessions),
    )
    .into()
}
