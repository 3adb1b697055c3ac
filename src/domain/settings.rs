// SPDX-License-Identifier: MPL-2.0
//! Account settings: regional preferences, profile form, team and sessions.
//!
//! Regional enums are persisted in `settings.toml`, hence the serde derives.

use super::at;
use super::session::UserProfile;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How calendar dates are rendered across the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `dd/mm/yyyy`
    #[default]
    DayMonthYear,
    /// `mm/dd/yyyy`
    MonthDayYear,
    /// `yyyy-mm-dd`
    YearMonthDay,
}

impl DateFormat {
    pub const ALL: [DateFormat; 3] = [
        DateFormat::DayMonthYear,
        DateFormat::MonthDayYear,
        DateFormat::YearMonthDay,
    ];

    /// Pattern as shown in the settings dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::YearMonthDay => "YYYY-MM-DD",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::YearMonthDay => "%Y-%m-%d",
        }
    }

    /// Renders `date` in this format.
    #[must_use]
    pub fn render(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    /// Renders the date part of `stamp` in this format, followed by `HH:MM`.
    #[must_use]
    pub fn render_time(self, stamp: NaiveDateTime) -> String {
        format!("{} {}", self.render(stamp.date()), stamp.format("%H:%M"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Gbp];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Currency::Eur => "EUR (€)",
            Currency::Usd => "USD ($)",
            Currency::Gbp => "GBP (£)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            UnitSystem::Metric => "settings-units-metric",
            UnitSystem::Imperial => "settings-units-imperial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timezone {
    #[default]
    #[serde(rename = "Europe/Amsterdam")]
    Amsterdam,
    #[serde(rename = "Europe/Berlin")]
    Berlin,
    #[serde(rename = "Europe/London")]
    London,
    #[serde(rename = "Europe/Paris")]
    Paris,
}

impl Timezone {
    pub const ALL: [Timezone; 4] = [
        Timezone::Amsterdam,
        Timezone::Berlin,
        Timezone::London,
        Timezone::Paris,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Timezone::Amsterdam => "Europe/Amsterdam (CET)",
            Timezone::Berlin => "Europe/Berlin (CET)",
            Timezone::London => "Europe/London (GMT)",
            Timezone::Paris => "Europe/Paris (CET)",
        }
    }
}

/// Editable copy of the user's profile on the Profile sub-tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
    pub phone: String,
}

impl ProfileForm {
    /// Seeds the form from the session user, with demo contact details.
    #[must_use]
    pub fn from_user(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            email: "john.doe@company.com".to_string(),
            role: user.role.clone(),
            company: user.company.clone(),
            phone: "+31 20 123 4567".to_string(),
        }
    }

    /// Profile the session adopts when the form is saved.
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            company: self.company.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Admin,
    Editor,
    Viewer,
}

impl TeamRole {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TeamRole::Admin => "team-role-admin",
            TeamRole::Editor => "team-role-editor",
            TeamRole::Viewer => "team-role-viewer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MemberStatus::Active => "team-status-active",
            MemberStatus::Inactive => "team-status-inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub status: MemberStatus,
    pub last_login: NaiveDateTime,
}

/// A signed-in device listed on the Security sub-tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub title_key: &'static str,
    pub device: String,
    pub current: bool,
}

#[must_use]
pub fn sample_team() -> Vec<TeamMember> {
    let member = |name: &str, email: &str, role, status, last_login| TeamMember {
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login,
    };
    vec![
        member(
            "Sarah Johnson",
            "sarah.johnson@company.com",
            TeamRole::Admin,
            MemberStatus::Active,
            at(2024, 1, 15, 14, 30),
        ),
        member(
            "Mike Chen",
            "mike.chen@company.com",
            TeamRole::Editor,
            MemberStatus::Active,
            at(2024, 1, 15, 10, 15),
        ),
        member(
            "Lisa Rodriguez",
            "lisa.rodriguez@company.com",
            TeamRole::Viewer,
            MemberStatus::Inactive,
            at(2024, 1, 12, 16, 45),
        ),
    ]
}

#[must_use]
pub fn sample_sessions() -> Vec<ActiveSession> {
    vec![
        ActiveSession {
            title_key: "security-session-current",
            device: "Chrome on Windows • Amsterdam, NL".to_string(),
            current: true,
        },
        ActiveSession {
            title_key: "security-session-mobile",
            device: "Safari on iPhone • 2 days ago".to_string(),
            current: false,
        },
    ]
}
