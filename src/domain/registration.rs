// SPDX-License-Identifier: MPL-2.0
//! Registration form rules: password strength, confirmation and validity.

use super::session::UserProfile;

/// Minimum strength score required to submit the form.
pub const MIN_SUBMIT_STRENGTH: u8 = 75;

/// Password length that earns the length criterion.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Job role picked on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    LogisticsManager,
    SupplyChainManager,
    WarehouseManager,
    OperationsManager,
    ProcurementManager,
    TransportCoordinator,
    Other,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 7] = [
        Role::LogisticsManager,
        Role::SupplyChainManager,
        Role::WarehouseManager,
        Role::OperationsManager,
        Role::ProcurementManager,
        Role::TransportCoordinator,
        Role::Other,
    ];

    /// English label stored on the session profile.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::LogisticsManager => "Logistics Manager",
            Role::SupplyChainManager => "Supply Chain Manager",
            Role::WarehouseManager => "Warehouse Manager",
            Role::OperationsManager => "Operations Manager",
            Role::ProcurementManager => "Procurement Manager",
            Role::TransportCoordinator => "Transport Coordinator",
            Role::Other => "Other",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Role::LogisticsManager => "role-logistics-manager",
            Role::SupplyChainManager => "role-supply-chain-manager",
            Role::WarehouseManager => "role-warehouse-manager",
            Role::OperationsManager => "role-operations-manager",
            Role::ProcurementManager => "role-procurement-manager",
            Role::TransportCoordinator => "role-transport-coordinator",
            Role::Other => "role-other",
        }
    }
}

/// Coarse strength bucket shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            StrengthLevel::Strong
        } else if score >= 50 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "register-strength-weak",
            StrengthLevel::Medium => "register-strength-medium",
            StrengthLevel::Strong => "register-strength-strong",
        }
    }
}

/// Scores a password from 0 to 100 in steps of 25.
///
/// One step each for: length >= 8, an ASCII uppercase letter, an ASCII
/// lowercase letter, an ASCII digit.
#[must_use]
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0;
    if password.chars().count() >= MIN_PASSWORD_LEN {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 25;
    }
    strength
}

/// Controlled state of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: Option<Role>,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
    pub accept_privacy: bool,
}

impl RegistrationForm {
    #[must_use]
    pub fn password_strength(&self) -> u8 {
        password_strength(&self.password)
    }

    /// Confirmation is non-empty and equal to the password.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        !self.confirm_password.is_empty() && self.password == self.confirm_password
    }

    fn all_fields_filled(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.company,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .all(|value| !value.is_empty())
            && self.role.is_some()
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.all_fields_filled()
            && self.passwords_match()
            && self.accept_terms
            && self.accept_privacy
            && self.password_strength() >= MIN_SUBMIT_STRENGTH
    }

    /// Builds the session profile for a registered user.
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: format!("{} {}", self.first_name, self.last_name),
            role: self.role.map(Role::label).unwrap_or_default().to_string(),
            company: self.company.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+31 20 000 0000".into(),
            company: "Analytical Engines BV".into(),
            role: Some(Role::WarehouseManager),
            password: "Secure123".into(),
            confirm_password: "Secure123".into(),
            accept_terms: true,
            accept_privacy: true,
        }
    }

    #[test]
    fn strength_counts_each_criterion() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 25);
        assert_eq!(password_strength("abcdefgh"), 50);
        assert_eq!(password_strength("Abcdefgh"), 75);
        assert_eq!(password_strength("Abcdefg1"), 100);
        assert_eq!(password_strength("A1"), 50);
    }

    #[test]
    fn strength_levels_follow_thresholds() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(25), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(50), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(75), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::Strong);
    }

    #[test]
    fn empty_confirmation_never_matches() {
        let form = RegistrationForm::default();
        assert!(!form.passwords_match());
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(filled_form().is_valid());
    }

    #[test]
    fn missing_agreement_invalidates_form() {
        let mut form = filled_form();
        form.accept_privacy = false;
        assert!(!form.is_valid());
    }

    #[test]
    fn weak_password_invalidates_form() {
        let mut form = filled_form();
        form.password = "secure".into();
        form.confirm_password = "secure".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn mismatched_confirmation_invalidates_form() {
        let mut form = filled_form();
        form.confirm_password = "Secure124".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn missing_role_invalidates_form() {
        let mut form = filled_form();
        form.role = None;
        assert!(!form.is_valid());
    }

    #[test]
    fn profile_joins_names_and_uses_role_label() {
        let profile = filled_form().to_profile();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.role, "Warehouse Manager");
        assert_eq!(profile.company, "Analytical Engines BV");
        assert_eq!(profile.initials(), "AL");
    }
}
