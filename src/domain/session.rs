// SPDX-License-Identifier: MPL-2.0
//! Session user and demo authentication.
//!
//! There is no identity provider: a single hardcoded demo account is
//! accepted and everything else is rejected with
//! [`AuthError::InvalidCredentials`].

use crate::error::{AuthError, Result};

/// Email of the demo account shown on the login screen.
pub const DEMO_EMAIL: &str = "demo@loendersloot.com";

/// Password of the demo account shown on the login screen.
pub const DEMO_PASSWORD: &str = "demo123";

/// The signed-in user as shown in the sidebar, header and dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub company: String,
}

impl UserProfile {
    /// Profile attached to the demo account.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            role: "Logistics Manager".to_string(),
            company: "ABC Manufacturing".to_string(),
        }
    }

    /// First letter of every name part, e.g. `"John Doe"` -> `"JD"`.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::demo()
    }
}

/// First letter of every whitespace-separated part of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Checks a credential pair against the demo account.
///
/// Comparison is exact: no trimming, no case folding.
pub fn authenticate(email: &str, password: &str) -> Result<UserProfile> {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(UserProfile::demo())
    } else {
        Err(AuthError::InvalidCredentials.into())
    }
}

/// A login form is only submitted once both fields hold something.
#[must_use]
pub fn can_submit(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn demo_credentials_authenticate() {
        let profile = authenticate(DEMO_EMAIL, DEMO_PASSWORD).expect("demo login");
        assert_eq!(profile, UserProfile::demo());
        assert_eq!(profile.company, "ABC Manufacturing");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let rejected = authenticate(DEMO_EMAIL, "demo1234");
        assert!(matches!(
            rejected,
            Err(Error::Auth(AuthError::InvalidCredentials))
        ));
        assert_eq!(
            rejected.err().map(|err| err.i18n_key()),
            Some("login-error-invalid-credentials")
        );
    }

    #[test]
    fn comparison_is_exact() {
        assert!(authenticate("Demo@Loendersloot.com", DEMO_PASSWORD).is_err());
        assert!(authenticate(" demo@loendersloot.com", DEMO_PASSWORD).is_err());
    }

    #[test]
    fn initials_take_first_letter_of_each_part() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Lisa  Maria Rodriguez"), "LMR");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn empty_fields_cannot_be_submitted() {
        assert!(!can_submit("", "x"));
        assert!(!can_submit("x", ""));
        assert!(can_submit("x", "y"));
    }
}
