// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Auth Error: {0}")]
    Auth(#[from] AuthError),
}

/// Authentication failures surfaced on the login screen.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair does not match the demo account.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "login-error-invalid-credentials",
        }
    }
}

impl Error {
    /// Returns the i18n message key used when the error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Auth(err) => err.i18n_key(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn auth_error_converts_into_error() {
        let err: Error = AuthError::InvalidCredentials.into();
        assert!(matches!(err, Error::Auth(AuthError::InvalidCredentials)));
        assert_eq!(err.i18n_key(), "login-error-invalid-credentials");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let io = Error::Io(String::new()).i18n_key();
        let config = Error::Config(String::new()).i18n_key();
        let auth = Error::Auth(AuthError::InvalidCredentials).i18n_key();
        assert_ne!(io, config);
        assert_ne!(config, auth);
        assert_ne!(io, auth);
    }
}
