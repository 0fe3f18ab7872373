use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum password length accepted by the sign-up form.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("email must not be empty")]
    BlankEmail,

    #[error("password must not be empty")]
    BlankPassword,

    #[error("password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

/// Email/password pair submitted to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Credentials for signing in.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError::BlankEmail` or `CredentialsError::BlankPassword`.
    pub fn for_login(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let email = email.into().trim().to_string();
        let password = password.into();
        if email.is_empty() {
            return Err(CredentialsError::BlankEmail);
        }
        if password.is_empty() {
            return Err(CredentialsError::BlankPassword);
        }
        Ok(Self { email, password })
    }

    /// Credentials for creating an account; enforces `MIN_PASSWORD_LEN`.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` if the email is blank or the password is too short.
    pub fn for_registration(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let creds = Self::for_login(email, password)?;
        if creds.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(creds)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token issued by the backend on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token; blank values are not a session.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}
