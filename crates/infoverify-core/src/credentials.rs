//! Credential form model and validation.
//!
//! Validation is purely local: nothing here talks to a server. Checks run in a
//! fixed order and stop at the first failure, so the user always sees one
//! message at a time.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn is_register(self) -> bool {
        matches!(self, AuthMode::Register)
    }
}

/// Form input. `confirm_password` is only consulted in register mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Credentials {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.confirm_password.is_empty()
    }
}

/// Everything that can go wrong when submitting the auth form.
///
/// The `Display` text is shown verbatim in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all required fields")]
    MissingRequiredField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    MissingConfirmation,
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// The (simulated) request failed. Unreachable with the built-in simulation.
    #[error("{}", submission_message(.0))]
    SubmissionFailed(String),
}

fn submission_message(message: &str) -> &str {
    if message.is_empty() {
        "An error occurred. Please try again."
    } else {
        message
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Validates the form for the given mode.
pub fn validate(credentials: &Credentials, mode: AuthMode) -> Result<(), AuthError> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(AuthError::MissingRequiredField);
    }
    if !is_valid_email(&credentials.email) {
        return Err(AuthError::InvalidEmail);
    }
    if !is_valid_password(&credentials.password) {
        return Err(AuthError::PasswordTooShort);
    }
    if mode.is_register() {
        if credentials.confirm_password.is_empty() {
            return Err(AuthError::MissingConfirmation);
        }
        if credentials.password != credentials.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
    }
    Ok(())
}
