// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use redconnect::CoreError;
use redconnect_domain::DomainError;
use thiserror::Error;

/// Authentication errors raised by the auth stub.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration or profile update with an email another account owns.
    #[error("An account with this email already exists")]
    EmailTaken { email: String },

    /// Unknown email or wrong password. The two are not distinguished.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The operation needs a signed-in donor.
    #[error("You must be signed in")]
    NotSignedIn,

    /// The session token is unknown or expired.
    #[error("Session expired")]
    SessionExpired,

    /// Hashing or verification failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },
}

/// A single failing account-form field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("NIK must be 16 digits")]
    NikLength,

    #[error("NIK must contain only numbers")]
    NikNotNumeric,

    /// `Unknown` is accepted by the wizard but not offered on the profile.
    #[error("Please select a valid blood type")]
    BloodTypeNotOffered,

    #[error(transparent)]
    Password(#[from] PasswordPolicyError),
}

impl FormError {
    /// The form field the message is shown under.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } => "name",
            Self::InvalidEmail => "email",
            Self::NikLength | Self::NikNotNumeric => "nik",
            Self::BloodTypeNotOffered => "bloodType",
            Self::Password(PasswordPolicyError::TooShort { .. }) => "password",
            Self::Password(PasswordPolicyError::ConfirmationMismatch) => "confirmPassword",
        }
    }
}

/// API-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Every failing field of a submitted form.
    #[error("{} form field(s) are invalid", .errors.len())]
    InvalidForm { errors: Vec<FormError> },

    #[error(transparent)]
    Wizard(#[from] CoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<Vec<FormError>> for ApiError {
    fn from(errors: Vec<FormError>) -> Self {
        Self::InvalidForm { errors }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::InvalidForm {
            errors: vec![FormError::Password(err)],
        }
    }
}
