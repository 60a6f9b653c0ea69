// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for donor accounts.

use redconnect_domain::validate_password_confirmation;
use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters")]
    TooShort { min_length: usize },

    /// Password and confirmation do not match.
    #[error("Passwords do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum password length, in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Checks the password length.
    ///
    /// # Errors
    ///
    /// Returns `PasswordPolicyError::TooShort` if the password has fewer
    /// than `min_length` characters.
    pub fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }
        Ok(())
    }

    /// Checks a new password and its confirmation, reporting both problems
    /// when both apply.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate
    /// * `confirmation` - The password confirmation
    ///
    /// # Returns
    ///
    /// Every violation, length first. Empty if the password is acceptable.
    #[must_use]
    pub fn violations(&self, password: &str, confirmation: &str) -> Vec<PasswordPolicyError> {
        let mut violations: Vec<PasswordPolicyError> = Vec::new();
        if let Err(err) = self.validate(password) {
            violations.push(err);
        }
        if validate_password_confirmation(password, confirmation).is_err() {
            violations.push(PasswordPolicyError::ConfirmationMismatch);
        }
        violations
    }
}
