// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration, login and profile forms.
//!
//! Each form reports every failing field at once so the view can show all
//! messages together.

use crate::error::FormError;
use crate::password_policy::PasswordPolicy;
use redconnect_domain::{BloodType, Donor};
use serde::{Deserialize, Serialize};

/// Minimum name length on the registration form.
pub const MIN_REGISTRATION_NAME_LEN: usize = 2;

/// Minimum name length on the profile form.
pub const MIN_PROFILE_NAME_LEN: usize = 3;

/// Length of a national identity number.
pub const NIK_LEN: usize = 16;

/// Returns whether a string looks like an email address.
///
/// Requires a single `@` with a non-empty local part and a dotted domain,
/// and no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email: &str = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn check_name(name: &str, min: usize, errors: &mut Vec<FormError>) {
    if name.trim().chars().count() < min {
        errors.push(FormError::NameTooShort { min });
    }
}

fn check_email(email: &str, errors: &mut Vec<FormError>) {
    if !is_valid_email(email) {
        errors.push(FormError::InvalidEmail);
    }
}

fn finish(errors: Vec<FormError>) -> Result<(), Vec<FormError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value: &str = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// The sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validates every field.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), Vec<FormError>> {
        let mut errors: Vec<FormError> = Vec::new();
        check_name(&self.name, MIN_REGISTRATION_NAME_LEN, &mut errors);
        check_email(&self.email, &mut errors);
        errors.extend(
            policy
                .violations(&self.password, &self.confirm_password)
                .into_iter()
                .map(FormError::from),
        );
        finish(errors)
    }
}

/// The sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validates every field.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), Vec<FormError>> {
        let mut errors: Vec<FormError> = Vec::new();
        check_email(&self.email, &mut errors);
        if let Err(err) = policy.validate(&self.password) {
            errors.push(err.into());
        }
        finish(errors)
    }
}

/// The profile editor. Empty optional fields clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub nik: String,
    #[serde(default)]
    pub blood_type: Option<BloodType>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

impl ProfileForm {
    /// Prefills the form from a donor's current profile.
    #[must_use]
    pub fn from_donor(donor: &Donor) -> Self {
        Self {
            name: donor.name.clone(),
            email: donor.email.clone(),
            nik: donor.nik.clone().unwrap_or_default(),
            blood_type: donor.blood_type,
            phone_number: donor.phone_number.clone().unwrap_or_default(),
            address: donor.address.clone().unwrap_or_default(),
        }
    }

    /// Validates every field.
    ///
    /// The NIK is optional; when present it reports at most one message,
    /// length first.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in form order.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors: Vec<FormError> = Vec::new();
        check_name(&self.name, MIN_PROFILE_NAME_LEN, &mut errors);
        check_email(&self.email, &mut errors);

        let nik: &str = self.nik.trim();
        if !nik.is_empty() {
            if nik.chars().count() != NIK_LEN {
                errors.push(FormError::NikLength);
            } else if !nik.chars().all(|c| c.is_ascii_digit()) {
                errors.push(FormError::NikNotNumeric);
            }
        }

        if self.blood_type.is_some_and(|blood_type| !blood_type.is_known()) {
            errors.push(FormError::BloodTypeNotOffered);
        }
        finish(errors)
    }

    /// Writes the form's values onto a donor.
    ///
    /// The email is stored trimmed and lowercased.
    pub fn apply_to(&self, donor: &mut Donor) {
        donor.name = self.name.trim().to_string();
        donor.email = self.email.trim().to_lowercase();
        donor.nik = non_empty(&self.nik);
        donor.blood_type = self.blood_type;
        donor.phone_number = non_empty(&self.phone_number);
        donor.address = non_empty(&self.address);
    }
}
