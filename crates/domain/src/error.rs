// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Field;

/// Errors produced by field validation.
///
/// The `Display` output of every field variant is the message shown
/// inline next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Full name is missing or too short.
    InvalidFullName,
    /// Age is not a number or falls outside the donor age range.
    InvalidAge {
        /// The raw value as entered.
        value: String,
    },
    /// Weight is not a number or below the donor minimum.
    InvalidWeight {
        /// The raw value as entered.
        value: String,
    },
    /// Contact phone number is too short.
    InvalidContactPhone,
    /// No gender was selected.
    MissingGender,
    /// No blood type was selected.
    MissingBloodType,
    /// No donation center was selected.
    MissingDonationCenter,
    /// The selected center is not part of the directory.
    UnknownDonationCenter {
        /// The unresolved center identifier.
        id: String,
    },
    /// No donation date was selected.
    MissingDonationDate,
    /// The donation date is outside the booking window.
    DonationDateOutOfRange {
        /// The rejected date.
        date: time::Date,
        /// The first bookable date.
        earliest: time::Date,
        /// The last bookable date.
        latest: time::Date,
    },
    /// No time slot was selected.
    MissingTimeSlot,
    /// The health attestation was not given.
    HealthConsentRequired,
    /// Password confirmation does not match the password.
    PasswordMismatch,
    /// A selection value could not be parsed.
    UnknownOption {
        /// The field the value was entered for.
        field: Field,
        /// The unparseable value.
        value: String,
    },
}

impl DomainError {
    /// Returns the donation form field this error belongs to.
    ///
    /// Errors raised by sibling forms (password confirmation) have no
    /// donation field.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidFullName => Some(Field::FullName),
            Self::InvalidAge { .. } => Some(Field::Age),
            Self::InvalidWeight { .. } => Some(Field::Weight),
            Self::InvalidContactPhone => Some(Field::ContactPhone),
            Self::MissingGender => Some(Field::Gender),
            Self::MissingBloodType => Some(Field::BloodType),
            Self::MissingDonationCenter | Self::UnknownDonationCenter { .. } => {
                Some(Field::DonationCenter)
            }
            Self::MissingDonationDate | Self::DonationDateOutOfRange { .. } => {
                Some(Field::DonationDate)
            }
            Self::MissingTimeSlot => Some(Field::TimeSlot),
            Self::HealthConsentRequired => Some(Field::HealthConsent),
            Self::PasswordMismatch => None,
            Self::UnknownOption { field, .. } => Some(*field),
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFullName => write!(f, "Full name is required"),
            Self::InvalidAge { .. } => {
                write!(f, "You must be between 17 and 65 years old to donate.")
            }
            Self::InvalidWeight { .. } => write!(f, "You must weigh at least 50kg to donate."),
            Self::InvalidContactPhone => write!(f, "Please enter a valid phone number"),
            Self::MissingGender => write!(f, "Please select your gender"),
            Self::MissingBloodType => write!(f, "Please select your blood type"),
            Self::MissingDonationCenter | Self::UnknownDonationCenter { .. } => {
                write!(f, "Please select a donation center")
            }
            Self::MissingDonationDate => write!(f, "Please select a date for your donation"),
            Self::DonationDateOutOfRange { .. } => {
                write!(
                    f,
                    "Donation date must be between today and 30 days from today"
                )
            }
            Self::MissingTimeSlot => write!(f, "Please select a time slot"),
            Self::HealthConsentRequired => {
                write!(f, "You must confirm that you are in good health")
            }
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
            Self::UnknownOption { field, value } => {
                write!(f, "'{value}' is not a valid {}", field.label())
            }
        }
    }
}

impl std::error::Error for DomainError {}
