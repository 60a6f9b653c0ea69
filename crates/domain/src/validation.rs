// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::center::{CenterDirectory, DonationCenter};
use crate::error::DomainError;
use crate::types::{Appointment, BloodType, DonationRequest, Field, Gender, TimeSlot};
use time::{Date, Duration};

/// Youngest accepted donor age, inclusive.
pub const MIN_DONOR_AGE: i64 = 17;
/// Oldest accepted donor age, inclusive.
pub const MAX_DONOR_AGE: i64 = 65;
/// Minimum donor weight in kilograms, inclusive.
pub const MIN_DONOR_WEIGHT_KG: i64 = 50;
/// Minimum length of the full name.
pub const MIN_FULL_NAME_LEN: usize = 2;
/// Minimum length of the contact phone number.
pub const MIN_CONTACT_PHONE_LEN: usize = 10;
/// How many days ahead an appointment may be booked.
pub const BOOKING_WINDOW_DAYS: i64 = 30;

/// Reads the leading integer of a text field.
///
/// Leading whitespace is skipped, one optional sign is honoured and the
/// run of ASCII digits that follows is read; anything after it is ignored.
/// Values beyond the `i64` range saturate.
///
/// # Returns
///
/// * `Some(value)` if at least one digit was found
/// * `None` otherwise
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed: &str = raw.trim_start();
    let (negative, unsigned): (bool, &str) = trimmed.strip_prefix('-').map_or_else(
        || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        |rest| (true, rest),
    );

    let end: usize = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits: &str = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.bytes().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Validates the donor's full name.
///
/// # Errors
///
/// Returns `DomainError::InvalidFullName` if the name as entered is
/// shorter than two characters.
pub fn validate_full_name(raw: &str) -> Result<(), DomainError> {
    if raw.chars().count() < MIN_FULL_NAME_LEN {
        return Err(DomainError::InvalidFullName);
    }
    Ok(())
}

/// Validates the donor's age.
///
/// # Returns
///
/// * `Ok(age)` if the value parses to an integer in `17..=65`
///
/// # Errors
///
/// Returns `DomainError::InvalidAge` if the value is not a number or is
/// out of range.
pub fn validate_age(raw: &str) -> Result<u8, DomainError> {
    parse_leading_int(raw)
        .filter(|age| (MIN_DONOR_AGE..=MAX_DONOR_AGE).contains(age))
        .and_then(|age| u8::try_from(age).ok())
        .ok_or_else(|| DomainError::InvalidAge {
            value: raw.to_string(),
        })
}

/// Validates the donor's weight in kilograms.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeight` if the value is not a number or
/// is below 50.
pub fn validate_weight(raw: &str) -> Result<u32, DomainError> {
    parse_leading_int(raw)
        .filter(|weight| *weight >= MIN_DONOR_WEIGHT_KG)
        .map(|weight| u32::try_from(weight).unwrap_or(u32::MAX))
        .ok_or_else(|| DomainError::InvalidWeight {
            value: raw.to_string(),
        })
}

/// Validates the contact phone number.
///
/// Only the length is checked.
///
/// # Errors
///
/// Returns `DomainError::InvalidContactPhone` if the number as entered is
/// shorter than ten characters.
pub fn validate_contact_phone(raw: &str) -> Result<(), DomainError> {
    if raw.chars().count() < MIN_CONTACT_PHONE_LEN {
        return Err(DomainError::InvalidContactPhone);
    }
    Ok(())
}

/// # Errors
///
/// Returns `DomainError::MissingGender` if nothing was selected.
pub const fn validate_gender(value: Option<Gender>) -> Result<Gender, DomainError> {
    match value {
        Some(gender) => Ok(gender),
        None => Err(DomainError::MissingGender),
    }
}

/// Validates the blood type selection.
///
/// `Unknown` is an accepted selection.
///
/// # Errors
///
/// Returns `DomainError::MissingBloodType` if nothing was selected.
pub const fn validate_blood_type(value: Option<BloodType>) -> Result<BloodType, DomainError> {
    match value {
        Some(blood_type) => Ok(blood_type),
        None => Err(DomainError::MissingBloodType),
    }
}

/// Resolves the selected donation center against the directory.
///
/// # Errors
///
/// Returns an error if:
/// - No center was selected
/// - The selected id is not in the directory
pub fn validate_donation_center<'a>(
    id: Option<&str>,
    directory: &'a CenterDirectory,
) -> Result<&'a DonationCenter, DomainError> {
    let id: &str = id.ok_or(DomainError::MissingDonationCenter)?;
    directory
        .find(id)
        .ok_or_else(|| DomainError::UnknownDonationCenter { id: id.to_string() })
}

/// Returns the inclusive range of bookable dates for `today`.
#[must_use]
pub fn booking_window(today: Date) -> (Date, Date) {
    let latest: Date = today
        .checked_add(Duration::days(BOOKING_WINDOW_DAYS))
        .unwrap_or(Date::MAX);
    (today, latest)
}

/// Validates the donation date against the booking window.
///
/// # Arguments
///
/// * `value` - The selected date, if any
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns an error if:
/// - No date was selected
/// - The date is before `today`
/// - The date is more than 30 days after `today`
pub fn validate_donation_date(value: Option<Date>, today: Date) -> Result<Date, DomainError> {
    let date: Date = value.ok_or(DomainError::MissingDonationDate)?;
    let (earliest, latest): (Date, Date) = booking_window(today);
    if date < earliest || date > latest {
        return Err(DomainError::DonationDateOutOfRange {
            date,
            earliest,
            latest,
        });
    }
    Ok(date)
}

/// # Errors
///
/// Returns `DomainError::MissingTimeSlot` if nothing was selected.
pub const fn validate_time_slot(value: Option<TimeSlot>) -> Result<TimeSlot, DomainError> {
    match value {
        Some(slot) => Ok(slot),
        None => Err(DomainError::MissingTimeSlot),
    }
}

/// # Errors
///
/// Returns `DomainError::HealthConsentRequired` unless consent is `true`.
pub const fn validate_health_consent(value: bool) -> Result<(), DomainError> {
    if value {
        Ok(())
    } else {
        Err(DomainError::HealthConsentRequired)
    }
}

/// Checks that a password confirmation matches the password exactly.
///
/// # Errors
///
/// Returns `DomainError::PasswordMismatch` if the values differ.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), DomainError> {
    if password != confirmation {
        return Err(DomainError::PasswordMismatch);
    }
    Ok(())
}

/// Runs the validator for a single field of the request.
///
/// # Errors
///
/// Returns the field's validation error, if any.
pub fn validate_field(
    request: &DonationRequest,
    field: Field,
    directory: &CenterDirectory,
    today: Date,
) -> Result<(), DomainError> {
    match field {
        Field::FullName => validate_full_name(request.full_name()),
        Field::Age => validate_age(request.age()).map(|_| ()),
        Field::Weight => validate_weight(request.weight()).map(|_| ()),
        Field::Gender => validate_gender(request.gender()).map(|_| ()),
        Field::BloodType => validate_blood_type(request.blood_type()).map(|_| ()),
        Field::ContactPhone => validate_contact_phone(request.contact_phone()),
        Field::DonationCenter => {
            validate_donation_center(request.donation_center(), directory).map(|_| ())
        }
        Field::DonationDate => validate_donation_date(request.donation_date(), today).map(|_| ()),
        Field::TimeSlot => validate_time_slot(request.time_slot()).map(|_| ()),
        Field::HealthConsent => validate_health_consent(request.health_consent()),
    }
}

/// Validates a group of fields and returns every failure, in field order.
#[must_use]
pub fn validate_fields(
    request: &DonationRequest,
    fields: &[Field],
    directory: &CenterDirectory,
    today: Date,
) -> Vec<DomainError> {
    fields
        .iter()
        .filter_map(|field| validate_field(request, *field, directory, today).err())
        .collect()
}

/// Validates the whole request and converts it into an [`Appointment`].
///
/// # Errors
///
/// Returns every field error found if any field is invalid, including a
/// missing health consent.
pub fn validate_request(
    request: &DonationRequest,
    directory: &CenterDirectory,
    today: Date,
) -> Result<Appointment, Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    let full_name: Option<()> = keep(validate_full_name(request.full_name()), &mut errors);
    let age: Option<u8> = keep(validate_age(request.age()), &mut errors);
    let weight_kg: Option<u32> = keep(validate_weight(request.weight()), &mut errors);
    let gender: Option<Gender> = keep(validate_gender(request.gender()), &mut errors);
    let blood_type: Option<BloodType> =
        keep(validate_blood_type(request.blood_type()), &mut errors);
    let phone: Option<()> = keep(validate_contact_phone(request.contact_phone()), &mut errors);
    let center: Option<&DonationCenter> = keep(
        validate_donation_center(request.donation_center(), directory),
        &mut errors,
    );
    let date: Option<Date> = keep(
        validate_donation_date(request.donation_date(), today),
        &mut errors,
    );
    let time_slot: Option<TimeSlot> = keep(validate_time_slot(request.time_slot()), &mut errors);
    let consent: Option<()> = keep(
        validate_health_consent(request.health_consent()),
        &mut errors,
    );

    match (
        full_name, age, weight_kg, gender, blood_type, phone, center, date, time_slot, consent,
    ) {
        (
            Some(()),
            Some(age),
            Some(weight_kg),
            Some(gender),
            Some(blood_type),
            Some(()),
            Some(center),
            Some(date),
            Some(time_slot),
            Some(()),
        ) if errors.is_empty() => Ok(Appointment {
            full_name: request.full_name().to_string(),
            age,
            weight_kg,
            gender,
            blood_type,
            contact_phone: request.contact_phone().to_string(),
            center: center.clone(),
            date,
            time_slot,
        }),
        _ => Err(errors),
    }
}

fn keep<T>(result: Result<T, DomainError>, errors: &mut Vec<DomainError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}
