// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod center;
mod error;
mod history;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use center::{CenterDirectory, DonationCenter};
pub use error::DomainError;
pub use history::{
    DEFERRAL_MONTHS, DonationRecord, DonationStatus, DonorStats, LIVES_PER_DONATION, add_months,
    compute_donor_stats, next_upcoming, sample_history, sort_newest_first,
};

// Re-export public types
pub use types::{
    Appointment, BloodType, DonationRequest, Donor, Field, Gender, TimeSlot, long_date,
};
pub use validation::{
    BOOKING_WINDOW_DAYS, MAX_DONOR_AGE, MIN_CONTACT_PHONE_LEN, MIN_DONOR_AGE, MIN_DONOR_WEIGHT_KG,
    MIN_FULL_NAME_LEN, booking_window, parse_leading_int, validate_age, validate_blood_type,
    validate_contact_phone, validate_donation_center, validate_donation_date, validate_field,
    validate_fields, validate_full_name, validate_gender, validate_health_consent,
    validate_password_confirmation, validate_request, validate_time_slot, validate_weight,
};
