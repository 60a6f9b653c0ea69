// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Donation history records and the dashboard statistics derived from them.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// Lives counted as impacted by one completed donation.
pub const LIVES_PER_DONATION: usize = 3;

/// Months a donor must wait after a completed donation.
pub const DEFERRAL_MONTHS: i32 = 3;

/// Standard whole-blood donation volume in millilitres.
const STANDARD_DONATION_ML: u32 = 450;

/// Status of a recorded donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Booked, not yet attended.
    Scheduled,
    Completed,
    /// Attended, awaiting lab processing.
    Pending,
    Cancelled,
}

impl DonationStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of a donor's donation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: String,
    pub date: Date,
    pub location: String,
    /// Volume collected in millilitres; zero for donations not yet taken.
    pub amount_ml: u32,
    pub status: DonationStatus,
}

/// Dashboard statistics for a donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorStats {
    /// Number of completed donations.
    pub total_donations: usize,
    /// Estimated lives impacted.
    pub lives_impacted: usize,
    /// Date of the most recent completed donation.
    pub last_donation: Option<Date>,
    /// First date the donor may donate again.
    pub next_eligible: Option<Date>,
}

impl DonorStats {
    /// Returns whether the donor may donate on `today`.
    #[must_use]
    pub fn is_eligible_on(&self, today: Date) -> bool {
        self.next_eligible.is_none_or(|next| today >= next)
    }
}

/// Shifts a date by whole calendar months.
///
/// When the target month is shorter, the day is clamped to its last day
/// (January 31 plus one month is the last day of February).
///
/// # Returns
///
/// * `None` if the result is outside the supported date range
#[must_use]
pub fn add_months(date: Date, months: i32) -> Option<Date> {
    let month_index: i32 = date
        .year()
        .checked_mul(12)?
        .checked_add(i32::from(u8::from(date.month())) - 1)?
        .checked_add(months)?;
    let year: i32 = month_index.div_euclid(12);
    let month_number: u8 = u8::try_from(month_index.rem_euclid(12) + 1).ok()?;
    let month: Month = Month::try_from(month_number).ok()?;

    (28..=date.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
        .or_else(|| Date::from_calendar_date(year, month, date.day()).ok())
}

/// Computes the dashboard statistics from a donor's records.
///
/// Only completed donations count towards the totals and eligibility.
#[must_use]
pub fn compute_donor_stats(records: &[DonationRecord]) -> DonorStats {
    let completed: Vec<&DonationRecord> = records
        .iter()
        .filter(|record| record.status == DonationStatus::Completed)
        .collect();

    let last_donation: Option<Date> = completed.iter().map(|record| record.date).max();
    let next_eligible: Option<Date> =
        last_donation.and_then(|date| add_months(date, DEFERRAL_MONTHS));

    DonorStats {
        total_donations: completed.len(),
        lives_impacted: completed.len() * LIVES_PER_DONATION,
        last_donation,
        next_eligible,
    }
}

/// Returns the earliest scheduled donation on or after `today`.
#[must_use]
pub fn next_upcoming(records: &[DonationRecord], today: Date) -> Option<&DonationRecord> {
    records
        .iter()
        .filter(|record| record.status == DonationStatus::Scheduled && record.date >= today)
        .min_by_key(|record| record.date)
}

/// Sorts records newest first; ties keep their relative order.
pub fn sort_newest_first(records: &mut [DonationRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Builds the demonstration history used by the dashboard before a real
/// backend exists: one donation scheduled a week out and two completed
/// donations one and four months ago.
#[must_use]
pub fn sample_history(today: Date) -> Vec<DonationRecord> {
    let mut records: Vec<DonationRecord> = Vec::new();

    if let Some(date) = today.checked_add(Duration::days(7)) {
        records.push(DonationRecord {
            id: String::from("upcoming-1"),
            date,
            location: String::from("Central Blood Bank, Main St"),
            amount_ml: 0,
            status: DonationStatus::Scheduled,
        });
    }

    for (id, months_ago, location) in [
        ("past-1", 1, "Memorial Hospital"),
        ("past-2", 4, "Community Drive"),
    ] {
        if let Some(date) = add_months(today, -months_ago) {
            records.push(DonationRecord {
                id: String::from(id),
                date,
                location: String::from(location),
                amount_ml: STANDARD_DONATION_ML,
                status: DonationStatus::Completed,
            });
        }
    }

    records
}
