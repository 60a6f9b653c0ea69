// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read models for the dashboard and the donation history page.

use redconnect::SessionContext;
use redconnect_domain::{
    DonationRecord, Donor, DonorStats, compute_donor_stats, next_upcoming, sort_newest_first,
};
use serde::Serialize;
use time::Date;

use crate::error::{ApiError, AuthError};

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub donor_name: String,
    pub stats: DonorStats,
    /// Earliest scheduled donation from today on.
    pub upcoming: Option<DonationRecord>,
    pub eligible_today: bool,
}

impl Dashboard {
    /// Builds the dashboard for the signed-in donor.
    ///
    /// # Arguments
    ///
    /// * `session` - The current session
    /// * `records` - The donor's donation records
    /// * `today` - The date stats and eligibility are measured against
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` if nobody is signed in.
    pub fn build(
        session: &impl SessionContext,
        records: &[DonationRecord],
        today: Date,
    ) -> Result<Self, ApiError> {
        let donor: &Donor = session.current_user().ok_or(AuthError::NotSignedIn)?;
        let stats: DonorStats = compute_donor_stats(records);
        Ok(Self {
            donor_name: donor.name.clone(),
            eligible_today: stats.is_eligible_on(today),
            stats,
            upcoming: next_upcoming(records, today).cloned(),
        })
    }
}

/// The donation history page: every record, newest first.
///
/// # Errors
///
/// Returns `AuthError::NotSignedIn` if nobody is signed in.
pub fn donation_history(
    session: &impl SessionContext,
    mut records: Vec<DonationRecord>,
) -> Result<Vec<DonationRecord>, ApiError> {
    if !session.is_authenticated() {
        return Err(AuthError::NotSignedIn.into());
    }
    sort_newest_first(&mut records);
    Ok(records)
}
