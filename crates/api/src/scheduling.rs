// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening the donation form and submitting it.

use redconnect::{BookingPort, DonationWizard, SubmissionOutcome};
use redconnect_domain::CenterDirectory;
use time::Date;

use crate::auth::Session;
use crate::error::ApiError;
use crate::routes::Route;

/// The outcome of a submission and where the donor goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub outcome: SubmissionOutcome,
    /// The dashboard after a booking, the form again after a failure.
    pub next: Route,
}

/// Opens the donation wizard for the signed-in donor.
///
/// # Errors
///
/// Returns `CoreError::NotAuthenticated` if nobody is signed in.
pub fn open_donation_form(
    session: &Session,
    directory: CenterDirectory,
    today: Date,
) -> Result<DonationWizard, ApiError> {
    Ok(DonationWizard::start(session, directory, today)?)
}

/// Submits the wizard to the booking port.
///
/// # Errors
///
/// Returns the wizard's error if the request cannot be submitted; a failed
/// booking is reported in the result instead.
pub async fn schedule_donation<P: BookingPort + Sync>(
    wizard: &mut DonationWizard,
    port: &P,
) -> Result<ScheduleResult, ApiError> {
    let outcome: SubmissionOutcome = wizard.submit(port).await?;
    let next: Route = if outcome.is_booked() {
        Route::Dashboard
    } else {
        Route::DonationForm
    };
    Ok(ScheduleResult { outcome, next })
}
