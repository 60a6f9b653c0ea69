// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `redconnect` subcommands. Each writes its report to `out`.

use std::io::Write;

use color_eyre::Result;
use color_eyre::eyre::Context;
use redconnect::{AppointmentSummary, BookingPort, DonationWizard, Notice, WizardStep};
use redconnect_api::{
    AuthService, Dashboard, RegistrationForm, ScheduleResult, Session, donation_history,
    open_donation_form, schedule_donation,
};
use redconnect_domain::{CenterDirectory, DonationRecord, long_date, sample_history};
use time::Date;
use tracing::info;

use crate::request::RequestFile;

const DEMO_NAME: &str = "Demo Donor";
const DEMO_EMAIL: &str = "demo@redconnect.example";
const DEMO_PASSWORD: &str = "demo-password";

/// Registers the demo donor the commands act as.
///
/// # Errors
///
/// Returns an error if registration fails.
pub fn sign_in_demo_donor(auth: &mut AuthService) -> Result<Session> {
    let form: RegistrationForm = RegistrationForm {
        name: String::from(DEMO_NAME),
        email: String::from(DEMO_EMAIL),
        password: String::from(DEMO_PASSWORD),
        confirm_password: String::from(DEMO_PASSWORD),
    };
    auth.register(&form)
        .wrap_err("Failed to register the demo donor")
}

/// Lists the donation centers.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn centers(out: &mut impl Write, directory: &CenterDirectory) -> Result<()> {
    for center in directory {
        writeln!(
            out,
            "{}  {}, {} ({} slots available)",
            center.id, center.name, center.address, center.available_slots
        )?;
    }
    Ok(())
}

fn print_step(out: &mut impl Write, step: WizardStep) -> Result<()> {
    writeln!(
        out,
        "Step {} of {}: {}",
        step.number(),
        WizardStep::COUNT,
        step.title()
    )?;
    writeln!(out, "  {}", step.description())?;
    Ok(())
}

/// Runs the wizard through every step with the request and submits it.
///
/// # Returns
///
/// `true` if the appointment was booked.
///
/// # Errors
///
/// Returns an error if a step does not validate, the request file has a
/// malformed date, or writing fails. A failed booking is not an error.
pub async fn schedule<P: BookingPort + Sync>(
    out: &mut (impl Write + Send),
    auth: &mut AuthService,
    request: &RequestFile,
    today: Date,
    port: &P,
) -> Result<bool> {
    let session: Session = sign_in_demo_donor(auth)?;
    let mut wizard: DonationWizard =
        open_donation_form(&session, CenterDirectory::default(), today)?;

    print_step(out, wizard.step())?;
    wizard.set_full_name(request.full_name.as_str());
    wizard.set_age(request.age.as_str());
    wizard.set_weight(request.weight.as_str());
    wizard.set_gender(request.gender);
    wizard.set_blood_type(request.blood_type);
    wizard.set_contact_phone(request.contact_phone.as_str());
    wizard.advance()?;

    print_step(out, wizard.step())?;
    wizard.set_donation_center(request.donation_center.clone());
    wizard.set_donation_date(request.donation_date()?);
    wizard.set_time_slot(request.time_slot);
    wizard.advance()?;

    print_step(out, wizard.step())?;
    wizard.set_health_consent(request.health_consent);
    let summary: AppointmentSummary = wizard.summary();
    writeln!(out, "  Donor:  {}", summary.full_name)?;
    if let Some(gender) = summary.gender {
        writeln!(out, "  Gender: {}", gender.label())?;
    }
    if let Some(center) = &summary.center {
        writeln!(out, "  Center: {}, {}", center.name, center.address)?;
    }
    if let (Some(date), Some(slot)) = (&summary.date, summary.time_slot) {
        writeln!(out, "  When:   {date} at {slot}")?;
    }

    info!("Submitting to the booking backend");
    let result: ScheduleResult = schedule_donation(&mut wizard, port).await?;
    let notice: &Notice = result.outcome.notice();
    writeln!(out, "{}", notice.title)?;
    writeln!(out, "{}", notice.description)?;
    writeln!(out, "Next page: {}", result.next)?;
    Ok(result.outcome.is_booked())
}

fn print_record(out: &mut impl Write, record: &DonationRecord) -> Result<()> {
    writeln!(
        out,
        "  {:<16} {:<32} {:<10} {} ml",
        long_date(record.date),
        record.location,
        record.status.as_str(),
        record.amount_ml
    )?;
    Ok(())
}

/// Prints the dashboard and donation history for the demo donor.
///
/// # Errors
///
/// Returns an error if the demo donor cannot sign in or writing fails.
pub fn history(out: &mut impl Write, auth: &mut AuthService, today: Date) -> Result<()> {
    let session: Session = sign_in_demo_donor(auth)?;
    let records: Vec<DonationRecord> = sample_history(today);
    let dashboard: Dashboard = Dashboard::build(&session, &records, today)?;

    writeln!(out, "Welcome back, {}", dashboard.donor_name)?;
    writeln!(out, "Total donations: {}", dashboard.stats.total_donations)?;
    writeln!(out, "Lives impacted:  {}", dashboard.stats.lives_impacted)?;
    match dashboard.stats.next_eligible {
        Some(date) if !dashboard.eligible_today => {
            writeln!(out, "Next eligible:   {}", long_date(date))?;
        }
        _ => writeln!(out, "Next eligible:   now")?,
    }
    if let Some(upcoming) = &dashboard.upcoming {
        writeln!(
            out,
            "Upcoming:        {} at {}",
            long_date(upcoming.date),
            upcoming.location
        )?;
    }

    writeln!(out, "History:")?;
    for record in donation_history(&session, records)? {
        print_record(out, &record)?;
    }
    Ok(())
}
