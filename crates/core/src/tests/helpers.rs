// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingError, BookingPort, BookingReceipt, DonationWizard, WizardStep};
use redconnect_domain::{Appointment, BloodType, CenterDirectory, Donor, Gender, TimeSlot};
use std::sync::atomic::{AtomicUsize, Ordering};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 05 - 01);

pub fn create_test_donor() -> Donor {
    Donor::new("donor-1", "Jane Doe", "jane@example.com")
}

pub fn create_test_wizard() -> DonationWizard {
    let session: Option<Donor> = Some(create_test_donor());
    DonationWizard::start(&session, CenterDirectory::default(), TODAY).unwrap()
}

pub fn fill_personal_info(wizard: &mut DonationWizard) {
    wizard.set_full_name("Jane Doe");
    wizard.set_age("30");
    wizard.set_weight("60");
    wizard.set_gender(Some(Gender::Female));
    wizard.set_blood_type(Some(BloodType::OPositive));
    wizard.set_contact_phone("5551234567");
}

pub fn fill_schedule(wizard: &mut DonationWizard) {
    wizard.set_donation_center(Some(String::from("center-1")));
    wizard.set_donation_date(Some(date!(2024 - 05 - 10)));
    wizard.set_time_slot(Some(TimeSlot::TenAm));
}

pub fn create_wizard_at_confirm() -> DonationWizard {
    let mut wizard: DonationWizard = create_test_wizard();
    fill_personal_info(&mut wizard);
    wizard.advance().unwrap();
    fill_schedule(&mut wizard);
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::Confirm);
    wizard
}

/// Books every appointment and counts calls.
#[derive(Default)]
pub struct AcceptingPort {
    calls: AtomicUsize,
}

impl AcceptingPort {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BookingPort for AcceptingPort {
    async fn book(&self, appointment: &Appointment) -> Result<BookingReceipt, BookingError> {
        let call: usize = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(BookingReceipt::new(format!(
            "{}-{}",
            appointment.center().id,
            call
        )))
    }
}

/// Fails the first `failures` calls, then books.
pub struct FlakyPort {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyPort {
    pub const fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BookingPort for FlakyPort {
    async fn book(&self, _appointment: &Appointment) -> Result<BookingReceipt, BookingError> {
        let call: usize = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(BookingError::new("center is offline"));
        }
        Ok(BookingReceipt::new(format!("booking-{call}")))
    }
}
