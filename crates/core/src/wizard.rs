// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The donation wizard controller.

use crate::booking::{
    BookingError, BookingPort, BookingReceipt, Notice, SubmissionOutcome, SubmissionStatus,
};
use crate::error::CoreError;
use crate::session::SessionContext;
use crate::step::{Progress, WizardStep};
use redconnect_domain::{
    Appointment, BloodType, CenterDirectory, DomainError, DonationCenter, DonationRequest, Donor,
    Field, Gender, TimeSlot, long_date, validate_field, validate_fields, validate_request,
};
use std::collections::BTreeMap;
use time::Date;
use tracing::{debug, info, warn};

/// Controller for the three-step donation wizard.
///
/// Owns the accumulated [`DonationRequest`] exclusively; presentation code
/// reads it through [`DonationWizard::request`] and changes it only through
/// the named setters. Failing field messages are kept per field until the
/// field is edited or validated again.
#[derive(Debug, Clone)]
pub struct DonationWizard {
    donor_id: String,
    request: DonationRequest,
    step: WizardStep,
    errors: BTreeMap<Field, DomainError>,
    directory: CenterDirectory,
    today: Date,
    status: SubmissionStatus,
    in_flight: Option<Appointment>,
}

/// Read-only view of the request for the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentSummary {
    pub full_name: String,
    pub age: String,
    pub weight: String,
    pub gender: Option<Gender>,
    pub blood_type: Option<BloodType>,
    pub contact_phone: String,
    /// The selected center, resolved against the directory.
    pub center: Option<DonationCenter>,
    /// The selected date formatted as `May 10, 2024`.
    pub date: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub health_consent: bool,
}

impl DonationWizard {
    /// Opens the wizard for the signed-in donor with an empty request.
    ///
    /// # Arguments
    ///
    /// * `session` - The current session
    /// * `directory` - The centers offered on the schedule step
    /// * `today` - The date the booking window is measured from
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotAuthenticated` if no donor is signed in.
    pub fn start(
        session: &impl SessionContext,
        directory: CenterDirectory,
        today: Date,
    ) -> Result<Self, CoreError> {
        let donor: &Donor = session.current_user().ok_or(CoreError::NotAuthenticated)?;
        info!(donor_id = %donor.id, %today, "Donation wizard started");

        Ok(Self {
            donor_id: donor.id.clone(),
            request: DonationRequest::new(),
            step: WizardStep::FIRST,
            errors: BTreeMap::new(),
            directory,
            today,
            status: SubmissionStatus::Idle,
            in_flight: None,
        })
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// The live request, as last edited.
    #[must_use]
    pub const fn request(&self) -> &DonationRequest {
        &self.request
    }

    #[must_use]
    pub fn donor_id(&self) -> &str {
        &self.donor_id
    }

    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns whether a booking call is outstanding.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    #[must_use]
    pub const fn progress(&self) -> Progress {
        Progress::of(self.step)
    }

    /// The stored message for a field, if it last failed validation.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&DomainError> {
        self.errors.get(&field)
    }

    /// All stored field messages, in form order.
    pub fn errors(&self) -> impl Iterator<Item = &DomainError> {
        self.errors.values()
    }

    /// Edits are refused while a booking call is outstanding or after the
    /// appointment is booked.
    const fn is_editable(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Idle | SubmissionStatus::Failed
        )
    }

    fn edit(&mut self, field: Field, apply: impl FnOnce(&mut DonationRequest)) {
        if !self.is_editable() {
            debug!(%field, status = ?self.status, "Ignoring edit while wizard is locked");
            return;
        }
        apply(&mut self.request);
        self.errors.remove(&field);
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        self.edit(Field::FullName, |request| request.set_full_name(value));
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        self.edit(Field::Age, |request| request.set_age(value));
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        self.edit(Field::Weight, |request| request.set_weight(value));
    }

    pub fn set_gender(&mut self, value: Option<Gender>) {
        self.edit(Field::Gender, |request| request.set_gender(value));
    }

    pub fn set_blood_type(&mut self, value: Option<BloodType>) {
        self.edit(Field::BloodType, |request| request.set_blood_type(value));
    }

    pub fn set_contact_phone(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        self.edit(Field::ContactPhone, |request| {
            request.set_contact_phone(value);
        });
    }

    pub fn set_donation_center(&mut self, value: Option<String>) {
        self.edit(Field::DonationCenter, |request| {
            request.set_donation_center(value);
        });
    }

    pub fn set_donation_date(&mut self, value: Option<Date>) {
        self.edit(Field::DonationDate, |request| {
            request.set_donation_date(value);
        });
    }

    pub fn set_time_slot(&mut self, value: Option<TimeSlot>) {
        self.edit(Field::TimeSlot, |request| request.set_time_slot(value));
    }

    pub fn set_health_consent(&mut self, value: bool) {
        self.edit(Field::HealthConsent, |request| {
            request.set_health_consent(value);
        });
    }

    /// Re-runs one field's validator and stores or clears its message.
    ///
    /// # Errors
    ///
    /// Returns the field's validation error, if any.
    pub fn validate_field(&mut self, field: Field) -> Result<(), DomainError> {
        match validate_field(&self.request, field, &self.directory, self.today) {
            Ok(()) => {
                self.errors.remove(&field);
                Ok(())
            }
            Err(err) => {
                self.errors.insert(field, err.clone());
                Err(err)
            }
        }
    }

    /// Validates the current step and moves to the next one.
    ///
    /// Only the fields of the current step are checked. On the confirmation
    /// step there is no next step and the call does nothing.
    ///
    /// # Returns
    ///
    /// * `Ok(step)` with the step the wizard is now on
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StepIncomplete` with every failing field if the
    /// step does not validate; the wizard stays where it is.
    pub fn advance(&mut self) -> Result<WizardStep, CoreError> {
        if !self.is_editable() {
            debug!(step = %self.step, "Ignoring advance while wizard is locked");
            return Ok(self.step);
        }
        let Some(next) = self.step.next() else {
            debug!(step = %self.step, "Advance is not offered on the last step");
            return Ok(self.step);
        };

        let fields: &[Field] = self.step.fields();
        for field in fields {
            self.errors.remove(field);
        }

        let errors: Vec<DomainError> =
            validate_fields(&self.request, fields, &self.directory, self.today);
        if !errors.is_empty() {
            self.record_errors(&errors);
            debug!(step = %self.step, failures = errors.len(), "Step validation failed");
            return Err(CoreError::StepIncomplete {
                step: self.step,
                errors,
            });
        }

        debug!(from = %self.step, to = %next, "Advancing wizard");
        self.step = next;
        Ok(next)
    }

    /// Moves to the previous step without validating. Does nothing on the
    /// first step.
    ///
    /// # Returns
    ///
    /// The step the wizard is now on.
    pub fn retreat(&mut self) -> WizardStep {
        if !self.is_editable() {
            return self.step;
        }
        if let Some(previous) = self.step.previous() {
            debug!(from = %self.step, to = %previous, "Retreating wizard");
            self.step = previous;
        }
        self.step
    }

    /// Jumps back to an already completed step.
    ///
    /// # Returns
    ///
    /// `true` if the wizard moved; targets at or after the current step are
    /// ignored.
    pub fn jump_back(&mut self, target: WizardStep) -> bool {
        if !self.is_editable() || target >= self.step {
            debug!(from = %self.step, to = %target, "Ignoring jump");
            return false;
        }
        debug!(from = %self.step, to = %target, "Jumping back");
        self.step = target;
        true
    }

    /// Builds the confirmation view from the current request.
    #[must_use]
    pub fn summary(&self) -> AppointmentSummary {
        let request: &DonationRequest = &self.request;
        AppointmentSummary {
            full_name: request.full_name().to_string(),
            age: request.age().to_string(),
            weight: request.weight().to_string(),
            gender: request.gender(),
            blood_type: request.blood_type(),
            contact_phone: request.contact_phone().to_string(),
            center: request
                .donation_center()
                .and_then(|id| self.directory.find(id))
                .cloned(),
            date: request.donation_date().map(long_date),
            time_slot: request.time_slot(),
            health_consent: request.health_consent(),
        }
    }

    /// Returns whether the submit control should be enabled.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.step.is_last() && self.request.health_consent() && self.is_editable()
    }

    /// Validates the whole request and marks a booking call as outstanding.
    ///
    /// The returned appointment is what the booking port must be called
    /// with; report its result through [`DonationWizard::finish_submission`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A booking call is already outstanding
    /// - The appointment was already booked
    /// - The wizard is not on the confirmation step
    /// - Any field, including the health consent, is invalid
    pub fn begin_submission(&mut self) -> Result<Appointment, CoreError> {
        match self.status {
            SubmissionStatus::Submitting => {
                warn!(donor_id = %self.donor_id, "Rejected duplicate submission");
                return Err(CoreError::SubmissionInFlight);
            }
            SubmissionStatus::Booked => return Err(CoreError::AlreadyBooked),
            SubmissionStatus::Idle | SubmissionStatus::Failed => {}
        }
        if !self.step.is_last() {
            return Err(CoreError::NotAtConfirmation { step: self.step });
        }

        let appointment: Appointment =
            validate_request(&self.request, &self.directory, self.today).map_err(|errors| {
                self.record_errors(&errors);
                debug!(failures = errors.len(), "Submission blocked by validation");
                CoreError::StepIncomplete {
                    step: self.step,
                    errors,
                }
            })?;

        info!(
            donor_id = %self.donor_id,
            center = %appointment.center().id,
            date = %appointment.date(),
            slot = %appointment.time_slot(),
            "Submitting appointment"
        );
        self.status = SubmissionStatus::Submitting;
        self.in_flight = Some(appointment.clone());
        Ok(appointment)
    }

    /// Records the result of the outstanding booking call.
    ///
    /// On failure the wizard returns to an editable confirmation step with
    /// every value intact.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoSubmissionInFlight` if no call is outstanding.
    pub fn finish_submission(
        &mut self,
        result: Result<BookingReceipt, BookingError>,
    ) -> Result<SubmissionOutcome, CoreError> {
        let appointment: Appointment = self
            .in_flight
            .take()
            .ok_or(CoreError::NoSubmissionInFlight)?;

        match result {
            Ok(receipt) => {
                info!(
                    donor_id = %self.donor_id,
                    reference = %receipt.reference,
                    "Appointment booked"
                );
                self.status = SubmissionStatus::Booked;
                let notice: Notice = Notice::appointment_scheduled(&appointment);
                Ok(SubmissionOutcome::Booked {
                    appointment,
                    receipt,
                    notice,
                })
            }
            Err(error) => {
                warn!(donor_id = %self.donor_id, reason = %error.reason(), "Booking failed");
                self.status = SubmissionStatus::Failed;
                Ok(SubmissionOutcome::Failed {
                    error,
                    notice: Notice::booking_failed(),
                })
            }
        }
    }

    /// Validates, calls the booking port once and records the result.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`DonationWizard::begin_submission`]; the port
    /// is not called in that case. A failed booking is not an error: it is
    /// reported as `SubmissionOutcome::Failed`.
    pub async fn submit<P: BookingPort + Sync>(
        &mut self,
        port: &P,
    ) -> Result<SubmissionOutcome, CoreError> {
        let appointment: Appointment = self.begin_submission()?;
        let result: Result<BookingReceipt, BookingError> = port.book(&appointment).await;
        self.finish_submission(result)
    }

    fn record_errors(&mut self, errors: &[DomainError]) {
        for err in errors {
            if let Some(field) = err.field() {
                self.errors.insert(field, err.clone());
            }
        }
    }
}
