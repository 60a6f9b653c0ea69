// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::WizardStep;
use redconnect_domain::DomainError;

/// Errors returned by the donation wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The wizard was opened without a signed-in donor.
    NotAuthenticated,
    /// One or more fields of the step failed validation.
    StepIncomplete {
        /// The step that was being left or submitted.
        step: WizardStep,
        /// Every failing field, in form order.
        errors: Vec<DomainError>,
    },
    /// Submission was requested before reaching the confirmation step.
    NotAtConfirmation {
        /// The step the wizard is on.
        step: WizardStep,
    },
    /// A booking call is already outstanding.
    SubmissionInFlight,
    /// A booking result arrived with no booking call outstanding.
    NoSubmissionInFlight,
    /// The appointment has already been booked.
    AlreadyBooked,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "You must be signed in to schedule a donation"),
            Self::StepIncomplete { step, errors } => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Step {} ({}) has {} invalid field(s): {}",
                    step.number(),
                    step.label(),
                    errors.len(),
                    messages.join("; ")
                )
            }
            Self::NotAtConfirmation { step } => {
                write!(
                    f,
                    "Cannot submit from step {} ({}); complete the confirmation step first",
                    step.number(),
                    step.label()
                )
            }
            Self::SubmissionInFlight => write!(f, "An appointment request is already in progress"),
            Self::NoSubmissionInFlight => write!(f, "No appointment request is in progress"),
            Self::AlreadyBooked => write!(f, "This appointment has already been scheduled"),
        }
    }
}

impl std::error::Error for CoreError {}
