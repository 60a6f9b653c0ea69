// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking port and the notices produced by a submission.

use redconnect_domain::{Appointment, long_date};
use std::future::Future;

/// The external booking backend.
///
/// Implementations perform one booking call per appointment. Latency is
/// unbounded but finite; the wizard does not cancel calls.
pub trait BookingPort {
    /// Books the appointment.
    ///
    /// # Errors
    ///
    /// Returns a `BookingError` carrying the backend's reason if the
    /// appointment could not be booked.
    fn book(
        &self,
        appointment: &Appointment,
    ) -> impl Future<Output = Result<BookingReceipt, BookingError>> + Send;
}

/// Proof of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// Backend reference for the appointment.
    pub reference: String,
}

impl BookingReceipt {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// A failed booking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingError {
    reason: String,
}

impl BookingError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The backend's failure reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Booking failed: {}", self.reason)
    }
}

impl std::error::Error for BookingError {}

/// Visual variant of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    /// Dismissible error.
    Destructive,
}

/// A message surfaced to the donor after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    /// The confirmation shown after a successful booking.
    #[must_use]
    pub fn appointment_scheduled(appointment: &Appointment) -> Self {
        Self::success(
            "Appointment Scheduled!",
            format!(
                "Your blood donation is scheduled for {} at {}.",
                long_date(appointment.date()),
                appointment.time_slot()
            ),
        )
    }

    /// The retryable error shown after a failed booking.
    ///
    /// The backend's reason is logged, not shown.
    #[must_use]
    pub fn booking_failed() -> Self {
        Self::destructive(
            "An error occurred",
            "Unable to schedule your appointment. Please try again.",
        )
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Where the wizard is in the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A booking call is outstanding.
    Submitting,
    /// The appointment was booked. Terminal.
    Booked,
    /// The last booking call failed; the donor may retry.
    Failed,
}

/// The result of a completed booking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The appointment is booked; the donor leaves the wizard.
    Booked {
        appointment: Appointment,
        receipt: BookingReceipt,
        notice: Notice,
    },
    /// The call failed; the wizard stays on the confirmation step.
    Failed { error: BookingError, notice: Notice },
}

impl SubmissionOutcome {
    /// The notice to surface.
    #[must_use]
    pub const fn notice(&self) -> &Notice {
        match self {
            Self::Booked { notice, .. } | Self::Failed { notice, .. } => notice,
        }
    }

    #[must_use]
    pub const fn is_booked(&self) -> bool {
        matches!(self, Self::Booked { .. })
    }
}
