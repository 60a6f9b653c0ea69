// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use redconnect::{BookingError, BookingPort, BookingReceipt};
use redconnect_domain::Appointment;
use tracing::debug;

/// A booking backend that waits and then answers with a canned result.
#[derive(Debug)]
pub struct SimulatedBooking {
    latency: Duration,
    fail: bool,
    issued: AtomicU64,
}

impl SimulatedBooking {
    /// # Arguments
    ///
    /// * `latency` - How long each call waits before answering
    /// * `fail` - Whether every call fails
    #[must_use]
    pub const fn new(latency: Duration, fail: bool) -> Self {
        Self {
            latency,
            fail,
            issued: AtomicU64::new(0),
        }
    }
}

impl BookingPort for SimulatedBooking {
    async fn book(&self, appointment: &Appointment) -> Result<BookingReceipt, BookingError> {
        debug!(
            latency_ms = self.latency.as_millis(),
            center = %appointment.center().id,
            "Simulated booking call"
        );
        tokio::time::sleep(self.latency).await;

        if self.fail {
            return Err(BookingError::new("simulated backend failure"));
        }
        let number: u64 = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(BookingReceipt::new(format!(
            "RC-{}-{number:04}",
            appointment.date()
        )))
    }
}
