// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use redconnect::{BookingError, BookingPort, BookingReceipt, DonationWizard};
use redconnect_domain::{Appointment, BloodType, Gender, TimeSlot};
use time::macros::date;
use time::{Date, Duration};

use crate::{AuthConfig, AuthService, LoginForm, PasswordPolicy, RegistrationForm, Session};

pub const TODAY: Date = date!(2024 - 05 - 01);

/// Lowest cost bcrypt accepts, to keep hashing fast.
pub fn create_test_config() -> AuthConfig {
    AuthConfig {
        hash_cost: 4,
        session_ttl: Duration::days(30),
    }
}

pub fn create_test_service() -> AuthService {
    AuthService::new(create_test_config(), PasswordPolicy::default())
}

/// Sessions from this service are expired as soon as they are issued.
pub fn create_expiring_service() -> AuthService {
    AuthService::new(
        AuthConfig {
            hash_cost: 4,
            session_ttl: Duration::seconds(-60),
        },
        PasswordPolicy::default(),
    )
}

pub fn create_test_registration() -> RegistrationForm {
    RegistrationForm {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        password: String::from("hunter22"),
        confirm_password: String::from("hunter22"),
    }
}

pub fn create_test_login() -> LoginForm {
    LoginForm {
        email: String::from("jane@example.com"),
        password: String::from("hunter22"),
    }
}

pub fn create_signed_in_session(service: &mut AuthService) -> Session {
    service.register(&create_test_registration()).unwrap()
}

pub fn fill_wizard(wizard: &mut DonationWizard) {
    wizard.set_full_name("Jane Doe");
    wizard.set_age("30");
    wizard.set_weight("60");
    wizard.set_gender(Some(Gender::Female));
    wizard.set_blood_type(Some(BloodType::OPositive));
    wizard.set_contact_phone("5551234567");
    wizard.advance().unwrap();
    wizard.set_donation_center(Some(String::from("center-2")));
    wizard.set_donation_date(Some(date!(2024 - 05 - 10)));
    wizard.set_time_slot(Some(TimeSlot::TwoPm));
    wizard.advance().unwrap();
    wizard.set_health_consent(true);
}

/// Answers every booking with a fixed result.
pub struct FixedPort {
    pub accept: bool,
}

impl BookingPort for FixedPort {
    async fn book(&self, appointment: &Appointment) -> Result<BookingReceipt, BookingError> {
        if self.accept {
            Ok(BookingReceipt::new(appointment.center().id.clone()))
        } else {
            Err(BookingError::new("backend unavailable"))
        }
    }
}
