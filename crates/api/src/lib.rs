// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Account and navigation layer around the donation wizard.
//!
//! Holds the in-memory auth stub, the account forms, route gating and the
//! dashboard read models. Sessions are plain values passed explicitly to
//! every operation.

mod auth;
mod dashboard;
mod error;
mod forms;
mod password_policy;
mod routes;
mod scheduling;

#[cfg(test)]
mod tests;

pub use auth::{AuthConfig, AuthService, Session};
pub use dashboard::{Dashboard, donation_history};
pub use error::{ApiError, AuthError, FormError};
pub use forms::{
    LoginForm, MIN_PROFILE_NAME_LEN, MIN_REGISTRATION_NAME_LEN, NIK_LEN, ProfileForm,
    RegistrationForm, is_valid_email,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use routes::{Route, resolve_route};
pub use scheduling::{ScheduleResult, open_donation_form, schedule_donation};
