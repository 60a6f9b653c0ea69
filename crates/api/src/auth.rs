// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory authentication stub and donor sessions.

use std::collections::HashMap;

use redconnect::SessionContext;
use redconnect_domain::Donor;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::{ApiError, AuthError};
use crate::forms::{LoginForm, ProfileForm, RegistrationForm};
use crate::password_policy::PasswordPolicy;

/// Authentication settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// bcrypt cost factor.
    pub hash_cost: u32,
    /// How long a session stays valid after sign-in.
    pub session_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_cost: bcrypt::DEFAULT_COST,
            session_ttl: Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SignedIn {
    token: String,
    donor: Donor,
    expires_at: OffsetDateTime,
}

/// A donor's session, passed explicitly to every operation that needs it.
///
/// The default value is the signed-out session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    signed_in: Option<SignedIn>,
}

impl Session {
    /// A session with nobody signed in.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { signed_in: None }
    }

    /// The session token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.signed_in.as_ref().map(|state| state.token.as_str())
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.signed_in.as_ref().map(|state| state.expires_at)
    }
}

/// An expired session has no current user.
impl SessionContext for Session {
    fn current_user(&self) -> Option<&Donor> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        self.signed_in
            .as_ref()
            .filter(|state| now <= state.expires_at)
            .map(|state| &state.donor)
    }
}

#[derive(Debug, Clone)]
struct Account {
    donor: Donor,
    password_hash: String,
}

#[derive(Debug, Clone)]
struct SessionRecord {
    donor_id: String,
    expires_at: OffsetDateTime,
}

/// Registers and signs in donors against an in-memory account table.
///
/// Passwords are stored as bcrypt hashes. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct AuthService {
    config: AuthConfig,
    policy: PasswordPolicy,
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, SessionRecord>,
    next_id: u64,
}

impl AuthService {
    /// Creates an empty auth service.
    ///
    /// # Arguments
    ///
    /// * `config` - Hash cost and session lifetime
    /// * `policy` - Password requirements for registration and login
    #[must_use]
    pub fn new(config: AuthConfig, policy: PasswordPolicy) -> Self {
        Self {
            config,
            policy,
            accounts: HashMap::new(),
            sessions: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Number of stored sessions, expired ones included until pruned.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any form field is invalid
    /// - Another account already uses the email
    /// - The password cannot be hashed
    pub fn register(&mut self, form: &RegistrationForm) -> Result<Session, ApiError> {
        form.validate(&self.policy)?;

        let email: String = normalize_email(&form.email);
        if self.find_by_email(&email).is_some() {
            warn!(%email, "Registration rejected: email already in use");
            return Err(AuthError::EmailTaken { email }.into());
        }

        let password_hash: String = bcrypt::hash(&form.password, self.config.hash_cost)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to hash password: {e}"),
            })?;

        self.next_id += 1;
        let donor: Donor = Donor::new(format!("donor-{}", self.next_id), form.name.trim(), email);
        info!(donor_id = %donor.id, "Donor registered");

        self.accounts.insert(
            donor.id.clone(),
            Account {
                donor: donor.clone(),
                password_hash,
            },
        );
        Ok(self.open_session(donor))
    }

    /// Signs a donor in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password, and a form error if the fields are malformed.
    pub fn login(&mut self, form: &LoginForm) -> Result<Session, ApiError> {
        form.validate(&self.policy)?;

        let email: String = normalize_email(&form.email);
        let Some(account) = self.find_by_email(&email) else {
            debug!(%email, "Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        let verified: bool = bcrypt::verify(&form.password, &account.password_hash).map_err(
            |e| AuthError::AuthenticationFailed {
                reason: format!("Failed to verify password: {e}"),
            },
        )?;
        if !verified {
            debug!(donor_id = %account.donor.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let donor: Donor = account.donor.clone();
        info!(donor_id = %donor.id, "Donor signed in");
        Ok(self.open_session(donor))
    }

    /// Signs the session out. Signing out twice is harmless.
    pub fn logout(&mut self, session: &mut Session) {
        if let Some(state) = session.signed_in.take() {
            self.sessions.remove(&state.token);
            info!(donor_id = %state.donor.id, "Donor signed out");
        }
    }

    /// Restores a session from its token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionExpired` if the token is unknown, expired,
    /// or its account no longer exists.
    pub fn validate_session(&mut self, token: &str) -> Result<Session, AuthError> {
        let record: &SessionRecord = self.sessions.get(token).ok_or(AuthError::SessionExpired)?;

        if OffsetDateTime::now_utc() > record.expires_at {
            debug!("Dropping expired session");
            self.sessions.remove(token);
            return Err(AuthError::SessionExpired);
        }

        let account: &Account = self
            .accounts
            .get(&record.donor_id)
            .ok_or(AuthError::SessionExpired)?;

        Ok(Session {
            signed_in: Some(SignedIn {
                token: token.to_string(),
                donor: account.donor.clone(),
                expires_at: record.expires_at,
            }),
        })
    }

    /// Saves the profile form for the signed-in donor.
    ///
    /// The session's copy of the donor is updated as well.
    ///
    /// # Returns
    ///
    /// The updated donor.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nobody is signed in
    /// - Any form field is invalid
    /// - The new email belongs to another account
    pub fn update_profile(
        &mut self,
        session: &mut Session,
        form: &ProfileForm,
    ) -> Result<Donor, ApiError> {
        let state: &mut SignedIn = session.signed_in.as_mut().ok_or(AuthError::NotSignedIn)?;
        form.validate()?;

        let email: String = normalize_email(&form.email);
        if self
            .find_by_email(&email)
            .is_some_and(|other| other.donor.id != state.donor.id)
        {
            warn!(donor_id = %state.donor.id, %email, "Profile update rejected: email in use");
            return Err(AuthError::EmailTaken { email }.into());
        }

        let account: &mut Account = self
            .accounts
            .get_mut(&state.donor.id)
            .ok_or(AuthError::NotSignedIn)?;
        form.apply_to(&mut account.donor);
        state.donor = account.donor.clone();

        info!(donor_id = %state.donor.id, "Profile updated");
        Ok(state.donor.clone())
    }

    fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.donor.email == email)
    }

    fn open_session(&mut self, donor: Donor) -> Session {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let before: usize = self.sessions.len();
        self.sessions.retain(|_, record| now <= record.expires_at);
        let pruned: usize = before - self.sessions.len();
        if pruned > 0 {
            debug!(pruned, "Pruned expired sessions");
        }

        let token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime = now + self.config.session_ttl;
        self.sessions.insert(
            token.clone(),
            SessionRecord {
                donor_id: donor.id.clone(),
                expires_at,
            },
        );
        Session {
            signed_in: Some(SignedIn {
                token,
                donor,
                expires_at,
            }),
        }
    }

    /// Generates a session token from the clock and a random suffix.
    fn generate_session_token() -> String {
        let timestamp: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
