// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use redconnect::SessionContext;
use tracing::debug;

/// The pages of the donor site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    DonationForm,
    Profile,
    DonationHistory,
}

impl Route {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::DonationForm,
        Self::Profile,
        Self::DonationHistory,
    ];

    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::DonationForm => "/donation-form",
            Self::Profile => "/profile",
            Self::DonationHistory => "/donation-history",
        }
    }

    /// Looks a route up by its exact path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Returns whether the page needs a signed-in donor.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::DonationForm | Self::Profile | Self::DonationHistory
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Returns the page to show for a requested route.
///
/// Protected pages redirect to [`Route::Login`] when nobody is signed in.
#[must_use]
pub fn resolve_route(requested: Route, session: &impl SessionContext) -> Route {
    if requested.is_protected() && !session.is_authenticated() {
        debug!(%requested, "Redirecting signed-out visitor to login");
        return Route::Login;
    }
    requested
}
