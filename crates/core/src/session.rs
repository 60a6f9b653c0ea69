// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use redconnect_domain::Donor;

/// Read-only view of the signed-in session.
///
/// The wizard only reads the current donor to decide whether it may be
/// opened; it never changes session state.
pub trait SessionContext {
    /// The signed-in donor, if any.
    fn current_user(&self) -> Option<&Donor>;

    /// Returns whether a donor is signed in.
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

impl SessionContext for Option<Donor> {
    fn current_user(&self) -> Option<&Donor> {
        self.as_ref()
    }
}
