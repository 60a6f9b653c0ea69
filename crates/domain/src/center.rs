// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A location where donations are taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCenter {
    /// Stable identifier, e.g. `center-1`.
    pub id: String,
    pub name: String,
    pub address: String,
    /// Remaining appointment capacity.
    pub available_slots: u32,
}

impl DonationCenter {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        available_slots: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            available_slots,
        }
    }
}

/// The fixed, read-only list of donation centers offered by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterDirectory {
    centers: Vec<DonationCenter>,
}

impl CenterDirectory {
    /// Creates a directory from an ordered list of centers.
    #[must_use]
    pub const fn new(centers: Vec<DonationCenter>) -> Self {
        Self { centers }
    }

    /// Looks up a center by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&DonationCenter> {
        self.centers.iter().find(|center| center.id == id)
    }

    /// Iterates centers in directory order.
    pub fn iter(&self) -> std::slice::Iter<'_, DonationCenter> {
        self.centers.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.centers.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

impl Default for CenterDirectory {
    fn default() -> Self {
        Self::new(vec![
            DonationCenter::new("center-1", "Central Blood Bank", "123 Main St", 12),
            DonationCenter::new("center-2", "Memorial Hospital", "456 Park Ave", 8),
            DonationCenter::new("center-3", "Community Center", "789 Oak Rd", 15),
        ])
    }
}

impl<'a> IntoIterator for &'a CenterDirectory {
    type Item = &'a DonationCenter;
    type IntoIter = std::slice::Iter<'a, DonationCenter>;

    fn into_iter(self) -> Self::IntoIter {
        self.centers.iter()
    }
}
