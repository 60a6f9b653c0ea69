// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::center::DonationCenter;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// A field of the donation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Age,
    Weight,
    Gender,
    BloodType,
    ContactPhone,
    DonationCenter,
    DonationDate,
    TimeSlot,
    HealthConsent,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Self; 10] = [
        Self::FullName,
        Self::Age,
        Self::Weight,
        Self::Gender,
        Self::BloodType,
        Self::ContactPhone,
        Self::DonationCenter,
        Self::DonationDate,
        Self::TimeSlot,
        Self::HealthConsent,
    ];

    /// The wire name of the field, as used in request files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Gender => "gender",
            Self::BloodType => "bloodType",
            Self::ContactPhone => "contactPhone",
            Self::DonationCenter => "donationCenter",
            Self::DonationDate => "donationDate",
            Self::TimeSlot => "timeSlot",
            Self::HealthConsent => "healthConsent",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Gender => "gender",
            Self::BloodType => "blood type",
            Self::ContactPhone => "contact phone",
            Self::DonationCenter => "donation center",
            Self::DonationDate => "donation date",
            Self::TimeSlot => "time slot",
            Self::HealthConsent => "health confirmation",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Donor gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All options in display order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Capitalized label for the confirmation view.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownOption {
                field: Field::Gender,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ABO/Rh blood type, plus `Unknown` for donors who have never been typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    Unknown,
}

impl BloodType {
    /// All options in display order.
    pub const ALL: [Self; 9] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for the eight typed groups.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl FromStr for BloodType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|blood_type| blood_type.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownOption {
                field: Field::BloodType,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hourly appointment slots offered by every center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "09:00 AM")]
    NineAm,
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    Noon,
    #[serde(rename = "01:00 PM")]
    OnePm,
    #[serde(rename = "02:00 PM")]
    TwoPm,
    #[serde(rename = "03:00 PM")]
    ThreePm,
    #[serde(rename = "04:00 PM")]
    FourPm,
    #[serde(rename = "05:00 PM")]
    FivePm,
}

impl TimeSlot {
    /// All slots in chronological order.
    pub const ALL: [Self; 9] = [
        Self::NineAm,
        Self::TenAm,
        Self::ElevenAm,
        Self::Noon,
        Self::OnePm,
        Self::TwoPm,
        Self::ThreePm,
        Self::FourPm,
        Self::FivePm,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NineAm => "09:00 AM",
            Self::TenAm => "10:00 AM",
            Self::ElevenAm => "11:00 AM",
            Self::Noon => "12:00 PM",
            Self::OnePm => "01:00 PM",
            Self::TwoPm => "02:00 PM",
            Self::ThreePm => "03:00 PM",
            Self::FourPm => "04:00 PM",
            Self::FivePm => "05:00 PM",
        }
    }

    /// The slot's starting hour on a 24-hour clock.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        match self {
            Self::NineAm => 9,
            Self::TenAm => 10,
            Self::ElevenAm => 11,
            Self::Noon => 12,
            Self::OnePm => 13,
            Self::TwoPm => 14,
            Self::ThreePm => 15,
            Self::FourPm => 16,
            Self::FivePm => 17,
        }
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownOption {
                field: Field::TimeSlot,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats a date the way confirmations print it, e.g. `May 10, 2024`.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// The values accumulated by the donation wizard.
///
/// Text fields hold the raw input as entered; selections are `None`
/// until chosen. Nothing is checked on mutation; validation happens
/// per step or when the request is converted into an [`Appointment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationRequest {
    full_name: String,
    age: String,
    weight: String,
    gender: Option<Gender>,
    blood_type: Option<BloodType>,
    contact_phone: String,
    donation_center: Option<String>,
    donation_date: Option<Date>,
    time_slot: Option<TimeSlot>,
    health_consent: bool,
}

impl DonationRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn age(&self) -> &str {
        &self.age
    }

    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight
    }

    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    #[must_use]
    pub const fn blood_type(&self) -> Option<BloodType> {
        self.blood_type
    }

    #[must_use]
    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    #[must_use]
    pub fn donation_center(&self) -> Option<&str> {
        self.donation_center.as_deref()
    }

    #[must_use]
    pub const fn donation_date(&self) -> Option<Date> {
        self.donation_date
    }

    #[must_use]
    pub const fn time_slot(&self) -> Option<TimeSlot> {
        self.time_slot
    }

    #[must_use]
    pub const fn health_consent(&self) -> bool {
        self.health_consent
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    pub const fn set_gender(&mut self, value: Option<Gender>) {
        self.gender = value;
    }

    pub const fn set_blood_type(&mut self, value: Option<BloodType>) {
        self.blood_type = value;
    }

    pub fn set_contact_phone(&mut self, value: impl Into<String>) {
        self.contact_phone = value.into();
    }

    /// Sets the selected center id. An empty id clears the selection.
    pub fn set_donation_center(&mut self, value: Option<String>) {
        self.donation_center = value.filter(|id| !id.is_empty());
    }

    pub const fn set_donation_date(&mut self, value: Option<Date>) {
        self.donation_date = value;
    }

    pub const fn set_time_slot(&mut self, value: Option<TimeSlot>) {
        self.time_slot = value;
    }

    pub const fn set_health_consent(&mut self, value: bool) {
        self.health_consent = value;
    }
}

/// A fully validated donation request, ready to be booked.
///
/// Only produced by [`crate::validate_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub(crate) full_name: String,
    pub(crate) age: u8,
    pub(crate) weight_kg: u32,
    pub(crate) gender: Gender,
    pub(crate) blood_type: BloodType,
    pub(crate) contact_phone: String,
    pub(crate) center: DonationCenter,
    pub(crate) date: Date,
    pub(crate) time_slot: TimeSlot,
}

impl Appointment {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub const fn weight_kg(&self) -> u32 {
        self.weight_kg
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn blood_type(&self) -> BloodType {
        self.blood_type
    }

    #[must_use]
    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    #[must_use]
    pub const fn center(&self) -> &DonationCenter {
        &self.center
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn time_slot(&self) -> TimeSlot {
        self.time_slot
    }
}

/// A registered donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    /// Stable identifier assigned at registration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, stored lowercased.
    pub email: String,
    /// 16-digit national identity number.
    pub nik: Option<String>,
    /// Blood type, if known.
    pub blood_type: Option<BloodType>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl Donor {
    /// Creates a donor with only the registration fields set.
    ///
    /// # Arguments
    ///
    /// * `id` - The donor identifier
    /// * `name` - The display name
    /// * `email` - The login email
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            nik: None,
            blood_type: None,
            phone_number: None,
            address: None,
        }
    }
}
