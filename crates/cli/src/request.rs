// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The JSON request file read by `redconnect schedule`.

use color_eyre::Result;
use color_eyre::eyre::Context;
use redconnect_domain::{BloodType, Gender, TimeSlot};
use serde::Deserialize;
use time::Date;
use time::macros::format_description;

/// Raw wizard input, keyed like the donation form.
///
/// Every field is optional so incomplete files reach the validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestFile {
    pub full_name: String,
    pub age: String,
    pub weight: String,
    pub gender: Option<Gender>,
    pub blood_type: Option<BloodType>,
    pub contact_phone: String,
    pub donation_center: Option<String>,
    /// `YYYY-MM-DD`.
    pub donation_date: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub health_consent: bool,
}

impl RequestFile {
    /// Parses a request file's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for a request.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).wrap_err("Request file is not a valid donation request")
    }

    /// The donation date, if one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is not `YYYY-MM-DD`.
    pub fn donation_date(&self) -> Result<Option<Date>> {
        self.donation_date
            .as_deref()
            .map(|text| {
                parse_date(text).wrap_err_with(|| format!("'{text}' is not a YYYY-MM-DD date"))
            })
            .transpose()
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the text is not a calendar date in that format.
pub fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_reads_camel_case_request() {
        let text: &str = r#"{
            "fullName": "Jane Doe",
            "age": "30",
            "weight": "60",
            "gender": "female",
            "bloodType": "O+",
            "contactPhone": "5551234567",
            "donationCenter": "center-1",
            "donationDate": "2024-05-10",
            "timeSlot": "10:00 AM",
            "healthConsent": true
        }"#;

        let request: RequestFile = RequestFile::from_json(text).unwrap();

        assert_eq!(request.full_name, "Jane Doe");
        assert_eq!(request.gender, Some(Gender::Female));
        assert_eq!(request.blood_type, Some(BloodType::OPositive));
        assert_eq!(request.time_slot, Some(TimeSlot::TenAm));
        assert_eq!(request.donation_date().unwrap(), Some(date!(2024 - 05 - 10)));
        assert!(request.health_consent);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: RequestFile = RequestFile::from_json(r#"{"fullName": "Jane"}"#).unwrap();

        assert_eq!(request.age, "");
        assert_eq!(request.gender, None);
        assert_eq!(request.donation_date().unwrap(), None);
        assert!(!request.health_consent);
    }

    #[test]
    fn test_rejects_unknown_blood_type() {
        assert!(RequestFile::from_json(r#"{"bloodType": "C+"}"#).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), date!(2024 - 02 - 29));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("05/10/2024").is_err());
    }
}
