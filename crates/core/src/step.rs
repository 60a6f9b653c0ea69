// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use redconnect_domain::Field;

/// The steps of the donation wizard, in order.
///
/// Navigation is linear: forward only through a validated advance, backward
/// freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    /// Step 1: who is donating.
    PersonalInfo,
    /// Step 2: where and when.
    Schedule,
    /// Step 3: review and health attestation.
    Confirm,
}

const PERSONAL_INFO_FIELDS: [Field; 6] = [
    Field::FullName,
    Field::Age,
    Field::Weight,
    Field::Gender,
    Field::BloodType,
    Field::ContactPhone,
];

const SCHEDULE_FIELDS: [Field; 3] = [Field::DonationCenter, Field::DonationDate, Field::TimeSlot];

const CONFIRM_FIELDS: [Field; 1] = [Field::HealthConsent];

impl WizardStep {
    /// All steps in order.
    pub const ALL: [Self; 3] = [Self::PersonalInfo, Self::Schedule, Self::Confirm];

    /// The number of steps.
    pub const COUNT: u8 = 3;

    /// The first step.
    pub const FIRST: Self = Self::PersonalInfo;

    /// 1-based step number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::Schedule => 2,
            Self::Confirm => 3,
        }
    }

    /// Converts a 1-based step number to a step.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::Schedule),
            3 => Some(Self::Confirm),
            _ => None,
        }
    }

    /// The fields validated before leaving this step.
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        match self {
            Self::PersonalInfo => &PERSONAL_INFO_FIELDS,
            Self::Schedule => &SCHEDULE_FIELDS,
            Self::Confirm => &CONFIRM_FIELDS,
        }
    }

    /// Returns the step a field is entered on.
    #[must_use]
    pub const fn of_field(field: Field) -> Self {
        match field {
            Field::FullName
            | Field::Age
            | Field::Weight
            | Field::Gender
            | Field::BloodType
            | Field::ContactPhone => Self::PersonalInfo,
            Field::DonationCenter | Field::DonationDate | Field::TimeSlot => Self::Schedule,
            Field::HealthConsent => Self::Confirm,
        }
    }

    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::Schedule),
            Self::Schedule => Some(Self::Confirm),
            Self::Confirm => None,
        }
    }

    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::Schedule => Some(Self::PersonalInfo),
            Self::Confirm => Some(Self::Schedule),
        }
    }

    /// Returns whether this is the confirmation step.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        matches!(self, Self::Confirm)
    }

    /// Short label for the progress indicator.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Schedule => "Schedule",
            Self::Confirm => "Confirm",
        }
    }

    /// Card title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::Schedule => "Appointment Details",
            Self::Confirm => "Confirmation",
        }
    }

    /// Card description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Please provide your personal details",
            Self::Schedule => "Select your preferred donation center and time",
            Self::Confirm => "Review and confirm your appointment",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Position of the wizard for the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// The current step.
    pub step: WizardStep,
    /// Total number of steps.
    pub total: u8,
    /// Share of the bar filled: 0 on the first step, 100 on the last.
    pub percent: u8,
}

impl Progress {
    #[must_use]
    pub const fn of(step: WizardStep) -> Self {
        Self {
            step,
            total: WizardStep::COUNT,
            percent: (step.number() - 1) * 100 / (WizardStep::COUNT - 1),
        }
    }

    /// Returns whether a step is shown as completed (and can be jumped to).
    #[must_use]
    pub fn is_completed(&self, step: WizardStep) -> bool {
        step < self.step
    }
}
