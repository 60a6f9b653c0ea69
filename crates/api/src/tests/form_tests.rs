// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use redconnect_domain::{BloodType, Donor};

use crate::tests::helpers::{create_test_login, create_test_registration};
use crate::{
    FormError, LoginForm, PasswordPolicy, PasswordPolicyError, ProfileForm, RegistrationForm,
    is_valid_email,
};

fn create_test_profile() -> ProfileForm {
    ProfileForm {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        ..ProfileForm::default()
    }
}

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("jane.doe+blood@mail.example.org"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("jane"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("jane@example."));
    assert!(!is_valid_email("jane@@example.com"));
    assert!(!is_valid_email("jane doe@example.com"));
}

#[test]
fn test_valid_registration() {
    let form: RegistrationForm = create_test_registration();
    assert!(form.validate(&PasswordPolicy::default()).is_ok());
}

#[test]
fn test_registration_messages() {
    let form: RegistrationForm = RegistrationForm {
        name: String::from(" J "),
        ..create_test_registration()
    };

    let errors: Vec<FormError> = form.validate(&PasswordPolicy::default()).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "Name must be at least 2 characters");
    assert_eq!(errors[0].field(), "name");
}

#[test]
fn test_registration_mismatch_is_reported_on_confirmation() {
    let form: RegistrationForm = RegistrationForm {
        confirm_password: String::from("hunter23"),
        ..create_test_registration()
    };

    let errors: Vec<FormError> = form.validate(&PasswordPolicy::default()).unwrap_err();

    assert_eq!(
        errors,
        vec![FormError::Password(PasswordPolicyError::ConfirmationMismatch)]
    );
    assert_eq!(errors[0].field(), "confirmPassword");
    assert_eq!(errors[0].to_string(), "Passwords do not match");
}

#[test]
fn test_login_validation() {
    let policy: PasswordPolicy = PasswordPolicy::default();
    assert!(create_test_login().validate(&policy).is_ok());

    let form: LoginForm = LoginForm {
        email: String::from("jane"),
        password: String::from("123"),
    };
    let errors: Vec<FormError> = form.validate(&policy).unwrap_err();
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Please enter a valid email address",
            "Password must be at least 8 characters"
        ]
    );
}

#[test]
fn test_profile_name_needs_three_characters() {
    let form: ProfileForm = ProfileForm {
        name: String::from("Jo"),
        ..create_test_profile()
    };
    assert_eq!(
        form.validate().unwrap_err()[0].to_string(),
        "Name must be at least 3 characters"
    );
}

#[test]
fn test_profile_nik_rules() {
    let cases: [(&str, Option<FormError>); 5] = [
        ("", None),
        ("3201234567890123", None),
        ("320123456789012", Some(FormError::NikLength)),
        ("32012345678901234", Some(FormError::NikLength)),
        ("32012345678901ab", Some(FormError::NikNotNumeric)),
    ];

    for (nik, expected) in cases {
        let form: ProfileForm = ProfileForm {
            nik: String::from(nik),
            ..create_test_profile()
        };
        assert_eq!(form.validate().err(), expected.map(|err| vec![err]), "nik {nik}");
    }
}

#[test]
fn test_profile_rejects_unknown_blood_type() {
    let form: ProfileForm = ProfileForm {
        blood_type: Some(BloodType::Unknown),
        ..create_test_profile()
    };
    assert_eq!(
        form.validate(),
        Err(vec![FormError::BloodTypeNotOffered])
    );

    let form: ProfileForm = ProfileForm {
        blood_type: Some(BloodType::BPositive),
        ..create_test_profile()
    };
    assert!(form.validate().is_ok());
}

#[test]
fn test_profile_apply_normalizes_values() {
    let mut donor: Donor = Donor::new("donor-1", "Jane Doe", "jane@example.com");
    donor.address = Some(String::from("1 Old Rd"));
    let form: ProfileForm = ProfileForm {
        name: String::from("  Jane Smith "),
        email: String::from("Jane.Smith@Example.com"),
        phone_number: String::from(" 5551234567 "),
        address: String::from("   "),
        ..create_test_profile()
    };

    form.apply_to(&mut donor);

    assert_eq!(donor.name, "Jane Smith");
    assert_eq!(donor.email, "jane.smith@example.com");
    assert_eq!(donor.phone_number.as_deref(), Some("5551234567"));
    assert_eq!(donor.address, None);
    assert_eq!(donor.id, "donor-1");
}
