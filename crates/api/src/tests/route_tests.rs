// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use redconnect::{CoreError, DonationWizard, NoticeKind, SubmissionOutcome};
use redconnect_domain::CenterDirectory;

use crate::tests::helpers::{
    FixedPort, TODAY, create_expiring_service, create_signed_in_session, create_test_service,
    fill_wizard,
};
use crate::{
    ApiError, AuthService, Route, ScheduleResult, Session, open_donation_form, resolve_route,
    schedule_donation,
};

#[test]
fn test_paths_round_trip() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/donation-form"), Some(Route::DonationForm));
    assert_eq!(Route::from_path("/admin"), None);
}

#[test]
fn test_protected_routes_redirect_when_signed_out() {
    let session: Session = Session::anonymous();

    for route in Route::ALL {
        let expected: Route = if route.is_protected() {
            Route::Login
        } else {
            route
        };
        assert_eq!(resolve_route(route, &session), expected, "{route}");
    }
}

#[test]
fn test_protected_routes_open_when_signed_in() {
    let mut service: AuthService = create_test_service();
    let session: Session = create_signed_in_session(&mut service);

    for route in Route::ALL {
        assert_eq!(resolve_route(route, &session), route);
    }
}

#[test]
fn test_expired_session_is_treated_as_signed_out() {
    let mut service: AuthService = create_expiring_service();
    let session: Session = create_signed_in_session(&mut service);

    assert_eq!(resolve_route(Route::DonationForm, &session), Route::Login);
    assert_eq!(resolve_route(Route::Dashboard, &session), Route::Login);
    assert_eq!(resolve_route(Route::Home, &session), Route::Home);

    let result: Result<DonationWizard, ApiError> =
        open_donation_form(&session, CenterDirectory::default(), TODAY);
    assert!(matches!(
        result,
        Err(ApiError::Wizard(CoreError::NotAuthenticated))
    ));
}

#[test]
fn test_donation_form_requires_session() {
    let result: Result<DonationWizard, ApiError> =
        open_donation_form(&Session::anonymous(), CenterDirectory::default(), TODAY);

    assert!(matches!(
        result,
        Err(ApiError::Wizard(CoreError::NotAuthenticated))
    ));
}

#[tokio::test]
async fn test_booking_returns_to_dashboard() {
    let mut service: AuthService = create_test_service();
    let session: Session = create_signed_in_session(&mut service);
    let mut wizard: DonationWizard =
        open_donation_form(&session, CenterDirectory::default(), TODAY).unwrap();
    fill_wizard(&mut wizard);

    let result: ScheduleResult = schedule_donation(&mut wizard, &FixedPort { accept: true })
        .await
        .unwrap();

    assert_eq!(result.next, Route::Dashboard);
    assert_eq!(
        result.outcome.notice().description,
        "Your blood donation is scheduled for May 10, 2024 at 02:00 PM."
    );
}

#[tokio::test]
async fn test_failed_booking_stays_on_form() {
    let mut service: AuthService = create_test_service();
    let session: Session = create_signed_in_session(&mut service);
    let mut wizard: DonationWizard =
        open_donation_form(&session, CenterDirectory::default(), TODAY).unwrap();
    fill_wizard(&mut wizard);

    let result: ScheduleResult = schedule_donation(&mut wizard, &FixedPort { accept: false })
        .await
        .unwrap();

    assert_eq!(result.next, Route::DonationForm);
    assert_eq!(result.outcome.notice().kind, NoticeKind::Destructive);
    assert!(matches!(result.outcome, SubmissionOutcome::Failed { .. }));
}

#[tokio::test]
async fn test_schedule_without_consent_is_an_error() {
    let mut service: AuthService = create_test_service();
    let session: Session = create_signed_in_session(&mut service);
    let mut wizard: DonationWizard =
        open_donation_form(&session, CenterDirectory::default(), TODAY).unwrap();
    fill_wizard(&mut wizard);
    wizard.set_health_consent(false);

    let result: Result<ScheduleResult, ApiError> =
        schedule_donation(&mut wizard, &FixedPort { accept: true }).await;

    assert!(matches!(
        result,
        Err(ApiError::Wizard(CoreError::StepIncomplete { .. }))
    ));
}
