mod common;

use std::sync::Arc;

use aak_auth_core::error::{ApiError, FALLBACK_ERROR_MESSAGE};
use aak_auth_core::model::{Field, UserType};
use aak_auth_core::notify::{ToastKind, Toaster};
use aak_auth_core::signup::{FormStatus, SignupState, SubmitOutcome, SIGNUP_SUCCESS_MESSAGE};
use common::{france, network_error, page, valid_values, FakeApi};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn filled(send_confirm_password: bool) -> Arc<SignupState> {
    let state = SignupState::new(send_confirm_password);
    let values = valid_values();
    for field in Field::ALL {
        state.set_field(field, values.get(field).to_string());
    }
    state
}

#[rstest]
#[case(UserType::Researcher)]
#[case(UserType::Investor)]
#[case(UserType::InstitutionStaff)]
#[case(UserType::ServiceProvider)]
#[tokio::test]
async fn every_user_type_can_submit(#[case] user_type: UserType) {
    let state = filled(false);
    state.set_field(Field::UserType, user_type.as_str().to_string());
    let api = FakeApi::new();
    let toaster = Toaster::new();

    assert!(state.is_valid());
    assert_eq!(state.submit(&api, &toaster).await, SubmitOutcome::Created);
    assert_eq!(api.signups.borrow()[0].user_type, user_type);
}

#[tokio::test]
async fn unknown_user_type_is_rejected() {
    let state = filled(false);
    state.set_field(Field::UserType, "admin".into());

    assert_eq!(state.errors.lock_ref().get(Field::UserType), Some("User type is required"));
}

#[rstest]
#[case("abc12", Some("At least 6 characters"))]
#[case("abcdef", None)]
fn password_minimum_length(#[case] password: &str, #[case] expected: Option<&str>) {
    let state = filled(false);
    state.set_field(Field::Password, password.into());
    state.set_field(Field::ConfirmPassword, password.into());

    assert_eq!(state.errors.lock_ref().get(Field::Password), expected);
}

#[tokio::test]
async fn short_password_blocks_submission() {
    let state = filled(false);
    state.set_field(Field::Password, "abc12".into());
    state.set_field(Field::ConfirmPassword, "abc12".into());

    let api = FakeApi::new();
    let toaster = Toaster::new();
    let outcome = state.submit(&api, &toaster).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(api.signups.borrow().is_empty());
    assert!(toaster.snapshot().is_empty());
    assert_eq!(state.visible_error(Field::Password), Some("At least 6 characters"));
}

#[test]
fn confirm_password_tracks_password() {
    let state = filled(false);
    state.set_field(Field::Password, "secret1".into());
    state.set_field(Field::ConfirmPassword, "secret2".into());
    assert_eq!(state.errors.lock_ref().get(Field::ConfirmPassword), Some("Passwords must match"));
    assert!(!state.is_valid());

    state.set_field(Field::ConfirmPassword, "secret1".into());
    assert_eq!(state.errors.lock_ref().get(Field::ConfirmPassword), None);

    // editing the password after confirming re-opens the mismatch
    state.set_field(Field::Password, "secret9".into());
    assert_eq!(state.errors.lock_ref().get(Field::ConfirmPassword), Some("Passwords must match"));
}

#[test]
fn errors_stay_hidden_until_touched() {
    let state = SignupState::new(false);
    assert_eq!(state.errors.lock_ref().get(Field::Country), Some("Country is required"));
    assert_eq!(state.visible_error(Field::Country), None);

    state.touch(Field::Country);
    assert_eq!(state.visible_error(Field::Country), Some("Country is required"));
}

#[tokio::test]
async fn failed_country_load_shows_no_country_error_until_needed() {
    let state = SignupState::new(false);
    let api = FakeApi::new().with_countries(Err(network_error()));

    state.countries.load(&api).await;

    assert!(state.countries.countries().is_empty());
    assert_eq!(state.visible_error(Field::Country), None);

    let toaster = Toaster::new();
    assert_eq!(state.submit(&api, &toaster).await, SubmitOutcome::Invalid);
    assert_eq!(state.visible_error(Field::Country), Some("Country is required"));
}

#[tokio::test]
async fn success_shows_confirmation_and_one_toast() {
    let state = filled(false);
    let api = FakeApi::new().with_countries(Ok(page(vec![france()])));
    let toaster = Toaster::new();

    let outcome = state.submit(&api, &toaster).await;

    assert_eq!(outcome, SubmitOutcome::Created);
    assert_eq!(state.status.get(), FormStatus::Success);
    assert!(!state.submitting.get());
    let toasts = toaster.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, SIGNUP_SUCCESS_MESSAGE);
}

#[tokio::test]
async fn payload_carries_current_values() {
    let state = filled(false);
    let api = FakeApi::new();
    let toaster = Toaster::new();

    state.submit(&api, &toaster).await;

    let sent = api.signups.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "john@example.com");
    assert_eq!(sent[0].country, "France");
    assert_eq!(sent[0].confirm_password, None);
}

#[tokio::test]
async fn text_fields_are_posted_as_typed() {
    let state = filled(false);
    state.set_field(Field::FirstName, "  ".to_string());
    state.set_field(Field::Username, " johndoe ".to_string());
    let api = FakeApi::new();

    assert!(state.is_valid());
    assert_eq!(state.submit(&api, &Toaster::new()).await, SubmitOutcome::Created);

    let sent = api.signups.borrow();
    assert_eq!(sent[0].first_name, "  ");
    assert_eq!(sent[0].username, " johndoe ");
}

#[tokio::test]
async fn confirm_password_is_sent_when_configured() {
    let state = filled(true);
    let api = FakeApi::new();

    state.submit(&api, &Toaster::new()).await;

    assert_eq!(api.signups.borrow()[0].confirm_password.as_deref(), Some("secret1"));
}

#[tokio::test]
async fn server_message_is_shown_verbatim() {
    let state = filled(false);
    let api = FakeApi::new().with_signup(Err(ApiError::status(
        400,
        Some(json!({ "message": "Email already exists" })),
    )));
    let toaster = Toaster::new();

    let outcome = state.submit(&api, &toaster).await;

    assert_eq!(outcome, SubmitOutcome::Rejected("Email already exists".into()));
    assert_eq!(state.status.get(), FormStatus::Failure);
    assert!(!state.submitting.get());
    let toasts = toaster.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, "Email already exists");
}

#[tokio::test]
async fn unreadable_error_body_falls_back() {
    let state = filled(false);
    let api = FakeApi::new().with_signup(Err(ApiError::status(502, None)));
    let toaster = Toaster::new();

    let outcome = state.submit(&api, &toaster).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(FALLBACK_ERROR_MESSAGE.into()));
    assert_eq!(toaster.snapshot()[0].message, "Unexpected error");
}

#[tokio::test]
async fn failure_can_be_retried() {
    let state = filled(false);
    let toaster = Toaster::new();

    let failing = FakeApi::new().with_signup(Err(network_error()));
    assert_eq!(
        state.submit(&failing, &toaster).await,
        SubmitOutcome::Rejected("connection refused".into())
    );

    let working = FakeApi::new();
    assert_eq!(state.submit(&working, &toaster).await, SubmitOutcome::Created);
    assert_eq!(state.status.get(), FormStatus::Success);
    assert_eq!(toaster.snapshot().len(), 2);
}

#[tokio::test]
async fn overlapping_submit_is_ignored() {
    let state = filled(false);
    let api = FakeApi::new().gated();
    let toaster = Toaster::new();

    let (first, second) = tokio::join!(state.submit(&api, &toaster), async {
        assert!(state.submitting.get());
        let second = state.submit(&api, &toaster).await;
        api.open_gate();
        second
    });

    assert_eq!(first, SubmitOutcome::Created);
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(api.signups.borrow().len(), 1);
    assert_eq!(toaster.snapshot().len(), 1);
}
