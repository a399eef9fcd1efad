//! Form controller integration tests
//!
//! Drive the submit flow against a scripted mock backend.

use std::sync::Mutex;

use async_trait::async_trait;
use signup_client::form::SUCCESS_BANNER_DURATION;
use signup_client::{
    ClientError, ClientResult, FormController, Gender, Registration, RegistrationApi,
    RegistrationCreate, RegistrationCreated, SubmitStatus, UserType,
};

/// Scripted response for the mock backend
#[derive(Clone, Copy, PartialEq)]
enum MockResponse {
    Ok,
    DuplicateEmail,
    BlankMessage,
}

/// Recording backend
struct MockApi {
    response: MockResponse,
    calls: Mutex<Vec<RegistrationCreate>>,
}

impl MockApi {
    fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn last_call(&self) -> RegistrationCreate {
        self.calls.lock().unwrap().last().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationApi for &MockApi {
    async fn create_registration(
        &self,
        payload: &RegistrationCreate,
    ) -> ClientResult<RegistrationCreated> {
        self.calls.lock().unwrap().push(payload.clone());
        match self.response {
            MockResponse::Ok => Ok(RegistrationCreated {
                id: format!("registration:test{}", self.call_count()),
            }),
            MockResponse::DuplicateEmail => Err(ClientError::Api {
                code: 1001,
                message: "Email already registered".to_string(),
                details: None,
            }),
            MockResponse::BlankMessage => Err(ClientError::Api {
                code: 9001,
                message: String::new(),
                details: None,
            }),
        }
    }

    async fn list_registrations(&self) -> ClientResult<Vec<Registration>> {
        Ok(Vec::new())
    }
}

fn fill_valid(controller: &mut FormController<&MockApi>) {
    let draft = controller.draft_mut();
    draft.country_of_residence = "United Arab Emirates".into();
    draft.first_name_english = "John".into();
    draft.last_name_english = "Doe".into();
    draft.email = "john@example.com".into();
    draft.mobile = "0501234567".into();
    draft.gender = Some(Gender::Male);
    draft.date_of_birth = "1990-01-01".into();
    draft.country = "United Arab Emirates".into();
}

#[tokio::test]
async fn test_empty_draft_rejected_before_any_remote_call() {
    let api = MockApi::new(MockResponse::Ok);
    let mut controller = FormController::new(&api);

    controller.submit().await;

    assert_eq!(controller.status(), &SubmitStatus::Idle);
    assert_eq!(api.call_count(), 0);

    // Every required field reports its own error
    let errors = controller.field_errors();
    assert_eq!(errors.len(), 8);
    assert_eq!(
        errors.get("country_of_residence"),
        Some("Country of residence is required")
    );
    assert_eq!(errors.get("first_name_english"), Some("First name is required"));
    assert_eq!(errors.get("last_name_english"), Some("Last name is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("mobile"), Some("Mobile number is required"));
    assert_eq!(errors.get("gender"), Some("Gender is required"));
    assert_eq!(errors.get("date_of_birth"), Some("Date of birth is required"));
    assert_eq!(errors.get("country"), Some("Country is required"));
}

#[tokio::test]
async fn test_invalid_email_rejected_locally() {
    let api = MockApi::new(MockResponse::Ok);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);
    controller.draft_mut().email = "not-an-email".into();

    controller.submit().await;

    assert_eq!(api.call_count(), 0);
    assert_eq!(
        controller.field_errors().get("email"),
        Some("Invalid email address")
    );
}

#[tokio::test]
async fn test_short_mobile_rejected_locally() {
    let api = MockApi::new(MockResponse::Ok);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);
    controller.draft_mut().mobile = "1234567".into();

    controller.submit().await;

    assert_eq!(api.call_count(), 0);
    assert_eq!(
        controller.field_errors().get("mobile"),
        Some("Mobile number must be at least 8 characters")
    );
}

#[tokio::test(start_paused = true)]
async fn test_successful_submit_clears_draft_and_reverts_after_banner() {
    let api = MockApi::new(MockResponse::Ok);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);
    controller.draft_mut().emirates_id = "784-1990-1234567-1".into();
    controller.draft_mut().person_of_determination = true;

    controller.submit().await;

    assert_eq!(controller.status(), &SubmitStatus::Success);
    assert_eq!(api.call_count(), 1);

    // Exactly the entered values went over the wire
    let sent = api.last_call();
    assert_eq!(sent.user_type, UserType::Volunteer);
    assert_eq!(sent.email, "john@example.com");
    assert_eq!(sent.emirates_id.as_deref(), Some("784-1990-1234567-1"));
    assert!(sent.person_of_determination);
    assert_eq!(sent.state, None);

    // Draft cleared back to defaults
    assert!(controller.draft().email.is_empty());
    assert!(!controller.draft().person_of_determination);
    assert_eq!(controller.draft().gender, None);

    // Banner holds until the delay elapses, then reverts to idle
    controller.refresh();
    assert_eq!(controller.status(), &SubmitStatus::Success);

    tokio::time::advance(SUCCESS_BANNER_DURATION).await;
    controller.refresh();
    assert_eq!(controller.status(), &SubmitStatus::Idle);
}

#[tokio::test]
async fn test_duplicate_email_shows_message_and_keeps_draft() {
    let api = MockApi::new(MockResponse::DuplicateEmail);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);

    controller.submit().await;

    assert_eq!(
        controller.status(),
        &SubmitStatus::Error("Email already registered".to_string())
    );
    assert_eq!(controller.error_message(), Some("Email already registered"));
    assert_eq!(api.call_count(), 1);

    // Field values stay intact for correction
    assert_eq!(controller.draft().email, "john@example.com");
    assert_eq!(controller.draft().first_name_english, "John");

    // No automatic retry; an explicit resubmission issues a new call
    controller.submit().await;
    assert_eq!(api.call_count(), 2);
}

#[tokio::test]
async fn test_failure_without_message_falls_back_to_generic() {
    let api = MockApi::new(MockResponse::BlankMessage);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);

    controller.submit().await;

    assert_eq!(
        controller.status(),
        &SubmitStatus::Error("Registration failed".to_string())
    );
}

#[tokio::test]
async fn test_emirates_id_draft_retained_across_country_toggle() {
    let api = MockApi::new(MockResponse::Ok);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);
    controller.draft_mut().emirates_id = "784-1990-1234567-1".into();
    controller.draft_mut().emirates_id_expiry = "2030-06-01".into();
    assert!(controller.shows_emirates_id());

    // Moving away hides the inputs but keeps the values
    controller.draft_mut().country_of_residence = "India".into();
    assert!(!controller.shows_emirates_id());
    assert_eq!(controller.draft().emirates_id, "784-1990-1234567-1");

    // And they are still there when the country comes back
    controller.draft_mut().country_of_residence = "United Arab Emirates".into();
    assert!(controller.shows_emirates_id());
    assert_eq!(controller.draft().emirates_id, "784-1990-1234567-1");
    assert_eq!(controller.draft().emirates_id_expiry, "2030-06-01");
}

#[tokio::test]
async fn test_empty_optional_inputs_sent_as_unset() {
    let api = MockApi::new(MockResponse::Ok);
    let mut controller = FormController::new(&api);
    fill_valid(&mut controller);

    controller.submit().await;

    let sent = api.last_call();
    assert_eq!(sent.emirates_id, None);
    assert_eq!(sent.first_name_arabic, None);
    assert_eq!(sent.city, None);
    assert_eq!(sent.how_did_you_hear, None);
    assert_eq!(sent.vat, None);
    assert!(!sent.person_of_determination);
}
