//! Form Controller
//!
//! Holds the registration draft, validates it on submit, and drives the
//! submit status state machine:
//!
//! ```text
//! Idle → Submitting → Success → Idle   (after the success banner delay)
//!                   → Error   → Idle   (next submit attempt)
//! ```

use std::time::Duration;

use tokio::time::Instant;

use crate::http::RegistrationApi;
use shared::models::{Gender, RegistrationCreate, UserType};
use shared::validation::FieldErrors;

/// Country-of-residence value that reveals the Emirates ID inputs
pub const UAE: &str = "United Arab Emirates";

/// How long the success banner stays up before reverting to idle
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Fallback when a failure carries no usable message
const GENERIC_ERROR: &str = "Registration failed";

/// Submit status state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Editable draft of a registration
///
/// Mirrors the form inputs: text fields start empty, the gender select
/// starts unset, the user type radio defaults to volunteer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub user_type: UserType,
    pub country_of_residence: String,
    pub emirates_id: String,
    pub emirates_id_expiry: String,
    pub first_name_english: String,
    pub last_name_english: String,
    pub first_name_arabic: String,
    pub last_name_arabic: String,
    pub email: String,
    pub mobile: String,
    pub gender: Option<Gender>,
    pub date_of_birth: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub person_of_determination: bool,
    pub how_did_you_hear: String,
    pub vat: String,
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl RegistrationDraft {
    /// Build the create payload, collecting every validation failure.
    ///
    /// When gender is unset, a placeholder lets the remaining field checks
    /// run; it never escapes because `errors` is non-empty in that case.
    pub fn to_payload(&self) -> Result<RegistrationCreate, FieldErrors> {
        let mut errors = FieldErrors::new();

        let gender = match self.gender {
            Some(g) => g,
            None => {
                errors.insert("gender", "Gender is required");
                Gender::Other
            }
        };

        let payload = RegistrationCreate {
            user_type: self.user_type,
            country_of_residence: self.country_of_residence.clone(),
            emirates_id: optional(&self.emirates_id),
            emirates_id_expiry: optional(&self.emirates_id_expiry),
            first_name_english: self.first_name_english.clone(),
            last_name_english: self.last_name_english.clone(),
            first_name_arabic: optional(&self.first_name_arabic),
            last_name_arabic: optional(&self.last_name_arabic),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            gender,
            date_of_birth: self.date_of_birth.clone(),
            country: self.country.clone(),
            state: optional(&self.state),
            city: optional(&self.city),
            address: optional(&self.address),
            person_of_determination: self.person_of_determination,
            how_did_you_hear: optional(&self.how_did_you_hear),
            vat: optional(&self.vat),
        };

        if let Err(field_errors) = payload.validate() {
            for (field, message) in field_errors.iter() {
                errors.insert(field, message);
            }
        }

        if errors.is_empty() { Ok(payload) } else { Err(errors) }
    }
}

/// Form controller driving the draft, validation, and submit flow
pub struct FormController<A: RegistrationApi> {
    api: A,
    draft: RegistrationDraft,
    status: SubmitStatus,
    field_errors: FieldErrors,
    success_since: Option<Instant>,
}

impl<A: RegistrationApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            draft: RegistrationDraft::default(),
            status: SubmitStatus::Idle,
            field_errors: FieldErrors::new(),
            success_since: None,
        }
    }

    /// Current draft (read)
    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Current draft (edit)
    ///
    /// Values persist until a successful submit; in particular, hiding the
    /// Emirates ID inputs does not discard what was typed into them.
    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Per-field errors from the last submit attempt
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Message for the error banner
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the Emirates ID inputs are shown. Presentation only: the
    /// fields stay optional in the schema either way.
    pub fn shows_emirates_id(&self) -> bool {
        self.draft.country_of_residence == UAE
    }

    /// The submit control is disabled while a submission is in flight
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting
    }

    /// Validate the draft and, if it passes, perform exactly one create
    /// call.
    ///
    /// Validation failure surfaces per-field errors and makes no remote
    /// call. A failed submission leaves the draft intact for correction
    /// and requires explicit resubmission; there is no retry logic.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        self.field_errors = FieldErrors::new();
        self.status = SubmitStatus::Submitting;

        match self.api.create_registration(&payload).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "Registration submitted");
                self.status = SubmitStatus::Success;
                self.draft = RegistrationDraft::default();
                self.success_since = Some(Instant::now());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Registration failed");
                let message = match err.message() {
                    m if m.is_empty() => GENERIC_ERROR.to_string(),
                    m => m,
                };
                self.status = SubmitStatus::Error(message);
            }
        }
    }

    /// Drive time-based transitions; call from the UI tick. The success
    /// banner reverts to idle after [`SUCCESS_BANNER_DURATION`].
    pub fn refresh(&mut self) {
        if self.status == SubmitStatus::Success
            && let Some(since) = self.success_since
            && since.elapsed() >= SUCCESS_BANNER_DURATION
        {
            self.status = SubmitStatus::Idle;
            self.success_since = None;
        }
    }
}
