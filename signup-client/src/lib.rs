//! Signup Client - HTTP client and form controller for the Signup Server
//!
//! Provides network-based HTTP calls to the registration API, plus the
//! form-side machinery: draft state, payload validation, and the submit
//! status state machine.

pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FormController, RegistrationDraft, SubmitStatus};
pub use http::{HttpClient, RegistrationApi};

// Re-export shared types for convenience
pub use shared::models::{Gender, Registration, RegistrationCreate, RegistrationCreated, UserType};
