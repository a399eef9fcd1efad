//! Registration Model

use crate::validation::{
    self, FieldErrors, MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MIN_MOBILE_LEN,
};
use serde::{Deserialize, Serialize};

/// Sign-up channel for a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Volunteer,
    Vendor,
    Corporate,
}

/// Self-declared gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Registration entity (stored record)
///
/// Created once via the create operation; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub user_type: UserType,
    pub country_of_residence: String,
    pub emirates_id: Option<String>,
    pub emirates_id_expiry: Option<String>,
    pub first_name_english: String,
    pub last_name_english: String,
    pub first_name_arabic: Option<String>,
    pub last_name_arabic: Option<String>,
    pub email: String,
    pub mobile: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub country: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub person_of_determination: bool,
    pub how_did_you_hear: Option<String>,
    pub vat: Option<String>,
    pub created_at: i64,
}

/// Create registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCreate {
    pub user_type: UserType,
    pub country_of_residence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emirates_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emirates_id_expiry: Option<String>,
    pub first_name_english: String,
    pub last_name_english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name_arabic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name_arabic: Option<String>,
    pub email: String,
    pub mobile: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub person_of_determination: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_did_you_hear: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
}

/// Identifier returned by a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCreated {
    pub id: String,
}

impl RegistrationCreate {
    /// Validate the payload against the store's field constraints.
    ///
    /// Enum membership (`user_type`, `gender`) is enforced by the type
    /// system; everything else is checked here, so the form controller and
    /// the store reject exactly the same inputs. The Emirates ID fields are
    /// optional regardless of `country_of_residence`.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(e) = validation::validate_required_text(
            &self.country_of_residence,
            "Country of residence",
            MAX_NAME_LEN,
        ) {
            errors.insert("country_of_residence", e);
        }
        if let Err(e) =
            validation::validate_required_text(&self.first_name_english, "First name", MAX_NAME_LEN)
        {
            errors.insert("first_name_english", e);
        }
        if let Err(e) =
            validation::validate_required_text(&self.last_name_english, "Last name", MAX_NAME_LEN)
        {
            errors.insert("last_name_english", e);
        }
        if let Err(e) = validation::validate_email(&self.email) {
            errors.insert("email", e);
        }
        if let Err(e) =
            validation::validate_required_text(&self.mobile, "Mobile number", MAX_SHORT_TEXT_LEN)
                .and_then(|_| {
                    validation::validate_min_len(&self.mobile, "Mobile number", MIN_MOBILE_LEN)
                })
        {
            errors.insert("mobile", e);
        }
        if let Err(e) = validation::validate_required_text(
            &self.date_of_birth,
            "Date of birth",
            MAX_SHORT_TEXT_LEN,
        )
        .and_then(|_| validation::validate_date(&self.date_of_birth, "Date of birth"))
        {
            errors.insert("date_of_birth", e);
        }
        if let Err(e) = validation::validate_required_text(&self.country, "Country", MAX_NAME_LEN) {
            errors.insert("country", e);
        }

        if let Err(e) =
            validation::validate_optional_text(&self.emirates_id, "Emirates ID", MAX_SHORT_TEXT_LEN)
        {
            errors.insert("emirates_id", e);
        }
        if let Err(e) = validation::validate_optional_text(
            &self.emirates_id_expiry,
            "Emirates ID expiry",
            MAX_SHORT_TEXT_LEN,
        ) {
            errors.insert("emirates_id_expiry", e);
        }
        if let Err(e) = validation::validate_optional_text(
            &self.first_name_arabic,
            "First name (Arabic)",
            MAX_NAME_LEN,
        ) {
            errors.insert("first_name_arabic", e);
        }
        if let Err(e) = validation::validate_optional_text(
            &self.last_name_arabic,
            "Last name (Arabic)",
            MAX_NAME_LEN,
        ) {
            errors.insert("last_name_arabic", e);
        }
        if let Err(e) = validation::validate_optional_text(&self.state, "State", MAX_NAME_LEN) {
            errors.insert("state", e);
        }
        if let Err(e) = validation::validate_optional_text(&self.city, "City", MAX_NAME_LEN) {
            errors.insert("city", e);
        }
        if let Err(e) =
            validation::validate_optional_text(&self.address, "Address", MAX_ADDRESS_LEN)
        {
            errors.insert("address", e);
        }
        if let Err(e) = validation::validate_optional_text(
            &self.how_did_you_hear,
            "How did you hear",
            MAX_NAME_LEN,
        ) {
            errors.insert("how_did_you_hear", e);
        }
        if let Err(e) =
            validation::validate_optional_text(&self.vat, "VAT number", MAX_SHORT_TEXT_LEN)
        {
            errors.insert("vat", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
