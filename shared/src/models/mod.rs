//! Shared data models

pub mod registration;

pub use registration::{Gender, Registration, RegistrationCreate, RegistrationCreated, UserType};
