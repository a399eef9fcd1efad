//! Shared types for the sign-up system
//!
//! Common types used by both the registration store and the form
//! controller: the registration model, payload validation, the unified
//! error system with its response envelope, and time utilities.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
