//! Request integrity validation

pub mod data;

pub use data::{validate_for_localization, validate_request, ValidationError};
