//! Movie payload validation.
//!
//! Provides the violation types and the schema checks for full and partial
//! movie payloads, all without store access.

pub mod movie;
pub mod rules;

pub use movie::{validate_full, validate_partial, MoviePatch, MovieValidator, NewMovie};
pub use rules::{FieldViolation, Validated, ValidationErrors, ViolationCode};
