//! Validation result and violation types.

use std::fmt;

use serde::Serialize;

/// Outcome of validating an untyped payload: typed data or every violation found.
pub type Validated<T> = Result<T, ValidationErrors>;

/// Kind of rule a field broke.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    Required,
    InvalidType,
    TooSmall,
    TooBig,
    InvalidUrl,
    InvalidEnumValue,
    InvalidObject,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldViolation {
    /// Field path, e.g. `title` or `genre[1]`. Empty for the payload root.
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// All violations collected for one payload, in field order.
///
/// Serializes as a bare JSON array of [`FieldViolation`].
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Violations reported against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.0.iter().filter(move |v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| {
                if v.field.is_empty() {
                    v.message.clone()
                } else {
                    format!("{}: {}", v.field, v.message)
                }
            })
            .collect();
        f.write_str(&parts.join("; "))
    }
}
