//! Movie payload validation.
//!
//! Request bodies arrive as untyped JSON. [`MovieValidator`] checks them field
//! by field, collecting every violation instead of stopping at the first, and
//! produces either a typed [`NewMovie`] / [`MoviePatch`] or the full
//! [`ValidationErrors`] list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidateUrl;

use super::rules::{FieldViolation, Validated, ValidationErrors, ViolationCode};
use crate::genre::{same_genre, GenrePolicy, GenreRejection, GENRES};

/* --------------------------------------------------------------------------
   Limits
   -------------------------------------------------------------------------- */

/// Earliest accepted release year.
pub const MIN_YEAR: i64 = 1900;

/// Latest accepted release year.
pub const MAX_YEAR: i64 = 2100;

/// Lowest accepted rating.
pub const MIN_RATE: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATE: f64 = 10.0;

/// Rating stored when a new movie is submitted without one.
pub const DEFAULT_RATE: f64 = 5.0;

/* --------------------------------------------------------------------------
   Validated payloads
   -------------------------------------------------------------------------- */

/// A fully validated movie submission, ready to be stored under a new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

/// A validated partial update. Only `Some` fields overwrite stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// `true` when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }
}

/* --------------------------------------------------------------------------
   Validator
   -------------------------------------------------------------------------- */

/// Schema check for movie payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieValidator {
    pub genre_policy: GenrePolicy,
}

impl MovieValidator {
    pub fn new(genre_policy: GenrePolicy) -> Self {
        Self { genre_policy }
    }

    /// Validate a complete movie. Every field except `rate` is required;
    /// a missing `rate` becomes [`DEFAULT_RATE`].
    pub fn validate_full(&self, input: &Value) -> Validated<NewMovie> {
        let mut reader = FieldReader::new(input)?;

        let title = reader.string("title", true, false);
        let year = reader.integer("year", true, MIN_YEAR, MAX_YEAR);
        let director = reader.string("director", true, true);
        let duration = reader.integer("duration", true, 1, i64::from(u32::MAX));
        let poster = reader.url("poster", true);
        let genre = reader.genres("genre", true, self.genre_policy);
        let rate = reader.number("rate", false, MIN_RATE, MAX_RATE);

        let errors = reader.into_errors();
        match (title, year, director, duration, poster, genre) {
            (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
                if errors.is_empty() =>
            {
                Ok(NewMovie {
                    title,
                    year: year as i32,
                    director,
                    duration: duration as u32,
                    poster,
                    genre,
                    rate: rate.unwrap_or(DEFAULT_RATE),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate a partial movie. No field is required and no defaults are
    /// applied; an empty object yields an empty patch.
    pub fn validate_partial(&self, input: &Value) -> Validated<MoviePatch> {
        let mut reader = FieldReader::new(input)?;

        let patch = MoviePatch {
            title: reader.string("title", false, false),
            year: reader
                .integer("year", false, MIN_YEAR, MAX_YEAR)
                .map(|y| y as i32),
            director: reader.string("director", false, true),
            duration: reader
                .integer("duration", false, 1, i64::from(u32::MAX))
                .map(|d| d as u32),
            poster: reader.url("poster", false),
            genre: reader.genres("genre", false, self.genre_policy),
            rate: reader.number("rate", false, MIN_RATE, MAX_RATE),
        };

        let errors = reader.into_errors();
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

/// [`MovieValidator::validate_full`] with the default genre policy.
pub fn validate_full(input: &Value) -> Validated<NewMovie> {
    MovieValidator::default().validate_full(input)
}

/// [`MovieValidator::validate_partial`] with the default genre policy.
pub fn validate_partial(input: &Value) -> Validated<MoviePatch> {
    MovieValidator::default().validate_partial(input)
}

/* --------------------------------------------------------------------------
   Field reader
   -------------------------------------------------------------------------- */

/// Reads typed fields out of a JSON object, recording violations as it goes.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    fn new(input: &'a Value) -> Result<Self, ValidationErrors> {
        match input.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            None => {
                let mut errors = ValidationErrors::new();
                errors.push(FieldViolation::new(
                    "",
                    ViolationCode::InvalidObject,
                    format!("Expected object, received {}", kind_of(input)),
                ));
                Err(errors)
            }
        }
    }

    fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn lookup(&mut self, field: &str, required: bool) -> Option<&'a Value> {
        let value = self.object.get(field);
        if value.is_none() && required {
            self.errors.push(FieldViolation::new(
                field,
                ViolationCode::Required,
                format!("{field} is required"),
            ));
        }
        value
    }

    fn type_error(&mut self, field: &str, expected: &str, value: &Value) {
        self.errors.push(FieldViolation::new(
            field,
            ViolationCode::InvalidType,
            format!("Expected {expected}, received {}", kind_of(value)),
        ));
    }

    fn string(&mut self, field: &str, required: bool, allow_empty: bool) -> Option<String> {
        let value = self.lookup(field, required)?;
        let Some(s) = value.as_str() else {
            self.type_error(field, "string", value);
            return None;
        };
        if !allow_empty && s.trim().is_empty() {
            self.errors.push(FieldViolation::new(
                field,
                ViolationCode::TooSmall,
                format!("{field} must not be empty"),
            ));
            return None;
        }
        Some(s.to_string())
    }

    fn integer(&mut self, field: &str, required: bool, min: i64, max: i64) -> Option<i64> {
        let value = self.lookup(field, required)?;
        let parsed = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
            }),
            _ => None,
        };
        let Some(n) = parsed else {
            let expected = if value.is_number() { "integer" } else { "number" };
            self.type_error(field, expected, value);
            return None;
        };
        self.check_range(field, n as f64, min as f64, max as f64)
            .then_some(n)
    }

    fn number(&mut self, field: &str, required: bool, min: f64, max: f64) -> Option<f64> {
        let value = self.lookup(field, required)?;
        let Some(n) = value.as_f64() else {
            self.type_error(field, "number", value);
            return None;
        };
        self.check_range(field, n, min, max).then_some(n)
    }

    fn check_range(&mut self, field: &str, n: f64, min: f64, max: f64) -> bool {
        if n < min {
            self.errors.push(FieldViolation::new(
                field,
                ViolationCode::TooSmall,
                format!("{field} must be at least {min}"),
            ));
            false
        } else if n > max {
            self.errors.push(FieldViolation::new(
                field,
                ViolationCode::TooBig,
                format!("{field} must be at most {max}"),
            ));
            false
        } else {
            true
        }
    }

    fn url(&mut self, field: &str, required: bool) -> Option<String> {
        let url = self.string(field, required, true)?;
        if url.validate_url() {
            Some(url)
        } else {
            self.errors.push(FieldViolation::new(
                field,
                ViolationCode::InvalidUrl,
                format!("{field} must be a valid URL"),
            ));
            None
        }
    }

    fn genres(&mut self, field: &str, required: bool, policy: GenrePolicy) -> Option<Vec<String>> {
        let value = self.lookup(field, required)?;
        let Some(items) = value.as_array() else {
            self.type_error(field, "array", value);
            return None;
        };
        if items.is_empty() {
            self.errors.push(FieldViolation::new(
                field,
                ViolationCode::TooSmall,
                format!("{field} must contain at least one entry"),
            ));
            return None;
        }

        let mut accepted: Vec<String> = Vec::with_capacity(items.len());
        let mut all_valid = true;
        for (i, item) in items.iter().enumerate() {
            let path = format!("{field}[{i}]");
            let Some(name) = item.as_str() else {
                self.type_error(&path, "string", item);
                all_valid = false;
                continue;
            };
            match policy.accept(name) {
                Ok(genre) => {
                    if !accepted.iter().any(|g| same_genre(g, &genre)) {
                        accepted.push(genre);
                    }
                }
                Err(GenreRejection::Empty) => {
                    self.errors.push(FieldViolation::new(
                        path,
                        ViolationCode::TooSmall,
                        "Genre names must not be empty",
                    ));
                    all_valid = false;
                }
                Err(GenreRejection::Unknown) => {
                    self.errors.push(FieldViolation::new(
                        path,
                        ViolationCode::InvalidEnumValue,
                        format!("Invalid genre '{name}'. Must be one of: {}", GENRES.join(", ")),
                    ));
                    all_valid = false;
                }
            }
        }

        all_valid.then_some(accepted)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
