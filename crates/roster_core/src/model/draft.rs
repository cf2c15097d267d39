//! Form candidate shape and field validation.
//!
//! # Responsibility
//! - Define the pre-validation draft shape carrying raw form input.
//! - Validate a draft against the per-field rules.
//!
//! # Invariants
//! - Rules are independent: every failing field is reported, none
//!   short-circuits another.
//! - `validate_draft` is pure and deterministic.

use crate::model::user::{User, UserId, UserStatus};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// Minimal structural check, not RFC validation: something, `@`, something,
// `.`, something, with no whitespace and no second `@` before the dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Candidate record as entered into the form, before validation.
///
/// `age` stays a raw string here: the range rule owns the conversion, so
/// non-numeric input is a validation outcome rather than a parse panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub status: UserStatus,
}

impl UserDraft {
    /// Builds the edit-form prefill for an existing record.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age.to_string(),
            status: user.status,
        }
    }

    /// Validates this draft and constructs a record with the given id.
    ///
    /// # Errors
    /// - Returns the full per-field error map when any rule fails; the
    ///   record is never partially constructed.
    pub fn build(&self, id: UserId) -> Result<User, ValidationErrors> {
        let errors = validate_draft(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        // The range rule guarantees this parse succeeds on the happy path.
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationErrors {
                age: Some(FieldError::Range),
                ..ValidationErrors::default()
            })?;

        Ok(User {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            age,
            status: self.status,
        })
    }
}

/// Per-field failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Value is empty after trimming whitespace.
    Required,
    /// Value does not match the expected shape.
    Format,
    /// Value does not convert to a positive integer.
    Range,
}

/// Field-to-error map returned by [`validate_draft`].
///
/// Empty map = valid draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub age: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }

    /// Returns `(field, message)` pairs for every failing field, in form
    /// order.
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        if self.name.is_some() {
            out.push(("name", "Name is required"));
        }
        if self.email.is_some() {
            out.push(("email", "Invalid email format"));
        }
        if self.age.is_some() {
            out.push(("age", "Age must be a positive number"));
        }
        out
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no validation errors");
        }
        let joined = self
            .messages()
            .iter()
            .map(|(_, message)| *message)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl Error for ValidationErrors {}

/// Checks a draft against the field rules.
///
/// Rules, each independent:
/// - `name` fails `Required` when empty after trimming.
/// - `email` fails `Format` unless it matches the structural pattern.
/// - `age` fails `Range` unless it parses as an integer greater than zero;
///   non-numeric input also fails here.
pub fn validate_draft(draft: &UserDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some(FieldError::Required);
    }

    if !EMAIL_RE.is_match(&draft.email) {
        errors.email = Some(FieldError::Format);
    }

    match draft.age.trim().parse::<u32>() {
        Ok(age) if age > 0 => {}
        _ => errors.age = Some(FieldError::Range),
    }

    errors
}
