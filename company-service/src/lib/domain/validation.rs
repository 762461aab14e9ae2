//! Per-field constraint checks with aggregated error reporting.
//!
//! Every input field is checked independently; failures are collected by
//! field name so a single response can report all of them.

use std::collections::BTreeMap;

use thiserror::Error;

/// A single constraint violated by one input field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field is required")]
    Required,

    #[error("must not be greater than {max} characters")]
    TooLong { max: usize },

    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("must be a string")]
    NotString,

    #[error("must be a valid email address")]
    InvalidEmail,

    #[error("must be exactly {digits} digits")]
    Digits { digits: usize },

    #[error("must contain at least one letter and one number")]
    LettersAndNumbers,

    #[error("has already been taken")]
    Taken,
}

impl FieldError {
    /// Client-facing message for this violation on `attribute`.
    pub fn message(&self, attribute: &str) -> String {
        match self {
            FieldError::Required => format!("The {} field is required.", attribute),
            FieldError::TooLong { max } => format!(
                "The {} field must not be greater than {} characters.",
                attribute, max
            ),
            FieldError::TooShort { min } => {
                format!("The {} field must be at least {} characters.", attribute, min)
            }
            FieldError::NotString => format!("The {} field must be a string.", attribute),
            FieldError::InvalidEmail => {
                format!("The {} field must be a valid email address.", attribute)
            }
            FieldError::Digits { digits } => {
                format!("The {} field must be {} digits.", attribute, digits)
            }
            FieldError::LettersAndNumbers => format!(
                "The {} field must contain at least one letter and one number.",
                attribute
            ),
            FieldError::Taken => format!("The {} has already been taken.", attribute),
        }
    }
}

/// Field-keyed collection of validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field` (the wire name, e.g. `phoneNo`).
    pub fn add(&mut self, field: &str, error: FieldError) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(error.message(&attribute_label(field)));
    }

    /// Unwrap a field check, recording its error under `field` on failure.
    pub fn check<T>(&mut self, field: &str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, error);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }
}

/// Trim the raw value; blank or absent input counts as missing.
pub fn required(value: Option<String>) -> Result<String, FieldError> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
        .ok_or(FieldError::Required)
}

/// Reject values longer than `max` characters (not bytes).
pub fn max_chars(value: String, max: usize) -> Result<String, FieldError> {
    if value.chars().count() > max {
        Err(FieldError::TooLong { max })
    } else {
        Ok(value)
    }
}

/// Human-readable label for a wire field name: `phoneNo` becomes `phone no`.
fn attribute_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 2);
    for c in field.chars() {
        if c == '_' {
            label.push(' ');
        } else if c.is_uppercase() {
            if !label.is_empty() {
                label.push(' ');
            }
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}
