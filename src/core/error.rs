use std::collections::BTreeMap;

use thiserror::Error;

use super::types::Field;

/// Errors that can occur while turning form input into a submission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntakeError {
    /// One or more schema rules failed.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// A required date field has not been selected.
    #[error("missing required date: {0}")]
    MissingDate(Field),

    /// A display date could not be parsed.
    #[error("date error: {0}")]
    Date(String),

    /// Endpoint configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error raised while transmitting a registration record.
///
/// Callers showing the outcome to a user collapse every variant into one
/// generic failure; the variants exist for logs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The record could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Per-field validation messages, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message recorded wins.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Field names in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
        }
        Ok(())
    }
}
