//! Field checks shared by the article commands.
//!
//! Each command declares its rules as a plain function returning the
//! violations found; an empty list means the input is valid.

use crate::application::error::{ApplicationError, ApplicationResult, Operation};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Text is empty when nothing but whitespace remains.
pub fn not_empty(field: &'static str, value: &str) -> Option<Violation> {
    value
        .trim()
        .is_empty()
        .then(|| Violation::new(field, format!("'{field}' must not be empty.")))
}

pub fn id_not_empty(id: Uuid) -> Option<Violation> {
    id.is_nil()
        .then(|| Violation::new("Id", "Article Id cannot be empty."))
}

/// Collapses the violations into one failure coded `<Operation>.Validation`.
/// Messages keep rule order and are separated by newlines.
pub fn ensure_valid(operation: Operation, violations: Vec<Violation>) -> ApplicationResult<()> {
    if violations.is_empty() {
        return Ok(());
    }

    let message = violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    tracing::debug!(operation = operation.as_str(), %message, "validation failed");
    Err(ApplicationError::validation(operation, message))
}
