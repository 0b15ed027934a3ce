//! Structural validation - precondition checks run at construction time.
//!
//! Entities derive `validator::Validate` and call [`validate_fields`] before
//! they are handed out. Any failure becomes `ErrorKind::InvalidArgument`;
//! business rules live with each exercise and never go through here.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{DomainError, DomainResult};

/// Reject strings that are empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Reject NaN and infinities.
pub fn finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut err = ValidationError::new("not_finite");
        err.message = Some(Cow::from("must be a number"));
        return Err(err);
    }
    Ok(())
}

/// Run derived field validation and map failures to `InvalidArgument`.
pub fn validate_fields<T: Validate>(value: &T) -> DomainResult<()> {
    value
        .validate()
        .map_err(|e| DomainError::invalid_argument(format_validation_errors(&e)))
}

/// Check a single text argument that is not part of a validated struct.
pub fn require_text(field: &str, value: &str) -> DomainResult<()> {
    not_blank(value).map_err(|_| DomainError::invalid_argument(format!("{field} must not be blank")))
}

/// Format validation errors into a stable, user-friendly string
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| format!("{} {}", field, m))
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join(", ")
}
