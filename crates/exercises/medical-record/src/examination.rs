//! Examination - caller-facing validation that re-raises failures.

use domain::{DomainResult, ErrorKind};

use crate::patient::{Patient, PatientValidator, RecordValidator};

pub const VALID_MESSAGE: &str = "Patient data is valid";
pub const INCOMPLETE_CHECK_MESSAGE: &str = "Validation failed: name/address is empty.";
pub const INVALID_CHECK_MESSAGE: &str = "Validation failed: age outside the accepted range.";

/// Runs a [`PatientValidator`] and re-wraps its failures.
#[derive(Debug, Clone, Default)]
pub struct Examination<V = RecordValidator> {
    validator: V,
}

impl Examination {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: PatientValidator> Examination<V> {
    pub fn with_validator(validator: V) -> Self {
        Self { validator }
    }

    /// Check a patient record.
    ///
    /// A validator failure is re-raised with the same kind and a more specific
    /// message; the original error stays reachable as the cause.
    pub fn check(&self, patient: &Patient) -> DomainResult<&'static str> {
        self.validator.validate(patient).map_err(|err| {
            let message = match err.kind() {
                ErrorKind::IncompleteData => INCOMPLETE_CHECK_MESSAGE.to_string(),
                ErrorKind::InvalidData => INVALID_CHECK_MESSAGE.to_string(),
                _ => format!("Validation failed: {err}"),
            };
            err.rewrap(message)
        })?;

        Ok(VALID_MESSAGE)
    }
}
