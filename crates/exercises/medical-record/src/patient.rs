//! Patient record and its business validation.

use std::ops::RangeInclusive;

use domain::{DomainError, DomainResult, DEFAULT_PATIENT_MAX_AGE, PATIENT_MIN_AGE};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const INCOMPLETE_MESSAGE: &str = "Patient data is incomplete.";
pub const INVALID_MESSAGE: &str = "The entered data is not valid.";

/// Patient record as entered.
///
/// Nothing is rejected at construction: completeness and range are business
/// rules checked by a [`PatientValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    name: String,
    age: i32,
    address: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: i32, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Validate with the default rules
    pub fn validate(&self) -> DomainResult<()> {
        RecordValidator::default().validate(self)
    }
}

/// Business validation of a patient record.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PatientValidator {
    /// # Errors
    /// `IncompleteData` when a required field is blank, otherwise
    /// `InvalidData` when a field is out of range.
    fn validate(&self, patient: &Patient) -> DomainResult<()>;
}

/// Standard rules: name and address present, age within range.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    ages: RangeInclusive<i32>,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::with_max_age(DEFAULT_PATIENT_MAX_AGE)
    }
}

impl RecordValidator {
    pub fn with_max_age(max_age: i32) -> Self {
        Self {
            ages: PATIENT_MIN_AGE..=max_age,
        }
    }

    pub fn ages(&self) -> &RangeInclusive<i32> {
        &self.ages
    }
}

impl PatientValidator for RecordValidator {
    fn validate(&self, patient: &Patient) -> DomainResult<()> {
        if patient.name.trim().is_empty() || patient.address.trim().is_empty() {
            return Err(DomainError::incomplete_data(INCOMPLETE_MESSAGE));
        }
        if !self.ages.contains(&patient.age) {
            return Err(DomainError::invalid_data(INVALID_MESSAGE));
        }
        Ok(())
    }
}
