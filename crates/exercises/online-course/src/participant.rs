//! Participant entity and eligibility rules.

use domain::{
    not_blank, validate_fields, Criterion, DomainError, DomainResult, ACCEPTED_EDUCATION_LEVELS,
    DEFAULT_COURSE_MIN_AGE,
};
use validator::Validate;

/// Eligibility requirements of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityPolicy {
    pub min_age: u32,
    pub accepted_levels: Vec<String>,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_COURSE_MIN_AGE,
            accepted_levels: ACCEPTED_EDUCATION_LEVELS
                .iter()
                .map(|level| level.to_string())
                .collect(),
        }
    }
}

impl EligibilityPolicy {
    /// Default accepted levels with a custom minimum age
    pub fn with_min_age(min_age: u32) -> Self {
        Self {
            min_age,
            ..Self::default()
        }
    }

    fn accepts(&self, level: &str) -> bool {
        self.accepted_levels.iter().any(|accepted| accepted == level)
    }
}

/// Course applicant.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Participant {
    #[validate(custom(function = "not_blank"))]
    name: String,
    age: u32,
    education_level: String,
}

impl Participant {
    /// # Errors
    /// `InvalidArgument` if the name is blank. The education level is not
    /// checked here; an unaccepted level is an eligibility failure.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        education_level: impl Into<String>,
    ) -> DomainResult<Self> {
        let participant = Self {
            name: name.into(),
            age,
            education_level: education_level.into(),
        };
        validate_fields(&participant)?;
        Ok(participant)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn education_level(&self) -> &str {
        &self.education_level
    }

    /// Check eligibility against the default policy
    pub fn check_eligibility(&self) -> DomainResult<()> {
        self.check_eligibility_with(&EligibilityPolicy::default())
    }

    /// Check age, then education level; the first failure wins.
    pub fn check_eligibility_with(&self, policy: &EligibilityPolicy) -> DomainResult<()> {
        if self.age < policy.min_age {
            return Err(DomainError::ineligible(
                Criterion::Age,
                format!(
                    "Registration rejected: your age does not meet the requirement (minimum {}).",
                    policy.min_age
                ),
            ));
        }
        if !policy.accepts(&self.education_level) {
            return Err(DomainError::ineligible(
                Criterion::Education,
                format!(
                    "Registration rejected: your education level does not meet the requirement (accepted: {}).",
                    policy.accepted_levels.join(", ")
                ),
            ));
        }
        Ok(())
    }
}
