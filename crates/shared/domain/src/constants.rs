//! Domain-level constants.
//!
//! These constants define the default business rules of each exercise.
//! Runtime overrides are loaded by `common::Settings`.

// =============================================================================
// Bank account
// =============================================================================

/// Largest amount a single withdrawal may take (inclusive)
pub const DEFAULT_WITHDRAWAL_CEILING: f64 = 100_000.0;

// =============================================================================
// Medical record
// =============================================================================

/// Youngest valid patient age
pub const PATIENT_MIN_AGE: i32 = 0;

/// Oldest valid patient age
pub const DEFAULT_PATIENT_MAX_AGE: i32 = 120;

// =============================================================================
// Online course
// =============================================================================

/// Minimum participant age for course registration
pub const DEFAULT_COURSE_MIN_AGE: u32 = 18;

/// Bachelor's degree
pub const EDUCATION_BACHELOR: &str = "Bachelor";

/// Master's degree
pub const EDUCATION_MASTER: &str = "Master";

/// Education levels accepted for course registration
pub const ACCEPTED_EDUCATION_LEVELS: &[&str] = &[EDUCATION_BACHELOR, EDUCATION_MASTER];

/// Check if an education level is accepted by default
pub fn is_accepted_education_level(level: &str) -> bool {
    ACCEPTED_EDUCATION_LEVELS.contains(&level)
}
