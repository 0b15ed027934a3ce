//! Shared configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use domain::{DEFAULT_COURSE_MIN_AGE, DEFAULT_PATIENT_MAX_AGE, DEFAULT_WITHDRAWAL_CEILING};
use serde::{Deserialize, Serialize};

/// Business thresholds for the exercises plus logging level.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Largest amount a single withdrawal may take
    pub withdrawal_ceiling: f64,
    /// Oldest age a patient record accepts
    pub patient_max_age: i32,
    /// Minimum participant age for course registration
    pub course_min_age: u32,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            withdrawal_ceiling: DEFAULT_WITHDRAWAL_CEILING,
            patient_max_age: DEFAULT_PATIENT_MAX_AGE,
            course_min_age: DEFAULT_COURSE_MIN_AGE,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment (and `.env` if present).
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            withdrawal_ceiling: parse_or(&lookup, "WITHDRAWAL_CEILING", defaults.withdrawal_ceiling),
            patient_max_age: parse_or(&lookup, "PATIENT_MAX_AGE", defaults.patient_max_age),
            course_min_age: parse_or(&lookup, "COURSE_MIN_AGE", defaults.course_min_age),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
