//! Passenger entity.

use domain::{not_blank, validate_fields, DomainResult};
use validator::Validate;

/// Ticket holder identified by an identity document number.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Passenger {
    #[validate(custom(function = "not_blank"))]
    name: String,
    #[validate(custom(function = "not_blank"))]
    identity: String,
}

impl Passenger {
    /// # Errors
    /// `InvalidArgument` if the name or identity is blank.
    pub fn new(name: impl Into<String>, identity: impl Into<String>) -> DomainResult<Self> {
        let passenger = Self {
            name: name.into(),
            identity: identity.into(),
        };
        validate_fields(&passenger)?;
        Ok(passenger)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}
