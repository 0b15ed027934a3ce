//! Domain-level errors.
//!
//! These errors represent precondition failures and business rule violations.
//! A `DomainError` carries its kind, a message, and optionally the error it
//! replaced, so a caller can re-raise a failure with a more specific message
//! without losing the original one.

use thiserror::Error;

/// Eligibility criterion that a participant failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Age,
    Education,
}

/// Kind of a domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input to a constructor or operation
    InvalidArgument,
    /// Required text field is empty
    IncompleteData,
    /// Field is present but outside its allowed range
    InvalidData,
    /// A fixed per-operation ceiling was exceeded
    LimitExceeded,
    /// Request exceeds the currently available capacity or balance
    InsufficientCapacity,
    /// Identifier already registered
    DuplicateKey,
    /// Identifier not registered
    NotFound,
    /// Participant does not satisfy an eligibility criterion
    Ineligible(Criterion),
}

impl ErrorKind {
    /// Stable code for logs and reports
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::IncompleteData => "INCOMPLETE_DATA",
            ErrorKind::InvalidData => "INVALID_DATA",
            ErrorKind::LimitExceeded => "LIMIT_EXCEEDED",
            ErrorKind::InsufficientCapacity => "INSUFFICIENT_CAPACITY",
            ErrorKind::DuplicateKey => "DUPLICATE_KEY",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Ineligible(Criterion::Age) => "INELIGIBLE_AGE",
            ErrorKind::Ineligible(Criterion::Education) => "INELIGIBLE_EDUCATION",
        }
    }
}

/// Domain error with an optional chained cause of the same shape.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<Box<DomainError>>,
}

impl DomainError {
    /// Create an error without a cause
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error this one replaced, if any
    pub fn cause(&self) -> Option<&DomainError> {
        self.cause.as_deref()
    }

    /// Check the kind of this error
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Replace the message, keeping the kind and chaining `self` as the cause.
    pub fn rewrap(self, message: impl Into<String>) -> Self {
        Self {
            kind: self.kind,
            message: message.into(),
            cause: Some(Box::new(self)),
        }
    }

    /// Iterate from this error down to the root cause
    pub fn chain(&self) -> impl Iterator<Item = &DomainError> {
        std::iter::successors(Some(self), |err| err.cause())
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &DomainError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

/// Convenience constructors
impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }

    pub fn incomplete_data(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompleteData, msg)
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidData, msg)
    }

    pub fn limit_exceeded(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::LimitExceeded, msg)
    }

    pub fn insufficient_capacity(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientCapacity, msg)
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateKey, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }

    pub fn ineligible(criterion: Criterion, msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ineligible(criterion), msg)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Extension trait for Option -> DomainError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, what: impl FnOnce() -> String) -> DomainResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, what: impl FnOnce() -> String) -> DomainResult<T> {
        self.ok_or_else(|| DomainError::not_found(what()))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = DomainError::not_found("account 001 not found");
        assert_eq!(err.to_string(), "account 001 not found");
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_rewrap_keeps_kind_and_chains_cause() {
        let inner = DomainError::incomplete_data("inner");
        let outer = inner.clone().rewrap("outer");

        assert_eq!(outer.kind(), ErrorKind::IncompleteData);
        assert_eq!(outer.message(), "outer");
        assert_eq!(outer.cause(), Some(&inner));
        assert_eq!(outer.source().map(|e| e.to_string()), Some("inner".to_string()));
    }

    #[test]
    fn test_chain_and_root_cause() {
        let err = DomainError::invalid_data("root")
            .rewrap("middle")
            .rewrap("top");

        let messages: Vec<_> = err.chain().map(DomainError::message).collect();
        assert_eq!(messages, vec!["top", "middle", "root"]);
        assert_eq!(err.root_cause().message(), "root");
        assert!(err.chain().all(|e| e.is(ErrorKind::InvalidData)));
    }

    #[test]
    fn test_root_cause_of_unchained_error_is_itself() {
        let err = DomainError::limit_exceeded("too much");
        assert_eq!(err.root_cause(), &err);
    }

    #[test]
    fn test_codes_are_distinct_per_criterion() {
        assert_eq!(ErrorKind::Ineligible(Criterion::Age).code(), "INELIGIBLE_AGE");
        assert_eq!(
            ErrorKind::Ineligible(Criterion::Education).code(),
            "INELIGIBLE_EDUCATION"
        );
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_not_found(|| "ticket T-9 not found".into()).unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
        assert_eq!(Some(3).ok_or_not_found(|| unreachable!()).unwrap(), 3);
    }
}
