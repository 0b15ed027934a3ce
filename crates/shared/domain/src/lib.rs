//! Domain layer - shared error model and building blocks for the exercises.
//!
//! This crate contains pure domain logic with no I/O.
//! Every exercise crate builds its entities, rule checks and registries
//! on top of the types exported here.

pub mod constants;
pub mod error;
pub mod registry;
pub mod validation;

pub use constants::*;
pub use error::{Criterion, DomainError, DomainResult, ErrorKind, OptionExt};
pub use registry::{Identified, Registry};
pub use validation::{finite, not_blank, require_text, validate_fields};
