//! Medical record exercise - patient field validation with re-raised errors.
//!
//! - [`Patient`]: raw patient record
//! - [`PatientValidator`] / [`RecordValidator`]: two-tier business validation
//! - [`Examination`]: caller-facing check that re-wraps validator failures
//! - [`process_examination`]: end-to-end check with a closing report

pub mod examination;
pub mod patient;
pub mod process;

pub use examination::Examination;
pub use patient::{Patient, PatientValidator, RecordValidator};
pub use process::process_examination;

#[cfg(any(test, feature = "test-utils"))]
pub use patient::MockPatientValidator;
