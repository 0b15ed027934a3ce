//! Online course exercise - eligibility checks on registration.
//!
//! - [`Participant`]: applicant with age and education level
//! - [`EligibilityPolicy`]: minimum age and accepted education levels
//! - [`OnlineCourse`]: roster that only admits eligible participants
//! - [`process_registration`]: end-to-end registration with a closing report

pub mod course;
pub mod participant;
pub mod process;

pub use course::OnlineCourse;
pub use participant::{EligibilityPolicy, Participant};
pub use process::process_registration;
