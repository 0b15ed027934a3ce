//! Bank account exercise - withdrawal limiter.
//!
//! - [`Account`]: balance holder with a per-withdrawal ceiling
//! - [`Bank`]: registry of accounts keyed by account number
//! - [`process_withdrawal`]: end-to-end withdrawal with a closing report

pub mod account;
pub mod bank;
pub mod process;

pub use account::Account;
pub use bank::Bank;
pub use process::process_withdrawal;
