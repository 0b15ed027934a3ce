//! Common utilities shared across all exercises.
//!
//! This crate provides:
//! - Configuration loaded from the environment
//! - A drop guard for closing steps that must always run
//! - Report line output for orchestration functions

pub mod config;
pub mod finally;
pub mod report;

pub use config::Settings;
pub use finally::Finally;
pub use report::emit;
