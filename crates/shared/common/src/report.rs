//! Outcome reporting for orchestration functions.

use std::fmt::Display;
use std::io::Write;

/// Write one line of a report.
///
/// Reporting never aborts an orchestration; write failures are logged instead.
pub fn emit<W: Write + ?Sized>(out: &mut W, line: impl Display) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::error!(error = %e, "Failed to write report line");
    }
}
