//! Registration orchestration.

use std::io::Write;

use common::{emit, Finally};

use crate::course::OnlineCourse;
use crate::participant::Participant;

/// Register `participant` in `course` and report the outcome to `out`.
///
/// Prints one outcome line, then `Registration process finished.` on every exit path.
pub fn process_registration<W: Write>(
    course: &mut OnlineCourse,
    participant: Participant,
    out: &mut W,
) {
    let mut out = Finally::new(out, |out: &mut &mut W| {
        emit(out, "Registration process finished.");
    });
    let name = participant.name().to_string();

    match course.register(participant) {
        Ok(()) => {
            tracing::info!(participant = %name, "Registration succeeded");
            emit(&mut *out, format_args!("Registration succeeded: {name}"));
        }
        Err(err) => {
            tracing::warn!(participant = %name, code = err.kind().code(), error = %err, "Registration failed");
            emit(&mut *out, format_args!("Registration failed ({name}): {err}"));
        }
    }
}
