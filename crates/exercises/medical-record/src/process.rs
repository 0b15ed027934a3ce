//! Examination orchestration.

use std::io::Write;

use common::{emit, Finally};

use crate::examination::Examination;
use crate::patient::{Patient, PatientValidator};

/// Check `patient` and report the outcome to `out`.
///
/// Prints one outcome line, then `Examination process finished.` on every exit path.
pub fn process_examination<V, W>(examination: &Examination<V>, patient: &Patient, out: &mut W)
where
    V: PatientValidator,
    W: Write,
{
    let mut out = Finally::new(out, |out: &mut &mut W| {
        emit(out, "Examination process finished.");
    });
    let name = patient.name();

    match examination.check(patient) {
        Ok(verdict) => {
            tracing::info!(patient = name, "Examination passed");
            emit(&mut *out, format_args!("Examination passed ({name}): {verdict}"));
        }
        Err(err) => {
            tracing::warn!(patient = name, code = err.kind().code(), error = %err, "Examination failed");
            emit(
                &mut *out,
                format_args!(
                    "Examination failed ({name}): {err} Cause: {}",
                    err.root_cause()
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;
    use crate::patient::MockPatientValidator;

    #[test]
    fn test_finished_line_written_when_validator_panics() {
        let mut validator = MockPatientValidator::new();
        validator
            .expect_validate()
            .returning(|_| panic!("validator crashed"));
        let examination = Examination::with_validator(validator);
        let patient = Patient::new("Cici", 30, "Jl. Anggrek");

        let mut out = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            process_examination(&examination, &patient, &mut out);
        }));

        assert!(result.is_err());
        assert_eq!(String::from_utf8(out).unwrap(), "Examination process finished.\n");
    }
}
