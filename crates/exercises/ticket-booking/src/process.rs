//! Booking and cancellation orchestration.

use std::io::Write;

use common::{emit, Finally};

use crate::booking::BookingSystem;
use crate::passenger::Passenger;

/// Book `ticket_number` for `passenger` and report the outcome to `out`.
///
/// Prints one outcome line, then the booking summary and
/// `Booking process finished.` on every exit path.
pub fn process_booking<W: Write>(
    system: &mut BookingSystem,
    ticket_number: &str,
    passenger: Passenger,
    out: &mut W,
) {
    let mut session = Finally::new(
        (out, system),
        |(out, system): &mut (&mut W, &mut BookingSystem)| {
            summarize(out, system, "Booking process finished.");
        },
    );
    let (out, system) = &mut *session;

    match system.book(ticket_number, passenger) {
        Ok(()) => {
            tracing::info!(ticket = ticket_number, "Booking succeeded");
            emit(out, format_args!("Ticket booked: {ticket_number}"));
        }
        Err(err) => {
            tracing::warn!(ticket = ticket_number, code = err.kind().code(), error = %err, "Booking failed");
            emit(out, format_args!("Booking failed ({ticket_number}): {err}"));
        }
    }
}

/// Cancel `ticket_number` and report the outcome to `out`.
///
/// Prints one outcome line, then the booking summary and
/// `Cancellation process finished.` on every exit path.
pub fn process_cancellation<W: Write>(system: &mut BookingSystem, ticket_number: &str, out: &mut W) {
    let mut session = Finally::new(
        (out, system),
        |(out, system): &mut (&mut W, &mut BookingSystem)| {
            summarize(out, system, "Cancellation process finished.");
        },
    );
    let (out, system) = &mut *session;

    match system.cancel(ticket_number) {
        Ok(ticket) => {
            tracing::info!(ticket = ticket_number, "Cancellation succeeded");
            emit(
                out,
                format_args!(
                    "Ticket cancelled: {ticket_number} ({})",
                    ticket.passenger().name()
                ),
            );
        }
        Err(err) => {
            tracing::warn!(ticket = ticket_number, code = err.kind().code(), error = %err, "Cancellation failed");
            emit(out, format_args!("Cancellation failed ({ticket_number}): {err}"));
        }
    }
}

fn summarize<W: Write + ?Sized>(out: &mut W, system: &BookingSystem, closing: &str) {
    emit(
        out,
        format_args!(
            "Booked tickets: {} of {}",
            system.booked(),
            system.capacity()
        ),
    );
    emit(out, closing);
}
