//! Ticket booking exercise - capacity-limited booking with cancellation.
//!
//! - [`Passenger`]: ticket holder
//! - [`BookingSystem`]: tickets keyed by ticket number, bounded by capacity
//! - [`process_booking`] / [`process_cancellation`]: end-to-end operations
//!   with a closing summary

pub mod booking;
pub mod passenger;
pub mod process;

pub use booking::{BookingSystem, Ticket};
pub use passenger::Passenger;
pub use process::{process_booking, process_cancellation};
