//! Booking system - tickets bounded by seat capacity.

use domain::{not_blank, validate_fields, DomainError, DomainResult, Identified, Registry};
use validator::Validate;

use crate::passenger::Passenger;

/// A booked seat.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Ticket {
    #[validate(custom(function = "not_blank"))]
    number: String,
    passenger: Passenger,
}

impl Ticket {
    /// # Errors
    /// `InvalidArgument` if the ticket number is blank.
    pub fn new(number: impl Into<String>, passenger: Passenger) -> DomainResult<Self> {
        let ticket = Self {
            number: number.into().trim().to_string(),
            passenger,
        };
        validate_fields(&ticket)?;
        Ok(ticket)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }
}

impl Identified for Ticket {
    const LABEL: &'static str = "ticket";

    fn id(&self) -> &str {
        &self.number
    }
}

/// Tickets keyed by ticket number, never more than `capacity` at a time.
#[derive(Debug)]
pub struct BookingSystem {
    capacity: usize,
    tickets: Registry<Ticket>,
}

impl BookingSystem {
    /// # Errors
    /// `InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::invalid_argument("capacity must be > 0"));
        }
        Ok(Self {
            capacity,
            tickets: Registry::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of booked tickets
    pub fn booked(&self) -> usize {
        self.tickets.len()
    }

    /// Seats still free
    pub fn available(&self) -> usize {
        self.capacity - self.tickets.len()
    }

    pub fn has_ticket(&self, number: &str) -> bool {
        self.tickets.contains(number)
    }

    pub fn find_ticket(&self, number: &str) -> DomainResult<&Ticket> {
        self.tickets.find(number)
    }

    /// Book a seat for `passenger` under `number`.
    ///
    /// Checks run in order: well-formed ticket number, not already booked,
    /// a seat is free.
    pub fn book(&mut self, number: impl Into<String>, passenger: Passenger) -> DomainResult<()> {
        let ticket = Ticket::new(number, passenger)?;

        if self.tickets.contains(ticket.number()) {
            return Err(DomainError::duplicate_key(format!(
                "ticket {} is already booked",
                ticket.number()
            )));
        }
        if self.tickets.len() >= self.capacity {
            return Err(DomainError::limit_exceeded(format!(
                "Seats are full: all {} seats are booked",
                self.capacity
            )));
        }

        tracing::debug!(ticket = ticket.number(), passenger = ticket.passenger().name(), "Ticket booked");
        self.tickets.add(ticket)
    }

    /// Cancel a booking and return the released ticket
    pub fn cancel(&mut self, number: &str) -> DomainResult<Ticket> {
        let ticket = self.tickets.remove(number)?;
        tracing::debug!(ticket = number, "Ticket cancelled");
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use domain::ErrorKind;

    use super::*;

    fn passenger(name: &str) -> Passenger {
        Passenger::new(name, format!("ID-{name}")).unwrap()
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut system = BookingSystem::new(1).unwrap();
        system.book("T-001", passenger("Ayu")).unwrap();

        let err = system.book("T-001", passenger("Budi")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(
            system.find_ticket("T-001").unwrap().passenger().name(),
            "Ayu"
        );
    }

    #[test]
    fn test_available_seats() {
        let mut system = BookingSystem::new(3).unwrap();
        assert_eq!(system.available(), 3);
        system.book("T-001", passenger("Ayu")).unwrap();
        assert_eq!(system.available(), 2);
        system.cancel("T-001").unwrap();
        assert_eq!(system.available(), 3);
    }

    #[test]
    fn test_cancel_returns_ticket() {
        let mut system = BookingSystem::new(1).unwrap();
        system.book("T-001", passenger("Ayu")).unwrap();

        let ticket = system.cancel("T-001").unwrap();
        assert_eq!(ticket.number(), "T-001");
        assert_eq!(ticket.passenger().identity(), "ID-Ayu");
    }
}
