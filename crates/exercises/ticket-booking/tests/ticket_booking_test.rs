//! Ticket booking integration tests.

use rstest::rstest;

use domain::ErrorKind;
use ticket_booking::{process_booking, process_cancellation, BookingSystem, Passenger};

fn passenger(name: &str, identity: &str) -> Passenger {
    Passenger::new(name, identity).unwrap()
}

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_system() {
    let system = BookingSystem::new(3).unwrap();
    assert_eq!(system.capacity(), 3);
    assert_eq!(system.booked(), 0);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let err = BookingSystem::new(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_new_passenger() {
    let p = passenger("Rina", "ID001");
    assert_eq!(p.name(), "Rina");
    assert_eq!(p.identity(), "ID001");
}

#[rstest]
#[case("", "ID001")]
#[case("   ", "ID001")]
#[case("Rina", "")]
#[case("Rina", "   ")]
fn test_blank_passenger_fields_are_rejected(#[case] name: &str, #[case] identity: &str) {
    let err = Passenger::new(name, identity).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// =============================================================================
// Booking
// =============================================================================

#[test]
fn test_book_adds_ticket() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();
    assert_eq!(system.booked(), 1);
    assert!(system.has_ticket("T-001"));
}

#[test]
fn test_duplicate_ticket_is_rejected() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();

    let err = system.book("T-001", passenger("Budi", "ID002")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(system.booked(), 1);
    assert_eq!(
        system.find_ticket("T-001").unwrap().passenger().name(),
        "Ayu"
    );
}

#[test]
fn test_full_capacity_exceeds_limit() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();
    system.book("T-002", passenger("Budi", "ID002")).unwrap();

    let err = system.book("T-003", passenger("Cici", "ID003")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LimitExceeded);
    assert!(!system.has_ticket("T-003"));
}

#[test]
fn test_cancel_frees_a_seat() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();
    system.book("T-002", passenger("Budi", "ID002")).unwrap();
    assert!(system.book("T-003", passenger("Cici", "ID003")).is_err());

    system.cancel("T-001").unwrap();
    system.book("T-003", passenger("Cici", "ID003")).unwrap();

    assert_eq!(system.booked(), 2);
    assert!(!system.has_ticket("T-001"));
    assert!(system.has_ticket("T-003"));
}

#[test]
fn test_padded_ticket_number_is_a_duplicate() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book(" T-001 ", passenger("Ayu", "ID001")).unwrap();
    assert!(system.has_ticket("T-001"));

    let err = system.book("T-001", passenger("Budi", "ID002")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(system.cancel("T-001").unwrap().number(), "T-001");
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_ticket_number_is_rejected(#[case] number: &str) {
    let mut system = BookingSystem::new(1).unwrap();
    let err = system.book(number, passenger("Ayu", "ID001")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(system.booked(), 0);
}

#[test]
fn test_cancel_unknown_ticket() {
    let mut system = BookingSystem::new(2).unwrap();
    let err = system.cancel("T-XYZ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

// =============================================================================
// Orchestration
// =============================================================================

#[test]
fn test_process_booking_success() {
    let mut system = BookingSystem::new(1).unwrap();
    let mut out = Vec::new();
    process_booking(&mut system, "T-001", passenger("Ayu", "ID001"), &mut out);

    assert_eq!(
        lines(out),
        vec![
            "Ticket booked: T-001",
            "Booked tickets: 1 of 1",
            "Booking process finished.",
        ]
    );
}

#[test]
fn test_process_booking_full() {
    let mut system = BookingSystem::new(1).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();

    let mut out = Vec::new();
    process_booking(&mut system, "T-002", passenger("Budi", "ID002"), &mut out);
    let lines = lines(out);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Booking failed (T-002): "));
    assert!(lines[0].contains("Seats are full"));
    assert_eq!(lines[1], "Booked tickets: 1 of 1");
    assert_eq!(lines[2], "Booking process finished.");
}

#[test]
fn test_process_booking_duplicate() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();

    let mut out = Vec::new();
    process_booking(&mut system, "T-001", passenger("Budi", "ID002"), &mut out);
    let lines = lines(out);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Booking failed (T-001): "));
    assert!(lines[0].contains("already booked"));
    assert_eq!(lines[1], "Booked tickets: 1 of 2");
    assert_eq!(lines[2], "Booking process finished.");
}

#[test]
fn test_process_booking_blank_ticket() {
    let mut system = BookingSystem::new(2).unwrap();
    let mut out = Vec::new();
    process_booking(&mut system, " ", passenger("Ayu", "ID001"), &mut out);
    let lines = lines(out);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("must not be blank"));
    assert_eq!(lines[1], "Booked tickets: 0 of 2");
    assert_eq!(
        lines.iter().filter(|l| *l == "Booking process finished.").count(),
        1
    );
}

#[test]
fn test_process_cancellation() {
    let mut system = BookingSystem::new(2).unwrap();
    system.book("T-001", passenger("Ayu", "ID001")).unwrap();

    let mut out = Vec::new();
    process_cancellation(&mut system, "T-001", &mut out);
    process_cancellation(&mut system, "T-001", &mut out);

    assert_eq!(
        lines(out),
        vec![
            "Ticket cancelled: T-001 (Ayu)",
            "Booked tickets: 0 of 2",
            "Cancellation process finished.",
            "Cancellation failed (T-001): ticket T-001 not found",
            "Booked tickets: 0 of 2",
            "Cancellation process finished.",
        ]
    );
}
