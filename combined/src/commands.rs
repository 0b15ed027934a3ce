//! Command implementations - wire CLI arguments to the exercise crates.

use std::error::Error;
use std::io::{self, Write};

use bank_account::{process_withdrawal, Account, Bank};
use common::Settings;
use medical_record::{process_examination, Examination, Patient, RecordValidator};
use online_course::{process_registration, EligibilityPolicy, OnlineCourse, Participant};
use ticket_booking::{process_booking, process_cancellation, BookingSystem, Passenger};

use crate::cli::{BookArgs, ExamineArgs, RegisterArgs, WithdrawArgs};

pub type CommandResult = Result<(), Box<dyn Error>>;

/// Execute the withdraw command
pub fn withdraw(args: WithdrawArgs, settings: &Settings, out: &mut impl Write) -> CommandResult {
    let mut bank = Bank::new();
    bank.add_account(Account::with_ceiling(
        args.account.clone(),
        args.balance,
        settings.withdrawal_ceiling,
    )?)?;

    for amount in args.amounts {
        process_withdrawal(&mut bank, &args.account, amount, out);
    }
    Ok(())
}

/// Execute the examine command
pub fn examine(args: ExamineArgs, settings: &Settings, out: &mut impl Write) -> CommandResult {
    let examination =
        Examination::with_validator(RecordValidator::with_max_age(settings.patient_max_age));
    let patient = Patient::new(args.name, args.age, args.address);

    process_examination(&examination, &patient, out);
    Ok(())
}

/// Execute the register command
pub fn register(args: RegisterArgs, settings: &Settings, out: &mut impl Write) -> CommandResult {
    let mut course = OnlineCourse::with_policy(EligibilityPolicy::with_min_age(settings.course_min_age));
    let participant = Participant::new(args.name, args.age, args.education)?;

    process_registration(&mut course, participant, out);
    Ok(())
}

/// Execute the book command
///
/// Each ticket gets a generated passenger; cancellations run after all bookings.
pub fn book(args: BookArgs, out: &mut impl Write) -> CommandResult {
    let mut system = BookingSystem::new(args.capacity)?;

    for (index, ticket) in args.tickets.iter().enumerate() {
        let seq = index + 1;
        let passenger = Passenger::new(format!("Passenger {seq}"), format!("ID{seq:03}"))?;
        process_booking(&mut system, ticket, passenger, out);
    }
    for ticket in &args.cancellations {
        process_cancellation(&mut system, ticket, out);
    }
    Ok(())
}

/// Execute the config command
pub fn config(settings: &Settings, out: &mut impl Write) -> CommandResult {
    writeln!(out, "{}", serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Standard output, locked for the duration of a command
pub fn stdout() -> io::StdoutLock<'static> {
    io::stdout().lock()
}
