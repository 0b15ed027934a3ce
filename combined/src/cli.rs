//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Validated domain exercises - run each exercise end to end
#[derive(Parser, Debug)]
#[command(name = "exercises")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Withdraw from a freshly opened account
    Withdraw(WithdrawArgs),

    /// Validate a patient record
    Examine(ExamineArgs),

    /// Register a participant in an online course
    Register(RegisterArgs),

    /// Book (and optionally cancel) tickets
    Book(BookArgs),

    /// Print the effective settings as JSON
    Config,
}

/// Arguments for the withdraw command
#[derive(Parser, Debug)]
pub struct WithdrawArgs {
    /// Account number
    #[arg(long, default_value = "001")]
    pub account: String,

    /// Opening balance
    #[arg(long, allow_negative_numbers = true)]
    pub balance: f64,

    /// Amounts to withdraw, in order
    #[arg(long = "amount", required = true, allow_negative_numbers = true)]
    pub amounts: Vec<f64>,
}

/// Arguments for the examine command
#[derive(Parser, Debug)]
pub struct ExamineArgs {
    /// Patient name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Patient age
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,

    /// Patient address
    #[arg(long, default_value = "")]
    pub address: String,
}

/// Arguments for the register command
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Participant name
    #[arg(long)]
    pub name: String,

    /// Participant age
    #[arg(long)]
    pub age: u32,

    /// Education level (e.g. "Bachelor")
    #[arg(long, default_value = "")]
    pub education: String,
}

/// Arguments for the book command
#[derive(Parser, Debug)]
pub struct BookArgs {
    /// Number of seats
    #[arg(long)]
    pub capacity: usize,

    /// Tickets to cancel after booking
    #[arg(long = "cancel")]
    pub cancellations: Vec<String>,

    /// Ticket numbers to book, in order
    #[arg(required = true)]
    pub tickets: Vec<String>,
}
