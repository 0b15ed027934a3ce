//! Exercises binary - runs each exercise from the command line.

mod cli;
mod commands;

use clap::Parser;
use common::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &settings.log_level);
    tracing::debug!(?settings, "Configuration loaded");

    let mut out = commands::stdout();

    // Execute command
    let result = match cli.command {
        Commands::Withdraw(args) => commands::withdraw(args, &settings, &mut out),
        Commands::Examine(args) => commands::examine(args, &settings, &mut out),
        Commands::Register(args) => commands::register(args, &settings, &mut out),
        Commands::Book(args) => commands::book(args, &mut out),
        Commands::Config => commands::config(&settings, &mut out),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber on stderr so reports keep stdout to themselves
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
