//! itinerary-shift: replay a captured travel itinerary at a new start date.
//!
//! Entry point for the application. Parses CLI arguments, sets up logging,
//! and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod base;
mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Notices are printed by the commands themselves, so the library's
/// warnings stay quiet unless `-v` or `RUST_LOG` asks for them.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Shift(args) => commands::shift::execute(args),
        Commands::Anchor(args) => commands::anchor::execute(args),
        Commands::Scenarios(args) => commands::scenarios::execute(args),
    }
}
