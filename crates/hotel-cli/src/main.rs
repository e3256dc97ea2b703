//! `hotel` - room reservations from the terminal.
//!
//! Two modes:
//! - **Menu mode**: `hotel [flags]` runs the interactive menu
//! - **Shell mode**: `hotel [flags] COMMAND` runs one command and exits

mod cli;
mod commands;
mod menu;
mod render;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use hotel_core::Hotel;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    let config = cli.hotel_config();
    log::debug!("Using bookings file {}", config.bookings_file.display());
    let mut hotel = Hotel::open(&config);

    let result = match &cli.command {
        Some(command) => commands::run(command, &mut hotel, &mut io::stdout().lock()),
        None => {
            menu::run(&mut hotel, &mut io::stdin().lock(), &mut io::stdout().lock()).map(|()| true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
