//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use hotel_core::config::DEFAULT_BOOKINGS_FILE;
use hotel_core::HotelConfig;

#[derive(Debug, Parser)]
#[command(name = "hotel", version, about = "Room reservations for a small hotel")]
pub struct Cli {
    /// Bookings file, one booking per line
    #[arg(long, env = "HOTEL_BOOKINGS_FILE", default_value = DEFAULT_BOOKINGS_FILE)]
    pub file: PathBuf,

    /// Directory for the audit log (disabled when unset)
    #[arg(long, env = "HOTEL_AUDIT_LOG_DIR")]
    pub audit_log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run one command and exit. Without a command the interactive menu starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List rooms that are not booked
    Available {
        #[arg(long)]
        json: bool,
    },
    /// List active bookings
    Bookings {
        #[arg(long)]
        json: bool,
    },
    /// Book the first free room of a category
    Book { name: String, category: String },
    /// Cancel the first booking held by a customer
    Cancel { name: String },
}

impl Cli {
    pub fn hotel_config(&self) -> HotelConfig {
        let config = HotelConfig::new().bookings_file(&self.file);
        match &self.audit_log_dir {
            Some(dir) => config.audit_log_dir(dir),
            None => config,
        }
    }

    /// Default log filter, overridden by `RUST_LOG`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
