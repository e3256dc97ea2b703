//! One-shot subcommands.

use std::io::{self, Write};

use hotel_core::{BookingStore, Hotel};

use crate::cli::Command;
use crate::render;

/// Run a single command against `hotel`.
///
/// Returns `Ok(false)` when the booking operation itself failed, so the
/// caller can exit non-zero.
pub fn run<S, W>(command: &Command, hotel: &mut Hotel<S>, out: &mut W) -> io::Result<bool>
where
    S: BookingStore,
    W: Write,
{
    match command {
        Command::Available { json } => {
            let rooms = hotel.list_available();
            if *json {
                print_json(out, &rooms)?;
            } else {
                render::rooms(out, &rooms)?;
            }
            Ok(true)
        }
        Command::Bookings { json } => {
            let bookings = hotel.list_bookings();
            if *json {
                print_json(out, &bookings)?;
            } else {
                render::bookings(out, bookings)?;
                render::orphans(out, &hotel.orphaned_bookings())?;
            }
            Ok(true)
        }
        Command::Book { name, category } => render::booked(out, hotel.book(name, category)),
        Command::Cancel { name } => render::cancelled(out, name, hotel.cancel(name)),
    }
}

fn print_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    writeln!(out, "{json}")
}
