//! Text rendering of hotel results for the terminal.

use std::io::{self, Write};

use hotel_core::{Booking, BookingError, Outcome, Room};

pub fn rooms<W: Write>(out: &mut W, rooms: &[&Room]) -> io::Result<()> {
    if rooms.is_empty() {
        return writeln!(out, "No rooms available.");
    }
    for room in rooms {
        writeln!(out, "{room}")?;
    }
    Ok(())
}

pub fn bookings<W: Write>(out: &mut W, bookings: &[Booking]) -> io::Result<()> {
    if bookings.is_empty() {
        return writeln!(out, "No bookings found.");
    }
    for booking in bookings {
        writeln!(out, "{booking}")?;
    }
    Ok(())
}

/// Note bookings whose room is not in the inventory.
pub fn orphans<W: Write>(out: &mut W, orphans: &[&Booking]) -> io::Result<()> {
    for booking in orphans {
        writeln!(
            out,
            "Note: booking for {} references unknown room {}.",
            booking.customer_name, booking.room_number
        )?;
    }
    Ok(())
}

fn storage_warning<W: Write, T>(out: &mut W, outcome: &Outcome<T>) -> io::Result<()> {
    if let Some(e) = &outcome.warning {
        writeln!(out, "Warning: {e}. The change is kept for this session only.")?;
    }
    Ok(())
}

/// Returns whether the booking succeeded.
pub fn booked<W: Write>(
    out: &mut W,
    result: Result<Outcome<Booking>, BookingError>,
) -> io::Result<bool> {
    match result {
        Ok(outcome) => {
            writeln!(out, "Simulating payment...")?;
            writeln!(out, "Booking successful: {}", outcome.value)?;
            storage_warning(out, &outcome)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{e}.")?;
            Ok(false)
        }
    }
}

/// Returns whether the cancellation succeeded.
pub fn cancelled<W: Write>(
    out: &mut W,
    name: &str,
    result: Result<Outcome<Booking>, BookingError>,
) -> io::Result<bool> {
    match result {
        Ok(outcome) => {
            writeln!(out, "Booking cancelled for {name}")?;
            storage_warning(out, &outcome)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{e}.")?;
            Ok(false)
        }
    }
}
