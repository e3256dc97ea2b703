//! Interactive menu.
//!
//! Reads choices and raw strings from `input`, hands them to the hotel and
//! prints whatever comes back. No booking rules live here.

use std::io::{self, BufRead, Write};

use hotel_core::{BookingStore, Hotel};

use crate::render;

const MENU: &str = "\n==== Hotel Reservation System ====\n\
1. View Available Rooms\n\
2. Make Booking\n\
3. Cancel Booking\n\
4. View All Bookings\n\
0. Exit";

enum Choice {
    ListAvailable,
    Book,
    Cancel,
    ListBookings,
    Exit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().parse::<u8>().ok()? {
        1 => Some(Choice::ListAvailable),
        2 => Some(Choice::Book),
        3 => Some(Choice::Cancel),
        4 => Some(Choice::ListBookings),
        0 => Some(Choice::Exit),
        _ => None,
    }
}

/// Print `prompt` and read one line without its line ending.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the menu until the user exits or input ends.
pub fn run<S, R, W>(hotel: &mut Hotel<S>, input: &mut R, output: &mut W) -> io::Result<()>
where
    S: BookingStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{MENU}")?;
        let Some(line) = prompt(input, output, "Enter choice: ")? else {
            writeln!(output)?;
            break;
        };

        match parse_choice(&line) {
            Some(Choice::ListAvailable) => {
                writeln!(output, "\nAvailable Rooms:")?;
                render::rooms(output, &hotel.list_available())?;
            }
            Some(Choice::Book) => {
                let Some(name) = prompt(input, output, "Enter your name: ")? else {
                    break;
                };
                let Some(category) =
                    prompt(input, output, "Enter room type (Standard/Deluxe/Suite): ")?
                else {
                    break;
                };
                render::booked(output, hotel.book(&name, &category))?;
            }
            Some(Choice::Cancel) => {
                let Some(name) = prompt(input, output, "Enter your name to cancel booking: ")?
                else {
                    break;
                };
                render::cancelled(output, &name, hotel.cancel(&name))?;
            }
            Some(Choice::ListBookings) => {
                writeln!(output, "\nCurrent Bookings:")?;
                render::bookings(output, hotel.list_bookings())?;
                render::orphans(output, &hotel.orphaned_bookings())?;
            }
            Some(Choice::Exit) => {
                writeln!(output, "Thank you for using the Hotel Reservation System!")?;
                break;
            }
            None => writeln!(output, "Invalid choice.")?,
        }
    }

    Ok(())
}
