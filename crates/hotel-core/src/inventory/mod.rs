//! Room inventory and booking management.
//!
//! The `Hotel` owns a fixed set of rooms seeded at startup and the list of
//! active bookings. Lists are scanned linearly; the inventory is small.

mod manager;
mod state;

pub use manager::{BookingError, Hotel, Outcome};
pub use state::{InventorySeed, Room, RoomCategory, UnknownCategory};
