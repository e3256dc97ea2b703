//! # hotel-core
//!
//! Room reservation logic for a small hotel.
//!
//! This crate has no user interface. Front ends call into `Hotel` and render
//! the returned values and errors.
//!
//! ## Key Concepts
//!
//! - **Room**: one of a fixed inventory, seeded as Standard, Deluxe or Suite
//! - **Booking**: an active reservation of one room by a named customer
//! - **BookingStore**: durable storage of the booking set, one line per booking

pub mod config;
pub mod inventory;
pub mod logging;
pub mod persistence;

// Re-export commonly used types
pub use config::HotelConfig;
pub use inventory::{BookingError, Hotel, InventorySeed, Outcome, Room, RoomCategory};
pub use persistence::{Booking, BookingStore, FileStore, StorageError};
