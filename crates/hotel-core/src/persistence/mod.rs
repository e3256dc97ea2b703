//! Persistence layer for bookings.
//!
//! # Overview
//!
//! Bookings live in a single UTF-8 text file, one booking per line. The
//! inventory itself is never persisted: rooms are seeded at startup and their
//! occupancy is rebuilt from the loaded bookings.
//!
//! # Lifecycle
//!
//! 1. `load` once when the hotel opens
//! 2. `append_one` after every successful booking
//! 3. `rewrite_all` after every cancellation
//!
//! # Usage
//!
//! ```ignore
//! use hotel_core::persistence::{BookingStore, FileStore};
//!
//! let store = FileStore::new("bookings.txt");
//! let bookings = store.load()?;
//! ```

pub mod bookings;
pub mod types;

pub use bookings::{
    decode_line, encode_line, fits_on_line, BookingStore, FileStore, StorageError,
};
pub use types::{Booking, PAYMENT_PAID};
