//! Hotel - room inventory and the booking set.

use thiserror::Error;

use super::state::{InventorySeed, Room, RoomCategory, UnknownCategory};
use crate::config::HotelConfig;
use crate::logging::AuditLog;
use crate::persistence::{
    fits_on_line, Booking, BookingStore, FileStore, StorageError, PAYMENT_PAID,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("No available rooms in {0} category")]
    NoRoomAvailable(String),

    #[error("No booking found for {0}")]
    NoBookingFound(String),
}

/// Result of a mutation that succeeded in memory.
///
/// `warning` holds the storage failure if the change could not be written
/// to disk. The in-memory state is updated either way.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<StorageError>,
}

impl<T> Outcome<T> {
    pub fn is_persisted(&self) -> bool {
        self.warning.is_none()
    }
}

/// Owns the rooms and the active bookings.
///
/// A room is occupied iff a booking references it. Every mutation is
/// written through to the store.
pub struct Hotel<S: BookingStore = FileStore> {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    store: S,
    audit: AuditLog,
}

impl Hotel<FileStore> {
    /// Seed the inventory and load bookings from the configured file.
    pub fn open(config: &HotelConfig) -> Self {
        let store = FileStore::new(&config.bookings_file);
        let audit = AuditLog::open(config.audit_log_dir.as_deref());
        Hotel::with_store(config.seed, store).with_audit_log(audit)
    }
}

impl<S: BookingStore> Hotel<S> {
    /// Seed the inventory and load bookings from `store`.
    ///
    /// An unreadable store is treated as holding no bookings.
    pub fn with_store(seed: InventorySeed, store: S) -> Self {
        let mut hotel = Self {
            rooms: seed.rooms(),
            bookings: Vec::new(),
            store,
            audit: AuditLog::disabled(),
        };
        hotel.restore();
        hotel
    }

    pub fn with_audit_log(mut self, audit: AuditLog) -> Self {
        self.audit = audit;
        self
    }

    fn restore(&mut self) {
        let loaded = match self.store.load() {
            Ok(bookings) => bookings,
            Err(e) => {
                log::warn!("{e}; starting with no bookings");
                Vec::new()
            }
        };

        for booking in loaded {
            match self.rooms.iter_mut().find(|r| r.number == booking.room_number) {
                Some(room) => {
                    if room.occupied {
                        log::warn!(
                            "Room {} is referenced by more than one booking ({})",
                            room.number,
                            booking.customer_name
                        );
                    }
                    room.occupied = true;
                }
                None => log::warn!(
                    "Booking for {} references unknown room {}; keeping it",
                    booking.customer_name,
                    booking.room_number
                ),
            }
            self.bookings.push(booking);
        }

        log::info!("Loaded {} booking(s)", self.bookings.len());
    }

    /// All rooms in seed order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    /// Unoccupied rooms in seed order.
    pub fn list_available(&self) -> Vec<&Room> {
        self.rooms.iter().filter(|r| !r.occupied).collect()
    }

    /// Active bookings in insertion order.
    pub fn list_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Bookings whose room number is not in the inventory.
    pub fn orphaned_bookings(&self) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| self.room(b.room_number).is_none())
            .collect()
    }

    /// Book the first free room of `category` (case-insensitive) for
    /// `customer_name`, then append the booking to the store.
    pub fn book(
        &mut self,
        customer_name: &str,
        category: &str,
    ) -> Result<Outcome<Booking>, BookingError> {
        let wanted: RoomCategory = category.parse().map_err(|e: UnknownCategory| {
            BookingError::NoRoomAvailable(e.0.trim().to_string())
        })?;
        let room = self
            .rooms
            .iter_mut()
            .find(|r| !r.occupied && r.category == wanted)
            .ok_or_else(|| BookingError::NoRoomAvailable(wanted.to_string()))?;

        room.occupied = true;
        let booking = Booking::new(
            customer_name,
            room.number,
            room.category.as_str(),
            PAYMENT_PAID,
        );

        if !fits_on_line(customer_name) {
            log::warn!(
                "Customer name {:?} contains a comma or line break and will not reload from disk",
                customer_name
            );
        }

        self.bookings.push(booking.clone());
        log::info!("Booked room {} for {}", booking.room_number, booking.customer_name);

        let warning = self.store.append_one(&booking).err();
        if let Some(e) = &warning {
            log::warn!("{e}");
        }
        self.audit.record("BOOK", &audit_detail(&booking));

        Ok(Outcome {
            value: booking,
            warning,
        })
    }

    /// Cancel the first booking held by `customer_name` (case-insensitive),
    /// then rewrite the store from the remaining bookings.
    pub fn cancel(&mut self, customer_name: &str) -> Result<Outcome<Booking>, BookingError> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.belongs_to(customer_name))
            .ok_or_else(|| BookingError::NoBookingFound(customer_name.to_string()))?;

        let booking = self.bookings.remove(index);
        let still_referenced = self
            .bookings
            .iter()
            .any(|b| b.room_number == booking.room_number);
        if !still_referenced {
            if let Some(room) = self
                .rooms
                .iter_mut()
                .find(|r| r.number == booking.room_number)
            {
                room.occupied = false;
            }
        }
        log::info!(
            "Cancelled booking of room {} for {}",
            booking.room_number,
            booking.customer_name
        );

        let warning = self.store.rewrite_all(&self.bookings).err();
        if let Some(e) = &warning {
            log::warn!("{e}");
        }
        self.audit.record("CANCEL", &audit_detail(&booking));

        Ok(Outcome {
            value: booking,
            warning,
        })
    }
}

fn audit_detail(booking: &Booking) -> String {
    format!(
        "{} -> room {} ({})",
        booking.customer_name, booking.room_number, booking.category
    )
}
