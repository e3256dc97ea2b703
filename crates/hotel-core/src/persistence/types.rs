//! Persisted booking record.

use serde::{Deserialize, Serialize};

/// Payment status recorded for every new booking. Payment is simulated.
pub const PAYMENT_PAID: &str = "Paid";

/// An active reservation linking a customer to one room.
///
/// One booking is one line in the bookings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Name as typed by the customer. Matched case-insensitively on cancel.
    pub customer_name: String,

    /// Number of the booked room.
    pub room_number: u32,

    /// Room category at booking time, e.g. "Suite".
    pub category: String,

    /// Payment status, "Paid" for bookings made in this program.
    pub payment_status: String,
}

impl Booking {
    pub fn new(
        customer_name: impl Into<String>,
        room_number: u32,
        category: impl Into<String>,
        payment_status: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            room_number,
            category: category.into(),
            payment_status: payment_status.into(),
        }
    }

    pub fn belongs_to(&self, customer_name: &str) -> bool {
        self.customer_name.to_lowercase() == customer_name.to_lowercase()
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Room: {} ({}) | Payment: {}",
            self.customer_name, self.room_number, self.category, self.payment_status
        )
    }
}
