//! Room inventory state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category of a room. Fixed when the inventory is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 3] = [
        RoomCategory::Standard,
        RoomCategory::Deluxe,
        RoomCategory::Suite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Standard => "Standard",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Suite => "Suite",
        }
    }

    /// Case-insensitive comparison against free-form user input.
    pub fn matches(&self, input: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(input.trim())
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl std::fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown room category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for RoomCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomCategory::ALL
            .into_iter()
            .find(|category| category.matches(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single room in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room number, starting at 1.
    pub number: u32,

    /// Category, immutable after seeding.
    pub category: RoomCategory,

    /// True while exactly one active booking references this room.
    pub occupied: bool,
}

impl Room {
    pub fn new(number: u32, category: RoomCategory) -> Self {
        Self {
            number,
            category,
            occupied: false,
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.occupied { "Booked" } else { "Available" };
        write!(f, "Room {} ({}) - {}", self.number, self.category, status)
    }
}

/// How many rooms of each category to create at startup.
///
/// Rooms are numbered consecutively from 1: all Standard rooms first,
/// then Deluxe, then Suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySeed {
    pub standard: u32,
    pub deluxe: u32,
    pub suite: u32,
}

impl Default for InventorySeed {
    fn default() -> Self {
        Self {
            standard: 5,
            deluxe: 3,
            suite: 2,
        }
    }
}

impl InventorySeed {
    /// Build the room list in seed order.
    pub fn rooms(&self) -> Vec<Room> {
        let counts = [
            (RoomCategory::Standard, self.standard),
            (RoomCategory::Deluxe, self.deluxe),
            (RoomCategory::Suite, self.suite),
        ];

        let mut rooms = Vec::new();
        let mut number = 1;
        for (category, count) in counts {
            for _ in 0..count {
                rooms.push(Room::new(number, category));
                number += 1;
            }
        }
        rooms
    }
}
