//! Configuration for opening a hotel.

use std::path::PathBuf;

use crate::inventory::InventorySeed;

/// Relative path of the bookings file when none is configured.
pub const DEFAULT_BOOKINGS_FILE: &str = "bookings.txt";

/// Everything `Hotel::open` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelConfig {
    /// Text file holding one booking per line.
    pub bookings_file: PathBuf,

    /// Directory for `hotel-audit.log`. Auditing is off when `None`.
    pub audit_log_dir: Option<PathBuf>,

    /// Room counts per category.
    pub seed: InventorySeed,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            bookings_file: PathBuf::from(DEFAULT_BOOKINGS_FILE),
            audit_log_dir: None,
            seed: InventorySeed::default(),
        }
    }
}

impl HotelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bookings file path.
    pub fn bookings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bookings_file = path.into();
        self
    }

    /// Enable the audit log in `dir`.
    pub fn audit_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.audit_log_dir = Some(dir.into());
        self
    }

    pub fn seed(mut self, seed: InventorySeed) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_relative_bookings_file() {
        let config = HotelConfig::default();
        assert_eq!(config.bookings_file, PathBuf::from("bookings.txt"));
        assert!(config.audit_log_dir.is_none());
        assert_eq!(config.seed, InventorySeed::default());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let seed = InventorySeed {
            standard: 1,
            deluxe: 1,
            suite: 1,
        };
        let config = HotelConfig::new()
            .bookings_file("/tmp/hotel/bookings.txt")
            .audit_log_dir("/tmp/hotel/logs")
            .seed(seed);

        assert_eq!(config.bookings_file, PathBuf::from("/tmp/hotel/bookings.txt"));
        assert_eq!(config.audit_log_dir, Some(PathBuf::from("/tmp/hotel/logs")));
        assert_eq!(config.seed, seed);
    }
}
