//! Bookings file persistence.
//!
//! # File Format
//!
//! One booking per line, four comma-separated fields:
//!
//! ```text
//! Alice,9,Suite,Paid
//! Bob,1,Standard,Paid
//! ```
//!
//! Commas and line breaks inside a field are not escaped. A name containing
//! either no longer reloads as the same booking; see [`fits_on_line`].
//!
//! # Reading
//!
//! Lines are decoded one at a time. A line is skipped when it:
//!
//! - is not valid UTF-8
//! - doesn't have exactly four fields once trailing empty fields are dropped
//!   (so `Alice,9,Suite,` is skipped)
//! - has a room number that isn't an unsigned integer (` 9` is rejected)
//!
//! # Writes
//!
//! - `append_one` opens the file in append mode and writes a single line.
//! - `rewrite_all` truncates the file and writes every remaining booking.
//!
//! Neither is atomic, and there is no locking. The file is assumed to have a
//! single writer.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Booking;

const FIELD_COUNT: usize = 4;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read bookings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write bookings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    fn read(path: &Path, source: io::Error) -> Self {
        StorageError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write(path: &Path, source: io::Error) -> Self {
        StorageError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Durable storage for the booking set.
pub trait BookingStore {
    /// Load every well-formed booking. A missing store is an empty one.
    fn load(&self) -> Result<Vec<Booking>, StorageError>;

    /// Record one newly created booking.
    fn append_one(&self, booking: &Booking) -> Result<(), StorageError>;

    /// Replace the stored set with `bookings`.
    fn rewrite_all(&self, bookings: &[Booking]) -> Result<(), StorageError>;
}

/// Encode a booking as a single line, without the trailing newline.
pub fn encode_line(booking: &Booking) -> String {
    format!(
        "{},{},{},{}",
        booking.customer_name, booking.room_number, booking.category, booking.payment_status
    )
}

/// True if `field` can be stored without breaking the line format.
pub fn fits_on_line(field: &str) -> bool {
    !field.contains([',', '\n', '\r'])
}

/// Decode one line. Returns `None` for lines that don't have exactly four
/// fields (trailing empty fields don't count) or whose room number isn't an
/// unsigned integer.
pub fn decode_line(line: &str) -> Option<Booking> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let room_number = fields[1].parse::<u32>().ok()?;
    Some(Booking::new(fields[0], room_number, fields[2], fields[3]))
}

/// Bookings stored in a line-oriented text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn write_lines(&self, file: File, bookings: &[Booking]) -> io::Result<()> {
        let mut writer = BufWriter::new(file);
        for booking in bookings {
            writeln!(writer, "{}", encode_line(booking))?;
        }
        writer.flush()
    }
}

impl BookingStore for FileStore {
    fn load(&self) -> Result<Vec<Booking>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::read(&self.path, e)),
        };

        let mut reader = BufReader::new(file);
        let mut bookings = Vec::new();
        let mut skipped = 0usize;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| StorageError::read(&self.path, e))?;
            if read == 0 {
                break;
            }

            let decoded = std::str::from_utf8(&buf)
                .ok()
                .and_then(|line| decode_line(line.trim_end_matches(['\r', '\n'])));
            match decoded {
                Some(booking) => bookings.push(booking),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::debug!(
                "Skipped {} malformed line(s) in {}",
                skipped,
                self.path.display()
            );
        }

        Ok(bookings)
    }

    fn append_one(&self, booking: &Booking) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::write(&self.path, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StorageError::write(&self.path, e))?;

        self.write_lines(file, std::slice::from_ref(booking))
            .map_err(|e| StorageError::write(&self.path, e))
    }

    fn rewrite_all(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::write(&self.path, e))?;
        }

        let file = File::create(&self.path).map_err(|e| StorageError::write(&self.path, e))?;

        self.write_lines(file, bookings)
            .map_err(|e| StorageError::write(&self.path, e))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::types::PAYMENT_PAID;
    use tempfile::tempdir;

    fn sample_bookings() -> Vec<Booking> {
        vec![
            Booking::new("Alice", 9, "Suite", PAYMENT_PAID),
            Booking::new("Bob", 1, "Standard", PAYMENT_PAID),
            Booking::new("Carol", 6, "Deluxe", "Pending"),
        ]
    }

    // ------------------------------------------------------------------------
    // Line Codec Tests
    // ------------------------------------------------------------------------

    #[test]
    fn encode_line_joins_fields_with_commas() {
        let booking = Booking::new("Alice", 9, "Suite", PAYMENT_PAID);
        assert_eq!(encode_line(&booking), "Alice,9,Suite,Paid");
    }

    #[test]
    fn decode_line_reads_four_fields() {
        let booking = decode_line("Bob,1,Standard,Paid").unwrap();
        assert_eq!(booking, Booking::new("Bob", 1, "Standard", "Paid"));
    }

    #[test]
    fn decode_line_rejects_wrong_field_count() {
        assert!(decode_line("Bob,1,Standard").is_none());
        assert!(decode_line("Smith, John,1,Standard,Paid").is_none());
        assert!(decode_line("").is_none());
    }

    #[test]
    fn decode_line_rejects_non_numeric_room() {
        assert!(decode_line("Bob,one,Standard,Paid").is_none());
        assert!(decode_line("Bob,-1,Standard,Paid").is_none());
        assert!(decode_line("Bob, 1,Standard,Paid").is_none());
    }

    #[test]
    fn decode_line_drops_trailing_empty_fields() {
        assert!(decode_line("Alice,9,Suite,").is_none());
        assert!(decode_line("Alice,9,Suite,,").is_none());
        assert_eq!(
            decode_line("Alice,9,Suite,Paid,,"),
            Some(Booking::new("Alice", 9, "Suite", "Paid"))
        );
    }

    #[test]
    fn fits_on_line_rejects_separators() {
        assert!(fits_on_line("Alice"));
        assert!(!fits_on_line("Smith, John"));
        assert!(!fits_on_line("X\nBob"));
        assert!(!fits_on_line("X\rBob"));
    }

    // ------------------------------------------------------------------------
    // File Store Tests
    // ------------------------------------------------------------------------

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("bookings.txt"));

        let bookings = store.load().unwrap();
        assert!(bookings.is_empty());
    }

    #[test]
    fn rewrite_all_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("bookings.txt"));
        let bookings = sample_bookings();

        store.rewrite_all(&bookings).unwrap();
        assert_eq!(store.load().unwrap(), bookings);
    }

    #[test]
    fn rewrite_all_truncates_previous_contents() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("bookings.txt"));

        store.rewrite_all(&sample_bookings()).unwrap();
        store.rewrite_all(&sample_bookings()[..1]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].customer_name, "Alice");
    }

    #[test]
    fn rewrite_all_with_empty_set_leaves_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        let store = FileStore::new(&path);

        store.rewrite_all(&sample_bookings()).unwrap();
        store.rewrite_all(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_one_adds_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        let store = FileStore::new(&path);

        for booking in sample_bookings() {
            store.append_one(&booking).unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Alice,9,Suite,Paid\nBob,1,Standard,Paid\nCarol,6,Deluxe,Pending\n"
        );
        assert_eq!(store.load().unwrap(), sample_bookings());
    }

    #[test]
    fn append_one_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data").join("bookings.txt"));

        store
            .append_one(&Booking::new("Dave", 2, "Standard", PAYMENT_PAID))
            .unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn load_skips_malformed_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(&path, "Bob,1,Standard\nAlice,9,Suite,Paid\n").unwrap();

        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(loaded, vec![Booking::new("Alice", 9, "Suite", "Paid")]);
    }

    #[test]
    fn load_skips_invalid_utf8_line_and_keeps_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(
            &path,
            b"Alice,9,Suite,Paid\nJos\xe9,1,Standard,Paid\nBob,6,Deluxe,Paid\n",
        )
        .unwrap();

        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(
            loaded,
            vec![
                Booking::new("Alice", 9, "Suite", "Paid"),
                Booking::new("Bob", 6, "Deluxe", "Paid"),
            ]
        );
    }

    #[test]
    fn load_reads_last_line_without_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(&path, "Alice,9,Suite,Paid\nBob,1,Standard,Paid").unwrap();

        assert_eq!(FileStore::new(&path).load().unwrap().len(), 2);
    }

    #[test]
    fn load_handles_crlf_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.txt");
        fs::write(&path, "Alice,9,Suite,Paid\r\n\r\nBob,1,Standard,Paid\r\n").unwrap();

        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].payment_status, "Paid");
    }

    #[test]
    fn load_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        match store.load() {
            Err(StorageError::Read { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn write_to_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let err = store
            .append_one(&Booking::new("Alice", 9, "Suite", PAYMENT_PAID))
            .unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));

        let err = store.rewrite_all(&sample_bookings()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(err.to_string().contains("Failed to write bookings"));
    }
}
