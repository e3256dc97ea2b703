//! Audit trail of booking changes.
//!
//! Writes one timestamped line per successful mutation to an append-only
//! file, e.g. `[2026-02-04T10:15:30.123Z] BOOK: Alice -> room 9 (Suite)`.

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

use chrono::Utc;

/// File name used inside the configured audit directory.
pub const AUDIT_FILE_NAME: &str = "hotel-audit.log";

/// Format current UTC time as ISO 8601 with milliseconds.
fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Append-only audit file. Recording is a no-op when no file is open.
#[derive(Debug, Default)]
pub struct AuditLog {
    file: Option<File>,
}

impl AuditLog {
    /// An audit log that discards everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open (or create) `{dir}/hotel-audit.log`.
    ///
    /// Auditing is disabled if `dir` is `None` or the file can't be opened.
    pub fn open(dir: Option<&Path>) -> Self {
        let file = dir.and_then(|dir| {
            if let Err(e) = std::fs::create_dir_all(dir) {
                log::warn!("Audit log disabled, cannot create {}: {}", dir.display(), e);
                return None;
            }
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(AUDIT_FILE_NAME))
                .map_err(|e| log::warn!("Audit log disabled: {}", e))
                .ok()
        });
        Self { file }
    }

    /// Write a timestamped line (if a file is open).
    pub fn record(&mut self, action: &str, detail: &str) {
        if let Some(file) = self.file.as_mut() {
            let ts = utc_timestamp();
            let _ = writeln!(file, "[{}] {}: {}", ts, action, detail);
            let _ = file.flush();
        }
    }
}
