//! Delimited-text row reader
//!
//! Streams data rows out of a CSV export one record at a time. The first
//! line is the header; every subsequent line is one record. Fields are
//! decoded permissively (bad bytes replaced, never fatal) and trimmed.

use std::fs::File;
use std::path::Path;

use csv::ByteRecord;
use tracing::{debug, warn};

use super::headers::{decode_cell, dedupe_headers};
use super::stats::IngestStats;
use crate::app::models::IngestRow;
use crate::{Error, Result};

/// Streaming reader over one delimited-text export.
///
/// Lazy and single-pass: rows are parsed on demand and the file handle is
/// released when the reader is dropped, however early that happens.
#[derive(Debug)]
pub struct CsvRowReader {
    reader: csv::Reader<File>,
    headers: Vec<String>,
    record: ByteRecord,
    rows_seen: usize,
    rows_emitted: usize,
    path: String,
}

impl CsvRowReader {
    /// Open a CSV export and read its header row.
    ///
    /// Header order is the file's column order, after dedupe. A file with
    /// no header row produces an empty stream rather than an error.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let raw_headers = reader
            .byte_headers()
            .map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    "failed to read header row",
                    Some(e),
                )
            })?
            .clone();

        let headers = dedupe_headers(raw_headers.iter().map(decode_cell).collect());
        debug!(
            "opened {} with {} columns",
            path.display(),
            headers.len()
        );

        Ok(Self {
            reader,
            headers,
            record: ByteRecord::new(),
            rows_seen: 0,
            rows_emitted: 0,
            path: path.display().to_string(),
        })
    }

    /// Summary counters; final once the stream has returned `None`
    pub fn stats(&self) -> IngestStats {
        IngestStats {
            rows_seen: self.rows_seen,
            rows_emitted: self.rows_emitted,
        }
    }

    /// Deduplicated headers in file column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for CsvRowReader {
    type Item = IngestRow;

    fn next(&mut self) -> Option<IngestRow> {
        if self.headers.is_empty() {
            return None;
        }

        loop {
            match self.reader.read_byte_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    self.rows_seen += 1;

                    // Pad short rows with empty cells and ignore extras
                    // beyond the header width, so ragged exports still map
                    // onto stable keys.
                    let data = self
                        .headers
                        .iter()
                        .enumerate()
                        .map(|(i, name)| {
                            let value = self
                                .record
                                .get(i)
                                .map(decode_cell)
                                .unwrap_or_default();
                            (name.clone(), value)
                        })
                        .collect();

                    self.rows_emitted += 1;
                    return Some(IngestRow {
                        data,
                        source_row: self.rows_seen,
                    });
                }
                Err(e) => {
                    // An I/O failure will not clear on retry; end the stream.
                    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                        warn!("I/O failure reading {}: {}", self.path, e);
                        return None;
                    }

                    // Row-level anomaly: count it, log it, keep streaming.
                    self.rows_seen += 1;
                    warn!(
                        "skipping unreadable record {} in {}: {}",
                        self.rows_seen, self.path, e
                    );
                }
            }
        }
    }
}
