//! Row readers for exported communication logs
//!
//! This module streams raw rows out of tabular export files. Each variant
//! produces a lazy, forward-only, single-pass sequence of
//! [`IngestRow`](crate::app::models::IngestRow) in file order, with summary
//! [`IngestStats`] valid once the stream is exhausted. Streams are not
//! restartable; open a fresh reader to re-read a source.
//!
//! ## Architecture
//!
//! - [`dispatch`] - Extension-based format selection and the unified reader
//! - [`csv_reader`] - Delimited-text variant with permissive byte decoding
//! - [`xlsx_reader`] - Spreadsheet variant (optional `xlsx` feature)
//! - [`headers`] - Shared header dedupe and cell decoding helpers
//! - [`stats`] - Stream summary counters
//!
//! ## Usage
//!
//! ```rust,no_run
//! use triage_engine::app::services::row_reader::RowReader;
//!
//! # fn example() -> triage_engine::Result<()> {
//! let mut reader = RowReader::open(std::path::Path::new("export.csv"), None)?;
//! for row in reader.by_ref() {
//!     println!("row {}: {} columns", row.source_row, row.data.len());
//! }
//! let stats = reader.stats();
//! println!("{} rows seen, {} emitted", stats.rows_seen, stats.rows_emitted);
//! # Ok(())
//! # }
//! ```

pub mod csv_reader;
pub mod dispatch;
pub mod headers;
pub mod stats;
#[cfg(feature = "xlsx")]
pub mod xlsx_reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use csv_reader::CsvRowReader;
pub use dispatch::{InputKind, RowReader};
pub use stats::IngestStats;
#[cfg(feature = "xlsx")]
pub use xlsx_reader::XlsxRowReader;
