//! Extension-based format selection for row readers

use std::path::Path;

use tracing::debug;

use super::csv_reader::CsvRowReader;
use super::stats::IngestStats;
#[cfg(feature = "xlsx")]
use super::xlsx_reader::XlsxRowReader;
use crate::app::models::IngestRow;
use crate::constants::{DELIMITED_EXTENSIONS, SPREADSHEET_EXTENSIONS};
use crate::{Error, Result};

/// Source classification derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Delimited-text export (`.csv`)
    Delimited,
    /// Spreadsheet export (`.xlsx`, `.xlsm`)
    Spreadsheet,
}

/// Classify an input path by its extension, case-insensitively.
///
/// Unrecognized extensions fail with [`Error::UnsupportedInput`] naming the
/// offending extension.
pub fn sniff_input_kind(path: &Path) -> Result<InputKind> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if DELIMITED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(InputKind::Delimited)
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        Ok(InputKind::Spreadsheet)
    } else if extension.is_empty() {
        Err(Error::unsupported_input("(none)"))
    } else {
        Err(Error::unsupported_input(format!(".{}", extension)))
    }
}

/// Unified row reader over either source variant.
///
/// Construction is where configuration errors surface; once open, the
/// stream itself only ever degrades row-level anomalies into placeholder
/// values.
#[derive(Debug)]
pub enum RowReader {
    Delimited(CsvRowReader),
    #[cfg(feature = "xlsx")]
    Spreadsheet(XlsxRowReader),
}

impl RowReader {
    /// Open the reader matching the path's extension.
    ///
    /// The sheet-name hint applies only to spreadsheet sources and is
    /// ignored for delimited text. Without the `xlsx` feature, spreadsheet
    /// paths fail with a configuration error at open time.
    pub fn open(path: &Path, sheet: Option<&str>) -> Result<Self> {
        match sniff_input_kind(path)? {
            InputKind::Delimited => {
                debug!("dispatching {} to delimited-text reader", path.display());
                Ok(Self::Delimited(CsvRowReader::open(path)?))
            }
            #[cfg(feature = "xlsx")]
            InputKind::Spreadsheet => {
                debug!("dispatching {} to spreadsheet reader", path.display());
                Ok(Self::Spreadsheet(XlsxRowReader::open(path, sheet)?))
            }
            #[cfg(not(feature = "xlsx"))]
            InputKind::Spreadsheet => {
                let _ = sheet;
                Err(Error::configuration(
                    "spreadsheet input requires the 'xlsx' feature; rebuild with \
                     `--features xlsx` or convert the workbook to CSV",
                ))
            }
        }
    }

    /// Summary counters; final once the stream has returned `None`
    pub fn stats(&self) -> IngestStats {
        match self {
            Self::Delimited(reader) => reader.stats(),
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet(reader) => reader.stats(),
        }
    }

    /// Deduplicated headers in source column order
    pub fn headers(&self) -> &[String] {
        match self {
            Self::Delimited(reader) => reader.headers(),
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet(reader) => reader.headers(),
        }
    }
}

impl Iterator for RowReader {
    type Item = IngestRow;

    fn next(&mut self) -> Option<IngestRow> {
        match self {
            Self::Delimited(reader) => reader.next(),
            #[cfg(feature = "xlsx")]
            Self::Spreadsheet(reader) => reader.next(),
        }
    }
}
