//! Spreadsheet row reader (optional `xlsx` feature)
//!
//! Streams data rows out of an XLSX/XLSM workbook. Only the selected sheet
//! is decoded; rows are handed out lazily from it. Cell values of any type
//! are coerced to trimmed strings, with the empty string for cells beyond a
//! row's populated width or holding no value.

use std::path::Path;

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use tracing::debug;

use super::headers::dedupe_headers;
use super::stats::IngestStats;
use crate::app::models::IngestRow;
use crate::{Error, Result};

/// Streaming reader over one worksheet of a spreadsheet export.
#[derive(Debug)]
pub struct XlsxRowReader {
    rows: std::vec::IntoIter<Vec<Data>>,
    headers: Vec<String>,
    rows_seen: usize,
    rows_emitted: usize,
}

impl XlsxRowReader {
    /// Open a workbook and position the stream on the selected sheet.
    ///
    /// Reads the named sheet, or the workbook's first sheet when none is
    /// given. A missing named sheet is a fatal error; an entirely blank
    /// header row yields an empty stream with zero stats.
    pub fn open(path: &Path, sheet: Option<&str>) -> Result<Self> {
        let file = path.display().to_string();

        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| Error::spreadsheet(&file, format!("failed to open workbook: {}", e)))?;

        let range = match sheet {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| Error::spreadsheet(&file, format!("sheet '{}': {}", name, e)))?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| Error::spreadsheet(&file, "workbook has no worksheets"))?
                .map_err(|e| Error::spreadsheet(&file, format!("failed to read sheet: {}", e)))?,
        };

        debug!("opened {} ({} rows incl. header)", file, range.height());
        Ok(Self::from_range(range))
    }

    /// Build a reader over an already-decoded cell range.
    pub(crate) fn from_range(range: Range<Data>) -> Self {
        let mut rows = range
            .rows()
            .map(|row| row.to_vec())
            .collect::<Vec<_>>()
            .into_iter();

        let headers = match rows.next() {
            Some(header_row) => {
                let cells: Vec<String> = header_row.iter().map(cell_to_string).collect();
                if cells.iter().any(|h| !h.is_empty()) {
                    dedupe_headers(cells)
                } else {
                    // Entirely blank header row: empty stream, zero stats.
                    Vec::new()
                }
            }
            None => Vec::new(),
        };

        if headers.is_empty() {
            rows = Vec::new().into_iter();
        }

        Self {
            rows,
            headers,
            rows_seen: 0,
            rows_emitted: 0,
        }
    }

    /// Summary counters; final once the stream has returned `None`
    pub fn stats(&self) -> IngestStats {
        IngestStats {
            rows_seen: self.rows_seen,
            rows_emitted: self.rows_emitted,
        }
    }

    /// Deduplicated headers in sheet column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for XlsxRowReader {
    type Item = IngestRow;

    fn next(&mut self) -> Option<IngestRow> {
        let row = self.rows.next()?;
        self.rows_seen += 1;

        let data = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = row.get(i).map(cell_to_string).unwrap_or_default();
                (name.clone(), value)
            })
            .collect();

        self.rows_emitted += 1;
        Some(IngestRow {
            data,
            source_row: self.rows_seen,
        })
    }
}

/// Coerce one cell to a trimmed string, empty for valueless cells
pub(crate) fn cell_to_string(cell: &Data) -> String {
    if cell.is_empty() {
        return String::new();
    }
    cell.as_string()
        .unwrap_or_else(|| cell.to_string())
        .trim()
        .to_string()
}
