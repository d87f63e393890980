//! Tests for the spreadsheet row reader
//!
//! These drive the reader over in-memory cell ranges; workbook opening
//! itself is exercised by the failure-path tests (calamine cannot write
//! workbooks, so happy-path open needs a real export file).

use calamine::{Data, Range};

use super::super::xlsx_reader::{cell_to_string, XlsxRowReader};
use crate::Error;

fn string_cell(s: &str) -> Data {
    Data::String(s.to_string())
}

/// Build a range from rows of cells, top-left anchored at (0, 0)
fn range_from_rows(rows: Vec<Vec<Data>>) -> Range<Data> {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    assert!(height > 0 && width > 0, "use Range::empty() for no cells");

    let mut range = Range::new((0, 0), (height - 1, width - 1));
    for (r, row) in rows.into_iter().enumerate() {
        for (c, cell) in row.into_iter().enumerate() {
            range.set_value((r as u32, c as u32), cell);
        }
    }
    range
}

#[test]
fn test_rows_emitted_with_stable_source_row() {
    let range = range_from_rows(vec![
        vec![string_cell("timestamp"), string_cell("from"), string_cell("message")],
        vec![string_cell("2026-02-21 10:00:00"), string_cell("Alice"), string_cell("Hello")],
        vec![string_cell("2026-02-21 10:01:00"), string_cell("Bob"), string_cell("Hi")],
    ]);

    let mut reader = XlsxRowReader::from_range(range);
    assert_eq!(reader.headers(), ["timestamp", "from", "message"]);

    let rows: Vec<_> = reader.by_ref().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source_row, 1);
    assert_eq!(rows[1].source_row, 2);
    assert_eq!(rows[0].get("from"), Some("Alice"));
    assert_eq!(rows[1].get("message"), Some("Hi"));

    let stats = reader.stats();
    assert_eq!(stats.rows_seen, 2);
    assert_eq!(stats.rows_emitted, 2);
}

#[test]
fn test_blank_header_row_yields_empty_stream() {
    let range = range_from_rows(vec![
        vec![Data::Empty, Data::Empty, Data::Empty],
        vec![string_cell("orphaned"), string_cell("data"), string_cell("row")],
    ]);

    let mut reader = XlsxRowReader::from_range(range);
    assert_eq!(reader.next(), None);

    let stats = reader.stats();
    assert_eq!(stats.rows_seen, 0);
    assert_eq!(stats.rows_emitted, 0);
}

#[test]
fn test_empty_sheet_yields_empty_stream() {
    let mut reader = XlsxRowReader::from_range(Range::empty());
    assert_eq!(reader.next(), None);
    assert_eq!(reader.stats().rows_seen, 0);
}

#[test]
fn test_cells_are_coerced_to_trimmed_strings() {
    let range = range_from_rows(vec![
        vec![string_cell("a"), string_cell("b"), string_cell("c")],
        vec![string_cell("  padded  "), Data::Float(2.5), Data::Int(7)],
    ]);

    let mut reader = XlsxRowReader::from_range(range);
    let row = reader.next().unwrap();
    assert_eq!(row.get("a"), Some("padded"));
    assert_eq!(row.get("b"), Some("2.5"));
    assert_eq!(row.get("c"), Some("7"));
}

#[test]
fn test_cells_beyond_row_width_are_empty() {
    let range = range_from_rows(vec![
        vec![string_cell("a"), string_cell("b"), string_cell("c")],
        vec![string_cell("only")],
    ]);

    let mut reader = XlsxRowReader::from_range(range);
    let row = reader.next().unwrap();
    assert_eq!(row.get("a"), Some("only"));
    assert_eq!(row.get("b"), Some(""));
    assert_eq!(row.get("c"), Some(""));
}

#[test]
fn test_duplicate_headers_are_deduped() {
    let range = range_from_rows(vec![
        vec![string_cell("Message"), string_cell("Message"), Data::Empty],
        vec![string_cell("a"), string_cell("b"), string_cell("c")],
    ]);

    let reader = XlsxRowReader::from_range(range);
    assert_eq!(reader.headers(), ["Message", "Message_2", "COL"]);
}

#[test]
fn test_cell_to_string_handles_valueless_cells() {
    assert_eq!(cell_to_string(&Data::Empty), "");
    assert_eq!(cell_to_string(&string_cell("  x ")), "x");
    assert_eq!(cell_to_string(&Data::Float(10.25)), "10.25");
}

#[test]
fn test_open_rejects_missing_workbook() {
    let err =
        XlsxRowReader::open(std::path::Path::new("/nonexistent/export.xlsx"), None).unwrap_err();
    assert!(matches!(err, Error::Spreadsheet { .. }));
}

#[test]
fn test_open_rejects_garbage_workbook() {
    // A csv byte stream is not a zip container, so workbook open must fail
    // with a spreadsheet error rather than a panic.
    let file = super::create_temp_file_with_ext("xlsx", b"timestamp,from\n1,2\n");
    let err = XlsxRowReader::open(file.path(), None).unwrap_err();
    assert!(matches!(err, Error::Spreadsheet { .. }));
}
