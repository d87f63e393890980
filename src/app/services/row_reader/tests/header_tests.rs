//! Tests for header dedupe and cell decoding

use super::super::headers::{decode_cell, dedupe_headers};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_dedupe_keeps_unique_headers_untouched() {
    let deduped = dedupe_headers(headers(&["timestamp", "from", "to", "message"]));
    assert_eq!(deduped, headers(&["timestamp", "from", "to", "message"]));
}

#[test]
fn test_dedupe_suffixes_duplicates_from_two() {
    let deduped = dedupe_headers(headers(&["Message", "Message", "X"]));
    assert_eq!(deduped, headers(&["Message", "Message_2", "X"]));
}

#[test]
fn test_dedupe_counts_per_name() {
    let deduped = dedupe_headers(headers(&["A", "B", "A", "A", "B"]));
    assert_eq!(deduped, headers(&["A", "B", "A_2", "A_3", "B_2"]));
}

#[test]
fn test_blank_headers_get_placeholder_then_suffix() {
    let deduped = dedupe_headers(headers(&["", "from", ""]));
    assert_eq!(deduped, headers(&["COL", "from", "COL_2"]));
}

#[test]
fn test_blank_placeholder_shares_counter_with_literal_col() {
    // A blank header and a literal "COL" header collapse onto the same
    // base name, left to right.
    let deduped = dedupe_headers(headers(&["", "COL"]));
    assert_eq!(deduped, headers(&["COL", "COL_2"]));
}

#[test]
fn test_decode_cell_trims_and_replaces_bad_bytes() {
    assert_eq!(decode_cell(b"  Alice  "), "Alice");
    assert_eq!(decode_cell(b""), "");

    // Invalid UTF-8 is replaced, never fatal
    let decoded = decode_cell(b"Al\xffice");
    assert!(decoded.contains('\u{FFFD}'));
    assert!(decoded.starts_with("Al"));
    assert!(decoded.ends_with("ice"));
}
