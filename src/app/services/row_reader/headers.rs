//! Header dedupe and cell decoding helpers shared by all row readers

use std::collections::HashMap;

use crate::constants::BLANK_HEADER_PLACEHOLDER;

/// Deduplicate column headers deterministically, left to right.
///
/// The first occurrence of a name is kept as-is; later occurrences get a
/// suffix counter starting at 2 (`Message`, `Message_2`, `Message_3`). A
/// blank header becomes [`BLANK_HEADER_PLACEHOLDER`] before suffixing, so
/// exports with unnamed columns still produce stable, collision-free keys.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(headers.len());

    for header in headers {
        let base = if header.is_empty() {
            BLANK_HEADER_PLACEHOLDER.to_string()
        } else {
            header
        };
        let count = seen.entry(base.clone()).and_modify(|c| *c += 1).or_insert(1);
        if *count == 1 {
            out.push(base);
        } else {
            out.push(format!("{}_{}", base, count));
        }
    }

    out
}

/// Decode one raw cell to a trimmed string.
///
/// Undecodable byte sequences are replaced rather than raised, so one bad
/// byte in a malformed export never aborts the stream.
pub fn decode_cell(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
    text.trim().to_string()
}
