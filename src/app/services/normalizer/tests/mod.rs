//! Test utilities for normalizer testing

use crate::app::models::IngestRow;


/// Helper to build a raw row from (header, value) pairs
pub fn row_from_pairs(source_row: usize, pairs: &[(&str, &str)]) -> IngestRow {
    IngestRow {
        data: pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        source_row,
    }
}
