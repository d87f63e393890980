//! Data models for communication-log processing
//!
//! This module contains the core data structures exchanged between the row
//! readers and the normalizer: the raw per-row record with provenance and
//! the normalized message record handed to downstream consumers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Raw Ingest Row
// =============================================================================

/// Raw row from an input source with provenance.
///
/// `data` pairs each (deduplicated) header with the row's trimmed cell value,
/// in the source file's column order. `source_row` is the 1-based data row
/// number, excluding the header row, stable for the lifetime of one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRow {
    /// Header name to trimmed value, in file column order
    pub data: Vec<(String, String)>,

    /// 1-based data row number within the source (header row excluded)
    pub source_row: usize,
}

impl IngestRow {
    /// Look up a cell value by exact (case-sensitive) header name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

// =============================================================================
// Normalized Message
// =============================================================================

/// Stable internal record for the rest of the pipeline.
///
/// `ts_utc` is ISO 8601 in UTC when the raw timestamp parsed, otherwise
/// `None`; `ts_raw` is preserved exactly as provided so data quality can be
/// audited after the fact. `msg_id` is deterministic: identical raw input
/// yields an identical id within and across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    /// Deterministic message identifier, unique within one run
    pub msg_id: String,

    /// 1-based source row this message was built from
    pub source_row: usize,

    /// Raw timestamp text exactly as read from the source
    pub ts_raw: String,

    /// Canonical UTC timestamp (trailing `Z`), absent when unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_utc: Option<String>,

    /// Whitespace-normalized sender
    pub sender: String,

    /// Whitespace-normalized recipient
    pub recipient: String,

    /// Trimmed message body
    pub body: String,

    /// Thread identifier, empty when the source carries none
    pub thread_id: String,
}

impl NormalizedMessage {
    /// Whether the raw timestamp parsed to a canonical UTC value
    pub fn has_timestamp(&self) -> bool {
        self.ts_utc.is_some()
    }
}
