//! Stream summary counters for row readers

use serde::{Deserialize, Serialize};

/// Summary counters reported once a row stream is exhausted.
///
/// Invariant: `rows_emitted <= rows_seen`. The two differ only when the
/// underlying reader had to skip a record it could not parse at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Data rows encountered in the source (header row excluded)
    pub rows_seen: usize,

    /// Data rows actually emitted to the caller
    pub rows_emitted: usize,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_seen: 0,
            rows_emitted: 0,
        }
    }

    /// Rows encountered but not emitted
    pub fn rows_skipped(&self) -> usize {
        self.rows_seen - self.rows_emitted
    }

    /// Whether every row seen was emitted
    pub fn is_complete(&self) -> bool {
        self.rows_emitted == self.rows_seen
    }
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}
