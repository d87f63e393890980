//! Configuration for ingestion runs.
//!
//! Bundles the caller-facing knobs of one ingestion pass: which worksheet
//! to read from spreadsheet sources and which civil timezone to assume for
//! naive timestamps. The column mapping itself lives with the normalizer
//! as [`crate::SchemaMapping`].

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ASSUME_TZ;

/// Configuration for one ingestion pass over one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Worksheet to read from spreadsheet sources (workbook's first sheet
    /// when not set; ignored for delimited-text sources)
    pub sheet: Option<String>,

    /// IANA zone name assumed for timestamps without offset information
    pub assume_tz: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sheet: None,
            assume_tz: DEFAULT_ASSUME_TZ.to_string(),
        }
    }
}

impl IngestConfig {
    /// Create configuration with a named worksheet
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Create configuration with a custom fallback timezone
    pub fn with_assume_tz(mut self, zone: impl Into<String>) -> Self {
        self.assume_tz = zone.into();
        self
    }
}
