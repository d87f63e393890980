//! Column mapping configuration for normalization
//!
//! Maps tool-export columns to normalized message fields. Column names must
//! match the source headers exactly (case-sensitive), post header-dedupe.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Immutable mapping from raw export headers to normalized fields.
///
/// Constructed once by the caller before normalization begins and held for
/// the whole stream's duration. When `uniqid_col` is unset (or the mapped
/// value is blank), a stable `msg_id` is synthesized from the row instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMapping {
    /// Header supplying the raw timestamp
    pub timestamp_col: String,

    /// Header supplying the sender
    pub from_col: String,

    /// Header supplying the recipient
    pub to_col: String,

    /// Header supplying the message body
    pub message_col: String,

    /// Header supplying an export-provided unique id (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniqid_col: Option<String>,

    /// Header supplying a conversation/thread id (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_col: Option<String>,
}

impl SchemaMapping {
    /// Create a mapping with the four required columns
    pub fn new(
        timestamp_col: impl Into<String>,
        from_col: impl Into<String>,
        to_col: impl Into<String>,
        message_col: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_col: timestamp_col.into(),
            from_col: from_col.into(),
            to_col: to_col.into(),
            message_col: message_col.into(),
            uniqid_col: None,
            thread_col: None,
        }
    }

    /// Set the export-provided unique id column
    pub fn with_uniqid_col(mut self, column: impl Into<String>) -> Self {
        self.uniqid_col = Some(column.into());
        self
    }

    /// Set the conversation/thread id column
    pub fn with_thread_col(mut self, column: impl Into<String>) -> Self {
        self.thread_col = Some(column.into());
        self
    }

    /// Load a mapping from a TOML file.
    ///
    /// Expected keys mirror the field names: `timestamp_col`, `from_col`,
    /// `to_col`, `message_col`, and optionally `uniqid_col`, `thread_col`.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;

        let mapping: SchemaMapping = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("invalid mapping file {}: {}", path.display(), e))
        })?;

        mapping.validate()?;
        Ok(mapping)
    }

    /// Validate the mapping for consistency.
    ///
    /// Required columns must be non-empty; optional columns, when present,
    /// must be non-empty too (an empty optional means a broken config, not
    /// an intentionally absent column).
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("timestamp_col", &self.timestamp_col),
            ("from_col", &self.from_col),
            ("to_col", &self.to_col),
            ("message_col", &self.message_col),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "mapping column '{}' must not be empty",
                    name
                )));
            }
        }

        let optional = [
            ("uniqid_col", self.uniqid_col.as_deref()),
            ("thread_col", self.thread_col.as_deref()),
        ];
        for (name, value) in optional {
            if let Some(column) = value {
                if column.trim().is_empty() {
                    return Err(Error::configuration(format!(
                        "mapping column '{}' is set but empty",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}
