//! Core message normalization
//!
//! Maps one raw ingest row through a schema mapping into exactly one
//! normalized message record. Pure per-row: missing mapped columns become
//! empty strings, never errors, so one consistent record shape flows
//! downstream regardless of export quirks.

use chrono_tz::Tz;

use super::mapping::SchemaMapping;
use super::message_id::synthesize_msg_id;
use super::timestamp::parse_timestamp_to_utc;
use crate::app::models::{IngestRow, NormalizedMessage};
use crate::{Error, Result};

/// Normalizer for raw ingest rows.
///
/// Holds one immutable [`SchemaMapping`] plus the resolved fallback zone
/// for naive timestamps. Safe to reuse across an entire stream; carries no
/// per-row state.
#[derive(Debug, Clone)]
pub struct MessageNormalizer {
    mapping: SchemaMapping,
    assume_tz: Tz,
}

impl MessageNormalizer {
    /// Create a normalizer with the default fallback timezone
    pub fn new(mapping: SchemaMapping) -> Self {
        Self {
            mapping,
            assume_tz: chrono_tz::America::New_York,
        }
    }

    /// Create a normalizer with a caller-supplied IANA fallback zone.
    ///
    /// An unknown zone name is a configuration error, surfaced here rather
    /// than once per row.
    pub fn with_timezone(mapping: SchemaMapping, zone: &str) -> Result<Self> {
        let assume_tz: Tz = zone
            .parse()
            .map_err(|_| Error::configuration(format!("unknown timezone: '{}'", zone)))?;
        Ok(Self { mapping, assume_tz })
    }

    /// The mapping this normalizer was built with
    pub fn mapping(&self) -> &SchemaMapping {
        &self.mapping
    }

    /// Normalize one raw row into one message record.
    ///
    /// Deterministic: the same row and mapping always produce the same
    /// record, including `msg_id`.
    pub fn normalize(&self, row: &IngestRow) -> NormalizedMessage {
        let ts_raw = row
            .get(&self.mapping.timestamp_col)
            .unwrap_or_default()
            .trim()
            .to_string();
        let sender = clean_party(row.get(&self.mapping.from_col).unwrap_or_default());
        let recipient = clean_party(row.get(&self.mapping.to_col).unwrap_or_default());
        let body = row
            .get(&self.mapping.message_col)
            .unwrap_or_default()
            .trim()
            .to_string();

        let thread_id = match &self.mapping.thread_col {
            Some(column) => row.get(column).unwrap_or_default().trim().to_string(),
            None => String::new(),
        };

        let msg_id = self
            .mapping
            .uniqid_col
            .as_deref()
            .and_then(|column| row.get(column))
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| synthesize_msg_id(row.source_row, &ts_raw, &sender, &recipient));

        let ts_utc = parse_timestamp_to_utc(&ts_raw, self.assume_tz);

        NormalizedMessage {
            msg_id,
            source_row: row.source_row,
            ts_raw,
            ts_utc,
            sender,
            recipient,
            body,
            thread_id,
        }
    }
}

/// Trim and collapse internal whitespace runs to single spaces
fn clean_party(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
