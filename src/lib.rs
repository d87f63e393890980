//! Triage Engine Library
//!
//! A Rust library for converting exported communication logs (CSV or XLSX)
//! into normalized, deterministically-identified message records for
//! downstream triage and prioritization.
//!
//! This library provides tools for:
//! - Streaming rows from delimited-text and spreadsheet exports with
//!   stable per-row provenance
//! - Deduplicating repeated column headers deterministically
//! - Mapping raw rows through a caller-supplied schema into normalized
//!   message records
//! - Canonicalizing export timestamps to UTC with a configurable fallback
//!   civil timezone
//! - Synthesizing deterministic message identifiers when exports carry none

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod normalizer;
        pub mod row_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{IngestRow, NormalizedMessage};
pub use app::services::normalizer::{MessageNormalizer, SchemaMapping};
pub use app::services::row_reader::{IngestStats, RowReader};
pub use config::IngestConfig;

/// Result type alias for the triage engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ingestion and normalization operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Spreadsheet reading error
    #[error("Spreadsheet error in file '{file}': {message}")]
    Spreadsheet { file: String, message: String },

    /// Unsupported input file type
    #[error("Unsupported input type: {extension}")]
    UnsupportedInput { extension: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output serialization or writing error
    #[error("Output writing error: {message}")]
    OutputWriting {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a spreadsheet reading error
    pub fn spreadsheet(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Spreadsheet {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported input type error
    pub fn unsupported_input(extension: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            extension: extension.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output writing error
    pub fn output_writing(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::OutputWriting {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
