//! Command-line argument definitions for the triage engine
//!
//! This module defines the CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::services::normalizer::SchemaMapping;
use crate::constants::DEFAULT_ASSUME_TZ;
use crate::{Error, Result};

/// CLI arguments for the triage engine
///
/// Converts exported communication logs (CSV or XLSX) into normalized,
/// deterministically-identified message records for downstream triage.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "triage-engine",
    version,
    about = "Convert exported communication logs into normalized message records",
    long_about = "Streams rows out of CSV or XLSX communication exports and converts each one \
                  into a normalized message record with a deterministic id and a canonical UTC \
                  timestamp. Output is one JSON object per message (JSON Lines), suitable for \
                  downstream triage and prioritization tooling."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the triage engine
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest an export file and emit normalized messages as JSON Lines
    Ingest(IngestArgs),
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Input export file (.csv, .xlsx, .xlsm)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input export file (.csv, .xlsx, .xlsm)"
    )]
    pub input: PathBuf,

    /// Worksheet to read from spreadsheet inputs
    ///
    /// Defaults to the workbook's first sheet. Ignored for CSV inputs.
    #[arg(
        long = "sheet",
        value_name = "NAME",
        help = "Worksheet to read from spreadsheet inputs"
    )]
    pub sheet: Option<String>,

    /// Column mapping file (TOML)
    ///
    /// Keys: timestamp_col, from_col, to_col, message_col, and optionally
    /// uniqid_col, thread_col. Mutually exclusive with the individual
    /// --*-col flags.
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Column mapping file (TOML format)"
    )]
    pub mapping_file: Option<PathBuf>,

    /// Header supplying the raw timestamp
    #[arg(long = "timestamp-col", value_name = "HEADER")]
    pub timestamp_col: Option<String>,

    /// Header supplying the sender
    #[arg(long = "from-col", value_name = "HEADER")]
    pub from_col: Option<String>,

    /// Header supplying the recipient
    #[arg(long = "to-col", value_name = "HEADER")]
    pub to_col: Option<String>,

    /// Header supplying the message body
    #[arg(long = "message-col", value_name = "HEADER")]
    pub message_col: Option<String>,

    /// Header supplying an export-provided unique id
    #[arg(long = "uniqid-col", value_name = "HEADER")]
    pub uniqid_col: Option<String>,

    /// Header supplying a conversation/thread id
    #[arg(long = "thread-col", value_name = "HEADER")]
    pub thread_col: Option<String>,

    /// IANA zone assumed for timestamps without offset information
    #[arg(
        long = "assume-tz",
        value_name = "ZONE",
        default_value = DEFAULT_ASSUME_TZ,
        help = "IANA zone assumed for timestamps without offset information"
    )]
    pub assume_tz: String,

    /// Output file for JSON Lines records
    ///
    /// If not specified, writes to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for JSON Lines records (stdout if omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl IngestArgs {
    /// Validate the ingest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        let column_flags = [
            &self.timestamp_col,
            &self.from_col,
            &self.to_col,
            &self.message_col,
        ];

        if let Some(mapping_file) = &self.mapping_file {
            if !mapping_file.exists() {
                return Err(Error::configuration(format!(
                    "Mapping file does not exist: {}",
                    mapping_file.display()
                )));
            }
            if column_flags.iter().any(|flag| flag.is_some()) {
                return Err(Error::configuration(
                    "Use either --mapping or the --*-col flags, not both".to_string(),
                ));
            }
        } else if column_flags.iter().any(|flag| flag.is_none()) {
            return Err(Error::configuration(
                "Without --mapping, all of --timestamp-col, --from-col, --to-col and \
                 --message-col are required"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Assemble the schema mapping from the mapping file or column flags.
    ///
    /// Call `validate()` first; this assumes a consistent flag set.
    pub fn resolve_mapping(&self) -> Result<SchemaMapping> {
        if let Some(mapping_file) = &self.mapping_file {
            return SchemaMapping::from_toml_file(mapping_file);
        }

        let mut mapping = SchemaMapping::new(
            self.timestamp_col.clone().unwrap_or_default(),
            self.from_col.clone().unwrap_or_default(),
            self.to_col.clone().unwrap_or_default(),
            self.message_col.clone().unwrap_or_default(),
        );
        if let Some(column) = &self.uniqid_col {
            mapping = mapping.with_uniqid_col(column);
        }
        if let Some(column) = &self.thread_col {
            mapping = mapping.with_thread_col(column);
        }

        mapping.validate()?;
        Ok(mapping)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
