//! Command implementations for the triage engine CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod ingest;
pub mod shared;

// Re-export the main types for easy access
pub use ingest::IngestSummary;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the triage engine
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<IngestSummary> {
    match args.get_command() {
        Commands::Ingest(ingest_args) => ingest::run_ingest(ingest_args),
    }
}
