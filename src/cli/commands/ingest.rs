//! Ingest command implementation
//!
//! Wires the pipeline end-to-end: open the row stream for the input file,
//! normalize each row through the resolved schema mapping, and emit one
//! JSON object per message (JSON Lines) to stdout or the output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use super::shared;
use crate::app::services::normalizer::MessageNormalizer;
use crate::app::services::row_reader::{IngestStats, RowReader};
use crate::cli::args::IngestArgs;
use crate::config::IngestConfig;
use crate::{Error, Result};

/// Summary of one ingest run, reported after the stream is exhausted
#[derive(Debug, Clone, Default)]
pub struct IngestSummary {
    /// Row reader counters
    pub stats: IngestStats,

    /// Normalized messages written to the output
    pub messages_written: usize,

    /// Messages whose raw timestamp was present but unparseable
    pub unparsed_timestamps: usize,
}

/// Run the ingest command
pub fn run_ingest(args: IngestArgs) -> Result<IngestSummary> {
    args.validate()?;
    shared::setup_logging(args.get_log_level())?;

    let mapping = args.resolve_mapping()?;

    let mut config = IngestConfig::default().with_assume_tz(&args.assume_tz);
    if let Some(sheet) = &args.sheet {
        config = config.with_sheet(sheet);
    }

    let normalizer = MessageNormalizer::with_timezone(mapping, &config.assume_tz)?;

    info!("Ingesting {}", args.input.display());

    let summary = match &args.output {
        Some(output_path) => {
            let file = File::create(output_path).map_err(|e| {
                Error::io(format!("failed to create {}", output_path.display()), e)
            })?;
            let mut writer = BufWriter::new(file);
            ingest_to_writer(&args.input, config.sheet.as_deref(), &normalizer, &mut writer)?
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            ingest_to_writer(&args.input, config.sheet.as_deref(), &normalizer, &mut writer)?
        }
    };

    info!(
        "Done: {} rows seen, {} emitted, {} messages written",
        summary.stats.rows_seen, summary.stats.rows_emitted, summary.messages_written
    );
    if summary.unparsed_timestamps > 0 {
        warn!(
            "{} messages carry an unparseable timestamp; inspect their ts_raw",
            summary.unparsed_timestamps
        );
    }

    Ok(summary)
}

/// Stream, normalize and serialize every row of one input file.
///
/// Separated from `run_ingest` so the pipeline can be exercised without
/// touching global logging or process output.
pub fn ingest_to_writer<W: Write>(
    input: &Path,
    sheet: Option<&str>,
    normalizer: &MessageNormalizer,
    writer: &mut W,
) -> Result<IngestSummary> {
    let mut reader = RowReader::open(input, sheet)?;
    let mut summary = IngestSummary::default();

    for row in reader.by_ref() {
        let message = normalizer.normalize(&row);
        if message.ts_utc.is_none() && !message.ts_raw.is_empty() {
            summary.unparsed_timestamps += 1;
        }

        serde_json::to_writer(&mut *writer, &message)
            .map_err(|e| Error::output_writing("failed to serialize message", Box::new(e)))?;
        writer
            .write_all(b"\n")
            .map_err(|e| Error::output_writing("failed to write output", Box::new(e)))?;

        summary.messages_written += 1;
    }

    writer
        .flush()
        .map_err(|e| Error::output_writing("failed to flush output", Box::new(e)))?;

    summary.stats = reader.stats();
    Ok(summary)
}
