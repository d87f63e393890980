use clap::Parser;
use std::process;
use triage_engine::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Triage Engine - Communication Log Normalizer");
    println!("============================================");
    println!();
    println!("Convert exported communication logs (CSV or XLSX) into normalized,");
    println!("deterministically-identified message records for downstream triage.");
    println!();
    println!("USAGE:");
    println!("    triage-engine <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Ingest an export and emit normalized messages as JSON Lines");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest a CSV export with inline column mapping:");
    println!("    triage-engine ingest -i export.csv \\");
    println!("        --timestamp-col Timestamp --from-col From --to-col To --message-col Body");
    println!();
    println!("    # Ingest a named worksheet using a mapping file:");
    println!("    triage-engine ingest -i export.xlsx --sheet Messages -m mapping.toml -o out.jsonl");
    println!();
    println!("For detailed help on any command, use:");
    println!("    triage-engine <COMMAND> --help");
}
