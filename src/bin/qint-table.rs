use clap::Parser;
use qint::io::dump_data_to_file;
use qint::qint::full_lookup;
use qint::table::{rows, write_table, DEFAULT_COUNT, DEFAULT_START};
use qint::tracing::start_qint_tracing_subscriber;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn parse_packed(value: &str) -> Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|error| format!("'{}' is not a packed value: {}", value, error))
}

/// Prints the decoded TON amounts of consecutive packed quantized numbers
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_START, value_parser = parse_packed)]
    /// First packed value of the table, decimal or 0x-prefixed hex
    start: u8,

    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    /// Number of rows to print
    count: usize,

    #[arg(short, long, verbatim_doc_comment)]
    /// Also write the decoded value of all 128 packed values to this file.
    /// The table is a bincode encoded Vec<u64> indexed by the packed value.
    dump: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_qint_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();

    let table = rows(args.start, args.count);
    debug!("printing {} rows from {:#04x}", table.len(), args.start);
    if let Err(error) = write_table(&mut io::stdout().lock(), &table) {
        error!("could not write table: {}", error);
        return ExitCode::FAILURE;
    }

    if let Some(dump) = args.dump {
        if let Err(error) = dump_data_to_file(&full_lookup().to_vec(), &dump) {
            error!("could not write lookup table to {:?}: {}", dump, error);
            return ExitCode::FAILURE;
        }
        info!("lookup table written to {:?}", dump);
    }

    ExitCode::SUCCESS
}
