use clap::Parser;
use qint::qint::{parse_nanotons, Qint};
use qint::tracing::start_qint_tracing_subscriber;
use std::process::ExitCode;
use tracing::{error, warn};

/// Quantizes TON amounts into packed 7-bit numbers.
/// By default the largest packed value not above the amount is chosen.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(long, action)]
    /// Choose the smallest packed value not below the amount instead
    ceil: bool,

    #[arg(required = true)]
    /// Amounts in TON, e.g. 0.025
    amounts: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_qint_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();

    let mut status = ExitCode::SUCCESS;
    for amount in &args.amounts {
        let nanotons = match parse_nanotons(amount) {
            Ok(nanotons) => nanotons,
            Err(error) => {
                error!("{}", error);
                status = ExitCode::FAILURE;
                continue;
            }
        };

        let qint = if args.ceil {
            match Qint::ceil_from_nanotons(nanotons) {
                Some(qint) => qint,
                None => {
                    error!("{} TON is above the largest packed value {}", amount, Qint::MAX);
                    status = ExitCode::FAILURE;
                    continue;
                }
            }
        } else {
            Qint::floor_from_nanotons(nanotons)
        };

        if qint.decode() != nanotons {
            warn!("{} TON is not exact, quantized to {}", amount, qint);
        }
        println!("{}\t{:#04X}\t{}", amount, qint.bits(), qint.decode());
    }

    status
}
