use clap::Parser;
use climate_summary::cli::{run, usage, Cli};
use climate_summary::error::SummaryError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SummaryError::NoInputs) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
            println!("{}", usage(&program));
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}
