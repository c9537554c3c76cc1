use crate::cli::args::Cli;
use crate::error::{Result, SummaryError};
use crate::processors::{RunSummary, SummaryProcessor};
use crate::readers::ObservationReader;
use crate::writers::ReportWriter;
use std::io::{self, Write};
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&cli, &mut out).map(|_| ())
}

/// Run the whole pass, writing the report to `out`
pub fn run_with_writer<W: Write>(cli: &Cli, out: &mut W) -> Result<RunSummary> {
    if cli.inputs.is_empty() {
        return Err(SummaryError::NoInputs);
    }

    // Reject bad options before touching any input
    let writer = ReportWriter::new()
        .with_format(&cli.format)?
        .with_timezone(&cli.timezone)?;

    setup_logging(cli);

    info!("Processing {} input file(s)", cli.inputs.len());
    let processor =
        SummaryProcessor::new(ObservationReader::with_mmap(cli.mmap)).with_progress(!cli.quiet);
    let run = processor.process_sources(cli.inputs.as_slice());
    debug!("Run summary:\n{}", run.summary());

    writer.write(run.aggregator.snapshot(), out)?;
    out.flush()?;

    Ok(run)
}

/// Set up structured logging on stderr; RUST_LOG overrides the CLI level
pub fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = cli.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_summary={}", log_level)));

    // A second run in the same process keeps the first subscriber
    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .try_init()
        .is_ok();

    if initialized {
        debug!("Logging initialized at level: {}", log_level);
    }
}
