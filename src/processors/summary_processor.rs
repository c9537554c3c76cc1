use crate::processors::Aggregator;
use crate::readers::{ObservationReader, SourceStats};
use crate::utils::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Everything a run produced: the folded regions plus bookkeeping
#[derive(Debug, Default)]
pub struct RunSummary {
    pub aggregator: Aggregator,
    pub sources_read: usize,
    pub sources_skipped: Vec<PathBuf>,
    pub lines_read: u64,
    pub records_folded: u64,
    pub lines_dropped: u64,
}

impl RunSummary {
    fn absorb(&mut self, stats: SourceStats) {
        self.lines_read += stats.lines_read;
        self.records_folded += stats.records_folded;
        self.lines_dropped += stats.lines_dropped;
    }

    pub fn summary(&self) -> String {
        format!(
            "Sources: {} read, {} skipped\n\
            Lines: {} read, {} folded, {} dropped\n\
            Regions: {}",
            self.sources_read,
            self.sources_skipped.len(),
            self.lines_read,
            self.records_folded,
            self.lines_dropped,
            self.aggregator.len()
        )
    }
}

pub struct SummaryProcessor {
    reader: ObservationReader,
    show_progress: bool,
}

impl SummaryProcessor {
    pub fn new(reader: ObservationReader) -> Self {
        Self {
            reader,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fold every source in order into one aggregator.
    ///
    /// Each source is announced at `info`, the CLI's default log level.
    ///
    /// Sources that cannot be opened or read are logged and skipped; the run
    /// itself never fails.
    pub fn process_sources<P: AsRef<Path>>(&self, inputs: &[P]) -> RunSummary {
        let mut run = RunSummary::default();

        for input in inputs {
            let path = input.as_ref();
            info!("Opening file: {}", path.display());

            let progress =
                ProgressReporter::new_spinner(&format!("Reading {}", path.display()), !self.show_progress);

            let mut stats = SourceStats::default();
            let result = self.reader.read_source(path, &mut run.aggregator, &mut stats);

            // Records folded before a read error stay in the aggregate
            run.absorb(stats);

            match result {
                Ok(()) => {
                    progress.finish_with_message(&format!(
                        "Read {} records from {}",
                        stats.records_folded,
                        path.display()
                    ));
                    debug!(
                        path = %path.display(),
                        lines = stats.lines_read,
                        records = stats.records_folded,
                        dropped = stats.lines_dropped,
                        "Finished source"
                    );
                    run.sources_read += 1;
                }
                Err(e) => {
                    progress.finish_and_clear();
                    error!("{}", e);
                    if stats.lines_read > 0 {
                        warn!(
                            path = %path.display(),
                            records = stats.records_folded,
                            "Keeping records folded before the read error"
                        );
                    }
                    run.sources_skipped.push(path.to_path_buf());
                }
            }
        }

        debug!(
            sources = run.sources_read,
            skipped = run.sources_skipped.len(),
            regions = run.aggregator.len(),
            "Aggregation pass complete"
        );

        run
    }
}

impl Default for SummaryProcessor {
    fn default() -> Self {
        Self::new(ObservationReader::new())
    }
}
