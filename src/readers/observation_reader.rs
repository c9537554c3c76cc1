use crate::error::{Result, SummaryError};
use crate::models::ObservationRecord;
use crate::processors::Aggregator;
use crate::readers::record_parser::parse_line;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Line counters for a single input source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub lines_read: u64,
    pub records_folded: u64,
    pub lines_dropped: u64,
}

impl SourceStats {
    fn observe(&mut self, line: &str, aggregator: &mut Aggregator) {
        self.lines_read += 1;
        match parse_line(line) {
            Some(record) => {
                aggregator.fold(&record);
                self.records_folded += 1;
            }
            None => {
                trace!(line = self.lines_read, "Dropping short line");
                self.lines_dropped += 1;
            }
        }
    }
}

pub struct ObservationReader {
    use_mmap: bool,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    pub fn uses_mmap(&self) -> bool {
        self.use_mmap
    }

    /// Fold every record in the file at `path` into `aggregator`
    pub fn read_into(&self, path: &Path, aggregator: &mut Aggregator) -> Result<SourceStats> {
        let mut stats = SourceStats::default();
        self.read_source(path, aggregator, &mut stats)?;
        Ok(stats)
    }

    /// Like `read_into`, but the counters live in `stats` so lines folded
    /// before a read error are still accounted for.
    pub fn read_source(
        &self,
        path: &Path,
        aggregator: &mut Aggregator,
        stats: &mut SourceStats,
    ) -> Result<()> {
        let file = File::open(path).map_err(|source| SummaryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let result = if self.use_mmap {
            Self::fold_mapped(&file, aggregator, stats)
        } else {
            Self::fold_lines(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file), aggregator, stats)
        };

        result.map_err(|source| SummaryError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fold every record from any buffered reader, reusing one line buffer
    pub fn fold_from<R: BufRead>(reader: R, aggregator: &mut Aggregator) -> io::Result<SourceStats> {
        let mut stats = SourceStats::default();
        Self::fold_lines(reader, aggregator, &mut stats)?;
        Ok(stats)
    }

    fn fold_lines<R: BufRead>(
        mut reader: R,
        aggregator: &mut Aggregator,
        stats: &mut SourceStats,
    ) -> io::Result<()> {
        let mut buf = Vec::with_capacity(256);

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            stats.observe(&line, aggregator);
        }

        Ok(())
    }

    /// Fold every record from a memory-mapped file
    fn fold_mapped(file: &File, aggregator: &mut Aggregator, stats: &mut SourceStats) -> io::Result<()> {
        // Zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(());
        }

        let mmap = unsafe { Mmap::map(file)? };
        let content: &[u8] = &mmap;
        let content = content.strip_suffix(b"\n").unwrap_or(content);

        for raw in content.split(|&b| b == b'\n') {
            let line = String::from_utf8_lossy(raw);
            stats.observe(&line, aggregator);
        }

        Ok(())
    }

    /// Stream parsed records from a file without aggregating them
    pub fn stream_observations(&self, path: &Path) -> Result<ObservationIterator> {
        ObservationIterator::new(path)
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator for streaming observation records; short lines are skipped
pub struct ObservationIterator {
    reader: BufReader<File>,
    path: PathBuf,
    buf: Vec<u8>,
}

impl ObservationIterator {
    fn new(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SummaryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            reader: BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file),
            path: path.to_path_buf(),
            buf: Vec::with_capacity(256),
        })
    }
}

impl Iterator for ObservationIterator {
    type Item = Result<ObservationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();

            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    if let Some(record) = parse_line(&String::from_utf8_lossy(&self.buf)) {
                        return Some(Ok(record));
                    }
                }
                Err(source) => {
                    return Some(Err(SummaryError::Read {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
        }
    }
}
