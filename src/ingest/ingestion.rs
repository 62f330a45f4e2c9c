use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use super::clock::Clock;
use super::source::LineSource;
use crate::log_storage::{IndexWriter, LogLayout, LogRotationManager};
use crate::parsers::{ParseOutcome, parse_line};

/// Wait between polls when the source has no complete line
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Running totals for one ingestion session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records: usize,
    pub ignored: usize,
    pub malformed: usize,
    /// Log targets a record could not be written to
    pub write_failures: usize,
    pub index_rows: usize,
}

/// Pulls switch output from a [`LineSource`] and logs every call record
pub struct IngestionLoop<S, C> {
    source: S,
    clock: C,
    rotation: LogRotationManager,
    index: IndexWriter,
    poll_interval: Duration,
    stop_when_idle: bool,
    stats: IngestStats,
}

impl<S: LineSource, C: Clock> IngestionLoop<S, C> {
    pub fn new(source: S, clock: C, layout: LogLayout) -> Self {
        Self {
            source,
            clock,
            rotation: LogRotationManager::new(layout.clone()),
            index: IndexWriter::new(layout),
            poll_interval: DEFAULT_POLL_INTERVAL,
            stop_when_idle: false,
            stats: IngestStats::default(),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Return from [`run`](Self::run) the first time the source has no line,
    /// instead of waiting for more. Used to import finite captures.
    pub fn stop_when_idle(mut self, stop: bool) -> Self {
        self.stop_when_idle = stop;
        self
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Process lines until the transport fails.
    ///
    /// Only returns `Ok` when [`stop_when_idle`](Self::stop_when_idle) is set and
    /// the source has run dry. Malformed lines and log write failures are reported
    /// and never end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.source.next_line()? {
                Some(line) => self.handle_line(&line),
                None if self.stop_when_idle => {
                    info!(
                        "Input exhausted: {} records, {} ignored, {} malformed",
                        self.stats.records, self.stats.ignored, self.stats.malformed
                    );
                    return Ok(());
                }
                None => thread::sleep(self.poll_interval),
            }
        }
    }

    /// Parse one line and, if it is a call record, write it to every log
    pub fn handle_line(&mut self, line: &str) {
        let record = match parse_line(line) {
            ParseOutcome::Parsed(record) => record,
            ParseOutcome::Ignored => {
                self.stats.ignored += 1;
                return;
            }
            ParseOutcome::Malformed => {
                warn!("Couldn't match output line as valid input");
                warn!("Line was {}", line.trim());
                self.stats.malformed += 1;
                return;
            }
        };

        debug!("Processed line: {}", line.trim());
        debug!("Processed record: {:?}", record);
        self.stats.records += 1;

        // One date for every file touched by this record
        let today = self.clock.today();
        let rotation = self.rotation.record(&record, today);
        self.stats.write_failures += rotation.failed.len();

        match self.index.maybe_append(rotation.any_created, today) {
            Ok(true) => self.stats.index_rows += 1,
            Ok(false) => {}
            Err(e) => {
                error!("Failed to update log index: {:#}", e);
                self.stats.write_failures += 1;
            }
        }
    }
}
