//! SMDR Logger - Record telephone switch call-detail output to rotating log files
//!
//! A telephone switch prints one SMDR (Station Message Detail Recording) line per
//! completed call on its serial port. This library turns that stream into:
//!
//! - A daily HTML call log with an index page linking every day
//! - A daily CSV export and a monthly CSV export
//!
//! # Example
//!
//! ```no_run
//! use std::io::BufReader;
//! use std::fs::File;
//! use smdr_logger::{IngestionLoop, LogLayout, ReaderLineSource, SystemClock};
//!
//! let port = BufReader::new(File::open("/dev/ttyS0")?);
//! let mut ingest =
//!     IngestionLoop::new(ReaderLineSource::new(port), SystemClock, LogLayout::new("/var/smdr"));
//! ingest.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod ingest;
pub mod log_storage;
pub mod models;
pub mod parsers;

// Re-export commonly used types
pub use ingest::{Clock, IngestionLoop, LineSource, ReaderLineSource, SystemClock};
pub use log_storage::{IndexWriter, LogLayout, LogRotationManager, PeriodKey};
pub use models::{CallDirection, CallRecord};
pub use parsers::{ParseOutcome, parse_line};
