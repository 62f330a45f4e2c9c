//! Ingestion of live switch output
//!
//! [`IngestionLoop`] polls a [`LineSource`], parses each line, and hands every call
//! record to the log rotation manager and index writer. Processing is strictly
//! sequential: one record is fully written before the next line is read.

pub mod clock;
pub mod ingestion;
pub mod source;

pub use clock::{Clock, SystemClock};
pub use ingestion::{DEFAULT_POLL_INTERVAL, IngestStats, IngestionLoop};
pub use source::{LineSource, ReaderLineSource};
