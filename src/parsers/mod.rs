//! Parsers for SMDR switch output
//!
//! # Error Handling Strategy
//!
//! A telephone switch prints section banners, column headers, blank lines and the
//! occasional garbled line in between real call records. None of these may stop
//! ingestion:
//!
//! - **Ignorable lines**: blank lines, `Station` banners and `TYP` column headers are
//!   classified as [`ParseOutcome::Ignored`] and dropped silently.
//!
//! - **Malformed lines**: anything else that does not satisfy the full record grammar
//!   is [`ParseOutcome::Malformed`]. The caller reports it as a warning and moves on.
//!
//! - **Capture files**: [`parse_capture_file`] applies the same classification to a
//!   saved dump and only fails when the file itself cannot be read.

pub mod capture;
pub mod record;

pub use capture::{CaptureSummary, parse_capture_file};
pub use record::{ParseOutcome, format_duration, parse_line};
