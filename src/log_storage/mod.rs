//! Period-scoped call logs and their index
//!
//! Every parsed record is appended to three files under `logs/`:
//! - `html/smdr-YYYY-MM-DD.html`: daily web view
//! - `csv/daily/smdr-YYYY-MM-DD.csv`: daily spreadsheet export
//! - `csv/monthly/smdr-YYYY-MM.csv`: monthly spreadsheet export
//!
//! `html/index.html` links every day on which logs were started. Files are opened,
//! written, flushed and closed per record so other tools can read them at any time.

pub mod index;
pub mod layout;
pub mod period;
pub mod rotation;
pub mod templates;
pub mod writer;

pub use index::IndexWriter;
pub use layout::LogLayout;
pub use period::PeriodKey;
pub use rotation::{LogRotationManager, LogTarget, RotationResult};
pub use writer::append_with_header;
