//! Command-line shell around the ingestion core: option parsing, diagnostic
//! logging setup, transport opening and process exit statuses.

pub mod commands;
pub mod config;
pub mod diagnostics;

pub use commands::{Cli, Commands, EXIT_ABNORMAL, EXIT_TRANSPORT, EXIT_USAGE, run};
pub use config::LoggerConfig;
