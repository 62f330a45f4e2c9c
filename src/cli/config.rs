use std::path::PathBuf;
use std::time::Duration;

use crate::ingest::DEFAULT_POLL_INTERVAL;

pub const DEFAULT_PORT: &str = "/dev/ttyS0";
pub const DEFAULT_BAUD: u32 = 9600;
pub const DEFAULT_LOGFILE: &str = "smdr-log.txt";

/// Transport value meaning "read standard input"
pub const STDIN_PORT: &str = "-";

/// Settings for one logger process, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Serial device (or any readable path) the switch prints to
    pub port: String,
    /// Line speed the device is configured for; reported at startup
    pub baud: u32,
    /// Destination of diagnostic messages, `-` for stderr
    pub diagnostic_log: PathBuf,
    pub debug: bool,
    /// Directory that contains `logs/`
    pub base_dir: PathBuf,
    pub poll_interval: Duration,
    /// Stop at end of input instead of polling for more
    pub once: bool,
}

impl LoggerConfig {
    pub fn reads_stdin(&self) -> bool {
        self.port == STDIN_PORT
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            baud: DEFAULT_BAUD,
            diagnostic_log: PathBuf::from(DEFAULT_LOGFILE),
            debug: false,
            base_dir: PathBuf::from("."),
            poll_interval: DEFAULT_POLL_INTERVAL,
            once: false,
        }
    }
}
