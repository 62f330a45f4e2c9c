use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use super::config::{DEFAULT_BAUD, DEFAULT_LOGFILE, DEFAULT_PORT, LoggerConfig};
use super::diagnostics;
use crate::ingest::{IngestionLoop, ReaderLineSource, SystemClock};
use crate::log_storage::LogLayout;
use crate::parsers::parse_capture_file;

/// The SMDR transport could not be opened
pub const EXIT_TRANSPORT: u8 = 1;
/// The ingestion loop ended on its own
pub const EXIT_ABNORMAL: u8 = 2;
/// Bad command line
pub const EXIT_USAGE: u8 = 64;

#[derive(Parser)]
#[command(name = "smdr-logger")]
#[command(version = "0.1.0")]
#[command(about = "Log SMDR call records from a telephone switch to daily and monthly files", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the lines of a saved capture without writing logs
    Check {
        /// Capture file to read
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Serial port (or file) to read SMDR output from; `-` reads stdin
    #[arg(short = 'p', long = "port", default_value = DEFAULT_PORT)]
    pub port: String,

    /// Baud rate the serial port is configured for
    #[arg(short = 'b', long = "baud", default_value_t = DEFAULT_BAUD)]
    pub baud: u32,

    /// Path for the diagnostic log; `-` writes to stderr
    #[arg(short = 'l', long = "logfile", default_value = DEFAULT_LOGFILE)]
    pub logfile: PathBuf,

    /// Enable debug-level diagnostics
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Directory under which `logs/` is written
    #[arg(long = "base-dir", default_value = ".")]
    pub base_dir: PathBuf,

    /// Stop at end of input instead of waiting for more lines
    #[arg(long = "once")]
    pub once: bool,
}

impl From<RunArgs> for LoggerConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            port: args.port,
            baud: args.baud,
            diagnostic_log: args.logfile,
            debug: args.debug,
            base_dir: args.base_dir,
            once: args.once,
            ..LoggerConfig::default()
        }
    }
}

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here
            return if e.use_stderr() { ExitCode::from(EXIT_USAGE) } else { ExitCode::SUCCESS };
        }
    };

    match cli.command {
        Some(Commands::Check { file }) => match show_check(&file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        None => run_logger(cli.run.into()),
    }
}

fn run_logger(config: LoggerConfig) -> ExitCode {
    let _guard = match diagnostics::init(&config.diagnostic_log, config.debug) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting SMDR processing");
    info!("Opening {} at {} baud for processing", config.port, config.baud);
    info!("Debug logging is {}", if config.debug { "ON" } else { "OFF" });

    let reader = match open_transport(&config) {
        Ok(reader) => reader,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_TRANSPORT);
        }
    };

    let mut source = ReaderLineSource::new(reader);
    if config.once {
        source = source.finite();
    }

    let mut ingest = IngestionLoop::new(source, SystemClock, LogLayout::new(&config.base_dir))
        .with_poll_interval(config.poll_interval)
        .stop_when_idle(config.once);

    match ingest.run() {
        Ok(()) => {
            let stats = ingest.stats();
            if stats.write_failures > 0 {
                error!("{} log writes failed", stats.write_failures);
            }
            info!("Finished SMDR processing");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Abnormal termination of processing: {:#}", e);
            ExitCode::from(EXIT_ABNORMAL)
        }
    }
}

fn open_transport(config: &LoggerConfig) -> Result<Box<dyn BufRead>> {
    if config.reads_stdin() {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(&config.port)
        .with_context(|| format!("Failed to open serial connection to {}", config.port))?;
    Ok(Box::new(BufReader::new(file)))
}

fn show_check(path: &Path) -> Result<()> {
    let summary = parse_capture_file(path)?;

    println!("SMDR Capture Check");
    println!("==================");
    println!("Total lines: {}", summary.total_lines());
    println!("  Call records: {}", summary.records.len());
    println!("  Ignored: {}", summary.ignored);
    println!("  Malformed: {}", summary.malformed.len());

    for (line_num, line) in &summary.malformed {
        println!("  line {}: {}", line_num, line);
    }

    Ok(())
}
