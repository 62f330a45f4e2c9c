//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

/// Builder for SMDR record lines in the switch's column layout
pub struct RecordLineBuilder {
    call_type: String,
    extension: String,
    trunk: String,
    dialed: String,
    did: Option<String>,
    start: String,
    seconds: u64,
    cost: String,
    account: Option<String>,
    star: bool,
}

impl RecordLineBuilder {
    /// An outgoing long-distance call with no optional fields
    pub fn new() -> Self {
        Self {
            call_type: "TLD".to_string(),
            extension: "101".to_string(),
            trunk: "T01".to_string(),
            dialed: "18005551212".to_string(),
            did: None,
            start: "09:15".to_string(),
            seconds: 125,
            cost: "$00.45".to_string(),
            account: None,
            star: false,
        }
    }

    pub fn call_type(mut self, call_type: &str) -> Self {
        self.call_type = call_type.to_string();
        self
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn dialed(mut self, dialed: &str) -> Self {
        self.dialed = dialed.to_string();
        self
    }

    pub fn did(mut self, did: &str) -> Self {
        self.did = Some(did.to_string());
        self
    }

    pub fn seconds(mut self, seconds: u64) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn account(mut self, account: &str) -> Self {
        self.account = Some(account.to_string());
        self
    }

    pub fn star(mut self) -> Self {
        self.star = true;
        self
    }

    pub fn build(&self) -> String {
        format!(
            "{:<6} {:<5} {:<5} {:<28} {:<10} {:<5} {:<8} {:<6} {:<12} {}",
            self.call_type,
            self.extension,
            self.trunk,
            self.dialed,
            self.did.as_deref().unwrap_or(""),
            self.start,
            format!("S={}", self.seconds),
            self.cost,
            self.account.as_deref().unwrap_or(""),
            if self.star { "*" } else { "" }
        )
        .trim_end()
        .to_string()
    }
}

impl Default for RecordLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary base directory with helpers to read back the generated logs
pub struct LogDir {
    temp_dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn daily_html(&self, day: &str) -> PathBuf {
        self.path().join("logs/html").join(format!("smdr-{}.html", day))
    }

    pub fn daily_csv(&self, day: &str) -> PathBuf {
        self.path().join("logs/csv/daily").join(format!("smdr-{}.csv", day))
    }

    pub fn monthly_csv(&self, month: &str) -> PathBuf {
        self.path().join("logs/csv/monthly").join(format!("smdr-{}.csv", month))
    }

    pub fn index(&self) -> PathBuf {
        self.path().join("logs/html/index.html")
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Number of day rows in the index file
    pub fn index_rows(&self) -> usize {
        self.read(&self.index()).matches("<tr><td><a href=").count()
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
