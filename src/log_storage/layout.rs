use std::path::{Path, PathBuf};

use super::period::PeriodKey;

const HTML_DIR: &str = "logs/html";
const DAILY_CSV_DIR: &str = "logs/csv/daily";
const MONTHLY_CSV_DIR: &str = "logs/csv/monthly";
const INDEX_FILENAME: &str = "index.html";
const FILE_PREFIX: &str = "smdr-";

/// On-disk locations of every log file, rooted at a base directory
#[derive(Debug, Clone)]
pub struct LogLayout {
    base_dir: PathBuf,
}

impl LogLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `logs/html/smdr-YYYY-MM-DD.html`
    pub fn daily_html(&self, key: &PeriodKey) -> PathBuf {
        self.base_dir.join(HTML_DIR).join(format!("{}{}.html", FILE_PREFIX, key.daily))
    }

    /// `logs/csv/daily/smdr-YYYY-MM-DD.csv`
    pub fn daily_csv(&self, key: &PeriodKey) -> PathBuf {
        self.base_dir.join(DAILY_CSV_DIR).join(format!("{}{}.csv", FILE_PREFIX, key.daily))
    }

    /// `logs/csv/monthly/smdr-YYYY-MM.csv`
    pub fn monthly_csv(&self, key: &PeriodKey) -> PathBuf {
        self.base_dir.join(MONTHLY_CSV_DIR).join(format!("{}{}.csv", FILE_PREFIX, key.monthly))
    }

    /// `logs/html/index.html`
    pub fn index(&self) -> PathBuf {
        self.base_dir.join(HTML_DIR).join(INDEX_FILENAME)
    }
}
