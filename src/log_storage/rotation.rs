use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, error, info};

use super::layout::LogLayout;
use super::period::PeriodKey;
use super::templates;
use super::writer::append_with_header;
use crate::models::CallRecord;

/// The three period-scoped logs every record is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    DailyHtml,
    DailyCsv,
    MonthlyCsv,
}

impl LogTarget {
    pub const ALL: [LogTarget; 3] = [LogTarget::DailyHtml, LogTarget::DailyCsv, LogTarget::MonthlyCsv];

    pub fn path(self, layout: &LogLayout, key: &PeriodKey) -> PathBuf {
        match self {
            LogTarget::DailyHtml => layout.daily_html(key),
            LogTarget::DailyCsv => layout.daily_csv(key),
            LogTarget::MonthlyCsv => layout.monthly_csv(key),
        }
    }

    fn header(self, key: &PeriodKey) -> String {
        match self {
            LogTarget::DailyHtml => templates::daily_html_header(key),
            LogTarget::DailyCsv => templates::daily_csv_header(key),
            LogTarget::MonthlyCsv => templates::monthly_csv_header(key),
        }
    }

    fn row(self, record: &CallRecord, key: &PeriodKey) -> String {
        match self {
            LogTarget::DailyHtml => templates::html_row(record),
            LogTarget::DailyCsv | LogTarget::MonthlyCsv => templates::csv_row(record, key),
        }
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogTarget::DailyHtml => "daily HTML log",
            LogTarget::DailyCsv => "daily CSV log",
            LogTarget::MonthlyCsv => "monthly CSV log",
        };
        f.write_str(name)
    }
}

/// What happened to one record across all targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationResult {
    /// At least one target file was created by this call
    pub any_created: bool,
    /// Targets the record could not be written to
    pub failed: Vec<LogTarget>,
}

/// Writes records into the daily HTML, daily CSV and monthly CSV logs, starting a
/// new file whenever the period changes
#[derive(Debug, Clone)]
pub struct LogRotationManager {
    layout: LogLayout,
}

impl LogRotationManager {
    pub fn new(layout: LogLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LogLayout {
        &self.layout
    }

    /// Write `record` to every target for the period containing `today`.
    ///
    /// Targets are independent: a failure on one is logged and recorded in
    /// [`RotationResult::failed`], and the remaining targets are still written.
    pub fn record(&self, record: &CallRecord, today: NaiveDate) -> RotationResult {
        let key = PeriodKey::new(today);
        let mut result = RotationResult::default();

        for target in LogTarget::ALL {
            let path = target.path(&self.layout, &key);
            let row = target.row(record, &key);

            match append_with_header(&path, || target.header(&key), &row) {
                Ok(true) => {
                    info!("Started new {}: {}", target, path.display());
                    result.any_created = true;
                }
                Ok(false) => debug!("Appended to {}: {}", target, path.display()),
                Err(e) => {
                    error!("Record lost from {}: {:#}", target, e);
                    result.failed.push(target);
                }
            }
        }

        result
    }
}
