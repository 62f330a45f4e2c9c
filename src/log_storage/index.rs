use std::fs;
use std::io::ErrorKind;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use super::layout::LogLayout;
use super::period::PeriodKey;
use super::templates;
use super::writer::append_with_header;

/// Maintains `logs/html/index.html`, one row per day that has logs
#[derive(Debug, Clone)]
pub struct IndexWriter {
    layout: LogLayout,
}

impl IndexWriter {
    pub fn new(layout: LogLayout) -> Self {
        Self { layout }
    }

    /// Add today's row to the index after a rotation.
    ///
    /// Does nothing unless `any_created` is set. A day that already has a row is
    /// not indexed again, so recreating a deleted daily file mid-day does not
    /// duplicate its entry. Returns whether a row was written.
    pub fn maybe_append(&self, any_created: bool, today: NaiveDate) -> Result<bool> {
        if !any_created {
            return Ok(false);
        }

        let key = PeriodKey::new(today);
        let path = self.layout.index();

        if self.already_indexed(&key)? {
            debug!("Index already lists {}", key.daily);
            return Ok(false);
        }

        append_with_header(&path, templates::index_header, &templates::index_row(&key))?;
        info!("Added {} to index {}", key.daily, path.display());
        Ok(true)
    }

    fn already_indexed(&self, key: &PeriodKey) -> Result<bool> {
        let path = self.layout.index();
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(contents.contains(&templates::index_row_marker(key))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to read index {}", path.display())),
        }
    }
}
