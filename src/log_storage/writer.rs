//! Create-with-header-or-append, shared by every log file

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Append `row` to the file at `path`, creating it with `header` first if it does
/// not exist yet.
///
/// Returns `true` when this call created the file. Creation uses `create_new`, so
/// the header is written at most once even if the file appears between calls. The
/// handle is flushed and closed before returning on every path.
pub fn append_with_header<F>(path: &Path, header: F, row: &str) -> Result<bool>
where
    F: FnOnce() -> String,
{
    let (file, created) = open_or_create(path)?;
    let header = if created { Some(header()) } else { None };
    write_or_discard(path, file, header.as_deref(), row)?;
    Ok(created)
}

/// Write the optional header and the row, then flush.
///
/// A file created by this call is removed again if anything fails, so a later
/// call starts it over with its header instead of appending to a headerless file.
fn write_or_discard<W: Write>(path: &Path, file: W, header: Option<&str>, row: &str) -> Result<()> {
    let mut writer = BufWriter::new(file);
    let written = header
        .map_or(Ok(()), |header| writer.write_all(header.as_bytes()))
        .and_then(|()| writer.write_all(row.as_bytes()))
        .and_then(|()| writer.flush());

    if let Err(e) = written {
        drop(writer);
        if header.is_some() {
            let _ = fs::remove_file(path);
        }
        return Err(e).with_context(|| format!("Failed to write to {}", path.display()));
    }

    Ok(())
}

fn open_or_create(path: &Path) -> Result<(File, bool)> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    match OpenOptions::new().append(true).create_new(true).open(path) {
        Ok(file) => Ok((file, true)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let file = OpenOptions::new()
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {} for append", path.display()))?;
            Ok((file, false))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create {}", path.display())),
    }
}
