//! Append-only operation log kept next to the data file.

use crate::errors::AppResult;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an operation line into the log file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Like [`ttlog`], but a failure only produces a warning.
pub fn record(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write operation log: {}", e));
    }
}

pub fn read_all(path: &Path) -> AppResult<Vec<LogLine>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("").to_string();
        out.push(LogLine {
            date: field(0),
            operation: field(1),
            target: field(2),
            message: field(3),
        });
    }

    Ok(out)
}
