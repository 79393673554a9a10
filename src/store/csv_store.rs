//! Loader and saver for the CSV data file.
//!
//! The file holds a header and one row per record with exactly four columns:
//! `entry_date,task_name,mins_spent,notes`. Record ids are not stored; they
//! are handed out again, in file order, on every load.

use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordId};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const HEADER: [&str; 4] = ["entry_date", "task_name", "mins_spent", "notes"];

#[derive(Debug, Deserialize)]
struct RawRow {
    entry_date: String,
    task_name: String,
    mins_spent: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    entry_date: &'a str,
    task_name: &'a str,
    mins_spent: u32,
    notes: &'a str,
}

/// Load every record of `path`. A missing file means "no records yet".
pub fn load(path: &Path) -> AppResult<Vec<Record>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut records = Vec::new();

    for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
        let row = row?;
        let minutes = row
            .mins_spent
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::InvalidRow {
                row: i + 1,
                reason: format!("mins_spent '{}' is not a whole number", row.mins_spent),
            })?;

        records.push(Record::new(
            RecordId(i + 1),
            row.entry_date,
            &row.task_name,
            minutes,
            row.notes,
        ));
    }

    Ok(records)
}

/// Overwrite `path` with `records`, header first.
pub fn save(path: &Path, records: &[Record]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(HEADER)?;

    for r in records {
        wtr.serialize(Row {
            entry_date: &r.date,
            task_name: &r.task_name,
            mins_spent: r.minutes_spent,
            notes: &r.notes,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
