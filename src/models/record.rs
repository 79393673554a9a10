use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::title_case;
use chrono::NaiveDate;
use std::fmt;

/// Session-local identity of a record.
///
/// Assigned sequentially at load time and never written to disk, so two ids
/// are only comparable within the same loaded collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One logged work session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    /// MM/DD/YYYY as stored; legacy rows may carry MM/DD/YY.
    pub date: String,
    /// Title case.
    pub task_name: String,
    pub minutes_spent: u32,
    pub notes: String,
}

impl Record {
    pub fn new(
        id: RecordId,
        date: impl Into<String>,
        task_name: &str,
        minutes_spent: u32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            task_name: title_case(task_name),
            minutes_spent,
            notes: notes.into(),
        }
    }

    /// Stored date in MM/DD/YYYY form, falling back to the raw string.
    pub fn readable_date(&self) -> String {
        date::readable(&self.date)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        date::calendar_date(&self.date)
    }

    pub fn set_task_name(&mut self, name: &str) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::EmptyTaskName);
        }
        self.task_name = title_case(name);
        Ok(())
    }

    pub fn set_minutes(&mut self, minutes: u32) -> AppResult<()> {
        if minutes == 0 {
            return Err(AppError::InvalidMinutes(minutes.to_string()));
        }
        self.minutes_spent = minutes;
        Ok(())
    }

    /// Accepts any MM/DD/YYYY-shaped string; the calendar is not checked.
    pub fn set_date(&mut self, value: &str) -> AppResult<()> {
        let value = value.trim();
        if !date::is_date_shaped(value) {
            return Err(AppError::InvalidDate(value.to_string()));
        }
        self.date = value.to_string();
        Ok(())
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Copy the mutable fields of `other`, keeping this record's identity.
    pub fn overwrite_from(&mut self, other: &Record) {
        self.date.clone_from(&other.date);
        self.task_name = title_case(&other.task_name);
        self.minutes_spent = other.minutes_spent;
        self.notes.clone_from(&other.notes);
    }

    /// True when `pattern` matches the task name or the notes.
    pub fn matches(&self, pattern: &regex::Regex) -> bool {
        pattern.is_match(&self.task_name) || pattern.is_match(&self.notes)
    }
}

/// Parse a minutes answer: a strictly positive integer.
pub fn parse_minutes(input: &str) -> AppResult<u32> {
    match input.trim().parse::<u32>() {
        Ok(m) if m > 0 => Ok(m),
        _ => Err(AppError::InvalidMinutes(input.trim().to_string())),
    }
}

/// Next free id for a record appended to `records`.
pub fn next_id(records: &[Record]) -> RecordId {
    RecordId(records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1)
}
