//! Filter predicates over a record collection.
//!
//! Each [`Criterion`] is validated when it is built, so applying one never
//! fails. Applying returns references into the collection in their original
//! order, each record at most once.

use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub enum Criterion {
    /// Stored date equal to one of the dates present in the data.
    Date(String),
    /// Calendar date within `[start, end]`.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Case-insensitive regex on task name or notes.
    Pattern(Regex),
    /// Case-insensitive literal phrase on task name or notes.
    Phrase(Regex),
    /// Minutes spent within `[lower, upper]`.
    Minutes { lower: u32, upper: u32 },
}

impl Criterion {
    pub fn date(value: &str) -> Self {
        Criterion::Date(value.to_string())
    }

    pub fn date_range(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidDateRange {
                start: format_date(start),
                end: format_date(end),
            });
        }
        Ok(Criterion::DateRange { start, end })
    }

    pub fn pattern(pattern: &str) -> AppResult<Self> {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Criterion::Pattern(re))
    }

    pub fn phrase(phrase: &str) -> AppResult<Self> {
        let re = RegexBuilder::new(&regex::escape(phrase))
            .case_insensitive(true)
            .build()?;
        Ok(Criterion::Phrase(re))
    }

    /// A missing upper bound means an exact match on `lower`.
    pub fn minutes(lower: u32, upper: Option<u32>) -> AppResult<Self> {
        if lower == 0 {
            return Err(AppError::InvalidMinutes(lower.to_string()));
        }
        let upper = upper.unwrap_or(lower);
        if upper < lower {
            return Err(AppError::InvalidMinutes(format!(
                "{upper} is lower than {lower}"
            )));
        }
        Ok(Criterion::Minutes { lower, upper })
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Criterion::Date(d) => record.date == *d,
            Criterion::DateRange { start, end } => record
                .calendar_date()
                .is_some_and(|d| *start <= d && d <= *end),
            Criterion::Pattern(re) | Criterion::Phrase(re) => record.matches(re),
            Criterion::Minutes { lower, upper } => {
                *lower <= record.minutes_spent && record.minutes_spent <= *upper
            }
        }
    }
}

pub fn apply<'a>(records: &'a [Record], criterion: &Criterion) -> Vec<&'a Record> {
    records.iter().filter(|r| criterion.matches(r)).collect()
}

/// Records matching every criterion. No criteria selects everything.
pub fn apply_all<'a>(records: &'a [Record], criteria: &[Criterion]) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| criteria.iter().all(|c| c.matches(r)))
        .collect()
}

/// Distinct stored dates, in order of first appearance.
pub fn distinct_dates(records: &[Record]) -> Vec<&str> {
    let mut dates: Vec<&str> = Vec::new();
    for r in records {
        if !dates.contains(&r.date.as_str()) {
            dates.push(&r.date);
        }
    }
    dates
}
