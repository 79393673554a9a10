//! Date utilities for the MM/DD/YYYY convention used by the data file.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const DATE_FORMAT: &str = "%m/%d/%Y";

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("static date pattern"));

static LEGACY_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{2}$").expect("static date pattern"));

/// Two-digit years above this value belong to the 1900s in legacy rows.
const LEGACY_CENTURY_PIVOT: u32 = 17;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// True when `s` looks like MM/DD/YYYY. The calendar is not checked.
pub fn is_date_shaped(s: &str) -> bool {
    DATE_SHAPE.is_match(s)
}

/// Parse a MM/DD/YYYY string into a calendar date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if !is_date_shaped(s) {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Normalize a stored date for display.
///
/// Four-digit dates are returned as they are. Legacy MM/DD/YY rows get their
/// century from the pivot; anything else is returned raw.
pub fn readable(raw: &str) -> String {
    if is_date_shaped(raw) {
        return raw.to_string();
    }

    if LEGACY_SHAPE.is_match(raw)
        && let Ok(yy) = raw[6..8].parse::<u32>()
    {
        let century = if yy > LEGACY_CENTURY_PIVOT { 19 } else { 20 };
        return format!("{}/{}{:02}", &raw[0..5], century, yy);
    }

    raw.to_string()
}

/// Calendar date of a stored date string, if it can be derived.
pub fn calendar_date(raw: &str) -> Option<NaiveDate> {
    parse_date(&readable(raw)).ok()
}
