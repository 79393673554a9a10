//! Creation of new work-log entries.

use crate::errors::AppResult;
use crate::models::record::parse_minutes;
use crate::models::{Record, RecordId};
use crate::ui::Prompter;
use chrono::{Duration, NaiveDateTime};

const CLOCK_FORMAT: &str = "%I:%M%p";

pub struct EntryLogic;

impl EntryLogic {
    /// Whole minutes elapsed from `marker` to `now`, never negative.
    pub fn minutes_since(marker: NaiveDateTime, now: NaiveDateTime) -> u32 {
        u32::try_from((now - marker).num_minutes().max(0)).unwrap_or(u32::MAX)
    }

    /// `(09:00AM - 09:30AM)` for a 30 minute session ending at 09:30.
    pub fn time_span(minutes: u32, now: NaiveDateTime) -> String {
        let start = now - Duration::minutes(i64::from(minutes));
        format!(
            "({} - {})",
            start.format(CLOCK_FORMAT),
            now.format(CLOCK_FORMAT)
        )
    }

    pub fn clock(t: NaiveDateTime) -> String {
        t.format(CLOCK_FORMAT).to_string()
    }

    /// Validated record built from raw values.
    pub fn build(
        id: RecordId,
        date: &str,
        task_name: &str,
        minutes: u32,
        notes: &str,
    ) -> AppResult<Record> {
        let mut record = Record::new(id, "", "", 0, "");
        record.set_date(date)?;
        record.set_task_name(task_name)?;
        record.set_minutes(minutes)?;
        record.set_notes(notes);
        Ok(record)
    }

    /// Ask for a new entry dated `date`.
    ///
    /// A set `marker` is offered as the start time; once used it is cleared.
    pub fn prompt<P: Prompter>(
        p: &mut P,
        id: RecordId,
        date: &str,
        marker: &mut Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> AppResult<Record> {
        let mut minutes = 0;

        if let Some(m) = *marker {
            loop {
                p.clear()?;
                let question = format!(
                    "There is a marker at {}. Would you like to use this as your start time? Y/N",
                    Self::clock(m)
                );
                match p.choice(&question)? {
                    Some('Y') => {
                        minutes = Self::minutes_since(m, now);
                        *marker = None;
                        break;
                    }
                    Some('N') => break,
                    _ => p.notice("Please type Y or N.")?,
                }
            }
        }

        let task_name = loop {
            p.clear()?;
            let answer = p.ask("Please enter the task name (Required).")?;
            if !answer.trim().is_empty() {
                break answer;
            }
        };

        while minutes == 0 {
            p.clear()?;
            let answer = p.ask("Please enter minutes spent (Required)")?;
            match parse_minutes(&answer) {
                Ok(m) => minutes = m,
                Err(e) => p.notice(&e.to_string())?,
            }
        }

        p.clear()?;
        let extra = Self::ask_notes(p)?;
        let notes = format!("{} {}", Self::time_span(minutes, now), extra)
            .trim_end()
            .to_string();

        Self::build(id, date, &task_name, minutes, &notes)
    }

    fn ask_notes<P: Prompter>(p: &mut P) -> AppResult<String> {
        let mut notes = p.ask("Add notes (Optional):")?;

        while notes.is_empty() {
            match p.choice("Leave blank? y/n")? {
                Some('Y') => break,
                None => continue,
                Some(_) => {
                    p.clear()?;
                    notes = p.ask("Add notes (Optional):")?;
                }
            }
        }

        Ok(notes)
    }
}
