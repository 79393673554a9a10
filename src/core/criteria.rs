//! Interactive gathering of filter criteria.
//!
//! Every function returns `Ok(None)` when the user cancels. Malformed answers
//! are reported with a notice and the same question is asked again.

use crate::core::filter::{Criterion, distinct_dates};
use crate::errors::AppResult;
use crate::models::Record;
use crate::models::record::parse_minutes;
use crate::ui::Prompter;
use crate::utils::date::parse_date;

/// Typed in all caps to leave the phrase search.
pub const PHRASE_CANCEL: &str = "CANCEL";

pub fn ask_date<P: Prompter>(p: &mut P, records: &[Record]) -> AppResult<Option<Criterion>> {
    loop {
        p.clear()?;
        match p.choice("Would you like a [L]ist of dates, or choose a [R]ange? ([C]ancel)")? {
            Some('L') => return ask_listed_date(p, records),
            Some('R') => return ask_date_range(p).map(Some),
            Some('C') => return Ok(None),
            _ => p.notice("Please type L, R or C.")?,
        }
    }
}

fn ask_listed_date<P: Prompter>(p: &mut P, records: &[Record]) -> AppResult<Option<Criterion>> {
    let dates = distinct_dates(records);

    loop {
        p.clear()?;
        p.show("Available Dates:")?;
        for d in &dates {
            p.show(d)?;
        }
        p.show("[C]ancel")?;
        p.show("============")?;

        let answer = p.ask("Which date? (Exactly as it appears above)")?;
        let answer = answer.trim();

        if answer.eq_ignore_ascii_case("c") {
            return Ok(None);
        }
        if dates.contains(&answer) {
            return Ok(Some(Criterion::date(answer)));
        }
        p.notice("Please type one of the dates listed above.")?;
    }
}

pub fn ask_date_range<P: Prompter>(p: &mut P) -> AppResult<Criterion> {
    let start = loop {
        p.clear()?;
        let raw = p.ask("Using MM/DD/YYYY format, please enter the start date:")?;
        match parse_date(&raw) {
            Ok(d) => break d,
            Err(e) => p.notice(&e.to_string())?,
        }
    };

    loop {
        p.clear()?;
        let raw = p.ask("Using MM/DD/YYYY format, please enter the ending date:")?;
        match parse_date(&raw).and_then(|end| Criterion::date_range(start, end)) {
            Ok(c) => return Ok(c),
            Err(e) => p.notice(&e.to_string())?,
        }
    }
}

pub fn ask_pattern<P: Prompter>(p: &mut P) -> AppResult<Option<Criterion>> {
    loop {
        p.clear()?;
        p.show("Please enter the Regex pattern to search for, without quotes.")?;
        p.show(r"Example: \d{3}-\d{4} finds 555-5555. Use \w for letters and \s for spaces.")?;
        p.show("[C]ancel")?;

        let input = p.ask("Pattern:")?;
        if input.trim().eq_ignore_ascii_case("c") {
            return Ok(None);
        }
        if input.is_empty() {
            continue;
        }

        match Criterion::pattern(&input) {
            Ok(c) => return Ok(Some(c)),
            Err(e) => p.notice(&e.to_string())?,
        }
    }
}

pub fn ask_phrase<P: Prompter>(p: &mut P) -> AppResult<Option<Criterion>> {
    loop {
        p.clear()?;
        p.show("Please type an exact phrase to find (Case-insensitive)")?;
        p.show(&format!("To go back, type \"{PHRASE_CANCEL}\" in all-caps"))?;

        let input = p.ask("Phrase:")?;
        if input == PHRASE_CANCEL {
            return Ok(None);
        }
        if input.is_empty() {
            continue;
        }

        match Criterion::phrase(&input) {
            Ok(c) => return Ok(Some(c)),
            Err(e) => p.notice(&e.to_string())?,
        }
    }
}

pub fn ask_minutes<P: Prompter>(p: &mut P) -> AppResult<Criterion> {
    let lower = loop {
        p.clear()?;
        let raw = p.ask("Please enter the lowest (or exact) number of minutes to search.")?;
        match parse_minutes(&raw) {
            Ok(m) => break m,
            Err(e) => p.notice(&e.to_string())?,
        }
    };

    loop {
        p.clear()?;
        let raw = p.ask(&format!(
            "Please enter a number not lower than {lower}, or [Press Enter] for exactly {lower}."
        ))?;

        let upper = if raw.trim().is_empty() {
            Ok(None)
        } else {
            parse_minutes(&raw).map(Some)
        };

        match upper.and_then(|u| Criterion::minutes(lower, u)) {
            Ok(c) => return Ok(c),
            Err(e) => p.notice(&e.to_string())?,
        }
    }
}
