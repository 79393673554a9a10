//! Steppable, editable view over a sequence of records.
//!
//! The browser owns its working sequence. When the user goes back it hands
//! the sequence over together with the ids deleted along the way, and the
//! caller folds both into the full collection (see `core::reconcile`).

use crate::errors::AppResult;
use crate::models::record::parse_minutes;
use crate::models::{Record, RecordId};
use crate::ui::Prompter;

const RULE: &str = "==============================";
const NOTES_LABEL: &str = "Task Notes:  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseState {
    /// Nothing left to show; the session is over.
    Empty,
    Viewing,
    /// Changing fields of the current record.
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    TaskName,
    Minutes,
    Notes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOutcome {
    pub records: Vec<Record>,
    pub deleted: Vec<RecordId>,
}

pub struct Browser {
    records: Vec<Record>,
    cursor: usize,
    deleted: Vec<RecordId>,
    editing: bool,
    wrap_width: usize,
}

impl Browser {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            cursor: 0,
            deleted: Vec::new(),
            editing: false,
            wrap_width: 72,
        }
    }

    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width.max(NOTES_LABEL.len() + 10);
        self
    }

    pub fn state(&self) -> BrowseState {
        if self.records.is_empty() {
            BrowseState::Empty
        } else if self.editing {
            BrowseState::Editing
        } else {
            BrowseState::Viewing
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn current(&self) -> Option<&Record> {
        self.records.get(self.cursor)
    }

    pub fn deleted(&self) -> &[RecordId] {
        &self.deleted
    }

    /// Advance, wrapping to the first record past the last one.
    pub fn next(&mut self) {
        if !self.records.is_empty() {
            self.cursor = (self.cursor + 1) % self.records.len();
        }
    }

    /// Step back, wrapping to the last record before the first one.
    pub fn previous(&mut self) {
        if !self.records.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.records.len() - 1);
        }
    }

    /// Remove the current record and remember its id.
    pub fn delete_current(&mut self) -> Option<RecordId> {
        if self.cursor >= self.records.len() {
            return None;
        }

        let removed = self.records.remove(self.cursor);
        self.deleted.push(removed.id);
        self.cursor = self.cursor.saturating_sub(1);
        self.editing = false;
        Some(removed.id)
    }

    pub fn begin_edit(&mut self) -> bool {
        self.editing = !self.records.is_empty();
        self.editing
    }

    /// Set one field of the current record from a raw answer.
    pub fn edit(&mut self, field: Field, value: &str) -> AppResult<()> {
        let Some(record) = self.records.get_mut(self.cursor) else {
            return Ok(());
        };

        match field {
            Field::TaskName => record.set_task_name(value),
            Field::Minutes => record.set_minutes(parse_minutes(value)?),
            Field::Date => record.set_date(value),
            Field::Notes => {
                record.set_notes(value);
                Ok(())
            }
        }
    }

    pub fn finish_edit(&mut self) {
        self.editing = false;
    }

    pub fn finish(self) -> BrowseOutcome {
        BrowseOutcome {
            records: self.records,
            deleted: self.deleted,
        }
    }

    /// Drive the browser from user input until Back, or until no record is
    /// left.
    pub fn run<P: Prompter>(mut self, p: &mut P) -> AppResult<BrowseOutcome> {
        loop {
            if self.is_empty() {
                if !self.deleted.is_empty() {
                    p.notice("This list is now empty.")?;
                }
                return Ok(self.finish());
            }

            p.clear()?;
            self.render(p)?;

            match p.choice("[P]revious | [N]ext | [E]dit | [D]elete | [B]ack")? {
                Some('B') => return Ok(self.finish()),
                Some('N') => self.next(),
                Some('P') => self.previous(),
                Some('D') => {
                    if p.confirm("Are you sure? (y/n)")? {
                        self.delete_current();
                    }
                }
                Some('E') => self.run_editor(p)?,
                _ => p.notice("Please type P, N, E, D or B.")?,
            }
        }
    }

    fn render<P: Prompter>(&self, p: &mut P) -> AppResult<()> {
        let Some(r) = self.current() else {
            return Ok(());
        };

        p.show(RULE)?;
        p.show(&format!("Task No.:    {}/{}", self.cursor + 1, self.len()))?;
        p.show(&format!("Task Name:   {}", r.task_name))?;
        p.show(&format!("Timestamp:   {}", r.readable_date()))?;
        p.show(&format!("Time (Mins): {}", r.minutes_spent))?;
        p.show(&self.wrapped_notes(&r.notes))?;
        p.show(RULE)
    }

    fn wrapped_notes(&self, notes: &str) -> String {
        if notes.is_empty() {
            return NOTES_LABEL.to_string();
        }

        let indent = " ".repeat(NOTES_LABEL.len());
        let options = textwrap::Options::new(self.wrap_width)
            .initial_indent(NOTES_LABEL)
            .subsequent_indent(&indent);
        textwrap::fill(notes, options)
    }

    fn run_editor<P: Prompter>(&mut self, p: &mut P) -> AppResult<()> {
        if !self.begin_edit() {
            return Ok(());
        }

        while let Some(r) = self.current() {
            p.clear()?;
            p.show("Which field would you like to edit?")?;
            p.show(&format!("[D]ate ({})", r.readable_date()))?;
            p.show(&format!("[T]ask Name ({})", r.task_name))?;
            p.show(&format!("[M]inutes Spent ({})", r.minutes_spent))?;
            p.show(&format!("[N]otes ({})", r.notes))?;

            match p.choice("[F]inished")? {
                Some('D') => self.edit_until_valid(p, Field::Date, "New date (MM/DD/YYYY)")?,
                Some('T') => {
                    self.edit_until_valid(p, Field::TaskName, "New name: (Cannot be blank)")?
                }
                Some('M') => self.edit_until_valid(p, Field::Minutes, "New mins: (Must be > 0)")?,
                Some('N') => self.edit_notes(p)?,
                Some('F') => break,
                _ => p.notice("Please type D, T, M, N or F.")?,
            }
        }

        self.finish_edit();
        Ok(())
    }

    fn edit_until_valid<P: Prompter>(
        &mut self,
        p: &mut P,
        field: Field,
        prompt: &str,
    ) -> AppResult<()> {
        loop {
            let answer = p.ask(prompt)?;
            match self.edit(field, &answer) {
                Ok(()) => return Ok(()),
                Err(e) if e.is_input_error() => p.show(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    fn edit_notes<P: Prompter>(&mut self, p: &mut P) -> AppResult<()> {
        let current = self.current().map(|r| r.notes.clone()).unwrap_or_default();

        loop {
            let notes = p.edit_text(&current)?;
            if !notes.is_empty() || p.confirm("It's blank? y/n")? {
                return self.edit(Field::Notes, &notes);
            }
        }
    }
}
