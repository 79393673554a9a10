//! Main menu session.
//!
//! Each action loads the collection from the data file and, when it changed
//! anything, saves the whole collection back once it is done.

use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::browser::Browser;
use crate::core::entry::EntryLogic;
use crate::core::reconcile::{changes, reconcile};
use crate::core::search::SearchLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::models::record::next_id;
use crate::store::{self, oplog};
use crate::ui::Prompter;
use crate::ui::messages::banner;
use crate::utils::date::format_date;
use chrono::{Local, NaiveDateTime};

pub struct Session<'a, P: Prompter> {
    cfg: &'a Config,
    prompter: P,
    /// Start time noted with the Marker action, offered to the next new entry.
    marker: Option<NaiveDateTime>,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(cfg: &'a Config, prompter: P) -> Self {
        Self {
            cfg,
            prompter,
            marker: None,
        }
    }

    pub fn marker(&self) -> Option<NaiveDateTime> {
        self.marker
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run until Quit or until the input is exhausted.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) | Err(AppError::InputClosed) => return Ok(()),
                Err(e) => self.prompter.notice(&format!("❌ {e}"))?,
            }
        }
    }

    fn step(&mut self) -> AppResult<bool> {
        let marker_line = match self.marker {
            Some(m) => format!(
                "[M]arker (Logs the current time)\n   -Currently set to: {}",
                EntryLogic::clock(m)
            ),
            None => "[M]arker (Logs the current time)".to_string(),
        };

        self.prompter.clear()?;
        self.prompter.show(&banner("  Project Tracklog Main Menu  "))?;
        self.prompter.show("[N]ew entry")?;
        self.prompter.show(&marker_line)?;
        self.prompter.show("[B]rowse entries")?;
        self.prompter.show("[S]earch entries")?;
        self.prompter.show("[C]reate backup")?;
        self.prompter.show("[L]oad backup")?;

        match self.prompter.choice("[Q]uit the program")? {
            Some('N') => self.new_entry()?,
            Some('M') => self.set_marker()?,
            Some('B') => self.browse_all()?,
            Some('S') => self.search()?,
            Some('C') => self.create_backup()?,
            Some('L') => self.load_backup()?,
            Some('Q') => {
                self.prompter.show("Exiting program.")?;
                return Ok(false);
            }
            _ => self
                .prompter
                .notice("Please type N, M, B, S, C, L or Q.")?,
        }

        Ok(true)
    }

    fn new_entry(&mut self) -> AppResult<()> {
        let path = self.cfg.data_path();
        let mut records = store::load(&path)?;

        let now = Local::now().naive_local();
        let record = EntryLogic::prompt(
            &mut self.prompter,
            next_id(&records),
            &format_date(now.date()),
            &mut self.marker,
            now,
        )?;

        oplog::record(
            &self.cfg.log_path(),
            "add",
            &record.date,
            &format!("Added '{}' ({} min)", record.task_name, record.minutes_spent),
        );
        records.push(record);
        store::save(&path, &records)?;

        self.prompter.notice("✅ Entry saved.")
    }

    fn set_marker(&mut self) -> AppResult<()> {
        if let Some(m) = self.marker {
            let question = format!(
                "There is already a marker at {}. Would you like to replace it? Y/N",
                EntryLogic::clock(m)
            );
            if self.prompter.choice(&question)? == Some('N') {
                return Ok(());
            }
        }

        let now = Local::now().naive_local();
        self.marker = Some(now);
        self.prompter.notice(&format!(
            "Time saved as {} for later use when creating an entry.",
            EntryLogic::clock(now)
        ))
    }

    fn browse_all(&mut self) -> AppResult<()> {
        let records = store::load(&self.cfg.data_path())?;
        if records.is_empty() {
            return self.prompter.notice("There are no entries to display.");
        }

        let outcome = Browser::new(records.clone())
            .with_wrap_width(self.cfg.wrap_width)
            .run(&mut self.prompter)?;
        let updated = reconcile(records.clone(), &outcome.records, &outcome.deleted);

        self.commit(&records, &updated)
    }

    fn search(&mut self) -> AppResult<()> {
        let records = store::load(&self.cfg.data_path())?;
        if records.is_empty() {
            return self.prompter.notice("There are no entries to display.");
        }

        let updated = SearchLogic::run(&mut self.prompter, records.clone(), self.cfg.wrap_width)?;

        self.commit(&records, &updated)
    }

    fn create_backup(&mut self) -> AppResult<()> {
        let records = store::load(&self.cfg.data_path())?;
        if records.is_empty() {
            return self.prompter.notice("Cannot save a blank tasklog.");
        }

        BackupLogic::write_backup(self.cfg, &records)?;
        self.prompter.notice("✅ Backup created!")
    }

    fn load_backup(&mut self) -> AppResult<()> {
        match BackupLogic::restore(self.cfg)? {
            None => self.prompter.notice("There is no backup file yet."),
            Some(0) => self.prompter.notice("The backup file is empty; nothing was loaded."),
            Some(n) => self
                .prompter
                .notice(&format!("✅ Backup loaded ({n} entries).")),
        }
    }

    /// Save `after` when it differs from `before`, logging every change.
    fn commit(&mut self, before: &[Record], after: &[Record]) -> AppResult<()> {
        let diff = changes(before, after);
        if diff.is_empty() {
            return Ok(());
        }

        store::save(&self.cfg.data_path(), after)?;

        let log = self.cfg.log_path();
        for r in &diff.deleted {
            oplog::record(
                &log,
                "del",
                &r.date,
                &format!("Deleted '{}' ({} min)", r.task_name, r.minutes_spent),
            );
        }
        for r in &diff.edited {
            oplog::record(
                &log,
                "edit",
                &r.date,
                &format!("Edited '{}' ({} min)", r.task_name, r.minutes_spent),
            );
        }

        Ok(())
    }
}
