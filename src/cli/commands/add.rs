use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::models::record::next_id;
use crate::store::{self, oplog};
use crate::ui::messages::success;
use crate::utils::date::{format_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        task,
        minutes,
        notes,
        date,
    } = cmd
    {
        let path = cfg.data_path();
        let mut records = store::load(&path)?;

        let date = date.clone().unwrap_or_else(|| format_date(today()));
        let record = EntryLogic::build(next_id(&records), &date, task, *minutes, notes)?;

        oplog::record(
            &cfg.log_path(),
            "add",
            &record.date,
            &format!("Added '{}' ({} min)", record.task_name, record.minutes_spent),
        );

        let message = format!(
            "Added '{}' on {} ({} min)",
            record.task_name, record.date, record.minutes_spent
        );

        records.push(record);
        store::save(&path, &records)?;
        success(message);
    }

    Ok(())
}
