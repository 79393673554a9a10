use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{self, Criterion};
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { .. } = cmd {
        let criteria = build_criteria(cmd)?;
        let records = store::load(&cfg.data_path())?;
        let matching = filter::apply_all(&records, &criteria);

        if matching.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Task", 24),
            Column::new("Mins", 6),
            Column::new("Notes", 40),
        ]);

        for r in &matching {
            table.add_row(vec![
                r.readable_date(),
                r.task_name.clone(),
                r.minutes_spent.to_string(),
                r.notes.clone(),
            ]);
        }

        let total: i64 = matching.iter().map(|r| i64::from(r.minutes_spent)).sum();

        print!("{}", table.render());
        println!(
            "\nTotal: {} in {} entries",
            mins2readable(total),
            matching.len()
        );
    }

    Ok(())
}

/// Turn the list flags into filter criteria; all of them must match.
fn build_criteria(cmd: &Commands) -> AppResult<Vec<Criterion>> {
    let mut criteria = Vec::new();

    if let Commands::List {
        date,
        from,
        to,
        grep,
        phrase,
        min,
        max,
    } = cmd
    {
        if let Some(d) = date {
            criteria.push(Criterion::date(d));
        }
        if let (Some(start), Some(end)) = (from, to) {
            criteria.push(Criterion::date_range(parse_date(start)?, parse_date(end)?)?);
        }
        if let Some(re) = grep {
            criteria.push(Criterion::pattern(re)?);
        }
        if let Some(text) = phrase {
            criteria.push(Criterion::phrase(text)?);
        }
        if let Some(lower) = min {
            criteria.push(Criterion::minutes(*lower, *max)?);
        }
    }

    Ok(criteria)
}
