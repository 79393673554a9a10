use crate::config::Config;
use crate::errors::AppResult;
use crate::store::oplog;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 60;

/// Colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "backup" => Colour::Blue,
        "restore" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = oplog::read_all(&cfg.log_path())?;

        if entries.is_empty() {
            println!("📜 The operation log is empty.");
            return Ok(());
        }

        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let op_w = entries.iter().map(|e| e.operation.len()).max().unwrap_or(0);

        println!("📜 Operation log:\n");

        for (i, e) in entries.iter().enumerate() {
            let color = color_for_operation(&e.operation);
            let padded_op = format!("{:<op_w$}", e.operation, op_w = op_w);

            let target = if e.target.chars().count() > MAX_TARGET_WIDTH {
                let mut s: String = e.target.chars().take(MAX_TARGET_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                e.target.clone()
            };

            println!(
                "{:>4}: {:<date_w$} | {} {} => {}",
                i + 1,
                e.date,
                color.paint(padded_op),
                target,
                e.message,
                date_w = date_w
            );
        }

        Ok(())
    }
}
