use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::Terminal;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let mut term = Terminal::stdio(cfg).with_clear_screen(false);
        match BackupLogic::copy_data_file(&mut term, cfg, file, *compress)? {
            Some(path) => success(format!("Backup created: {}", path.display())),
            None => info("Backup cancelled by user."),
        }
    }

    Ok(())
}
