use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{self, oplog};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing worklog…");

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        println!("📄 Config file : {}", path.display());
    }

    let data = cfg.data_path();
    if data.exists() {
        println!("🗂️  Data file   : {} (already present)", data.display());
    } else {
        store::save(&data, &[])?;
        println!("🗂️  Data file   : {}", data.display());
        oplog::record(
            &cfg.log_path(),
            "init",
            &data.to_string_lossy(),
            "Data file initialized",
        );
    }

    println!("🎉 worklog initialization completed!");
    Ok(())
}
