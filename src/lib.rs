//! worklog library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the interactive menu.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Menu) => cli::commands::menu::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Add { .. }) => cli::commands::add::handle(cmd, cfg),
        Some(cmd @ Commands::List { .. }) => cli::commands::list::handle(cmd, cfg),
        Some(cmd @ Commands::Backup { .. }) => cli::commands::backup::handle(cmd, cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
    }
}

/// Effective configuration for a parsed command line.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = if cli.test {
        Config {
            clear_screen: false,
            ..Config::default()
        }
    } else {
        Config::load()?
    };

    if let Some(file) = &cli.data {
        cfg = cfg.with_data_file(file);
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    dispatch(&cli, &cfg)
}
