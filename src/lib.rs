//! rTimecard library root.
//! Exposes the CLI parser, the high-level run() function and the parsing /
//! grouping / schedule core used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Agents => cli::commands::agents::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Path of the configuration file in use: `--config` or the default one.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config only once
    let cfg = Config::load_from(&config_path(&cli))?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
