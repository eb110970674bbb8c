use crate::cli::parser::Cli;
use crate::config::Config;
use crate::config_path;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = config_path(cli);

    if Config::init_at(&path)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }
    Ok(())
}
