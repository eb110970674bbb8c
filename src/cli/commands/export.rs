use crate::cli::commands::load_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        agent,
        force,
    } = &cli.command
    {
        let format: ExportFormat = format.parse()?;
        let session = load_session(cli.input.as_deref(), cfg)?;

        ExportLogic::export(
            session.entries(),
            format,
            &expand_tilde(file),
            agent.as_deref(),
            &cfg.time_format,
            *force,
        )?;
    }
    Ok(())
}
