use crate::cli::commands::load_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `agents` command: one agent id per line, first-seen order.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = load_session(cli.input.as_deref(), cfg)?;
    let entries = session.entries();

    if session.agents().is_empty() {
        warning("No agents found in input.");
        return Ok(());
    }

    info(format!(
        "{} records, {} agents",
        entries.record_count(),
        session.agents().len()
    ));

    for agent in session.agents() {
        println!("{}", agent);
    }
    Ok(())
}
