pub mod agents;
pub mod config;
pub mod export;
pub mod init;
pub mod show;

use crate::config::Config;
use crate::core::session::TimecardSession;
use crate::errors::AppResult;
use crate::utils::path::read_input;

/// Read the input named on the command line and load it into a fresh session.
pub(crate) fn load_session(input: Option<&str>, cfg: &Config) -> AppResult<TimecardSession> {
    let raw = read_input(input)?;
    let mut session = TimecardSession::with_parse_options(cfg.parse_options()?);
    session.process(&raw)?;
    Ok(session)
}
