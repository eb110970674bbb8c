// src/export/logic.rs

use crate::core::grouping::GroupedEntries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_activity_rows;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export grouped entries.
    ///
    /// - `format`: csv → one row per activity; json → the whole grouped index
    /// - `agent`: restrict to one agent (must exist in the index)
    pub fn export(
        entries: &GroupedEntries,
        format: ExportFormat,
        file: &Path,
        agent: Option<&str>,
        clock_format: &str,
        force: bool,
    ) -> AppResult<()> {
        if let Some(a) = agent
            && !entries.index.contains_key(a)
        {
            return Err(AppError::InvalidAgent(a.to_string()));
        }

        ensure_writable(file, force)?;

        if entries.is_empty() {
            warning("No entries found in input.");
        }

        match format {
            ExportFormat::Csv => {
                let rows = build_activity_rows(entries, agent, clock_format);
                export_csv(&rows, file)
            }
            ExportFormat::Json => match agent {
                Some(a) => export_json(&only_agent(entries, a), file),
                None => export_json(entries, file),
            },
        }
    }
}

fn only_agent(entries: &GroupedEntries, agent: &str) -> GroupedEntries {
    let mut out = GroupedEntries::default();
    if let Some(days) = entries.days_for(agent) {
        out.index.insert(agent.to_string(), days.clone());
    }
    if !agent.is_empty() {
        out.agents.push(agent.to_string());
    }
    out
}
