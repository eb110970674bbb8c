// src/export/model.rs

use crate::core::grouping::GroupedEntries;
use crate::core::schedule::{derive_schedule_with, sorted_days};
use serde::{Deserialize, Serialize};

/// Flat row for the CSV export: one activity with its agent-day context.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivityExport {
    pub agent: String,
    pub day: String,
    pub schedule: String,
    pub time: String,
    pub event: String,
    pub aux_reason: Option<String>,
    pub duration_min: f64,
}

/// Agents in first-seen order, then the bucket of rows without an agent.
fn agent_order<'a>(entries: &'a GroupedEntries, only: Option<&'a str>) -> Vec<&'a str> {
    if let Some(a) = only {
        return vec![a];
    }
    let mut out: Vec<&str> = entries.agents.iter().map(String::as_str).collect();
    if entries.index.contains_key("") {
        out.push("");
    }
    out
}

/// Rows for every agent (or just `only`), days newest first, records in input order.
pub fn build_activity_rows(
    entries: &GroupedEntries,
    only: Option<&str>,
    clock_format: &str,
) -> Vec<ActivityExport> {
    let mut rows = Vec::new();

    for agent in agent_order(entries, only) {
        let Some(days) = entries.days_for(agent) else {
            continue;
        };
        for (day, records) in sorted_days(days) {
            let schedule = derive_schedule_with(records, clock_format);
            for rec in records {
                rows.push(ActivityExport {
                    agent: agent.to_string(),
                    day: day.to_string(),
                    schedule: schedule.clone(),
                    time: rec.timestamp.clone(),
                    event: rec.event_type.clone(),
                    aux_reason: rec.aux_reason.clone(),
                    duration_min: rec.duration_minutes,
                });
            }
        }
    }

    rows
}
