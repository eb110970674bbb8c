//! Session-scoped view state.
//!
//! Holds the grouped entries of the last successful parse, the selected agent
//! and a single error slot. Each successful `process` replaces the whole
//! index; a failed one leaves it as it was.

use crate::core::grouping::{DayMap, GroupedEntries, build_index};
use crate::core::parser::{ParseOptions, parse_with};
use crate::core::schedule::{DayRow, ViewOptions, build_agent_view};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct TimecardSession {
    entries: GroupedEntries,
    selected_agent: Option<String>,
    error: Option<String>,
    parse_opts: ParseOptions,
}

impl TimecardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parse_options(parse_opts: ParseOptions) -> Self {
        Self {
            parse_opts,
            ..Self::default()
        }
    }

    /// Parse `raw`, group it and commit the result.
    ///
    /// Returns the number of records kept. On failure the message is stored
    /// in the error slot and returned; the previous index stays in place.
    pub fn process(&mut self, raw: &str) -> AppResult<usize> {
        self.error = None;

        let records = match parse_with(raw, &self.parse_opts) {
            Ok(r) => r,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        let grouped = build_index(&records);

        let still_present = self
            .selected_agent
            .as_ref()
            .is_some_and(|a| grouped.index.contains_key(a));
        if !still_present {
            self.selected_agent = None;
        }

        self.entries = grouped;
        Ok(records.len())
    }

    pub fn entries(&self) -> &GroupedEntries {
        &self.entries
    }

    pub fn agents(&self) -> &[String] {
        &self.entries.agents
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_agent(&self) -> Option<&str> {
        self.selected_agent.as_deref()
    }

    /// Select an agent present in the current index.
    pub fn select_agent(&mut self, agent: &str) -> AppResult<()> {
        if !self.entries.index.contains_key(agent) {
            let err = AppError::InvalidAgent(agent.to_string());
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.selected_agent = Some(agent.to_string());
        Ok(())
    }

    pub fn selected_days(&self) -> Option<&DayMap> {
        self.selected_agent
            .as_deref()
            .and_then(|a| self.entries.days_for(a))
    }

    /// Display rows for the selected agent, empty when nothing is selected.
    pub fn selected_rows(&self, opts: &ViewOptions) -> Vec<DayRow> {
        self.selected_days()
            .map(|days| build_agent_view(days, opts))
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.entries = GroupedEntries::default();
        self.selected_agent = None;
        self.error = None;
    }
}
