//! Grouping index builder: agent → day → records in parse order.

use crate::models::{DayKey, EventRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Records of one agent, bucketed by day.
pub type DayMap = BTreeMap<DayKey, Vec<EventRecord>>;

/// Agent id → day → records. The empty agent id is a regular key here.
pub type GroupingIndex = BTreeMap<String, DayMap>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedEntries {
    pub index: GroupingIndex,
    /// Distinct, non-empty agent ids in first-seen order.
    pub agents: Vec<String>,
}

impl GroupedEntries {
    pub fn days_for(&self, agent: &str) -> Option<&DayMap> {
        self.index.get(agent)
    }

    pub fn record_count(&self) -> usize {
        self.index
            .values()
            .flat_map(|days| days.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Build the two-level index from parsed records.
///
/// Records keep their relative input order inside each bucket. A timestamp
/// that cannot be read as a date goes to `DayKey::Unknown`.
pub fn build_index(records: &[EventRecord]) -> GroupedEntries {
    let mut index = GroupingIndex::new();
    let mut agents = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for rec in records {
        if seen.insert(rec.agent_id.as_str()) && !rec.agent_id.is_empty() {
            agents.push(rec.agent_id.clone());
        }

        index
            .entry(rec.agent_id.clone())
            .or_default()
            .entry(DayKey::for_timestamp(&rec.timestamp))
            .or_default()
            .push(rec.clone());
    }

    GroupedEntries { index, agents }
}
