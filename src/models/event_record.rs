use super::event_type;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One time-clock event, as read from a row of the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Time")]
    pub timestamp: String, // ⇔ Time (ISO-8601, never empty once parsed)
    #[serde(rename = "Agent")]
    pub agent_id: String, // ⇔ Agent (may be "")
    #[serde(rename = "Aux Reason")]
    pub aux_reason: Option<String>, // ⇔ Aux Reason (blank → None)
    #[serde(rename = "Wm Name")]
    pub event_type: String, // ⇔ Wm Name (LOGON | LOGOFF | AUX | ...)
    #[serde(rename = "DurationMin")]
    pub duration_minutes: f64, // ⇔ DurationMin (0 when missing or not numeric)
}

impl EventRecord {
    pub fn new(timestamp: &str, agent_id: &str, event_type: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            agent_id: agent_id.to_string(),
            aux_reason: None,
            event_type: event_type.to_string(),
            duration_minutes: 0.0,
        }
    }

    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_aux_reason(mut self, reason: &str) -> Self {
        self.aux_reason = Some(reason.to_string());
        self
    }

    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    pub fn has_duration(&self) -> bool {
        self.duration_minutes > 0.0
    }

    pub fn is_logon(&self) -> bool {
        event_type::is_logon(&self.event_type)
    }

    pub fn is_logoff(&self) -> bool {
        event_type::is_logoff(&self.event_type)
    }

    pub fn is_aux(&self) -> bool {
        event_type::is_aux(&self.event_type)
    }

    pub fn icon(&self) -> Option<&'static str> {
        event_type::icon_for(&self.event_type)
    }
}
