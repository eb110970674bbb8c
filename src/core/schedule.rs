//! Schedule derivation and the per-day rows built for a selected agent.

use crate::core::grouping::DayMap;
use crate::models::{DayKey, EventRecord};
use crate::utils::date::DEFAULT_DAY_LABEL_FORMAT;
use crate::utils::formatting::pad_right;
use crate::utils::time::{DEFAULT_CLOCK_FORMAT, clock_of, format_duration};
use std::fmt;

/// Terminal columns reserved for the clock time of an activity (`10:15 AM`).
const CLOCK_WIDTH: usize = 8;

/// Shift window of one agent-day: first LOGON met, last LOGOFF met.
///
/// "First" and "last" follow record order, not clock order: with
/// `[LOGOFF 09:00, LOGON 08:00, LOGON 08:30, LOGOFF 17:00]` the result is
/// `8:00 AM - 5:00 PM`. Empty when either side is missing.
pub fn derive_schedule(day_records: &[EventRecord]) -> String {
    derive_schedule_with(day_records, DEFAULT_CLOCK_FORMAT)
}

pub fn derive_schedule_with(day_records: &[EventRecord], clock_format: &str) -> String {
    let first_logon = day_records.iter().find(|r| r.is_logon());
    let last_logoff = day_records.iter().rev().find(|r| r.is_logoff());

    let (Some(on), Some(off)) = (first_logon, last_logoff) else {
        return String::new();
    };

    match (
        clock_of(&on.timestamp, clock_format),
        clock_of(&off.timestamp, clock_format),
    ) {
        (Some(start), Some(end)) => format!("{} - {}", start, end),
        _ => String::new(),
    }
}

/// Days of one agent, newest first, `unknown` last.
pub fn sorted_days(days: &DayMap) -> Vec<(DayKey, &[EventRecord])> {
    let mut out: Vec<(DayKey, &[EventRecord])> = days
        .iter()
        .map(|(k, v)| (*k, v.as_slice()))
        .collect();
    out.sort_by(|a, b| a.0.cmp_descending(&b.0));
    out
}

/// Sort day keys newest first with the `unknown` sentinel at the end.
pub fn sort_day_keys(keys: &mut [DayKey]) {
    keys.sort_by(DayKey::cmp_descending);
}

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub clock_format: String,
    pub day_label_format: String,
    pub show_icons: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            clock_format: DEFAULT_CLOCK_FORMAT.to_string(),
            day_label_format: DEFAULT_DAY_LABEL_FORMAT.to_string(),
            show_icons: true,
        }
    }
}

/// One activity line inside a day row.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub time: String,
    pub icon: Option<&'static str>,
    pub event_type: String,
    pub duration: Option<String>,
}

impl Activity {
    fn from_record(rec: &EventRecord, opts: &ViewOptions) -> Self {
        Self {
            // unparseable timestamps are shown verbatim
            time: clock_of(&rec.timestamp, &opts.clock_format)
                .unwrap_or_else(|| rec.timestamp.clone()),
            icon: if opts.show_icons { rec.icon() } else { None },
            event_type: rec.event_type.clone(),
            duration: rec
                .has_duration()
                .then(|| format_duration(rec.duration_minutes)),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pad_right(&self.time, CLOCK_WIDTH))?;
        if let Some(icon) = self.icon {
            write!(f, " {}", icon)?;
        }
        write!(f, " {}", self.event_type)?;
        if let Some(d) = &self.duration {
            write!(f, " ({})", d)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DayRow {
    pub day: DayKey,
    pub label: String,
    pub schedule: String,
    pub activities: Vec<Activity>,
}

/// Rows for the selected agent, in display order.
pub fn build_agent_view(days: &DayMap, opts: &ViewOptions) -> Vec<DayRow> {
    sorted_days(days)
        .into_iter()
        .map(|(day, records)| DayRow {
            day,
            label: day.label(&opts.day_label_format),
            schedule: derive_schedule_with(records, &opts.clock_format),
            activities: records
                .iter()
                .map(|r| Activity::from_record(r, opts))
                .collect(),
        })
        .collect()
}
