//! Day bucket used by the grouping index.

use crate::utils::date::parse_date;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const UNKNOWN_DAY: &str = "unknown";

/// Calendar day of a record, or the `unknown` sentinel for timestamps that
/// cannot be read as a date.
///
/// Ordering: real dates ascend chronologically, `Unknown` sorts after every
/// date in both directions of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKey {
    Date(NaiveDate),
    Unknown,
}

impl DayKey {
    pub fn for_timestamp(timestamp: &str) -> Self {
        match parse_timestamp(timestamp) {
            Some(dt) => DayKey::Date(dt.date()),
            None => DayKey::Unknown,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayKey::Date(d) => Some(*d),
            DayKey::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DayKey::Unknown)
    }

    /// Row label, e.g. `Fri 01/05` with the default pattern.
    pub fn label(&self, pattern: &str) -> String {
        match self {
            DayKey::Date(d) => d.format(pattern).to_string(),
            DayKey::Unknown => "Unknown".to_string(),
        }
    }

    /// Newest day first, `Unknown` last.
    pub fn cmp_descending(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DayKey::Date(a), DayKey::Date(b)) => b.cmp(a),
            _ => self.cmp(other),
        }
    }
}

impl Ord for DayKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DayKey::Date(a), DayKey::Date(b)) => a.cmp(b),
            (DayKey::Date(_), DayKey::Unknown) => Ordering::Less,
            (DayKey::Unknown, DayKey::Date(_)) => Ordering::Greater,
            (DayKey::Unknown, DayKey::Unknown) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DayKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKey::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DayKey::Unknown => f.write_str(UNKNOWN_DAY),
        }
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNKNOWN_DAY {
            return Ok(DayKey::Unknown);
        }
        parse_date(s)
            .map(DayKey::Date)
            .ok_or_else(|| format!("Invalid day key: {}", s))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
