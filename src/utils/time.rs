//! Time utilities: parsing ISO-8601 timestamps and formatting clock times.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::{self, Write};

/// Default pattern for clock times shown next to events and schedules (`8:00 AM`).
pub const DEFAULT_CLOCK_FORMAT: &str = "%-I:%M %p";

/// Parse an ISO-8601 timestamp as stored in a time-clock export.
///
/// Extended (`2024-01-05T08:30:00`) and basic (`20240105T083000`) forms are
/// accepted, with `T`, `t` or a space as separator, reduced precision
/// (`T08`, `T08:30`), fractional seconds and a `Z`, `±HH`, `±HHMM` or
/// `±HH:MM` offset. The wall-clock time is kept exactly as written: the
/// offset is accepted but not converted. A bare date maps to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim().to_ascii_uppercase();
    if s.is_empty() {
        return None;
    }

    let (date_part, time_part) = match s.find(['T', ' ']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s.as_str(), None),
    };

    let date = normalize_date(date_part)?;
    let Some(time_part) = time_part else {
        return NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0));
    };

    let (clock, offset) = split_offset(time_part.trim());
    let clock = normalize_clock(clock)?;

    match offset {
        Some(off) => {
            let off = normalize_offset(off)?;
            DateTime::parse_from_rfc3339(&format!("{}T{}{}", date, clock, off))
                .ok()
                .map(|dt| dt.naive_local())
        }
        None => NaiveDateTime::parse_from_str(
            &format!("{}T{}", date, clock),
            "%Y-%m-%dT%H:%M:%S%.f",
        )
        .ok(),
    }
}

/// `YYYY-MM-DD` or `YYYYMMDD` → `YYYY-MM-DD`.
fn normalize_date(d: &str) -> Option<String> {
    match d.len() {
        10 => Some(d.to_string()),
        8 if d.bytes().all(|b| b.is_ascii_digit()) => {
            Some(format!("{}-{}-{}", &d[0..4], &d[4..6], &d[6..8]))
        }
        _ => None,
    }
}

/// Split a trailing `Z` / `±...` offset off the time-of-day.
fn split_offset(t: &str) -> (&str, Option<&str>) {
    if let Some(clock) = t.strip_suffix('Z') {
        return (clock, Some("Z"));
    }
    match t.find(['+', '-']) {
        Some(i) => (&t[..i], Some(&t[i..])),
        None => (t, None),
    }
}

/// `HH`, `HH:MM`, `HHMM`, `HH:MM:SS`, `HHMMSS`, each with an optional
/// `.fff`/`,fff` fraction → `HH:MM:SS[.fff]`.
fn normalize_clock(t: &str) -> Option<String> {
    let (body, frac) = match t.find(['.', ',']) {
        Some(i) => (&t[..i], Some(&t[i + 1..])),
        None => (t, None),
    };

    let digits: String = body.chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let extended = body.contains(':');
    let hms = match (digits.len(), extended) {
        (2, false) => format!("{}:00:00", digits),
        (4, _) => format!("{}:{}:00", &digits[0..2], &digits[2..4]),
        (6, _) => format!("{}:{}:{}", &digits[0..2], &digits[2..4], &digits[4..6]),
        _ => return None,
    };
    // a basic body must not mix in colons, and an extended one must use them all
    if extended && body.len() != digits.len() + digits.len() / 2 - 1 {
        return None;
    }

    match frac {
        Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
            Some(format!("{}.{}", hms, f))
        }
        Some(_) => None,
        None => Some(hms),
    }
}

/// `Z`, `±HH`, `±HHMM`, `±HH:MM` → `Z` / `±HH:MM`.
fn normalize_offset(off: &str) -> Option<String> {
    if off == "Z" {
        return Some("Z".to_string());
    }
    let (sign, rest) = off.split_at(1);
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.len() {
        2 => Some(format!("{}{}:00", sign, digits)),
        4 => Some(format!("{}{}:{}", sign, &digits[0..2], &digits[2..4])),
        _ => None,
    }
}

/// Render the time-of-day of `dt` with a chrono pattern (12-hour clock by default).
pub fn format_clock(dt: &NaiveDateTime, pattern: &str) -> String {
    dt.format(pattern).to_string()
}

/// Parse and render in one step; `None` when the timestamp is unusable.
pub fn clock_of(raw: &str, pattern: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| format_clock(&dt, pattern))
}

/// Minutes with two decimals, as shown beside an activity (`12.50 min`).
pub fn format_duration(mins: f64) -> String {
    format!("{:.2} min", mins)
}

/// True when `pattern` renders a date-time without failing.
pub fn is_valid_clock_pattern(pattern: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2024, 1, 5).and_then(|d| d.and_hms_opt(8, 0, 0));
    match sample {
        Some(dt) => renders(pattern, |out| write!(out, "{}", dt.format(pattern))),
        None => false,
    }
}

/// True when `pattern` renders a bare calendar date without failing.
pub fn is_valid_date_pattern(pattern: &str) -> bool {
    match NaiveDate::from_ymd_opt(2024, 1, 5) {
        Some(d) => renders(pattern, |out| write!(out, "{}", d.format(pattern))),
        None => false,
    }
}

fn renders(pattern: &str, f: impl FnOnce(&mut String) -> fmt::Result) -> bool {
    let mut out = String::new();
    !pattern.is_empty() && f(&mut out).is_ok()
}
