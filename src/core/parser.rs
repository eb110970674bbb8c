//! Record parser: delimited time-clock text with a header row → `EventRecord`s.
//!
//! Every field is read as a string first; `DurationMin` is then coerced to a
//! number and a blank `Aux Reason` becomes `None`. Rows without a usable
//! `Time` value are dropped silently, only structural problems are errors.

use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use csv::{ReaderBuilder, StringRecord, Trim};

pub const COL_TIME: &str = "Time";
pub const COL_AGENT: &str = "Agent";
pub const COL_AUX_REASON: &str = "Aux Reason";
pub const COL_EVENT: &str = "Wm Name";
pub const COL_DURATION: &str = "DurationMin";

const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b';', b'|'];

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Field separator; detected from the header line when `None`.
    pub delimiter: Option<u8>,
}

pub fn parse(raw: &str) -> AppResult<Vec<EventRecord>> {
    parse_with(raw, &ParseOptions::default())
}

pub fn parse_with(raw: &str, opts: &ParseOptions) -> AppResult<Vec<EventRecord>> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let delimiter = opts.delimiter.unwrap_or_else(|| detect_delimiter(text));

    check_quotes(text, delimiter)?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let columns = Columns::from_headers(rdr.headers()?);

    let mut records = Vec::new();
    for row in rdr.records() {
        if let Some(record) = columns.to_record(&row?) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Pick the candidate separator occurring most often on the first non-empty
/// line. Falls back to `,`.
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text
        .split(['\n', '\r'])
        .find(|l| !l.trim().is_empty())
        .unwrap_or("");

    let mut best = (b',', 0usize);
    for cand in DELIMITER_CANDIDATES {
        let count = header.bytes().filter(|b| *b == cand).count();
        if count > best.1 {
            best = (cand, count);
        }
    }
    best.0
}

/// Reject input whose quoted field is never closed.
///
/// A quote only opens a field when it is the first character of that field;
/// inside a quoted field `""` is an escaped quote. `\n`, `\r` and `\r\n` all
/// end a line, as they do for the csv reader.
fn check_quotes(text: &str, delimiter: u8) -> AppResult<()> {
    let delim = delimiter as char;
    let mut line = 1usize;
    let mut open_line = 0usize;
    let mut in_quotes = false;
    let mut field_start = true;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }

        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' | '\r' => line += 1,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if field_start => {
                in_quotes = true;
                open_line = line;
                field_start = false;
            }
            '\n' | '\r' => {
                line += 1;
                field_start = true;
            }
            c if c == delim => field_start = true,
            _ => field_start = false,
        }
    }

    if in_quotes {
        return Err(AppError::Parse(format!(
            "unterminated quoted field starting on line {}",
            open_line
        )));
    }
    Ok(())
}

/// Position of each known column in the header row.
struct Columns {
    time: Option<usize>,
    agent: Option<usize>,
    aux_reason: Option<usize>,
    event: Option<usize>,
    duration: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            time: find(COL_TIME),
            agent: find(COL_AGENT),
            aux_reason: find(COL_AUX_REASON),
            event: find(COL_EVENT),
            duration: find(COL_DURATION),
        }
    }

    fn to_record(&self, row: &StringRecord) -> Option<EventRecord> {
        let timestamp = field(row, self.time).filter(|t| !t.trim().is_empty())?;

        Some(EventRecord {
            timestamp: timestamp.to_string(),
            agent_id: field(row, self.agent).unwrap_or("").to_string(),
            aux_reason: field(row, self.aux_reason)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
            event_type: field(row, self.event).unwrap_or("").to_string(),
            duration_minutes: field(row, self.duration)
                .map(coerce_minutes)
                .unwrap_or(0.0),
        })
    }
}

fn field(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i))
}

/// Numeric coercion for `DurationMin`; anything not a finite, non-negative
/// number reads as 0.
pub fn coerce_minutes(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}
