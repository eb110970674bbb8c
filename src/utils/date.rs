use chrono::NaiveDate;

/// Default pattern for the per-day row label (`Fri 01/05`).
pub const DEFAULT_DAY_LABEL_FORMAT: &str = "%a %m/%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
