use chrono::{DateTime, Months, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, Result};

/// Parses a calendar date from the formats the dashboard form and API clients send.
///
/// Accepted, in order: `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 and `YYYY-MM-DDTHH:MM[:SS]`
/// (time discarded), `DD/MM/YYYY`, and the month-only forms `MM/YYYY` and `YYYY-MM`
/// which resolve to the first day of the month.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("01/{}", s), "%d/%m/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
        .map_err(|_| EngineError::DateParse(raw.to_string()))
}

/// Advances by one calendar month, clamping the day to the target month's length
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(1))
}

/// Formats a date as a two-digit month and four-digit year, e.g. `03/2023`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%m/%Y").to_string()
}
