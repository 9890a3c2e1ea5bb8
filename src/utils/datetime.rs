//! Date utility functions
//!
//! Parsing and formatting helpers plus the month and weekday labels the date
//! picker draws.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use std::fmt::Write;

/// Default date format used for display and configuration values
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Weekday column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DEFAULT_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Format a date with a strftime pattern.
///
/// Returns `None` when the pattern is malformed or asks for fields a date does
/// not carry (such as `%H`).
pub fn format_with_checked(d: NaiveDate, pattern: &str) -> Option<String> {
    let items: Vec<Item> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", d.format_with_items(items.into_iter())).ok()?;
    Some(out)
}

/// Format a date with a strftime pattern, falling back to YYYY-MM-DD
pub fn format_with(d: NaiveDate, pattern: &str) -> String {
    format_with_checked(d, pattern).unwrap_or_else(|| format_ymd(d))
}

/// English name of a 1-based month; empty for out of range values
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Title shown above a calendar grid, e.g. "2024 February"
pub fn month_title(year: i32, month: u32) -> String {
    format!("{} {}", year, month_name(month))
}
