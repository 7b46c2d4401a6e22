//! Reservation date parsing and display.
//!
//! The API stores reservation dates as ISO strings; date pickers hand back
//! `YYYY-MM-DD`. Display is day-first to match the rest of the UI.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate};

pub const MISSING_DATE_MESSAGE: &str = "Please select a valid date.";

/// Validate a date-picker value and return it in canonical `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns the user-facing message when the input is empty or not a date.
pub fn validate_date_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MISSING_DATE_MESSAGE);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| MISSING_DATE_MESSAGE)
}

/// Render an API date as `DD/MM/YYYY`, `N/A` when empty, or the raw text when
/// it is in a format we do not recognise.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "N/A".to_owned();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d/%m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => trimmed.to_owned(),
    }
}

/// Like `format_date` but keeps the time of day when the API sent one.
pub fn format_date_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => format_date(raw),
    }
}
