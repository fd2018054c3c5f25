//! Date parsing for the `--date` override.
//!
//! The counter and statistics never read the clock themselves; the CLI
//! resolves "today" here and passes it in.

use chrono::{Datelike, Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PaperclipsError;

// Compiled regex patterns
static DAYS_AGO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+days?\s+ago$").unwrap_or_else(|e| panic!("Invalid days-ago regex: {e}"))
});

static ISO_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap_or_else(|e| panic!("Invalid ISO date regex: {e}"))
});

static IN_DAYS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^in\s+(\d+)\s+days?$").unwrap_or_else(|e| panic!("Invalid in-days regex: {e}"))
});

/// Today's date on the local clock.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date expression relative to `today`.
///
/// Supports:
/// - `today`, `tomorrow`, `yesterday`
/// - `3 days ago`, `in 2 days`
/// - `2024-12-15` (ISO format)
///
/// Returns `None` if the input cannot be parsed or lands outside the years
/// 0001 to 9999.
#[must_use]
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    parse_expression(&input.trim().to_lowercase(), today).filter(|d| (1..=9999).contains(&d.year()))
}

fn parse_expression(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" => return Some(today),
        "tomorrow" => return today.succ_opt(),
        "yesterday" => return today.pred_opt(),
        _ => {}
    }

    if let Some(caps) = DAYS_AGO_PATTERN.captures(input) {
        let days: i64 = caps[1].parse().ok()?;
        return today.checked_sub_signed(Duration::try_days(days)?);
    }

    if let Some(caps) = IN_DAYS_PATTERN.captures(input) {
        let days: i64 = caps[1].parse().ok()?;
        return today.checked_add_signed(Duration::try_days(days)?);
    }

    if !ISO_DATE_PATTERN.is_match(input) {
        return None;
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Resolve the effective "today", honoring an optional override.
///
/// # Errors
///
/// Returns an error if the override cannot be parsed.
pub fn resolve_today(date_override: Option<&str>) -> Result<NaiveDate, PaperclipsError> {
    let today = local_today();

    match date_override {
        None => Ok(today),
        Some(expr) => {
            parse_date(expr, today).ok_or_else(|| PaperclipsError::InvalidDate(expr.to_string()))
        }
    }
}
