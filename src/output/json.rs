//! JSON output formatting for paperclips.

use serde::Serialize;
use serde_json::json;

use crate::error::PaperclipsError;
use crate::features::counter::{CounterStatus, Paperclip};

/// Format a counter operation result together with the resulting status.
///
/// # Errors
///
/// Returns `PaperclipsError::Parse` if JSON serialization fails.
pub fn format_outcome_json<T: Serialize>(
    outcome: &T,
    status: &CounterStatus,
) -> Result<String, PaperclipsError> {
    let output = json!({
        "outcome": outcome,
        "status": status,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the paperclip board as JSON
///
/// # Errors
///
/// Returns `PaperclipsError::Parse` if JSON serialization fails.
pub fn format_board_json(
    paperclips: &[Paperclip],
    status: &CounterStatus,
) -> Result<String, PaperclipsError> {
    let output = json!({
        "status": status,
        "count": paperclips.len(),
        "paperclips": paperclips,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PaperclipsError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PaperclipsError> {
    Ok(serde_json::to_string_pretty(value)?)
}
