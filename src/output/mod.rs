//! Output formatting for paperclips.
//!
//! This module provides formatters for displaying counter state in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::PaperclipsError;
use crate::features::counter::{CounterStatus, Paperclip};

pub use json::*;
pub use pretty::*;

/// Format today's status based on output format
///
/// # Errors
///
/// Returns `PaperclipsError::Parse` if JSON serialization fails.
pub fn format_status(status: &CounterStatus, format: OutputFormat) -> Result<String, PaperclipsError> {
    match format {
        OutputFormat::Pretty => Ok(format_status_pretty(status)),
        OutputFormat::Json => to_json(status),
    }
}

/// Format the paperclip board based on output format
///
/// # Errors
///
/// Returns `PaperclipsError::Parse` if JSON serialization fails.
pub fn format_board(
    paperclips: &[Paperclip],
    status: &CounterStatus,
    format: OutputFormat,
) -> Result<String, PaperclipsError> {
    match format {
        OutputFormat::Pretty => Ok(format!(
            "{}\n{}",
            format_status_pretty(status),
            format_board_pretty(paperclips)
        )),
        OutputFormat::Json => format_board_json(paperclips, status),
    }
}

/// Format a counter operation result based on output format.
///
/// In pretty mode a `notice` is shown above the status when present.
///
/// # Errors
///
/// Returns `PaperclipsError::Parse` if JSON serialization fails.
pub fn format_outcome<T: Serialize>(
    outcome: &T,
    notice: Option<&str>,
    status: &CounterStatus,
    format: OutputFormat,
) -> Result<String, PaperclipsError> {
    match format {
        OutputFormat::Pretty => Ok(match notice {
            Some(message) => format!(
                "{}\n{}",
                format_notice_pretty(message),
                format_status_pretty(status)
            ),
            None => format_status_pretty(status),
        }),
        OutputFormat::Json => format_outcome_json(outcome, status),
    }
}
