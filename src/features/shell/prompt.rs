//! Shell prompt integration.
//!
//! Prints today's progress as a short segment for shell prompts and status
//! bars, the terminal counterpart of a menu-bar title.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PaperclipsError;
use crate::features::counter::DailyCounter;

/// Format for prompt segment output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptFormat {
    /// Emoji title (e.g., "📎 3/5")
    #[default]
    Emoji,
    /// Plain numbers only (e.g., "3/5")
    Plain,
    /// With text labels (e.g., "done:3 left:2")
    Labeled,
    /// JSON output
    Json,
}

/// Counts for prompt display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCounts {
    pub done: u32,
    pub undone: i64,
    pub goal: u32,
}

impl PromptCounts {
    /// Read counts from the counter.
    #[must_use]
    pub fn from_counter(counter: &DailyCounter) -> Self {
        Self {
            done: counter.done(),
            undone: counter.undone(),
            goal: counter.goal(),
        }
    }
}

/// Generate prompt segment output.
///
/// A `custom_format` template takes precedence over `format` and may use
/// `{done}`, `{undone}` and `{goal}` placeholders.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn prompt_segment(
    counts: &PromptCounts,
    format: PromptFormat,
    custom_format: Option<&str>,
) -> Result<String, PaperclipsError> {
    if let Some(template) = custom_format {
        return Ok(apply_custom_format(template, counts));
    }

    Ok(match format {
        PromptFormat::Emoji => format!("📎 {}/{}", counts.done, counts.goal),
        PromptFormat::Plain => format!("{}/{}", counts.done, counts.goal),
        PromptFormat::Labeled => format!("done:{} left:{}", counts.done, counts.undone.max(0)),
        PromptFormat::Json => serde_json::to_string(counts)?,
    })
}

fn apply_custom_format(template: &str, counts: &PromptCounts) -> String {
    template
        .replace("{done}", &counts.done.to_string())
        .replace("{undone}", &counts.undone.to_string())
        .replace("{goal}", &counts.goal.to_string())
}
