//! Shell integration commands.
//!
//! Handles prompt segments and shell completions.

use crate::error::PaperclipsError;
use crate::features::counter::DailyCounter;
use crate::features::shell::{
    completion_install_instructions, generate_completions, prompt_segment, shell_from_str,
    PromptCounts, PromptFormat,
};

/// Execute prompt command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn prompt(
    counter: &DailyCounter,
    format: PromptFormat,
    custom: Option<&str>,
) -> Result<String, PaperclipsError> {
    prompt_segment(&PromptCounts::from_counter(counter), format, custom)
}

/// Execute completions command.
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str, install: bool) -> Result<String, PaperclipsError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        PaperclipsError::Config(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}
