//! Shell integration features.
//!
//! This module provides:
//! - Shell prompt integration (today's progress)
//! - Shell completions generation

pub mod completions;
pub mod prompt;

pub use completions::{completion_install_instructions, generate_completions, shell_from_str};
pub use prompt::{prompt_segment, PromptCounts, PromptFormat};
