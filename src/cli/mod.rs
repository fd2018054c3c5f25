//! Command-line interface for paperclips.

pub mod args;
pub mod commands;
