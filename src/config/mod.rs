//! Configuration management for paperclips.
//!
//! This module resolves data paths and loads preferences from `config.yaml`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, StatsConfig};
