//! paperclips - a daily task counter
//!
//! Tracks a daily goal of paperclip tasks, rolls the count over at each new
//! calendar day, and derives streak and weekly success statistics from the
//! recorded history.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{CounterError, PaperclipsError, PersistenceError};
pub use features::counter::DailyCounter;
pub use features::stats::{Statistics, StreakMode};
