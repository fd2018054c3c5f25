use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::shell::PromptFormat;

/// Longest window `history --days` accepts, about ten years.
pub const MAX_HISTORY_DAYS: i64 = 3660;

#[derive(Parser)]
#[command(name = "paperclips")]
#[command(about = "Track a daily goal of paperclip tasks, with streaks and weekly stats")]
#[command(long_about = "paperclips - a daily task counter

Each day you have a goal of N paperclips. Completing a task moves one
paperclip from undone to done. At the start of a new day the previous day
is recorded and the counter starts over.

QUICK START:
  paperclips                Show today's progress
  paperclips done           Complete a task
  paperclips undo           Undo the last completion
  paperclips goal 8         Set the daily goal
  paperclips stats          Weekly rate and streaks

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  paperclips <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from config.yaml (pretty).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Treat this date as today
    ///
    /// Accepts today, yesterday, tomorrow, "3 days ago", "in 2 days",
    /// or YYYY-MM-DD. Useful for backfilling and scripting.
    #[arg(long, global = true, env = "PAPERCLIPS_DATE")]
    pub date: Option<String>,

    /// Directory holding config.yaml, settings.json and history.json
    #[arg(long, global = true, env = "PAPERCLIPS_HOME")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's progress
    ///
    /// Displays completed and remaining paperclips against the daily goal.
    /// This is the default when no command is given.
    #[command(alias = "s")]
    Status,

    /// Complete a task
    ///
    /// Moves one paperclip from undone to done. When nothing is left for
    /// today the counter is unchanged and a notice is shown.
    #[command(aliases = ["complete", "d"])]
    Done,

    /// Undo a completed task
    ///
    /// Moves one paperclip back from done to undone.
    #[command(alias = "u")]
    Undo,

    /// Show or set the daily goal
    ///
    /// # Examples
    ///
    ///   paperclips goal           Show the current goal
    ///   paperclips goal 8         Set the goal to 8 paperclips
    ///
    /// Changing the goal does not change how many tasks are done today.
    Goal {
        /// New daily goal (1 to 1000)
        #[arg(allow_negative_numbers = true)]
        goal: Option<i64>,
    },

    /// Show today's paperclips as a board
    ///
    /// Green paperclips are done, red ones are still to do.
    Board,

    /// Show statistics
    ///
    /// Weekly success rate, current streak and best streak.
    Stats,

    /// List recorded days
    ///
    /// Shows finalized days within the window, newest first.
    History {
        /// Number of days to show, 1 to 3660 (default from config, 14)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_HISTORY_DAYS))]
        days: Option<u32>,
    },

    /// Print a short progress segment for shell prompts
    ///
    /// # Examples
    ///
    ///   paperclips prompt                       📎 3/5
    ///   paperclips prompt -f labeled            done:3 left:2
    ///   paperclips prompt --custom "{done}/{goal}"
    Prompt {
        /// Segment format
        #[arg(short, long, value_enum, default_value = "emoji")]
        format: PromptFormat,

        /// Custom template with {done}, {undone} and {goal} placeholders
        #[arg(long)]
        custom: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Example: paperclips completions zsh > ~/.zsh/completions/_paperclips
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}
