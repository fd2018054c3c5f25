use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use paperclips::cli::args::{Cli, Commands};
use paperclips::cli::commands;
use paperclips::config::{Config, Paths};
use paperclips::core::resolve_today;
use paperclips::features::counter::DailyCounter;
use paperclips::logging::init_logging;
use paperclips::OutputFormat;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => Paths::with_root(dir),
        None => Paths::new()?,
    };
    let (config, config_warning) = Config::load_or_default(&paths.config_file);

    init_logging(&config.logging.level);
    config.general.color.apply();
    if let Some(warning) = config_warning {
        eprintln!("{}: {warning}; using defaults", "warning".yellow().bold());
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let command = cli.command.unwrap_or(Commands::Status);

    // Completions never touch the data files
    if let Commands::Completions { shell, install } = &command {
        println!("{}", commands::completions(shell, *install)?);
        return Ok(());
    }

    let today = resolve_today(cli.date.as_deref())?;
    paths
        .ensure_dirs()
        .with_context(|| format!("preparing data directory {}", paths.root.display()))?;

    let mut counter = DailyCounter::open(&paths);
    for warning in counter.take_load_warnings() {
        eprintln!("{}: {warning}; using defaults", "warning".yellow().bold());
    }

    match counter.check_daily_reset(today) {
        Ok(outcome) => {
            if format == OutputFormat::Pretty && !matches!(command, Commands::Prompt { .. }) {
                if let Some(notice) = commands::rollover_notice(&outcome) {
                    eprintln!("{notice}");
                }
            }
        }
        Err(e) => eprintln!("{}: {e}", "warning".yellow().bold()),
    }

    let output = match command {
        Commands::Status => commands::status(&counter, format)?,
        Commands::Done => commands::done(&mut counter, format)?,
        Commands::Undo => commands::undo(&mut counter, format)?,
        Commands::Goal { goal } => commands::goal(&mut counter, goal, format)?,
        Commands::Board => commands::board(&counter, format)?,
        Commands::Stats => commands::stats(&counter, today, config.stats.streak_mode, format)?,
        Commands::History { days } => commands::history(
            &counter,
            today,
            days.unwrap_or(config.stats.history_days),
            format,
        )?,
        Commands::Prompt { format, custom } => {
            commands::prompt(&counter, format, custom.as_deref())?
        }
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
