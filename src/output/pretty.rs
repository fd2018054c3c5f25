use colored::Colorize;

use crate::features::counter::{CounterStatus, Paperclip, PaperclipState};

/// Format today's progress
pub fn format_status_pretty(status: &CounterStatus) -> String {
    let mut output = status.title.bold().to_string();
    if let Some(date) = status.date {
        output.push_str(&format!("  {}", date.format("%a %b %d").to_string().dimmed()));
    }
    output.push('\n');
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  Tasks Completed: {}\n",
        status.done.to_string().green()
    ));

    let remaining = if status.undone < 0 {
        format!("0 ({} over goal)", -status.undone).cyan().to_string()
    } else if status.undone == 0 {
        "0".green().to_string()
    } else {
        status.undone.to_string().red().to_string()
    };
    output.push_str(&format!("  Tasks Remaining: {remaining}\n"));
    output.push_str(&format!("  Daily Goal:      {}", status.goal));

    if status.goal_reached {
        output.push('\n');
        output.push_str(&"  🎉 Daily goal reached!".green().bold().to_string());
    }

    output
}

/// Format today's paperclips, done ones first
pub fn format_board_pretty(paperclips: &[Paperclip]) -> String {
    let row = |state: PaperclipState| -> String {
        let clips: Vec<String> = paperclips
            .iter()
            .filter(|clip| clip.state == state)
            .map(|clip| "●".color(clip.state.color()).to_string())
            .collect();
        if clips.is_empty() {
            "-".dimmed().to_string()
        } else {
            clips.join(" ")
        }
    };

    format!(
        "  Undone: {}\n  Done:   {}",
        row(PaperclipState::Undone),
        row(PaperclipState::Done)
    )
}

/// Format an informational notice
pub fn format_notice_pretty(message: &str) -> String {
    message.dimmed().to_string()
}
