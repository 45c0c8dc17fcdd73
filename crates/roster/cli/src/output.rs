//! Output formatting for the console

use clap::ValueEnum;
use colored::Colorize;
use roster_service::OutboundMessage;

use crate::console::Step;
use crate::error::CliResult;

/// How replies are printed
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Chat-like text
    #[default]
    Text,
    /// One JSON object per reply
    Json,
}

pub fn print_step(step: &Step, format: OutputFormat) -> CliResult<()> {
    match step {
        Step::Replies(replies) => {
            for reply in replies {
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string(reply)?),
                    OutputFormat::Text => println!("{}", render(reply)),
                }
            }
        }
        Step::Dump(json) => println!("{json}"),
        Step::Quit | Step::Nothing => {}
    }
    Ok(())
}

/// A reply as it would look in the chat, prefixed by a bot gutter.
pub fn render(reply: &OutboundMessage) -> String {
    let gutter = "bot ▏".dimmed();
    match reply {
        OutboundMessage::Text(body) => body
            .lines()
            .map(|line| format!("{gutter}{line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutboundMessage::Markdown(body) => body
            .lines()
            .map(|line| format!("{gutter}{}", line.cyan()))
            .collect::<Vec<_>>()
            .join("\n"),
        OutboundMessage::Location(location) => {
            format!("{gutter}{}", format!("📍 {location}").green())
        }
    }
}

pub fn print_problem(reason: &str) {
    eprintln!("{} {reason}", "skipped:".yellow().bold());
}
