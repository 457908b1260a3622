//! Terminal output for fact sections and lookup results.

use crate::facts::{Card, Section};
use crate::update::UpdateOutcome;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Normal,
    Quiet,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn label_width(card: &Card) -> usize {
    card.rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
}

/// Plain-text rendering of one section, cards separated by blank lines.
pub fn format_section(section: &Section) -> String {
    let mut output = String::new();
    output.push_str(&format!("== {} ==\n", section.tab));

    for card in &section.cards {
        output.push('\n');
        output.push_str(&card.title);
        output.push('\n');
        let width = label_width(card);
        for row in &card.rows {
            output.push_str(&format!("  {:width$}  {}\n", row.label, row.value, width = width));
        }
    }

    output
}

/// Print sections for a person. Quiet mode prints plain, uncolored text.
pub fn print_human(sections: &[Section], mode: OutputMode) {
    if mode == OutputMode::Quiet {
        let text: Vec<String> = sections.iter().map(format_section).collect();
        print!("{}", text.join("\n"));
        return;
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("== {} ==", section.tab).bold().cyan());

        for card in &section.cards {
            println!();
            println!("{}", card.title.bold());
            let width = label_width(card);
            for row in &card.rows {
                let value = if row.value == crate::format::UNKNOWN {
                    row.value.dimmed()
                } else {
                    row.value.normal()
                };
                println!("  {:width$}  {}", row.label.dimmed(), value, width = width);
            }
        }
    }

    println!();
    println!("{}", "Run `device-inspector tui` for the interactive view.".dimmed());
}

pub fn format_update_outcome(outcome: &UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::UpdateAvailable { version, url } => {
            format!("Update available: {} ({})", version, url)
        }
        UpdateOutcome::UpToDate => "You are using the latest version.".to_string(),
        UpdateOutcome::Error { reason } => format!("Could not check for updates: {}", reason),
    }
}

/// Print the outcome of an update check. Failures go to stderr.
pub fn print_update_outcome(outcome: &UpdateOutcome, mode: OutputMode) {
    let line = format_update_outcome(outcome);
    if mode == OutputMode::Quiet {
        match outcome {
            UpdateOutcome::Error { .. } => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        return;
    }

    match outcome {
        UpdateOutcome::UpdateAvailable { .. } => println!("{}", line.green().bold()),
        UpdateOutcome::UpToDate => println!("{}", line.green()),
        UpdateOutcome::Error { .. } => eprintln!("{}", line.red()),
    }
}
