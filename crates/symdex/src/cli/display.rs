//! Common display utilities for CLI commands.

use colored::Colorize;
use symdex::{LookupError, dotted_path};

const MAX_DISPLAY_ITEMS: usize = 10;

/// Explain a failed lookup and list disambiguation candidates.
pub fn print_lookup_hint(error: &LookupError) {
    match error {
        LookupError::NotFound { suffix } => {
            println!(
                "{}: nothing ends with \"{}\"; check the spelling or the trailing markers (/ . # ~).",
                "hint".dimmed(),
                suffix.cyan()
            );
        }
        LookupError::Ambiguous {
            candidates,
            matches,
            ..
        } => {
            println!("{}: add leading segments to pick one of:", "hint".dimmed());
            for candidate in candidates.iter().take(MAX_DISPLAY_ITEMS) {
                println!(
                    "    {} {} {}",
                    "•".dimmed(),
                    dotted_path(candidate).white().bold(),
                    format!("({})", candidate.concat()).dimmed()
                );
            }
            if *matches > MAX_DISPLAY_ITEMS {
                println!(
                    "    {} ... and {} more",
                    "•".dimmed(),
                    matches - MAX_DISPLAY_ITEMS
                );
            }
        }
    }
}
