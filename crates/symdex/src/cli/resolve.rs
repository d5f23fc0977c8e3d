//! `symdex resolve` command implementation.

use colored::Colorize;

use super::Session;
use super::display::print_lookup_hint;

/// Run the resolve command.
pub fn run(session: &Session, reference: &str, from: &str) -> Result<(), symdex::Error> {
    let analyzer = session.analyzer()?;

    let symbol = match analyzer.resolve(reference, from) {
        Ok(symbol) => symbol,
        Err(e) => {
            print_lookup_hint(&e);
            return Err(e.into());
        }
    };

    println!(
        "{} {}",
        symbol.path.dotted().white().bold(),
        format!("({})", symbol.kind).dimmed()
    );
    println!("  {}: {}", "path".dimmed(), symbol.path);
    if !symbol.filename.is_empty() {
        println!(
            "  {}: {}:{}",
            "defined in".dimmed(),
            symbol.filename,
            symbol.line
        );
    }
    if !symbol.description.is_empty() {
        println!();
        println!("  {}", symbol.description);
    }

    Ok(())
}
