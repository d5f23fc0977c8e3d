//! `symdex modules` command implementation.

use colored::Colorize;

use super::Session;

/// Run the modules command.
pub fn run(session: &Session) -> Result<(), symdex::Error> {
    let analyzer = session.analyzer()?;
    let stats = analyzer.stats();

    if analyzer.modules().is_empty() {
        println!("No modules found");
        if stats.symbol_count > 0 {
            println!(
                "\n{}: {} symbols were loaded, but none is a documentation root with a deppath.",
                "hint".dimmed(),
                stats.symbol_count
            );
        }
        return Ok(());
    }

    println!(
        "Found {} modules over {} symbols:",
        stats.module_count.to_string().green().bold(),
        stats.symbol_count
    );
    println!();

    for module in analyzer.modules() {
        println!(
            "  {} {}",
            module.path.dotted().white().bold(),
            format!(
                "- {} classes, {} interfaces, {} functions, {} attributes, {} type aliases",
                module.classes.len(),
                module.interfaces.len(),
                module.functions.len(),
                module.attributes.len(),
                module.type_aliases.len()
            )
            .dimmed()
        );
    }

    Ok(())
}
