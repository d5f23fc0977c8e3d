//! `symdex module` command implementation.

use colored::Colorize;
use symdex::SymbolKind;

use super::Session;
use super::display::print_lookup_hint;

const BUCKETS: [SymbolKind; 5] = [
    SymbolKind::Class,
    SymbolKind::Interface,
    SymbolKind::Function,
    SymbolKind::Attribute,
    SymbolKind::TypeAlias,
];

/// Run the module command.
pub fn run(session: &Session, reference: &str, from: &str) -> Result<(), symdex::Error> {
    let analyzer = session.analyzer()?;

    let module = match analyzer.resolve_module(reference, from) {
        Ok(module) => module,
        Err(e) => {
            print_lookup_hint(&e);
            return Err(e.into());
        }
    };

    println!(
        "{} {}",
        module.deppath.white().bold(),
        format!("({} symbols)", module.symbol_count()).dimmed()
    );

    for kind in BUCKETS {
        let bucket = module.bucket(kind);
        if bucket.is_empty() {
            continue;
        }
        println!();
        println!("  {}:", kind.bucket().cyan());
        for symbol in bucket {
            println!(
                "    {} {} {}",
                "•".dimmed(),
                symbol.name,
                format!("- line {}", symbol.line).dimmed()
            );
        }
    }

    Ok(())
}
