//! Grouping of symbols into per-file modules.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::types::{Module, Symbol};

/// Partition documentation-root symbols by logical file path.
///
/// Modules come back in the order their first symbol appears. Each bucket is
/// sorted by symbol name; the sort is stable, so equal names keep corpus
/// order. Symbols that are not documentation roots are left out, as are
/// documentation roots with no `deppath` (logged, not fatal).
#[must_use]
pub fn create_modules(symbols: &[Arc<Symbol>]) -> Vec<Module> {
    let mut modules: Vec<Module> = Vec::new();
    let mut by_deppath: HashMap<&str, usize> = HashMap::new();

    for symbol in symbols {
        if !symbol.documentation_root {
            continue;
        }
        let Some(deppath) = symbol.deppath.as_deref() else {
            warn!(
                symbol = %symbol.path,
                "Documentation root has no deppath; leaving it out of modules"
            );
            continue;
        };

        let slot = *by_deppath.entry(deppath).or_insert_with(|| {
            modules.push(Module::new(deppath));
            modules.len() - 1
        });
        modules[slot].bucket_mut(symbol.kind).push(Arc::clone(symbol));
    }

    for module in &mut modules {
        for bucket in [
            &mut module.classes,
            &mut module.interfaces,
            &mut module.functions,
            &mut module.attributes,
            &mut module.type_aliases,
        ] {
            bucket.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    debug!(
        symbols = symbols.len(),
        modules = modules.len(),
        "Grouped symbols into modules"
    );
    modules
}
