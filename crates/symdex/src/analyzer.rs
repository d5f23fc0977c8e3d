//! Session owner: one object index and one module index per corpus.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{LookupError, Result};
use crate::modules::create_modules;
use crate::path::{anchor_reference, split_reference};
use crate::source::CorpusSource;
use crate::suffix_tree::SuffixIndex;
use crate::types::{AnalyzerStats, Module, Symbol};

/// Resolves path suffixes to analyzer symbols and synthesized modules.
///
/// Both indexes are built once in [`Analyzer::new`] and never mutated after,
/// so an `Analyzer` can be shared across threads for lookups.
#[derive(Debug)]
pub struct Analyzer {
    base_dir: PathBuf,
    extra_data: serde_json::Map<String, serde_json::Value>,
    symbols: Vec<Arc<Symbol>>,
    modules: Vec<Arc<Module>>,
    objects_by_path: SuffixIndex<Arc<Symbol>>,
    modules_by_path: SuffixIndex<Arc<Module>>,
}

impl Analyzer {
    /// Index `symbols` and the modules grouped from them.
    #[must_use]
    pub fn new(
        symbols: Vec<Symbol>,
        extra_data: serde_json::Map<String, serde_json::Value>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        let symbols: Vec<Arc<Symbol>> = symbols.into_iter().map(Arc::new).collect();

        let objects_by_path = symbols
            .iter()
            .map(|symbol| (symbol.path.segments().to_vec(), Arc::clone(symbol)))
            .collect();

        let modules: Vec<Arc<Module>> = create_modules(&symbols)
            .into_iter()
            .map(Arc::new)
            .collect();
        let modules_by_path = modules
            .iter()
            .map(|module| (module.path.segments().to_vec(), Arc::clone(module)))
            .collect();

        debug!(
            symbols = symbols.len(),
            modules = modules.len(),
            "Built symbol and module indexes"
        );

        Self {
            base_dir: base_dir.into(),
            extra_data,
            symbols,
            modules,
            objects_by_path,
            modules_by_path,
        }
    }

    /// Load a corpus from `source` and index it.
    ///
    /// # Errors
    ///
    /// Returns whatever error the source reports.
    pub fn from_source(source: &impl CorpusSource, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let corpus = source.load()?;
        Ok(Self::new(corpus.symbols, corpus.extra, base_dir))
    }

    /// The symbol whose path ends with `suffix`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no symbol path ends with `suffix`, `Ambiguous` if
    /// several do.
    pub fn get_object<S: AsRef<str>>(
        &self,
        suffix: &[S],
    ) -> std::result::Result<&Arc<Symbol>, LookupError> {
        self.objects_by_path.get(suffix)
    }

    /// The module whose path ends with `suffix`.
    ///
    /// # Errors
    ///
    /// Same as [`get_object`](Self::get_object).
    pub fn get_module<S: AsRef<str>>(
        &self,
        suffix: &[S],
    ) -> std::result::Result<&Arc<Module>, LookupError> {
        self.modules_by_path.get(suffix)
    }

    /// Resolve typed reference text, e.g. `Widget#render` or
    /// `../ui/widget.Widget`, written in a document at `doc_dir`.
    ///
    /// A relative `doc_dir` is taken from the base directory; rooted
    /// references are re-anchored at the base directory before lookup.
    ///
    /// # Errors
    ///
    /// Same as [`get_object`](Self::get_object).
    pub fn resolve(
        &self,
        reference: &str,
        doc_dir: impl AsRef<Path>,
    ) -> std::result::Result<&Arc<Symbol>, LookupError> {
        let segments = self.reference_segments(reference, doc_dir.as_ref());
        self.get_object(&segments)
    }

    /// Like [`resolve`](Self::resolve), for modules.
    ///
    /// # Errors
    ///
    /// Same as [`get_object`](Self::get_object).
    pub fn resolve_module(
        &self,
        reference: &str,
        doc_dir: impl AsRef<Path>,
    ) -> std::result::Result<&Arc<Module>, LookupError> {
        let segments = self.reference_segments(reference, doc_dir.as_ref());
        self.get_module(&segments)
    }

    fn reference_segments(&self, reference: &str, doc_dir: &Path) -> Vec<String> {
        split_reference(&anchor_reference(reference, doc_dir, &self.base_dir))
    }

    /// All symbols, in corpus order.
    #[must_use]
    pub fn symbols(&self) -> &[Arc<Symbol>] {
        &self.symbols
    }

    /// All synthesized modules, in first-seen order.
    #[must_use]
    pub fn modules(&self) -> &[Arc<Module>] {
        &self.modules
    }

    /// Extra analyzer data, untouched.
    #[must_use]
    pub fn extra_data(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra_data
    }

    /// Directory that rooted references are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Symbol and module counts.
    #[must_use]
    pub fn stats(&self) -> AnalyzerStats {
        AnalyzerStats {
            symbol_count: self.objects_by_path.len(),
            module_count: self.modules_by_path.len(),
        }
    }
}
