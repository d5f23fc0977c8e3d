//! CLI command implementations.

mod display;

pub mod module;
pub mod modules;
pub mod resolve;

use std::path::PathBuf;

use symdex::{Analyzer, CachedSource, JsonCorpus};

/// Global options shared by every command that needs an index.
pub struct Session {
    pub corpus: Option<PathBuf>,
    pub cache: Option<PathBuf>,
    pub base_dir: PathBuf,
}

impl Session {
    /// Load the corpus (through the cache, if configured) and index it.
    pub fn analyzer(&self) -> Result<Analyzer, symdex::Error> {
        let corpus = self.corpus.as_ref().ok_or_else(|| {
            symdex::Error::Config("no corpus given; pass --corpus <FILE>".to_string())
        })?;
        let source = CachedSource::new(JsonCorpus::new(corpus), self.cache.clone());
        Analyzer::from_source(&source, &self.base_dir)
    }
}
