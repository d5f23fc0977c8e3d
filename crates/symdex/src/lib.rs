//! # Symdex: Suffix Lookup for Analyzer Symbol Paths
//!
//! Symdex resolves short, user-written references such as `Widget#render` to
//! the one fully-qualified symbol a source-code analyzer extracted, out of
//! potentially thousands. It is the cross-reference layer of a documentation
//! generator: the analyzer produces a corpus, symdex indexes it, and the
//! renderer asks symdex what each reference in the docs points at.
//!
//! ## Design Philosophy
//!
//! - **Query cost tracks the query** - lookups walk a reverse-keyed trie, so
//!   they cost one step per requested segment regardless of corpus size
//! - **Never guess** - a reference matching two symbols is an error listing
//!   both, never "whichever was indexed first"
//! - **Rebuilt, not persisted** - indexes live in memory for one session
//!
//! ## Quick Start
//!
//! ```no_run
//! use symdex::{Analyzer, JsonCorpus};
//!
//! let analyzer = Analyzer::from_source(&JsonCorpus::new("corpus.json"), ".")?;
//!
//! match analyzer.resolve("Widget#render", "") {
//!     Ok(symbol) => println!("{} at {}:{}", symbol.path.dotted(), symbol.filename, symbol.line),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok::<(), symdex::Error>(())
//! ```

mod analyzer;
mod error;
mod modules;
mod path;
mod source;
mod suffix_tree;
mod types;

pub use analyzer::Analyzer;
pub use error::{Error, LookupError, Result};
pub use modules::create_modules;
pub use path::{
    Pathname, anchor_reference, dotted_path, is_explicitly_rooted, rebase_rooted, split_reference,
};
pub use source::{CachedSource, CorpusSource, JsonCorpus};
pub use suffix_tree::{Entry, MAX_CANDIDATES, SuffixIndex};
pub use types::{AnalyzerStats, Corpus, Module, Symbol, SymbolKind};
