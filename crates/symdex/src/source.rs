//! Corpus loading and on-disk caching.
//!
//! The analyzer that produces a [`Corpus`] is an external process; this module
//! only defines the seam ([`CorpusSource`]) and two implementations:
//!
//! - [`JsonCorpus`] reads analyzer output that was already written to disk.
//! - [`CachedSource`] wraps any source with a cache file, so an expensive
//!   analyzer run is skipped when its output is already cached.
//!
//! There is no process-wide memoization; a cache lives exactly as long as the
//! `CachedSource` that owns its path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::Corpus;

/// Something that can produce a corpus of analyzer symbols.
pub trait CorpusSource {
    /// Produce the corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be produced or decoded.
    fn load(&self) -> Result<Corpus>;
}

impl<S: CorpusSource + ?Sized> CorpusSource for &S {
    fn load(&self) -> Result<Corpus> {
        (**self).load()
    }
}

/// A corpus stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonCorpus {
    path: PathBuf,
}

impl JsonCorpus {
    /// Read the corpus at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this corpus is read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for JsonCorpus {
    fn load(&self) -> Result<Corpus> {
        let corpus = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            symbols = corpus.symbols.len(),
            "Loaded corpus"
        );
        Ok(corpus)
    }
}

/// A source whose output is cached in a JSON file.
///
/// If the cache file exists it is read instead of the inner source. Otherwise
/// the inner source runs and its output is written to the cache file. With no
/// cache file configured this is a plain pass-through.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    cache_file: Option<PathBuf>,
}

impl<S: CorpusSource> CachedSource<S> {
    /// Wrap `inner`, caching its output at `cache_file` when given.
    #[must_use]
    pub fn new(inner: S, cache_file: Option<PathBuf>) -> Self {
        Self { inner, cache_file }
    }

    /// The cache file, if caching is enabled.
    #[must_use]
    pub fn cache_file(&self) -> Option<&Path> {
        self.cache_file.as_deref()
    }
}

impl<S: CorpusSource> CorpusSource for CachedSource<S> {
    fn load(&self) -> Result<Corpus> {
        let Some(cache_file) = &self.cache_file else {
            return self.inner.load();
        };

        if cache_file.is_file() {
            debug!(path = %cache_file.display(), "Using cached corpus");
            return read_json(cache_file);
        }

        let corpus = self.inner.load()?;
        // Cache write failures are not fatal.
        if let Err(e) = write_json_atomic(cache_file, &corpus) {
            warn!(
                path = %cache_file.display(),
                error = %e,
                "Failed to write corpus cache"
            );
        }
        Ok(corpus)
    }
}

fn read_json(path: &Path) -> Result<Corpus> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write `corpus` as pretty-printed JSON via a temp file and rename, so the
/// target is never left half-written.
fn write_json_atomic(path: &Path, corpus: &Corpus) -> Result<()> {
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, corpus) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

fn write_to_temp_file(temp_path: &Path, corpus: &Corpus) -> Result<()> {
    let mut writer = BufWriter::new(File::create(temp_path)?);
    serde_json::to_writer_pretty(&mut writer, corpus)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::Pathname;
    use crate::types::{Symbol, SymbolKind};
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Counts how often it was asked for a corpus.
    struct CountingSource {
        calls: Cell<usize>,
        corpus: Corpus,
    }

    impl CorpusSource for CountingSource {
        fn load(&self) -> Result<Corpus> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.corpus.clone())
        }
    }

    fn sample_corpus() -> Corpus {
        Corpus {
            symbols: vec![Symbol {
                name: "render".to_string(),
                path: ["./", "widget.", "Widget#", "render"].into_iter().collect::<Pathname>(),
                kind: SymbolKind::Function,
                filename: "widget.ts".to_string(),
                deppath: Some("./widget".to_string()),
                documentation_root: true,
                description: String::new(),
                line: 12,
            }],
            extra: serde_json::Map::new(),
        }
    }

    fn counting() -> CountingSource {
        CountingSource {
            calls: Cell::new(0),
            corpus: sample_corpus(),
        }
    }

    #[test]
    fn make_temp_path_appends_tmp() {
        assert_eq!(
            make_temp_path(Path::new("/cache/corpus.json")),
            Path::new("/cache/corpus.json.tmp")
        );
        assert_eq!(
            make_temp_path(Path::new("/cache/corpus")),
            Path::new("/cache/corpus.tmp")
        );
    }

    #[test]
    fn cache_miss_runs_source_and_writes_file() {
        let dir = TempDir::new().expect("should create temp dir");
        let cache_file = dir.path().join("corpus.json");
        let source = counting();

        let cached = CachedSource::new(&source, Some(cache_file.clone()));
        let corpus = cached.load().expect("load should succeed");

        assert_eq!(corpus, sample_corpus());
        assert_eq!(source.calls.get(), 1);
        assert!(cache_file.is_file());
        assert!(!make_temp_path(&cache_file).exists(), "temp file should be renamed");

        let written = std::fs::read_to_string(&cache_file).expect("cache should be readable");
        assert!(written.contains("\n  \"symbols\""), "cache should be indented by two spaces");
    }

    #[test]
    fn cache_hit_skips_source() {
        let dir = TempDir::new().expect("should create temp dir");
        let cache_file = dir.path().join("corpus.json");
        let source = counting();
        let cached = CachedSource::new(&source, Some(cache_file));

        let first = cached.load().expect("first load should succeed");
        let second = cached.load().expect("second load should succeed");

        assert_eq!(first, second);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn no_cache_file_passes_through() {
        let source = counting();
        let cached = CachedSource::new(&source, None);

        cached.load().expect("first load should succeed");
        cached.load().expect("second load should succeed");

        assert_eq!(source.calls.get(), 2);
        assert!(cached.cache_file().is_none());
    }

    #[test]
    fn unwritable_cache_still_returns_corpus() {
        let dir = TempDir::new().expect("should create temp dir");
        let cache_file = dir.path().join("missing").join("corpus.json");
        let source = counting();

        let corpus = CachedSource::new(&source, Some(cache_file.clone()))
            .load()
            .expect("load should succeed despite cache failure");

        assert_eq!(corpus.symbols.len(), 1);
        assert!(!cache_file.exists());
    }

    #[test]
    fn corrupt_cache_is_a_json_error() {
        let dir = TempDir::new().expect("should create temp dir");
        let cache_file = dir.path().join("corpus.json");
        std::fs::write(&cache_file, "{ not json").expect("should write file");

        let result = CachedSource::new(counting(), Some(cache_file)).load();

        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn missing_corpus_file_is_an_io_error() {
        let result = JsonCorpus::new("/definitely/not/here.json").load();

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
