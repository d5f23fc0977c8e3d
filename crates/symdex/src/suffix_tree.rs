//! Suffix lookup over hierarchical symbol paths.
//!
//! [`SuffixIndex`] answers "which entry has a path ending in these segments?"
//! in time proportional to the query, not the corpus.
//!
//! ## Design
//!
//! Storing every suffix of every path as a map key is quadratic in path
//! length. Instead paths are inserted *reversed* into a trie keyed by segment:
//! the node reached by walking a reversed suffix from the root is exactly the
//! set of entries ending in that suffix. Each node records the ids of the
//! entries passing through it, so insertion is O(path length) and the whole
//! index is O(total segments).
//!
//! The root records every entry and acts as the catch-all for the empty
//! suffix.
//!
//! Lookups never guess. A suffix shared by several entries is reported as
//! [`LookupError::Ambiguous`] with the number of conflicting entries and the
//! lexicographically smallest [`MAX_CANDIDATES`] of their paths, sorted, so
//! results don't depend on the order the corpus was assembled in.

use std::collections::HashMap;

use tracing::trace;

use crate::error::LookupError;

/// Most candidate paths an [`LookupError::Ambiguous`] carries.
pub const MAX_CANDIDATES: usize = 32;

/// One indexed `(path, payload)` association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    path: Vec<String>,
    payload: T,
}

impl<T> Entry<T> {
    /// The full path this entry was indexed under.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The payload supplied with the path.
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<String, Node>,
    /// Ids of entries whose path ends with the suffix spelled by this node.
    entries: Vec<usize>,
}

/// Index of paths answering suffix queries.
///
/// Queries take `&self`, so an index shared behind `&` or `Arc` is frozen for
/// as long as it is shared and can be read from many threads at once.
///
/// ```
/// use symdex::SuffixIndex;
///
/// let index = SuffixIndex::build([
///     (vec!["pkg/", "A#", "run"], 1),
///     (vec!["pkg/", "B#", "run"], 2),
/// ]);
///
/// assert_eq!(index.get(&["A#", "run"]), Ok(&1));
/// assert!(index.get(&["run"]).unwrap_err().is_ambiguous());
/// ```
#[derive(Debug)]
pub struct SuffixIndex<T> {
    root: Node,
    entries: Vec<Entry<T>>,
}

impl<T> Default for SuffixIndex<T> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            entries: Vec::new(),
        }
    }
}

impl<T> SuffixIndex<T> {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a batch of `(path, payload)` entries.
    #[must_use]
    pub fn build<I, P, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        index.add_many(entries);
        index
    }

    /// Index one entry under every suffix of `path`.
    ///
    /// Visible to every query issued after this call returns.
    pub fn add<P, S>(&mut self, path: P, payload: T)
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        let id = self.entries.len();

        let mut node = &mut self.root;
        node.entries.push(id);
        for segment in path.iter().rev() {
            node = node.children.entry(segment.clone()).or_default();
            node.entries.push(id);
        }

        self.entries.push(Entry { path, payload });
    }

    /// Index a batch of entries.
    pub fn add_many<I, P, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (P, T)>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (path, payload) in entries {
            self.add(path, payload);
        }
    }

    /// Look up the payload of the single entry whose path ends with `suffix`.
    ///
    /// Walks one trie node per segment of `suffix`. An ambiguous result also
    /// selects its candidates, which is linear in the number of matches (a
    /// short suffix such as `""` matches the whole corpus); at most
    /// [`MAX_CANDIDATES`] paths are cloned.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] if no path ends with `suffix`.
    /// - [`LookupError::Ambiguous`] if several paths do.
    pub fn get<S: AsRef<str>>(&self, suffix: &[S]) -> Result<&T, LookupError> {
        self.get_entry(suffix).map(Entry::payload)
    }

    /// Like [`get`](Self::get), but returns the matching entry with its full
    /// path.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_entry<S: AsRef<str>>(&self, suffix: &[S]) -> Result<&Entry<T>, LookupError> {
        let mut node = &self.root;
        for segment in suffix.iter().rev() {
            match node.children.get(segment.as_ref()) {
                Some(child) => node = child,
                None => {
                    trace!(suffix = %concat(suffix), "suffix fell off the index");
                    return Err(LookupError::NotFound {
                        suffix: concat(suffix),
                    });
                }
            }
        }

        match node.entries.as_slice() {
            [] => Err(LookupError::NotFound {
                suffix: concat(suffix),
            }),
            [id] => {
                trace!(suffix = %concat(suffix), "suffix resolved");
                Ok(&self.entries[*id])
            }
            ids => {
                let mut paths: Vec<&[String]> = ids
                    .iter()
                    .map(|id| self.entries[*id].path.as_slice())
                    .collect();
                if paths.len() > MAX_CANDIDATES {
                    paths.select_nth_unstable(MAX_CANDIDATES - 1);
                    paths.truncate(MAX_CANDIDATES);
                }
                paths.sort_unstable();
                trace!(
                    suffix = %concat(suffix),
                    matches = ids.len(),
                    "suffix is ambiguous"
                );
                Err(LookupError::Ambiguous {
                    suffix: concat(suffix),
                    candidates: paths.into_iter().map(<[String]>::to_vec).collect(),
                    matches: ids.len(),
                })
            }
        }
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }
}

impl<T, P, S> FromIterator<(P, T)> for SuffixIndex<T>
where
    P: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T, P, S> Extend<(P, T)> for SuffixIndex<T>
where
    P: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

fn concat<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().map(AsRef::<str>::as_ref).collect()
}
