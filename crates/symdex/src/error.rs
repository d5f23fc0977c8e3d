//! Error types for symdex operations.
//!
//! Errors come in two layers:
//!
//! - **`LookupError`**: a suffix query failed. Always recoverable; the caller
//!   reports the unresolved reference and keeps going.
//! - **`Error`**: loading or caching a corpus failed, or a lookup error was
//!   propagated out of a session-level call.

use thiserror::Error;

/// Result type for symdex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for symdex operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus or cache file was not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A reference could not be resolved
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

/// Failure of a suffix query against a [`SuffixIndex`](crate::SuffixIndex).
///
/// The two variants are kept apart on purpose: "you typed something that does
/// not exist" and "you typed something too short" need different hints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No indexed path ends with the requested suffix.
    #[error("no symbol found with path suffix \"{suffix}\"")]
    NotFound {
        /// The requested suffix, segments concatenated.
        suffix: String,
    },

    /// Two or more indexed paths end with the requested suffix.
    #[error("path suffix \"{suffix}\" is ambiguous: it matches {matches} symbols")]
    Ambiguous {
        /// The requested suffix, segments concatenated.
        suffix: String,
        /// Full paths of the conflicting entries, sorted; capped at
        /// [`MAX_CANDIDATES`](crate::MAX_CANDIDATES).
        candidates: Vec<Vec<String>>,
        /// How many entries matched, including those not listed.
        matches: usize,
    },
}

impl LookupError {
    /// The suffix that was requested, as concatenated segment text.
    #[must_use]
    pub fn suffix(&self) -> &str {
        match self {
            Self::NotFound { suffix } | Self::Ambiguous { suffix, .. } => suffix,
        }
    }

    /// Full paths of the conflicting entries; empty for `NotFound`.
    #[must_use]
    pub fn candidates(&self) -> &[Vec<String>] {
        match self {
            Self::NotFound { .. } => &[],
            Self::Ambiguous { candidates, .. } => candidates,
        }
    }

    /// How many entries matched the suffix: 0 for `NotFound`.
    #[must_use]
    pub fn matches(&self) -> usize {
        match self {
            Self::NotFound { .. } => 0,
            Self::Ambiguous { matches, .. } => *matches,
        }
    }

    /// Returns `true` if the suffix matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the suffix matched more than one entry.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_includes_suffix() {
        let error = LookupError::NotFound {
            suffix: "Widget#render".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "no symbol found with path suffix \"Widget#render\""
        );
        assert!(error.is_not_found());
        assert!(error.candidates().is_empty());
        assert_eq!(error.matches(), 0);
    }

    #[test]
    fn ambiguous_display_counts_candidates() {
        let error = LookupError::Ambiguous {
            suffix: "run".to_string(),
            candidates: vec![
                vec!["pkg/".to_string(), "A#".to_string(), "run".to_string()],
                vec!["pkg/".to_string(), "B#".to_string(), "run".to_string()],
            ],
            matches: 40,
        };

        assert!(error.to_string().contains("matches 40 symbols"));
        assert!(error.is_ambiguous());
        assert_eq!(error.suffix(), "run");
        assert_eq!(error.candidates().len(), 2);
        assert_eq!(error.matches(), 40);
    }

    #[test]
    fn lookup_error_is_transparent_in_top_level_error() {
        let lookup = LookupError::NotFound {
            suffix: "x".to_string(),
        };
        let error = Error::from(lookup.clone());

        assert_eq!(error.to_string(), lookup.to_string());
    }
}
