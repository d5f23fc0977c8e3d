//! Path model for analyzer symbol paths.
//!
//! A path is a sequence of segments, most general first. Each non-final
//! segment carries a trailing marker naming the boundary that follows it:
//!
//! | Marker | Meaning | Example |
//! |--------|---------|---------|
//! | `/` | directory | `dir/` |
//! | `.` | file or static member | `file.` |
//! | `#` | instance member | `Class#` |
//! | `~` | inner member | `fn~` |
//!
//! `["./", "dir/", "file.", "Class#", "method"]` is the path of `method` on
//! `Class` exported from `./dir/file`.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// Characters that terminate a segment when splitting reference text.
const SEPARATORS: [char; 4] = ['/', '.', '#', '~'];

/// Segment meaning "this directory".
const CURRENT_DIR: &str = "./";

/// Segment meaning "parent directory".
const PARENT_DIR: &str = "../";

/// Returns `true` if a relative path is explicitly rooted at the current
/// directory (`./x`, `../x`, `.` or `..`) rather than starting with a file or
/// folder name.
///
/// Rooted references are anchored to a base directory; everything else is an
/// unanchored fragment eligible for suffix search.
#[must_use]
pub fn is_explicitly_rooted(path: &str) -> bool {
    path.starts_with(CURRENT_DIR) || path.starts_with(PARENT_DIR) || path == "." || path == ".."
}

/// Render a path as a dotted name, e.g. `["dir/", "file.", "Class#", "m"]`
/// becomes `dir.file.Class.m`.
///
/// Leading `./` and `../` segments are dropped so relative paths don't render
/// as `.....foo`. This is not informed by any base directory, so two distinct
/// directories with the same relative spelling render identically.
#[must_use]
pub fn dotted_path<S: AsRef<str>>(segments: &[S]) -> String {
    let Some((last, init)) = segments.split_last() else {
        return String::new();
    };

    let mut parts: Vec<&str> = init
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|s| *s != CURRENT_DIR && *s != PARENT_DIR)
        .map(strip_marker)
        .collect();
    parts.push(last.as_ref());
    parts.join(".")
}

/// Drop the final character of a segment.
fn strip_marker(segment: &str) -> &str {
    segment
        .char_indices()
        .next_back()
        .map_or(segment, |(i, _)| &segment[..i])
}

/// Split typed reference text into path segments.
///
/// Each separator (`/`, `.`, `#`, `~`) stays attached to the segment it ends.
/// A leading run of `./` and `../` becomes standalone segments:
///
/// ```
/// use symdex::split_reference;
///
/// assert_eq!(
///     split_reference("./dir/file.Class#method"),
///     ["./", "dir/", "file.", "Class#", "method"]
/// );
/// ```
#[must_use]
pub fn split_reference(text: &str) -> Vec<String> {
    match text {
        "." => return vec![CURRENT_DIR.to_string()],
        ".." => return vec![PARENT_DIR.to_string()],
        _ => {}
    }

    let mut segments = Vec::new();
    let mut rest = text;
    loop {
        if let Some(r) = rest.strip_prefix(CURRENT_DIR) {
            segments.push(CURRENT_DIR.to_string());
            rest = r;
        } else if let Some(r) = rest.strip_prefix(PARENT_DIR) {
            segments.push(PARENT_DIR.to_string());
            rest = r;
        } else {
            break;
        }
    }

    let mut current = String::new();
    for c in rest.chars() {
        current.push(c);
        if SEPARATORS.contains(&c) {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Re-anchor an explicitly rooted reference at the base directory.
///
/// `doc_dir` is the directory of the document containing the reference,
/// relative to the base directory (`""` for the base itself). Leading `./`
/// and `../` markers are resolved lexically against it:
///
/// ```
/// use symdex::rebase_rooted;
///
/// assert_eq!(rebase_rooted("../src/file.Foo", "docs"), "./src/file.Foo");
/// assert_eq!(rebase_rooted("./foo", "../docs"), "../docs/foo");
/// assert_eq!(rebase_rooted("file.Foo", "docs"), "file.Foo");
/// ```
///
/// References that climb above the base directory keep their `../` markers.
/// Without the base directory's own name, a reference that climbs out and
/// back in (`../base/x` from `..`) cannot be recognised as staying inside;
/// [`anchor_reference`] takes the base directory for that.
#[must_use]
pub fn rebase_rooted(reference: &str, doc_dir: &str) -> String {
    anchor_reference(reference, Path::new(doc_dir), Path::new(""))
}

/// Re-anchor an explicitly rooted reference at `base_dir`.
///
/// `doc_dir` is the directory of the referring document: relative paths are
/// taken from `base_dir`, absolute ones are used as they are. The directory
/// part of the reference is joined onto it, normalized lexically, and made
/// relative to `base_dir` again:
///
/// ```
/// use std::path::Path;
/// use symdex::anchor_reference;
///
/// let base = Path::new("/p/src");
/// assert_eq!(anchor_reference("../src/file.Foo", Path::new("../docs"), base), "./file.Foo");
/// assert_eq!(anchor_reference("./file.Foo", Path::new("/p/src/ui"), base), "./ui/file.Foo");
/// assert_eq!(anchor_reference("../x", Path::new(""), base), "../x");
/// ```
///
/// Symlinks are not followed.
#[must_use]
pub fn anchor_reference(reference: &str, doc_dir: &Path, base_dir: &Path) -> String {
    if !is_explicitly_rooted(reference) {
        return reference.to_string();
    }

    let (dir, tail) = match reference {
        "." | ".." => (reference, ""),
        _ => reference
            .rfind('/')
            .map_or((reference, ""), |i| reference.split_at(i + 1)),
    };

    let base = normalize(base_dir);
    let joined = base_dir.join(doc_dir).join(dir);
    let target = normalize(&joined);

    let common = base
        .iter()
        .zip(&target)
        .take_while(|(b, t)| b == t)
        .count();
    let mut parts: Vec<String> = vec!["..".to_string(); base.len() - common];
    parts.extend(
        target[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    let mut anchored = if parts.first().is_some_and(|p| p == "..") {
        String::new()
    } else {
        CURRENT_DIR.to_string()
    };
    for part in &parts {
        anchored.push_str(part);
        anchored.push('/');
    }
    anchored.push_str(tail);
    anchored
}

/// Lexically drop `.` and resolve `..`; a `..` with nothing left to pop is
/// kept, except directly under the root where it is a no-op.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts
}

/// The full path of a symbol as emitted by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pathname(Vec<String>);

impl Pathname {
    /// Create a pathname from its segments.
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// The segments, most general first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Dotted display name, see [`dotted_path`].
    #[must_use]
    pub fn dotted(&self) -> String {
        dotted_path(&self.0)
    }
}

impl From<Vec<String>> for Pathname {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<'a> FromIterator<&'a str> for Pathname {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            f.write_str(segment)?;
        }
        Ok(())
    }
}
