//! Domain types for analyzer output.
//!
//! - **Records**: `Symbol` (one per documented declaration, from the analyzer)
//! - **Derived**: `Module` (one per logical file, synthesized from symbols)
//! - **Input**: `Corpus` (everything one analyzer run produced)

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::path::Pathname;

/// Declaration kinds that can be grouped into a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    /// Class declaration
    Class,
    /// Interface declaration
    Interface,
    /// Free function
    Function,
    /// Variable, constant or property
    Attribute,
    /// Type alias
    TypeAlias,
}

impl SymbolKind {
    /// Name of the module bucket holding symbols of this kind.
    #[must_use]
    pub fn bucket(&self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Interface => "interfaces",
            Self::Function => "functions",
            Self::Attribute => "attributes",
            Self::TypeAlias => "type_aliases",
        }
    }

    /// Name as written in analyzer output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Function => "function",
            Self::Attribute => "attribute",
            Self::TypeAlias => "typeAlias",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn first_line() -> u32 {
    1
}

/// A top-level declaration extracted by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Short display name, e.g. `render`
    pub name: String,
    /// Full path, e.g. `["./", "ui/", "widget.", "Widget#", "render"]`
    pub path: Pathname,
    /// Declaration kind
    pub kind: SymbolKind,
    /// Source file the declaration was found in
    #[serde(default)]
    pub filename: String,
    /// Slash-delimited logical file path used to group symbols into modules
    #[serde(default)]
    pub deppath: Option<String>,
    /// Whether the symbol should appear in generated docs at all
    #[serde(default)]
    pub documentation_root: bool,
    /// Rendered doc comment
    #[serde(default)]
    pub description: String,
    /// 1-based line of the declaration
    #[serde(default = "first_line")]
    pub line: u32,
}

/// Symbols of one logical file, bucketed by kind and sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Logical file path the module was grouped by
    pub filename: String,
    /// Same as `filename`; kept so modules and symbols share a grouping key
    pub deppath: String,
    /// `filename` split into directory segments, e.g. `["ui/", "widget"]`
    pub path: Pathname,
    /// Always 1
    pub line: u32,
    /// Classes, sorted by name
    pub classes: Vec<Arc<Symbol>>,
    /// Interfaces, sorted by name
    pub interfaces: Vec<Arc<Symbol>>,
    /// Functions, sorted by name
    pub functions: Vec<Arc<Symbol>>,
    /// Attributes, sorted by name
    pub attributes: Vec<Arc<Symbol>>,
    /// Type aliases, sorted by name
    pub type_aliases: Vec<Arc<Symbol>>,
}

impl Module {
    /// Create an empty module for a logical file path.
    #[must_use]
    pub fn new(deppath: &str) -> Self {
        let parts: Vec<&str> = deppath.split('/').collect();
        let last = parts.len() - 1;
        let segments = parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                if i < last {
                    format!("{part}/")
                } else {
                    (*part).to_string()
                }
            })
            .collect();

        Self {
            filename: deppath.to_string(),
            deppath: deppath.to_string(),
            path: Pathname::new(segments),
            line: 1,
            classes: Vec::new(),
            interfaces: Vec::new(),
            functions: Vec::new(),
            attributes: Vec::new(),
            type_aliases: Vec::new(),
        }
    }

    /// The bucket holding symbols of `kind`.
    #[must_use]
    pub fn bucket(&self, kind: SymbolKind) -> &[Arc<Symbol>] {
        match kind {
            SymbolKind::Class => &self.classes,
            SymbolKind::Interface => &self.interfaces,
            SymbolKind::Function => &self.functions,
            SymbolKind::Attribute => &self.attributes,
            SymbolKind::TypeAlias => &self.type_aliases,
        }
    }

    pub(crate) fn bucket_mut(&mut self, kind: SymbolKind) -> &mut Vec<Arc<Symbol>> {
        match kind {
            SymbolKind::Class => &mut self.classes,
            SymbolKind::Interface => &mut self.interfaces,
            SymbolKind::Function => &mut self.functions,
            SymbolKind::Attribute => &mut self.attributes,
            SymbolKind::TypeAlias => &mut self.type_aliases,
        }
    }

    /// Total number of symbols across all buckets.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.classes.len()
            + self.interfaces.len()
            + self.functions.len()
            + self.attributes.len()
            + self.type_aliases.len()
    }
}

/// Output of one analyzer run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// Extracted symbols, in analyzer order
    pub symbols: Vec<Symbol>,
    /// Extra analyzer data passed through to the renderer untouched
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Counts describing a loaded session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzerStats {
    /// Symbols in the object index
    pub symbol_count: usize,
    /// Synthesized modules in the module index
    pub module_count: usize,
}
