//! Integration tests for resolving references against a loaded corpus.

use std::fs;
use std::path::Path;

use rstest::{fixture, rstest};
use symdex::{Analyzer, CachedSource, CorpusSource, JsonCorpus, LookupError, SymbolKind};
use tempfile::TempDir;

const CORPUS: &str = r#"{
    "symbols": [
        {
            "name": "Widget",
            "path": ["./", "ui/", "widget.", "Widget"],
            "kind": "class",
            "filename": "ui/widget.ts",
            "deppath": "./ui/widget",
            "documentation_root": true,
            "line": 3
        },
        {
            "name": "render",
            "path": ["./", "ui/", "widget.", "Widget#", "render"],
            "kind": "function",
            "filename": "ui/widget.ts",
            "deppath": "./ui/widget",
            "documentation_root": false,
            "line": 10
        },
        {
            "name": "render",
            "path": ["./", "ui/", "button.", "Button#", "render"],
            "kind": "function",
            "filename": "ui/button.ts",
            "deppath": "./ui/button",
            "documentation_root": false,
            "line": 8
        },
        {
            "name": "Props",
            "path": ["./", "ui/", "button.", "Props"],
            "kind": "interface",
            "filename": "ui/button.ts",
            "deppath": "./ui/button",
            "documentation_root": true,
            "line": 1
        },
        {
            "name": "Size",
            "path": ["./", "ui/", "button.", "Size"],
            "kind": "typeAlias",
            "filename": "ui/button.ts",
            "deppath": "./ui/button",
            "documentation_root": true,
            "line": 2
        },
        {
            "name": "Button",
            "path": ["./", "ui/", "button.", "Button"],
            "kind": "class",
            "filename": "ui/button.ts",
            "deppath": "./ui/button",
            "documentation_root": true,
            "line": 5
        }
    ],
    "extra": { "typedocVersion": "0.25.0" }
}"#;

/// Write the sample corpus into a fresh directory.
#[fixture]
fn corpus_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("should create temp dir");
    fs::write(dir.path().join("corpus.json"), CORPUS).expect("should write corpus");
    dir
}

fn load(dir: &Path) -> Analyzer {
    Analyzer::from_source(&JsonCorpus::new(dir.join("corpus.json")), dir)
        .expect("corpus should load")
}

#[rstest]
#[case::member("Widget#render", "ui/widget.ts", 10)]
#[case::other_member("Button#render", "ui/button.ts", 8)]
#[case::class("Widget", "ui/widget.ts", 3)]
#[case::file_qualified("button.Props", "ui/button.ts", 1)]
#[case::full_path("./ui/button.Size", "ui/button.ts", 2)]
fn resolves_unique_references(
    corpus_dir: TempDir,
    #[case] reference: &str,
    #[case] filename: &str,
    #[case] line: u32,
) {
    let analyzer = load(corpus_dir.path());

    let symbol = analyzer
        .resolve(reference, "")
        .expect("reference should resolve");

    assert_eq!(symbol.filename, filename);
    assert_eq!(symbol.line, line);
}

#[rstest]
fn bare_member_name_lists_both_owners(corpus_dir: TempDir) {
    let analyzer = load(corpus_dir.path());

    let error = analyzer
        .resolve("render", "")
        .expect_err("shared member name should be ambiguous");

    let LookupError::Ambiguous { candidates, .. } = &error else {
        panic!("expected Ambiguous, got {error:?}");
    };
    let dotted: Vec<String> = candidates
        .iter()
        .map(|c| symdex::dotted_path(c))
        .collect();
    assert_eq!(dotted, ["ui.button.Button.render", "ui.widget.Widget.render"]);
}

#[rstest]
#[case::unknown_member("Widget#paint")]
#[case::wrong_marker("Widget.render")]
#[case::wrong_case("widget#render")]
fn unknown_references_are_not_found(corpus_dir: TempDir, #[case] reference: &str) {
    let analyzer = load(corpus_dir.path());

    let error = analyzer
        .resolve(reference, "")
        .expect_err("reference should not resolve");

    assert!(error.is_not_found(), "got {error:?}");
}

#[rstest]
fn rooted_reference_from_subdirectory(corpus_dir: TempDir) {
    let analyzer = load(corpus_dir.path());

    let symbol = analyzer
        .resolve("./widget.Widget", "ui")
        .expect("rooted reference should resolve");

    assert_eq!(symbol.kind, SymbolKind::Class);
    assert_eq!(symbol.name, "Widget");
}

#[rstest]
fn rooted_reference_from_document_outside_base(corpus_dir: TempDir) {
    let base = corpus_dir.path().join("src");
    let source = JsonCorpus::new(corpus_dir.path().join("corpus.json"));
    let analyzer = Analyzer::from_source(&source, &base).expect("corpus should load");

    let symbol = analyzer
        .resolve("../src/ui/widget.Widget", corpus_dir.path().join("docs"))
        .expect("reference should climb back into the base directory");
    assert_eq!(symbol.name, "Widget");

    let error = analyzer
        .resolve("./ui/widget.Widget", corpus_dir.path().join("docs"))
        .expect_err("sibling of the base directory holds nothing");
    assert_eq!(error.suffix(), "../docs/ui/widget.Widget");
}

#[rstest]
fn modules_group_documentation_roots(corpus_dir: TempDir) {
    let analyzer = load(corpus_dir.path());

    let names: Vec<&str> = analyzer
        .modules()
        .iter()
        .map(|m| m.deppath.as_str())
        .collect();
    assert_eq!(names, ["./ui/widget", "./ui/button"]);

    let button = analyzer
        .resolve_module("ui/button", "")
        .expect("module should resolve");
    assert_eq!(button.classes.len(), 1);
    assert_eq!(button.interfaces.len(), 1);
    assert_eq!(button.type_aliases.len(), 1);
    assert!(button.functions.is_empty(), "non-roots stay out of modules");
}

#[rstest]
fn extra_data_is_passed_through(corpus_dir: TempDir) {
    let analyzer = load(corpus_dir.path());

    assert_eq!(
        analyzer.extra_data().get("typedocVersion"),
        Some(&serde_json::Value::from("0.25.0"))
    );
    assert_eq!(analyzer.base_dir(), corpus_dir.path());
}

#[rstest]
fn cached_corpus_survives_source_removal(corpus_dir: TempDir) {
    let corpus_file = corpus_dir.path().join("corpus.json");
    let cache_file = corpus_dir.path().join("cache.json");
    let source = CachedSource::new(JsonCorpus::new(&corpus_file), Some(cache_file.clone()));

    let first = source.load().expect("first load should succeed");
    fs::remove_file(&corpus_file).expect("should remove corpus");
    let second = source.load().expect("cached load should succeed");

    assert_eq!(first, second);
    assert!(cache_file.is_file());
}

#[test]
fn indexes_are_order_independent() {
    let corpus: symdex::Corpus = serde_json::from_str(CORPUS).expect("corpus should parse");
    let mut reversed = corpus.symbols.clone();
    reversed.reverse();

    let forward = Analyzer::new(corpus.symbols, serde_json::Map::new(), ".");
    let backward = Analyzer::new(reversed, serde_json::Map::new(), ".");

    for reference in ["render", "Widget", "Button#render", "Size", "nothing"] {
        let a = forward.resolve(reference, "").map(|s| s.path.clone());
        let b = backward.resolve(reference, "").map(|s| s.path.clone());
        assert_eq!(a, b, "reference {reference}");
    }
}

#[test]
fn malformed_corpus_is_a_json_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("corpus.json");
    fs::write(&path, r#"{"symbols": [{"name": "x"}]}"#).expect("should write corpus");

    let result = Analyzer::from_source(&JsonCorpus::new(path), dir.path());

    assert!(matches!(result, Err(symdex::Error::Json(_))));
}
