//! Streaming literal reference search.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use xref::search::{ReferenceSearchOptions, find_literal_references};
use xref::syntax::LiteralValue;
use xref::usages::DefinitionKey;
use xref::workspace::Workspace;

use crate::helpers::fixtures::{ProjectBuilder, float_lit, ident, number, string_lit, workspace_of};
use crate::helpers::sinks::CollectingSink;

/// `42` occurs twice; `42.0` and `7` are distinct values; `"hi"` occurs
/// in two documents.
fn literal_workspace() -> Arc<Workspace> {
    let (alpha, _) = ProjectBuilder::new(0, "alpha")
        .document(
            0,
            vec![ident("x", 0), number("42", 42, 8), number("7", 7, 12)],
        )
        .document(1, vec![number("42", 42, 0), float_lit("42.0", 42.0, 5)])
        .document(2, vec![string_lit("\"hi\"", "hi", 0)])
        .build();
    let (beta, _) = ProjectBuilder::new(1, "beta")
        .document(3, vec![string_lit("\"hi\"", "hi", 10)])
        .build();
    workspace_of([alpha, beta])
}

fn positions(sink: &CollectingSink) -> BTreeSet<(u32, u32)> {
    sink.references()
        .iter()
        .map(|r| (r.location.document.raw(), r.location.range.start().into()))
        .collect()
}

#[tokio::test]
async fn numeric_literal_matches_by_raw_value_only() {
    let workspace = literal_workspace();
    let sink = CollectingSink::new();

    find_literal_references(
        &LiteralValue::Number(42),
        "42",
        &workspace,
        &sink,
        &ReferenceSearchOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    // the float 42.0 is a different raw value and must not match
    assert_eq!(positions(&sink), BTreeSet::from([(0, 8), (1, 0)]));
}

#[tokio::test]
async fn literal_search_reports_one_non_navigable_definition() {
    let workspace = literal_workspace();
    let sink = CollectingSink::new();

    find_literal_references(
        &LiteralValue::Number(42),
        "42",
        &workspace,
        &sink,
        &ReferenceSearchOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    let definitions = sink.definitions();
    assert_eq!(definitions.len(), 1);
    let definition = &definitions[0];
    assert_eq!(definition.display_text, "42");
    assert!(!definition.navigable);
    assert!(definition.locations.is_empty());
    assert_eq!(definition.key, DefinitionKey::Literal(LiteralValue::Number(42)));
}

#[tokio::test]
async fn string_literals_match_across_projects() {
    let workspace = literal_workspace();
    let sink = CollectingSink::new();

    find_literal_references(
        &LiteralValue::String("hi".into()),
        "\"hi\"",
        &workspace,
        &sink,
        &ReferenceSearchOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(positions(&sink), BTreeSet::from([(2, 0), (3, 10)]));
}
