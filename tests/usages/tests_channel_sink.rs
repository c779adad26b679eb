//! The bounded channel sink.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use xref::base::ProjectId;
use xref::search::{ReferenceSearchOptions, find_references};
use xref::semantics::{SymbolAndProjectId, SymbolKey, SymbolKind, TokenMeaning};
use xref::usages::{UsageEvent, usage_channel};
use xref::workspace::Workspace;

use crate::helpers::fixtures::{ProjectBuilder, ident, symbol, workspace_of};

/// One project; `Foo` is declared once and referenced three times.
fn foo_workspace() -> Arc<Workspace> {
    let (alpha, _) = ProjectBuilder::new(0, "alpha")
        .symbol(symbol("alpha::Foo", "Foo", SymbolKind::Type, 0, 0))
        .document(0, vec![ident("Foo", 0), ident("Foo", 10), ident("Foo", 20)])
        .meaning(0, 0, TokenMeaning::new(SymbolKey::new("alpha::Foo")))
        .meaning(0, 1, TokenMeaning::new(SymbolKey::new("alpha::Foo")))
        .meaning(0, 2, TokenMeaning::new(SymbolKey::new("alpha::Foo")))
        .build();
    workspace_of([alpha])
}

fn foo_target(workspace: &Arc<Workspace>) -> SymbolAndProjectId {
    workspace
        .resolve_symbol(&SymbolKey::new("alpha::Foo"), ProjectId::new(0))
        .expect("Foo resolves in alpha")
}

#[tokio::test]
async fn full_channel_suspends_the_engine_until_the_consumer_drains() {
    let workspace = foo_workspace();
    let target = foo_target(&workspace);
    // capacity 1: the engine must suspend on every send until the
    // consumer takes the previous event
    let (sink, mut rx) = usage_channel(1);

    let engine = tokio::spawn(async move {
        find_references(
            &target,
            &workspace,
            &sink,
            &ReferenceSearchOptions::default(),
            &CancellationToken::new(),
        )
        .await
    });

    let mut definitions = 0;
    let mut references = 0;
    while let Some(event) = rx.recv().await {
        match event {
            UsageEvent::Definition(_) => definitions += 1,
            UsageEvent::Reference(_) => references += 1,
            _ => {}
        }
    }
    engine.await.expect("engine task").expect("search completes");

    // nothing was dropped under backpressure
    assert_eq!(definitions, 1);
    assert_eq!(references, 3);
}

#[tokio::test]
async fn dropped_receiver_discards_events_without_stalling_the_engine() {
    let workspace = foo_workspace();
    let target = foo_target(&workspace);
    let (sink, mut rx) = usage_channel(1);

    let engine = tokio::spawn(async move {
        find_references(
            &target,
            &workspace,
            &sink,
            &ReferenceSearchOptions::default(),
            &CancellationToken::new(),
        )
        .await
    });

    // take the definition, then walk away mid-stream
    let first = rx.recv().await.expect("the definition streams first");
    assert!(matches!(first, UsageEvent::Definition(_)));
    drop(rx);

    // the engine runs to completion; a closed channel is not an abort
    engine.await.expect("engine task").expect("search completes");
}
