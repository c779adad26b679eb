//! Streaming literal reference search.
//!
//! Disjoint from symbol search: when the token under the caret is a
//! literal, this path runs instead, matching occurrences by raw value
//! equality against the per-document literal index. No semantic model is
//! computed.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;

use crate::base::{DocumentId, Location};
use crate::syntax::LiteralValue;
use crate::usages::{DefinitionItem, ReferenceItem, UsageSink};
use crate::workspace::{Project, Workspace};

use super::references::{ReferenceSearchOptions, document_jobs};
use super::SearchError;

/// Longest literal text used verbatim as a definition title.
pub const LITERAL_TITLE_MAX: usize = 64;

/// The display title for a literal definition: the token text, truncated
/// at a character boundary with an ellipsis when too long.
pub fn literal_display_title(text: &str) -> SmolStr {
    if text.chars().count() <= LITERAL_TITLE_MAX {
        return text.into();
    }
    let truncated: String = text.chars().take(LITERAL_TITLE_MAX).collect();
    SmolStr::from(format!("{truncated}…"))
}

/// Find every literal token in the workspace whose value equals `value`,
/// streaming results through `sink`.
///
/// Reports exactly one non-navigable definition item, titled with the
/// (possibly truncated) token text, then one reference per occurrence.
pub async fn find_literal_references(
    value: &LiteralValue,
    title: &str,
    workspace: &Arc<Workspace>,
    sink: &dyn UsageSink,
    options: &ReferenceSearchOptions,
    cancel: &CancellationToken,
) -> Result<(), SearchError> {
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    let definition = Arc::new(DefinitionItem::literal(
        literal_display_title(title),
        value.clone(),
    ));
    sink.on_definition_found(definition.clone()).await;

    let filter = options.document_filter();
    let jobs = document_jobs(workspace, filter.as_ref());
    let mut scans = stream::iter(jobs.into_iter().map(|(project, document)| {
        let definition = definition.clone();
        async move {
            scan_document_for_literal(&project, document, value, &definition, sink, cancel).await
        }
    }))
    .buffer_unordered(options.effective_concurrency());

    while let Some(result) = scans.next().await {
        result?;
    }
    Ok(())
}

async fn scan_document_for_literal(
    project: &Project,
    document: DocumentId,
    value: &LiteralValue,
    definition: &Arc<DefinitionItem>,
    sink: &dyn UsageSink,
    cancel: &CancellationToken,
) -> Result<(), SearchError> {
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }
    let Some(tree) = project.services().syntax_tree(document).await else {
        return Ok(());
    };
    if !tree.contains_literal(value) {
        return Ok(());
    }
    for token in tree.tokens() {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        if token.value.as_ref() == Some(value) {
            let location = Location::new(document, token.range);
            sink.on_reference_found(ReferenceItem::new(definition.clone(), location))
                .await;
        }
    }
    Ok(())
}
