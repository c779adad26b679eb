//! Streaming symbol reference search.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;

use crate::base::{DocumentId, Location};
use crate::semantics::{SymbolAndProjectId, SymbolKey};
use crate::usages::{DefinitionItem, ReferenceItem, UsageSink};
use crate::workspace::{Project, Workspace};

use super::SearchError;

/// Options shared by symbol and literal reference search.
#[derive(Clone, Debug)]
pub struct ReferenceSearchOptions {
    /// Restrict the scan to these documents. `None` scans the whole
    /// workspace.
    pub documents: Option<Vec<DocumentId>>,
    /// How many documents to scan concurrently.
    pub concurrency: usize,
}

impl Default for ReferenceSearchOptions {
    fn default() -> Self {
        Self {
            documents: None,
            concurrency: 8,
        }
    }
}

impl ReferenceSearchOptions {
    pub(crate) fn document_filter(&self) -> Option<FxHashSet<DocumentId>> {
        self.documents
            .as_ref()
            .map(|docs| docs.iter().copied().collect())
    }

    pub(crate) fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

/// Find every syntactic usage of `target` across the workspace,
/// streaming results through `sink`.
///
/// The definition itself is reported first; references follow as the
/// document scans discover them, in no particular order across
/// documents. Documents are pre-filtered by their identifier index —
/// only documents syntactically capable of mentioning the symbol's name
/// get a semantic model computed.
pub async fn find_references(
    target: &SymbolAndProjectId,
    workspace: &Arc<Workspace>,
    sink: &dyn UsageSink,
    options: &ReferenceSearchOptions,
    cancel: &CancellationToken,
) -> Result<(), SearchError> {
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    let definition = Arc::new(DefinitionItem::from_symbol(target));
    sink.on_definition_found(definition.clone()).await;

    let name = target.symbol.name.clone();
    let key = target.key();
    let filter = options.document_filter();

    let jobs = document_jobs(workspace, filter.as_ref());
    let mut scans = stream::iter(jobs.into_iter().map(|(project, document)| {
        let definition = definition.clone();
        let name = name.clone();
        async move {
            scan_document_for_symbol(&project, document, &name, key, &definition, sink, cancel)
                .await
        }
    }))
    .buffer_unordered(options.effective_concurrency());

    while let Some(result) = scans.next().await {
        result?;
    }
    Ok(())
}

pub(crate) fn document_jobs(
    workspace: &Workspace,
    filter: Option<&FxHashSet<DocumentId>>,
) -> Vec<(Arc<Project>, DocumentId)> {
    let mut jobs = Vec::new();
    for project in workspace.projects() {
        for &document in project.documents() {
            if filter.is_none_or(|docs| docs.contains(&document)) {
                jobs.push((project.clone(), document));
            }
        }
    }
    jobs
}

async fn scan_document_for_symbol(
    project: &Project,
    document: DocumentId,
    name: &SmolStr,
    target: &SymbolKey,
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
    if !tree.mentions_identifier(name) {
        tracing::trace!(%document, "document cannot mention symbol, skipping");
        return Ok(());
    }
    let Some(model) = project.services().semantic_model(document).await else {
        return Ok(());
    };

    for (index, token) in tree.tokens().iter().enumerate() {
        if !token.is_identifier(name) {
            continue;
        }
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        let Some(meaning) = model.resolve_token(document, index).await else {
            continue;
        };
        // resolution is an await; the token may have fired during it
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        if meaning.key == *target {
            let location = Location::new(document, token.range);
            sink.on_reference_found(ReferenceItem::new(definition.clone(), location))
                .await;
        }
    }
    Ok(())
}
