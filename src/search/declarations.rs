//! The local declaration walk.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::semantics::{SymbolAndProjectId, SymbolFilter};
use crate::workspace::Project;

use super::dispatch::DeclarationStrategy;
use super::{SearchError, SearchQuery, SearchScope};

/// Append every declared symbol of `project` that satisfies the query
/// predicate and whose kind the filter includes.
///
/// Walks the full compilation table (top-level and nested declarations
/// alike) in table order. No cross-project deduplication: a symbol
/// declared by several projects is attributed once per project.
pub fn add_matching_declarations(
    project: &Project,
    query: &SearchQuery,
    filter: SymbolFilter,
    out: &mut Vec<SymbolAndProjectId>,
) {
    for symbol in project.compilation().declared_symbols() {
        if filter.includes(symbol.kind) && query.matches(&symbol.name) {
            out.push(SymbolAndProjectId::new(symbol.clone(), project.id()));
        }
    }
}

/// In-process declaration search over every project in scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStrategy;

#[async_trait]
impl DeclarationStrategy for LocalStrategy {
    type Error = SearchError;

    async fn find_declarations(
        &self,
        scope: &SearchScope,
        query: &SearchQuery,
        filter: SymbolFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<SymbolAndProjectId>, SearchError> {
        let mut out = Vec::new();
        for project in scope.projects()? {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
            add_matching_declarations(&project, query, filter, &mut out);
            // keep long multi-project walks cooperative
            tokio::task::yield_now().await;
        }
        Ok(out)
    }
}
