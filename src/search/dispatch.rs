//! Per-call routing between the remote and local declaration strategies.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::semantics::{SymbolAndProjectId, SymbolFilter};

use super::declarations::LocalStrategy;
use super::remote::{RemoteSessionProvider, RemoteStrategy};
use super::{SearchError, SearchQuery, SearchScope};

/// One way of computing a declaration search.
///
/// [`LocalStrategy`] and [`RemoteStrategy`] implement this with the same
/// observable semantics for the same scope/query/filter; only the error
/// type differs (remote failures are routing signals, not caller
/// errors).
#[async_trait]
pub trait DeclarationStrategy: Send + Sync {
    /// Failure type of this strategy.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Find every declared symbol in scope matching the query and
    /// filter.
    async fn find_declarations(
        &self,
        scope: &SearchScope,
        query: &SearchQuery,
        filter: SymbolFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<SymbolAndProjectId>, Self::Error>;
}

/// Entry point for declaration search.
///
/// Probes the remote capability per call: if a session can be acquired,
/// the search is serialized to the out-of-process worker and the result
/// rehydrated; if no session is available or the remote call fails in
/// any way, the same search runs in-process. Callers cannot tell which
/// path produced their symbols.
#[derive(Default)]
pub struct DeclarationDispatcher {
    remote: Option<Arc<dyn RemoteSessionProvider>>,
}

impl DeclarationDispatcher {
    /// A dispatcher that always computes locally.
    pub fn new() -> Self {
        Self { remote: None }
    }

    /// A dispatcher that probes `provider` for a session on every call.
    pub fn with_remote(provider: Arc<dyn RemoteSessionProvider>) -> Self {
        Self {
            remote: Some(provider),
        }
    }

    /// Find every declared symbol in `scope` matching `query` and
    /// `filter`.
    ///
    /// An empty or all-whitespace query name short-circuits to an empty
    /// result before either strategy is consulted. A scope naming an
    /// unknown project fails fast with
    /// [`SearchError::InvalidInput`]. Result ordering is unspecified
    /// across projects; within a project, symbols come out in
    /// compilation table order.
    pub async fn find_declarations(
        &self,
        scope: &SearchScope,
        query: &SearchQuery,
        filter: SymbolFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<SymbolAndProjectId>, SearchError> {
        if let Some(name) = query.name() {
            if name.trim().is_empty() {
                return Ok(Vec::new());
            }
        }
        scope.validate()?;
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        // Custom queries carry no serializable name and never go remote.
        if query.name().is_some() {
            if let Some(provider) = &self.remote {
                if let Some(session) = provider.try_acquire(scope.workspace()).await {
                    let strategy = RemoteStrategy::new(session);
                    match strategy
                        .find_declarations(scope, query, filter, cancel)
                        .await
                    {
                        Ok(results) => return Ok(results),
                        Err(_) if cancel.is_cancelled() => return Err(SearchError::Cancelled),
                        Err(err) => {
                            tracing::debug!(
                                error = %err,
                                "remote declaration search failed, falling back to local"
                            );
                        }
                    }
                } else {
                    tracing::debug!("no remote session available, searching locally");
                }
            }
        }

        LocalStrategy
            .find_declarations(scope, query, filter, cancel)
            .await
    }
}

impl std::fmt::Debug for DeclarationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationDispatcher")
            .field("remote", &self.remote.is_some())
            .finish()
    }
}
