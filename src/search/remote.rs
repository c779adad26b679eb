//! The remote declaration path: session traits, the wire format, and
//! rehydration of serialized results into live local symbols.
//!
//! The wire payload is deliberately small: a request carries the query
//! name, its case-sensitivity, the kind filter, and the project id for
//! project-scoped searches; a response carries (symbol key, project id)
//! pairs. Keys are rehydrated against the caller's own workspace
//! snapshot — a key that no longer resolves (the solution changed while
//! the round-trip was in flight) is dropped, never an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::base::ProjectId;
use crate::semantics::{SymbolAndProjectId, SymbolFilter, SymbolKey};
use crate::workspace::Workspace;

use super::dispatch::DeclarationStrategy;
use super::{RemoteError, SearchQuery, SearchScope};

/// Operation name for remote declaration search.
pub const FIND_DECLARATIONS_OP: &str = "symbolSearch/findDeclarations";

/// Version stamped into every request and expected in every response.
/// The schema and the rehydration logic below change together.
pub const WIRE_VERSION: u32 = 1;

/// Serialized declaration-search request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRequest {
    pub version: u32,
    pub name: String,
    pub ignore_case: bool,
    pub filter: SymbolFilter,
    /// Present for project-scoped searches, absent for workspace scope.
    pub project: Option<ProjectId>,
}

/// One symbol descriptor of a declaration-search response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDeclaration {
    pub key: SymbolKey,
    pub project: ProjectId,
}

/// Serialized declaration-search response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationResponse {
    pub version: u32,
    pub declarations: Vec<WireDeclaration>,
}

/// A live out-of-process computation session.
///
/// Scoped to a single logical call; this crate never caches or reuses
/// sessions.
#[async_trait]
pub trait RemoteSession: Send + Sync {
    /// Invoke a remote operation by name with a JSON payload.
    async fn invoke(
        &self,
        operation: &str,
        payload: serde_json::Value,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, RemoteError>;
}

/// Probes for an out-of-process worker bound to a workspace.
#[async_trait]
pub trait RemoteSessionProvider: Send + Sync {
    /// Try to acquire a session. `None` is not an error — it means the
    /// worker is unavailable or the feature is off, and the caller
    /// computes locally.
    async fn try_acquire(&self, workspace: &Workspace) -> Option<Box<dyn RemoteSession>>;
}

/// Resolve serialized descriptors back into live symbols of the local
/// snapshot, dropping any that no longer resolve.
pub(crate) fn rehydrate(
    workspace: &Workspace,
    declarations: Vec<WireDeclaration>,
) -> Vec<SymbolAndProjectId> {
    let mut out = Vec::with_capacity(declarations.len());
    for wire in declarations {
        match workspace.resolve_symbol(&wire.key, wire.project) {
            Some(symbol) => out.push(symbol),
            None => {
                tracing::trace!(
                    key = %wire.key,
                    project = %wire.project,
                    "dropping stale declaration from remote result"
                );
            }
        }
    }
    out
}

/// Declaration search through an acquired remote session.
pub struct RemoteStrategy {
    session: Box<dyn RemoteSession>,
}

impl RemoteStrategy {
    pub fn new(session: Box<dyn RemoteSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl DeclarationStrategy for RemoteStrategy {
    type Error = RemoteError;

    async fn find_declarations(
        &self,
        scope: &SearchScope,
        query: &SearchQuery,
        filter: SymbolFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<SymbolAndProjectId>, RemoteError> {
        let name = query
            .name()
            .ok_or_else(|| RemoteError::Protocol("query has no serializable name".into()))?;

        let request = DeclarationRequest {
            version: WIRE_VERSION,
            name: name.to_owned(),
            ignore_case: !query.is_case_sensitive(),
            filter,
            project: scope.project_id(),
        };
        let payload = serde_json::to_value(&request)?;

        let raw = self
            .session
            .invoke(FIND_DECLARATIONS_OP, payload, cancel)
            .await?;
        let response: DeclarationResponse = serde_json::from_value(raw)?;
        if response.version != WIRE_VERSION {
            return Err(RemoteError::VersionMismatch {
                expected: WIRE_VERSION,
                found: response.version,
            });
        }

        Ok(rehydrate(scope.workspace(), response.declarations))
    }
}
