//! Workspace snapshots.
//!
//! A [`Workspace`] owns its [`Project`]s; each project owns a compiled
//! symbol table ([`crate::semantics::Compilation`]) and the capability
//! handle used to materialize syntax trees and semantic models for its
//! documents. A workspace handed to a search call is treated as
//! immutable for the duration of that call — invalidation and rebuild on
//! source change happen outside this crate.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{DocumentId, ProjectId};
use crate::semantics::{Compilation, LanguageServices, SymbolAndProjectId, SymbolKey};

/// One project of a workspace.
pub struct Project {
    id: ProjectId,
    name: SmolStr,
    documents: Vec<DocumentId>,
    compilation: Arc<Compilation>,
    services: Arc<dyn LanguageServices>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: impl Into<SmolStr>,
        documents: Vec<DocumentId>,
        compilation: Arc<Compilation>,
        services: Arc<dyn LanguageServices>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            documents,
            compilation,
            services,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project's documents, in host order.
    pub fn documents(&self) -> &[DocumentId] {
        &self.documents
    }

    /// The compiled symbol table.
    pub fn compilation(&self) -> &Arc<Compilation> {
        &self.compilation
    }

    /// Syntax/semantics accessors for this project's documents.
    pub fn services(&self) -> &Arc<dyn LanguageServices> {
        &self.services
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("documents", &self.documents.len())
            .field("symbols", &self.compilation.len())
            .finish()
    }
}

/// An immutable multi-project snapshot.
#[derive(Debug, Default)]
pub struct Workspace {
    projects: Vec<Arc<Project>>,
    by_id: FxHashMap<ProjectId, usize>,
}

impl Workspace {
    pub fn new(projects: impl IntoIterator<Item = Project>) -> Self {
        let projects: Vec<Arc<Project>> = projects.into_iter().map(Arc::new).collect();
        let by_id = projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id(), i))
            .collect();
        Self { projects, by_id }
    }

    /// All projects, in host order.
    pub fn projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    /// Look up a project by id.
    pub fn project(&self, id: ProjectId) -> Option<&Arc<Project>> {
        self.by_id.get(&id).map(|&i| &self.projects[i])
    }

    /// Resolve a symbol key against a project's compilation in this
    /// snapshot.
    ///
    /// This is the rehydration primitive: a serialized (key, project)
    /// pair from a remote result either resolves to a live symbol here
    /// or is dropped by the caller. `None` also covers an unknown
    /// project id, which happens when the snapshot changed under a
    /// remote round-trip.
    pub fn resolve_symbol(
        &self,
        key: &SymbolKey,
        project: ProjectId,
    ) -> Option<SymbolAndProjectId> {
        let project_ref = self.project(project)?;
        let symbol = project_ref.compilation().resolve(key)?;
        Some(SymbolAndProjectId::new(symbol.clone(), project))
    }
}
