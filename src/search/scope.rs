//! Search scopes: a whole workspace or a single project within it.

use std::sync::Arc;

use crate::base::ProjectId;
use crate::workspace::{Project, Workspace};

use super::SearchError;

/// The extent of a declaration search.
#[derive(Clone, Debug)]
pub enum SearchScope {
    /// Every project in the workspace.
    Workspace(Arc<Workspace>),
    /// One project of the workspace.
    Project(Arc<Workspace>, ProjectId),
}

impl SearchScope {
    /// The workspace snapshot this scope is bound to.
    pub fn workspace(&self) -> &Arc<Workspace> {
        match self {
            Self::Workspace(workspace) | Self::Project(workspace, _) => workspace,
        }
    }

    /// The single project id, for project-scoped searches.
    pub fn project_id(&self) -> Option<ProjectId> {
        match self {
            Self::Workspace(_) => None,
            Self::Project(_, id) => Some(*id),
        }
    }

    /// Fail fast if the scope names a project the workspace does not
    /// contain.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self {
            Self::Workspace(_) => Ok(()),
            Self::Project(workspace, id) => workspace
                .project(*id)
                .map(|_| ())
                .ok_or(SearchError::InvalidInput("scope project is not in the workspace")),
        }
    }

    /// The projects this scope covers.
    pub fn projects(&self) -> Result<Vec<Arc<Project>>, SearchError> {
        match self {
            Self::Workspace(workspace) => Ok(workspace.projects().to_vec()),
            Self::Project(workspace, id) => workspace
                .project(*id)
                .cloned()
                .map(|project| vec![project])
                .ok_or(SearchError::InvalidInput("scope project is not in the workspace")),
        }
    }
}
