//! # xref-base
//!
//! Core library for workspace-wide declaration and reference search:
//! find every symbol matching a name query across a multi-project
//! workspace, and find every syntactic usage of a resolved symbol (or
//! literal value), optionally offloading declaration search to an
//! out-of-process worker with transparent in-process fallback.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! usages     → orchestrator, definition/reference items, progress sinks
//!   ↓
//! search     → query, scope, declaration dispatch (remote/local), reference engine
//!   ↓
//! workspace  → Workspace/Project snapshots
//!   ↓
//! semantics  → symbol model, compilation symbol table, capability traits
//!   ↓
//! syntax     → tokens, literal values, syntax trees, classification facts
//!   ↓
//! base       → ProjectId/DocumentId, Location, text ranges
//! ```
//!
//! The crate does not parse or compile anything itself: compilations,
//! syntax trees, and semantic models are produced by a host front end
//! and handed in through the capability traits in [`semantics`].

// ============================================================================
// MODULES (dependency order: base → syntax → semantics → workspace → search
// → usages)
// ============================================================================

/// Foundation types: ProjectId, DocumentId, Location
pub mod base;

/// Syntax: tokens, literal values, syntax trees, classification facts
pub mod syntax;

/// Semantics: symbol model, compilation symbol tables, capability traits
pub mod semantics;

/// Workspace: immutable project snapshots
pub mod workspace;

/// Search: name queries, search scopes, declaration dispatch, reference engine
pub mod search;

/// Usages: orchestrator, definition/reference items, progress sinks
pub mod usages;

// Re-export foundation types
pub use base::{DocumentId, Location, ProjectId, TextRange, TextSize};

// Re-export the types most callers need
pub use search::{
    DeclarationDispatcher, ReferenceSearchOptions, SearchError, SearchQuery, SearchScope,
};
pub use semantics::{SymbolAndProjectId, SymbolFilter, SymbolKind};
pub use usages::{DefinitionItem, ReferenceItem, UsageEvent, UsagesOrchestrator, usage_channel};
pub use workspace::{Project, Workspace};
