//! The find-usages orchestrator.
//!
//! Three phases in strict order: disambiguate what sits under the caret
//! (literal vs symbol), run the selected primary search to completion,
//! then hand the found definitions to external augmenters whose
//! contributions are reported strictly afterward.

use std::sync::Arc;

use async_trait::async_trait;
use smol_str::SmolStr;
use text_size::TextSize;
use tokio_util::sync::CancellationToken;

use crate::base::{DocumentId, ProjectId};
use crate::search::{
    ReferenceSearchOptions, SearchError, find_literal_references, find_references,
};
use crate::semantics::{SymbolAndProjectId, SymbolKey, SymbolKind};
use crate::syntax::{DefaultSyntaxFacts, LiteralValue, SyntaxFacts};
use crate::workspace::{Project, Workspace};

use super::items::DefinitionItem;
use super::sink::UsageSink;
use super::tracker::{DefinitionTracker, TrackingSink};

/// Reported when the caret position yields neither a symbol nor a
/// literal. A normal outcome, not a fault.
pub const NO_USAGES_MESSAGE: &str = "No usages found at the current caret position.";

/// Reported when the symbol under the caret is not the kind of thing
/// that can have implementations.
pub const CANNOT_NAVIGATE_TO_IMPLEMENTATIONS_MESSAGE: &str =
    "Cannot navigate to implementations from the current caret position.";

/// Search title for a references run.
pub fn references_search_title(display: &str) -> String {
    format!("'{display}' references")
}

/// Search title for an implementations run.
pub fn implementations_search_title(display: &str) -> String {
    format!("Implementations of '{display}'")
}

/// Reported when a symbol was searchable but nothing implements it.
pub fn no_implementations_message(display: &str) -> String {
    format!("'{display}' has no implementations.")
}

/// Maps a resolved symbol to the symbol that should actually be
/// searched (e.g. a metadata symbol mapped back to its source
/// declaration). `None` means the symbol cannot be searched.
#[async_trait]
pub trait SymbolMapper: Send + Sync {
    async fn map(
        &self,
        symbol: SymbolAndProjectId,
        workspace: &Workspace,
    ) -> Option<SymbolAndProjectId>;
}

/// A third-party definition provider.
///
/// Runs strictly after primary search, sees the definitions found so
/// far, and may contribute additional definitions derived from them
/// (e.g. alternate representations). Contributions are reported after
/// all primary results, never interleaved.
#[async_trait]
pub trait DefinitionAugmenter: Send + Sync {
    async fn augment(
        &self,
        definitions: &[Arc<DefinitionItem>],
        cancel: &CancellationToken,
    ) -> Vec<DefinitionItem>;
}

/// What disambiguation decided sits under the caret.
enum CaretTarget {
    Literal { value: LiteralValue, title: SmolStr },
    Symbol(SymbolKey),
    Nothing,
}

/// What an implementations search concluded.
enum ImplementationsOutcome {
    /// The symbol kind cannot have implementations; there is nothing to
    /// search.
    NotSearchable,
    /// The search ran and found nothing.
    NoImplementations,
    /// Implementing declarations were found.
    Found(Vec<SymbolAndProjectId>),
}

/// Composes symbol resolution, literal-vs-symbol disambiguation, the
/// reference engines, and augmentation hooks into one ordered pipeline.
///
/// All collaborators are constructor-injected; nothing is looked up from
/// ambient state.
pub struct UsagesOrchestrator {
    augmenters: Vec<Arc<dyn DefinitionAugmenter>>,
    symbol_mapper: Option<Arc<dyn SymbolMapper>>,
    facts: Arc<dyn SyntaxFacts>,
    options: ReferenceSearchOptions,
}

impl Default for UsagesOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl UsagesOrchestrator {
    pub fn new() -> Self {
        Self {
            augmenters: Vec::new(),
            symbol_mapper: None,
            facts: Arc::new(DefaultSyntaxFacts),
            options: ReferenceSearchOptions::default(),
        }
    }

    /// Add an external definition provider. Providers run in the order
    /// they were added.
    pub fn with_augmenter(mut self, augmenter: Arc<dyn DefinitionAugmenter>) -> Self {
        self.augmenters.push(augmenter);
        self
    }

    /// Route resolved symbols through a mapper before searching.
    pub fn with_symbol_mapper(mut self, mapper: Arc<dyn SymbolMapper>) -> Self {
        self.symbol_mapper = Some(mapper);
        self
    }

    /// Override the language's token classification.
    pub fn with_facts(mut self, facts: Arc<dyn SyntaxFacts>) -> Self {
        self.facts = facts;
        self
    }

    /// Override the reference engine options.
    pub fn with_options(mut self, options: ReferenceSearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Find all usages of whatever sits at `offset` in `document`,
    /// streaming results through `sink`.
    ///
    /// Nothing under the caret is reported as an informational message
    /// and returns `Ok`; only invalid input and cancellation are errors.
    pub async fn find_usages(
        &self,
        workspace: &Arc<Workspace>,
        project: ProjectId,
        document: DocumentId,
        offset: TextSize,
        sink: &dyn UsageSink,
        cancel: &CancellationToken,
    ) -> Result<(), SearchError> {
        let project_ref = workspace
            .project(project)
            .ok_or(SearchError::InvalidInput("project is not in the workspace"))?
            .clone();
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let tracker = DefinitionTracker::new();
        let tracking = TrackingSink::new(sink, &tracker);

        // Phase 1: disambiguation.
        let target = self.classify(&project_ref, document, offset).await;
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        // Phase 2: primary search, run to completion.
        match target {
            CaretTarget::Literal { value, title } => {
                tracking
                    .set_search_title(&references_search_title(&title))
                    .await;
                find_literal_references(&value, &title, workspace, &tracking, &self.options, cancel)
                    .await?;
            }
            CaretTarget::Symbol(key) => {
                let Some(symbol) = self.searchable_symbol(workspace, &key, project).await else {
                    sink.report_message(NO_USAGES_MESSAGE).await;
                    return Ok(());
                };
                tracking
                    .set_search_title(&references_search_title(&symbol.symbol.display))
                    .await;
                find_references(&symbol, workspace, &tracking, &self.options, cancel).await?;
            }
            CaretTarget::Nothing => {
                sink.report_message(NO_USAGES_MESSAGE).await;
                return Ok(());
            }
        }

        // Phase 3: augmentation, strictly after primary results. Each
        // augmenter sees everything tracked so far, including earlier
        // augmenters' contributions.
        for augmenter in &self.augmenters {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
            let found = tracker.definitions();
            for definition in augmenter.augment(&found, cancel).await {
                tracking.on_definition_found(Arc::new(definition)).await;
            }
        }
        Ok(())
    }

    /// Find declarations overriding or implementing the symbol at
    /// `offset`, following the same reporting pattern as
    /// [`Self::find_usages`].
    ///
    /// Two distinct "no implementations" outcomes are preserved: a
    /// symbol that cannot be searched for implementations at all, and a
    /// searchable symbol that simply has none.
    pub async fn find_implementations(
        &self,
        workspace: &Arc<Workspace>,
        project: ProjectId,
        document: DocumentId,
        offset: TextSize,
        sink: &dyn UsageSink,
        cancel: &CancellationToken,
    ) -> Result<(), SearchError> {
        let project_ref = workspace
            .project(project)
            .ok_or(SearchError::InvalidInput("project is not in the workspace"))?
            .clone();
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let Some(key) = self.symbol_key_at(&project_ref, document, offset).await else {
            sink.report_message(NO_USAGES_MESSAGE).await;
            return Ok(());
        };
        let Some(target) = self.searchable_symbol(workspace, &key, project).await else {
            sink.report_message(NO_USAGES_MESSAGE).await;
            return Ok(());
        };
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        match find_implementing_declarations(&target, workspace) {
            ImplementationsOutcome::NotSearchable => {
                sink.report_message(CANNOT_NAVIGATE_TO_IMPLEMENTATIONS_MESSAGE)
                    .await;
            }
            ImplementationsOutcome::NoImplementations => {
                sink.report_message(&no_implementations_message(&target.symbol.display))
                    .await;
            }
            ImplementationsOutcome::Found(implementations) => {
                sink.set_search_title(&implementations_search_title(&target.symbol.display))
                    .await;
                let tracker = DefinitionTracker::new();
                let tracking = TrackingSink::new(sink, &tracker);
                for implementation in implementations {
                    if cancel.is_cancelled() {
                        return Err(SearchError::Cancelled);
                    }
                    tracking
                        .on_definition_found(Arc::new(DefinitionItem::from_symbol(&implementation)))
                        .await;
                }
            }
        }
        Ok(())
    }

    /// Decide whether the caret sits on a literal or a symbol.
    ///
    /// Literal mode requires a literal-candidate token (never decimal —
    /// the literal index has no key for decimals, so they fall through
    /// to symbol mode) whose resolved meaning is not a label: the host
    /// language surfaces numeric labels that must be treated as symbols.
    async fn classify(
        &self,
        project: &Arc<Project>,
        document: DocumentId,
        offset: TextSize,
    ) -> CaretTarget {
        let Some(tree) = project.services().syntax_tree(document).await else {
            return CaretTarget::Nothing;
        };
        let Some((index, token)) = tree.token_at(offset) else {
            return CaretTarget::Nothing;
        };

        let model = project.services().semantic_model(document).await;
        let meaning = match &model {
            Some(model) => model.resolve_token(document, index).await,
            None => None,
        };

        if self.facts.is_literal_candidate(token) && !self.facts.is_decimal_literal(token) {
            if let Some(value) = &token.value {
                let is_label = meaning.as_ref().is_some_and(|m| m.is_label);
                if !is_label {
                    return CaretTarget::Literal {
                        value: value.clone(),
                        title: token.text.clone(),
                    };
                }
            }
        }

        match meaning {
            Some(meaning) => CaretTarget::Symbol(meaning.key),
            None => CaretTarget::Nothing,
        }
    }

    /// The symbol key under the caret, ignoring literal candidacy
    /// (implementations mode has no literal path).
    async fn symbol_key_at(
        &self,
        project: &Arc<Project>,
        document: DocumentId,
        offset: TextSize,
    ) -> Option<SymbolKey> {
        let tree = project.services().syntax_tree(document).await?;
        let (index, _) = tree.token_at(offset)?;
        let model = project.services().semantic_model(document).await?;
        let meaning = model.resolve_token(document, index).await?;
        Some(meaning.key)
    }

    /// Resolve a key in the local snapshot and route it through the
    /// symbol mapper, if one is configured.
    async fn searchable_symbol(
        &self,
        workspace: &Arc<Workspace>,
        key: &SymbolKey,
        project: ProjectId,
    ) -> Option<SymbolAndProjectId> {
        let symbol = workspace.resolve_symbol(key, project)?;
        match &self.symbol_mapper {
            Some(mapper) => mapper.map(symbol, workspace).await,
            None => Some(symbol),
        }
    }
}

impl std::fmt::Debug for UsagesOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsagesOrchestrator")
            .field("augmenters", &self.augmenters.len())
            .field("symbol_mapper", &self.symbol_mapper.is_some())
            .field("options", &self.options)
            .finish()
    }
}

/// Walk every compilation for declarations whose `overrides` name the
/// target.
fn find_implementing_declarations(
    target: &SymbolAndProjectId,
    workspace: &Workspace,
) -> ImplementationsOutcome {
    if !matches!(target.symbol.kind, SymbolKind::Type | SymbolKind::Member) {
        return ImplementationsOutcome::NotSearchable;
    }
    let mut found = Vec::new();
    for project in workspace.projects() {
        for symbol in project.compilation().declared_symbols() {
            if symbol.overrides.contains(target.key()) {
                found.push(SymbolAndProjectId::new(symbol.clone(), project.id()));
            }
        }
    }
    if found.is_empty() {
        ImplementationsOutcome::NoImplementations
    } else {
        ImplementationsOutcome::Found(found)
    }
}
