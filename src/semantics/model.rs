//! Capability traits through which the engine asks the host front end
//! for syntax trees and semantic models.

use std::sync::Arc;

use async_trait::async_trait;

use crate::base::DocumentId;
use crate::syntax::SyntaxTree;

use super::SymbolKey;

/// The resolved semantic meaning of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMeaning {
    /// The symbol the token refers to.
    pub key: SymbolKey,
    /// Whether the token is a label reference. Numeric-looking label
    /// tokens must route to symbol search, never literal search.
    pub is_label: bool,
}

impl TokenMeaning {
    pub fn new(key: SymbolKey) -> Self {
        Self {
            key,
            is_label: false,
        }
    }

    pub fn label(key: SymbolKey) -> Self {
        Self {
            key,
            is_label: true,
        }
    }
}

/// A semantic model for one or more documents of a project.
///
/// Resolution is async because computing bindings may be arbitrarily
/// expensive on the host side; the engine treats every call as a
/// suspension point.
#[async_trait]
pub trait SemanticModel: Send + Sync {
    /// Resolve the token at `token_index` of `document` to its meaning,
    /// or `None` if it binds to nothing.
    async fn resolve_token(&self, document: DocumentId, token_index: usize)
    -> Option<TokenMeaning>;
}

/// Per-project syntax and semantics accessors.
///
/// Both methods are suspension points (tree materialization and model
/// computation respectively). `None` means the host has nothing for the
/// document, and the engine skips it.
#[async_trait]
pub trait LanguageServices: Send + Sync {
    /// Materialize the syntax tree of a document.
    async fn syntax_tree(&self, document: DocumentId) -> Option<Arc<SyntaxTree>>;

    /// Compute the semantic model for a document.
    async fn semantic_model(&self, document: DocumentId) -> Option<Arc<dyn SemanticModel>>;
}
