//! In-memory workspace fixtures.
//!
//! `ProjectBuilder` assembles a project from declared symbols, token
//! streams, and a token→meaning table, backing the `LanguageServices` /
//! `SemanticModel` capability traits with plain hash maps. The semantic
//! model counts its resolution calls so tests can assert which search
//! paths touched it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use text_size::TextRange;

use xref::base::{DocumentId, Location, ProjectId};
use xref::semantics::{
    Compilation, DeclaredSymbol, LanguageServices, SemanticModel, SymbolKey, SymbolKind,
    TokenMeaning,
};
use xref::syntax::{LiteralValue, SyntaxTree, Token, TokenKind};
use xref::workspace::{Project, Workspace};

pub fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

pub fn loc(doc: u32, start: u32, end: u32) -> Location {
    Location::new(DocumentId::new(doc), range(start, end))
}

pub fn ident(text: &str, start: u32) -> Token {
    Token::new(
        TokenKind::Identifier,
        text,
        range(start, start + text.len() as u32),
    )
}

pub fn number(text: &str, value: i64, start: u32) -> Token {
    Token::new(
        TokenKind::NumericLiteral,
        text,
        range(start, start + text.len() as u32),
    )
    .with_value(LiteralValue::Number(value))
}

pub fn float_lit(text: &str, value: f64, start: u32) -> Token {
    Token::new(
        TokenKind::NumericLiteral,
        text,
        range(start, start + text.len() as u32),
    )
    .with_value(LiteralValue::float(value))
}

pub fn string_lit(text: &str, value: &str, start: u32) -> Token {
    Token::new(
        TokenKind::StringLiteral,
        text,
        range(start, start + text.len() as u32),
    )
    .with_value(LiteralValue::String(value.into()))
}

pub fn decimal(text: &str, start: u32) -> Token {
    Token::new(
        TokenKind::DecimalLiteral,
        text,
        range(start, start + text.len() as u32),
    )
}

pub fn symbol(key: &str, name: &str, kind: SymbolKind, doc: u32, start: u32) -> DeclaredSymbol {
    DeclaredSymbol::new(
        SymbolKey::new(key),
        name,
        kind,
        loc(doc, start, start + name.len() as u32),
    )
}

/// Semantic model backed by a token→meaning table, counting lookups.
pub struct FixtureModel {
    meanings: FxHashMap<(DocumentId, usize), TokenMeaning>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SemanticModel for FixtureModel {
    async fn resolve_token(
        &self,
        document: DocumentId,
        token_index: usize,
    ) -> Option<TokenMeaning> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.meanings.get(&(document, token_index)).cloned()
    }
}

/// Language services backed by pre-built syntax trees and a
/// [`FixtureModel`].
pub struct FixtureServices {
    trees: FxHashMap<DocumentId, Arc<SyntaxTree>>,
    model: Arc<FixtureModel>,
}

#[async_trait]
impl LanguageServices for FixtureServices {
    async fn syntax_tree(&self, document: DocumentId) -> Option<Arc<SyntaxTree>> {
        self.trees.get(&document).cloned()
    }

    async fn semantic_model(&self, document: DocumentId) -> Option<Arc<dyn SemanticModel>> {
        self.trees.get(&document)?;
        Some(self.model.clone() as Arc<dyn SemanticModel>)
    }
}

/// Assembles one in-memory project.
pub struct ProjectBuilder {
    id: ProjectId,
    name: String,
    symbols: Vec<DeclaredSymbol>,
    documents: Vec<(DocumentId, Vec<Token>)>,
    meanings: FxHashMap<(DocumentId, usize), TokenMeaning>,
}

impl ProjectBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id: ProjectId::new(id),
            name: name.to_owned(),
            symbols: Vec::new(),
            documents: Vec::new(),
            meanings: FxHashMap::default(),
        }
    }

    pub fn symbol(mut self, symbol: DeclaredSymbol) -> Self {
        self.symbols.push(symbol);
        self
    }

    pub fn document(mut self, doc: u32, tokens: Vec<Token>) -> Self {
        self.documents.push((DocumentId::new(doc), tokens));
        self
    }

    /// Bind the meaning of token `token_index` in document `doc`.
    pub fn meaning(mut self, doc: u32, token_index: usize, meaning: TokenMeaning) -> Self {
        self.meanings
            .insert((DocumentId::new(doc), token_index), meaning);
        self
    }

    /// Build the project, returning it with the semantic-resolution call
    /// counter.
    pub fn build(self) -> (Project, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let trees: FxHashMap<DocumentId, Arc<SyntaxTree>> = self
            .documents
            .iter()
            .map(|(doc, tokens)| (*doc, Arc::new(SyntaxTree::new(*doc, tokens.clone()))))
            .collect();
        let document_ids: Vec<DocumentId> = self.documents.iter().map(|(doc, _)| *doc).collect();
        let services = FixtureServices {
            trees,
            model: Arc::new(FixtureModel {
                meanings: self.meanings,
                calls: calls.clone(),
            }),
        };
        let project = Project::new(
            self.id,
            self.name,
            document_ids,
            Arc::new(Compilation::new(self.symbols)),
            Arc::new(services),
        );
        (project, calls)
    }
}

pub fn workspace_of(projects: impl IntoIterator<Item = Project>) -> Arc<Workspace> {
    Arc::new(Workspace::new(projects))
}
