//! Per-document syntax trees with cheap occurrence indexes.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::DocumentId;

use super::{LiteralValue, Token, TokenKind};

/// The materialized token stream of one document, plus two lookup sets
/// built at construction time.
///
/// The sets answer "could this document possibly reference X" before any
/// semantic model is computed: reference search skips a document unless
/// its identifier set contains the target name, and literal search skips
/// it unless its literal set contains the target value. False positives
/// are fine (full resolution follows); false negatives are not.
#[derive(Debug)]
pub struct SyntaxTree {
    document: DocumentId,
    tokens: Vec<Token>,
    identifiers: FxHashSet<SmolStr>,
    literals: FxHashSet<LiteralValue>,
}

impl SyntaxTree {
    /// Build a tree from the host's token stream, constructing the
    /// occurrence indexes in one pass.
    pub fn new(document: DocumentId, tokens: Vec<Token>) -> Self {
        let mut identifiers = FxHashSet::default();
        let mut literals = FxHashSet::default();
        for token in &tokens {
            match token.kind {
                TokenKind::Identifier => {
                    identifiers.insert(token.text.clone());
                }
                _ => {
                    if let Some(value) = &token.value {
                        literals.insert(value.clone());
                    }
                }
            }
        }
        Self {
            document,
            tokens,
            identifiers,
            literals,
        }
    }

    /// The document this tree was materialized from.
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The first token whose range contains `offset`, with its index.
    ///
    /// A token's end offset is exclusive, except that a caret sitting at
    /// the very end of a token still hits it (the caret-after-token case
    /// every editor produces).
    pub fn token_at(&self, offset: TextSize) -> Option<(usize, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .find(|(_, t)| t.range.start() <= offset && offset <= t.range.end())
    }

    /// Whether any identifier token in this document has exactly `name`
    /// as its text.
    pub fn mentions_identifier(&self, name: &str) -> bool {
        self.identifiers.contains(name)
    }

    /// Whether any literal token in this document carries `value`.
    pub fn contains_literal(&self, value: &LiteralValue) -> bool {
        self.literals.contains(value)
    }
}
