//! Tokens and literal values.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use text_size::TextRange;

/// Classification of a token, as reported by the host front end.
///
/// Decimal literals are a distinct kind: the literal index only supports
/// 64-bit keys, so decimal values never participate in literal search
/// and must be distinguishable from ordinary numeric literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier (candidate for symbol reference search).
    Identifier,
    /// A language keyword.
    Keyword,
    /// An integer or floating-point literal.
    NumericLiteral,
    /// An arbitrary-precision decimal literal (excluded from literal search).
    DecimalLiteral,
    /// A string literal.
    StringLiteral,
    /// A character literal.
    CharacterLiteral,
    /// Operators, delimiters, and other punctuation.
    Punctuation,
    /// Anything else (trivia the host chose to surface, etc.).
    Other,
}

/// The value of a literal token, keyed for the literal index.
///
/// Every variant fits a 64-bit key. Floats are stored as their bit
/// pattern so the type stays `Eq + Hash` and matching is raw value
/// equality, exactly what the index does. Decimal values have no
/// representation here by design.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralValue {
    /// An integer value.
    Number(i64),
    /// A floating-point value, stored as `f64::to_bits`.
    Float(u64),
    /// A string value.
    String(SmolStr),
    /// A character value.
    Character(char),
}

impl LiteralValue {
    /// Key a float by its bit pattern.
    pub fn float(value: f64) -> Self {
        Self::Float(value.to_bits())
    }

    /// Recover the float value from a `Float` key.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

/// A single token of a document, as materialized by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Source text of the token.
    pub text: SmolStr,
    /// Byte range within the document.
    pub range: TextRange,
    /// Literal value, for literal tokens the index can key.
    ///
    /// `None` for non-literals and for decimal literals.
    pub value: Option<LiteralValue>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
            value: None,
        }
    }

    /// Attach a literal value.
    pub fn with_value(mut self, value: LiteralValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether this token is an identifier with the given text.
    pub fn is_identifier(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }
}
