//! Language-specific token classification.

use super::{Token, TokenKind};

/// Token classification predicates supplied by the host language.
///
/// A capability interface, not a concrete type: the default methods
/// classify by [`TokenKind`], which is right for most hosts, but a
/// language with unusual literal syntax can override any predicate.
pub trait SyntaxFacts: Send + Sync {
    /// Is this an integer or floating-point literal token?
    fn is_numeric_literal(&self, token: &Token) -> bool {
        token.kind == TokenKind::NumericLiteral
    }

    /// Is this an arbitrary-precision decimal literal token?
    fn is_decimal_literal(&self, token: &Token) -> bool {
        token.kind == TokenKind::DecimalLiteral
    }

    /// Is this a string literal token?
    fn is_string_literal(&self, token: &Token) -> bool {
        token.kind == TokenKind::StringLiteral
    }

    /// Is this a character literal token?
    fn is_character_literal(&self, token: &Token) -> bool {
        token.kind == TokenKind::CharacterLiteral
    }

    /// Can this token drive literal-mode search?
    ///
    /// Numeric, string, and character literals qualify. Decimals never
    /// do: the literal index has no 64-bit key for them, so they fall
    /// through to symbol mode.
    fn is_literal_candidate(&self, token: &Token) -> bool {
        self.is_numeric_literal(token)
            || self.is_string_literal(token)
            || self.is_character_literal(token)
    }
}

/// Classification purely by [`TokenKind`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSyntaxFacts;

impl SyntaxFacts for DefaultSyntaxFacts {}
