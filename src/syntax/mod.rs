//! Syntax layer: tokens, literal values, and per-document syntax trees.
//!
//! The engine never lexes source text itself. A host front end produces
//! [`SyntaxTree`]s (token lists with cheap lookup indexes) and hands them
//! in through [`crate::semantics::LanguageServices`]. Language-specific
//! token classification goes through the [`SyntaxFacts`] capability trait
//! so the engine stays agnostic of the host language's literal syntax.

mod facts;
mod token;
mod tree;

pub use facts::{DefaultSyntaxFacts, SyntaxFacts};
pub use token::{LiteralValue, Token, TokenKind};
pub use tree::SyntaxTree;
