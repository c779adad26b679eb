//! Semantic layer: the symbol model and the capability traits through
//! which the engine consumes a host front end's compilation results.
//!
//! Computing compilations and semantic models is out of scope for this
//! crate. The host builds a [`Compilation`] per project (a flat,
//! insertion-ordered symbol table) and implements [`LanguageServices`] /
//! [`SemanticModel`]; everything here is read-only from the engine's
//! point of view.

mod model;
mod symbols;

pub use model::{LanguageServices, SemanticModel, TokenMeaning};
pub use symbols::{
    Compilation, DeclaredSymbol, SymbolAndProjectId, SymbolFilter, SymbolKey, SymbolKind,
};
