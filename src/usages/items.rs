//! Immutable result items produced once per discovered usage.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{Location, ProjectId};
use crate::semantics::{SymbolAndProjectId, SymbolKey};
use crate::syntax::LiteralValue;

/// The identity of a definition item.
///
/// Later pipeline phases refer to "all definitions found so far" by this
/// key, and each definition is reported to a sink at most once per key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefinitionKey {
    /// A resolved symbol in a project's compilation.
    Symbol { key: SymbolKey, project: ProjectId },
    /// A literal value (literal-mode search).
    Literal(LiteralValue),
    /// A definition contributed by an external augmenter.
    External(SmolStr),
}

/// An immutable record of a found declaration, suitable for display and
/// navigation.
#[derive(Clone, Debug)]
pub struct DefinitionItem {
    /// Identity; equality and hashing use only this.
    pub key: DefinitionKey,
    /// Display text.
    pub display_text: SmolStr,
    /// Navigable declaration sites. Empty for literal definitions.
    pub locations: Vec<Location>,
    /// Whether navigation to this definition is possible.
    pub navigable: bool,
}

impl DefinitionItem {
    /// The definition item for a resolved symbol.
    pub fn from_symbol(symbol: &SymbolAndProjectId) -> Self {
        Self {
            key: DefinitionKey::Symbol {
                key: symbol.symbol.key.clone(),
                project: symbol.project,
            },
            display_text: symbol.symbol.display.clone(),
            locations: symbol.symbol.locations.clone(),
            navigable: symbol.symbol.navigable,
        }
    }

    /// The single, non-navigable definition item of a literal search.
    pub fn literal(title: SmolStr, value: LiteralValue) -> Self {
        Self {
            key: DefinitionKey::Literal(value),
            display_text: title,
            locations: Vec::new(),
            navigable: false,
        }
    }

    /// A definition contributed by an external augmenter.
    pub fn external(name: impl Into<SmolStr>, locations: Vec<Location>) -> Self {
        let name = name.into();
        Self {
            key: DefinitionKey::External(name.clone()),
            display_text: name,
            navigable: !locations.is_empty(),
            locations,
        }
    }
}

impl PartialEq for DefinitionItem {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for DefinitionItem {}

impl std::hash::Hash for DefinitionItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// An immutable record of a found reference to some definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceItem {
    /// The definition this reference belongs to.
    pub definition: Arc<DefinitionItem>,
    /// Where the reference occurs.
    pub location: Location,
}

impl ReferenceItem {
    pub fn new(definition: Arc<DefinitionItem>, location: Location) -> Self {
        Self {
            definition,
            location,
        }
    }
}
