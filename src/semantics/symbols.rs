//! Declared symbols, symbol filters, and per-project symbol tables.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::{Location, ProjectId};

/// The kind of a declared symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A namespace / package.
    Namespace,
    /// A type declaration (class, interface, enum, ...).
    Type,
    /// A member of a type (method, field, property, ...).
    Member,
    /// A parameter.
    Parameter,
    /// A local variable.
    Local,
    /// A label. Labels matter to disambiguation: a numeric-looking
    /// label reference is a symbol, never a literal.
    Label,
}

impl SymbolKind {
    /// Bit used by [`SymbolFilter`].
    fn bit(self) -> u16 {
        match self {
            SymbolKind::Namespace => 1 << 0,
            SymbolKind::Type => 1 << 1,
            SymbolKind::Member => 1 << 2,
            SymbolKind::Parameter => 1 << 3,
            SymbolKind::Local => 1 << 4,
            SymbolKind::Label => 1 << 5,
        }
    }
}

/// A set of symbol kinds narrowing which declarations qualify.
///
/// Serialized as its raw bits in the remote wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolFilter(u16);

impl SymbolFilter {
    /// Matches nothing.
    pub const NONE: SymbolFilter = SymbolFilter(0);
    /// Namespaces only.
    pub const NAMESPACE: SymbolFilter = SymbolFilter(1 << 0);
    /// Types only.
    pub const TYPE: SymbolFilter = SymbolFilter(1 << 1);
    /// Members only.
    pub const MEMBER: SymbolFilter = SymbolFilter(1 << 2);
    /// Types and members.
    pub const TYPE_AND_MEMBER: SymbolFilter = SymbolFilter((1 << 1) | (1 << 2));
    /// Every kind.
    pub const ALL: SymbolFilter = SymbolFilter(u16::MAX);

    /// Whether `kind` is included in this filter.
    pub fn includes(self, kind: SymbolKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// The union of two filters.
    pub fn union(self, other: SymbolFilter) -> SymbolFilter {
        SymbolFilter(self.0 | other.0)
    }
}

/// The stable identity of a declared symbol.
///
/// Assigned by the host (typically a qualified-name moniker). Keys are
/// what crosses the remote boundary; rehydration resolves a key back to
/// a live [`DeclaredSymbol`] in the local snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolKey(SmolStr);

impl SymbolKey {
    pub fn new(key: impl Into<SmolStr>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A symbol declared in some compilation.
///
/// Immutable once built. Partial declarations may carry several
/// locations; `overrides` lists the keys this declaration overrides or
/// implements, which drives implementations search.
#[derive(Clone, Debug)]
pub struct DeclaredSymbol {
    /// Stable identity.
    pub key: SymbolKey,
    /// Unqualified name, matched against search queries.
    pub name: SmolStr,
    /// Display text for definition items (usually the qualified name).
    pub display: SmolStr,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Declaration sites.
    pub locations: Vec<Location>,
    /// Key of the containing symbol, if nested.
    pub container: Option<SymbolKey>,
    /// Keys of symbols this declaration overrides or implements.
    pub overrides: Vec<SymbolKey>,
    /// Whether the declaration has a navigable source location.
    pub navigable: bool,
}

impl DeclaredSymbol {
    /// A navigable symbol with a single declaration site.
    pub fn new(
        key: SymbolKey,
        name: impl Into<SmolStr>,
        kind: SymbolKind,
        location: Location,
    ) -> Self {
        let name = name.into();
        Self {
            display: name.clone(),
            key,
            name,
            kind,
            locations: vec![location],
            container: None,
            overrides: Vec::new(),
            navigable: true,
        }
    }

    /// Set the display text.
    pub fn with_display(mut self, display: impl Into<SmolStr>) -> Self {
        self.display = display.into();
        self
    }

    /// Record the containing symbol.
    pub fn with_container(mut self, container: SymbolKey) -> Self {
        self.container = Some(container);
        self
    }

    /// Record an overridden/implemented symbol.
    pub fn with_override(mut self, overridden: SymbolKey) -> Self {
        self.overrides.push(overridden);
        self
    }

    /// Mark the declaration as having no navigable source (e.g. it came
    /// from metadata).
    pub fn non_navigable(mut self) -> Self {
        self.navigable = false;
        self
    }
}

/// The compiled symbol table of one project.
///
/// Flat and insertion-ordered: nested declarations sit in the same table
/// as top-level ones (their nesting is recorded via `container`), so
/// walking every declared symbol is plain iteration and per-project
/// declaration order is table order.
#[derive(Debug, Default)]
pub struct Compilation {
    symbols: Vec<Arc<DeclaredSymbol>>,
    by_key: FxHashMap<SymbolKey, usize>,
}

impl Compilation {
    pub fn new(symbols: impl IntoIterator<Item = DeclaredSymbol>) -> Self {
        let symbols: Vec<Arc<DeclaredSymbol>> =
            symbols.into_iter().map(Arc::new).collect();
        let by_key = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key.clone(), i))
            .collect();
        Self { symbols, by_key }
    }

    /// Every declared symbol, top-level and nested, in table order.
    pub fn declared_symbols(&self) -> impl Iterator<Item = &Arc<DeclaredSymbol>> {
        self.symbols.iter()
    }

    /// Resolve a key to its live declaration, if it still exists in this
    /// snapshot.
    pub fn resolve(&self, key: &SymbolKey) -> Option<&Arc<DeclaredSymbol>> {
        self.by_key.get(key).map(|&i| &self.symbols[i])
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// A resolved symbol bound to the project whose compilation resolved it.
///
/// The same symbol identity is only meaningful relative to a project's
/// compilation context, so the pair travels together. Equality is by
/// (key, project): a locally computed instance and one rehydrated from a
/// remote result are indistinguishable.
#[derive(Clone, Debug)]
pub struct SymbolAndProjectId {
    /// The resolved symbol.
    pub symbol: Arc<DeclaredSymbol>,
    /// The project it was resolved in.
    pub project: ProjectId,
}

impl SymbolAndProjectId {
    pub fn new(symbol: Arc<DeclaredSymbol>, project: ProjectId) -> Self {
        Self { symbol, project }
    }

    pub fn key(&self) -> &SymbolKey {
        &self.symbol.key
    }
}

impl PartialEq for SymbolAndProjectId {
    fn eq(&self, other: &Self) -> bool {
        self.symbol.key == other.symbol.key && self.project == other.project
    }
}

impl Eq for SymbolAndProjectId {}

impl std::hash::Hash for SymbolAndProjectId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbol.key.hash(state);
        self.project.hash(state);
    }
}
