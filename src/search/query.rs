//! Name-matching queries over declared symbols.

use std::sync::Arc;

use smol_str::SmolStr;

/// A pure predicate over candidate symbol names.
///
/// Immutable; holds no mutable state. The `Custom` form carries an
/// arbitrary predicate and therefore has no serializable name — the
/// dispatcher never routes it remotely.
#[derive(Clone)]
pub enum SearchQuery {
    /// Case-sensitive exact name match.
    Exact(SmolStr),
    /// Case-insensitive name match.
    IgnoreCase(SmolStr),
    /// An arbitrary predicate over the candidate name.
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl SearchQuery {
    /// A case-sensitive query for `name`.
    pub fn exact(name: impl Into<SmolStr>) -> Self {
        Self::Exact(name.into())
    }

    /// A case-insensitive query for `name`.
    pub fn ignore_case(name: impl Into<SmolStr>) -> Self {
        Self::IgnoreCase(name.into())
    }

    /// A query matching any name the predicate accepts.
    pub fn custom(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    /// The target name, if this query has one. `None` for `Custom`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Exact(name) | Self::IgnoreCase(name) => Some(name.as_str()),
            Self::Custom(_) => None,
        }
    }

    /// Whether name matching is case-sensitive. Meaningless for
    /// `Custom` (reported as `true`).
    pub fn is_case_sensitive(&self) -> bool {
        !matches!(self, Self::IgnoreCase(_))
    }

    /// Whether `candidate` satisfies this query.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(name) => candidate == name.as_str(),
            Self::IgnoreCase(name) => candidate.to_lowercase() == name.to_lowercase(),
            Self::Custom(predicate) => predicate(candidate),
        }
    }
}

impl std::fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(name) => f.debug_tuple("Exact").field(name).finish(),
            Self::IgnoreCase(name) => f.debug_tuple("IgnoreCase").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
