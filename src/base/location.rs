//! Navigable source locations.

use text_size::TextRange;

use super::DocumentId;

/// A position in the workspace: a document plus a byte range within it.
///
/// Produced once per discovered declaration or usage and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// The document containing the range.
    pub document: DocumentId,
    /// Byte range within the document.
    pub range: TextRange,
}

impl Location {
    pub fn new(document: DocumentId, range: TextRange) -> Self {
        Self { document, range }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}..{}",
            self.document,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )
    }
}
