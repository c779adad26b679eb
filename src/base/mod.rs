//! Foundation types for the xref engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ProjectId`], [`DocumentId`] - Interned identifiers
//! - [`Location`] - A navigable position (document + byte range)
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other xref modules.

mod ids;
mod location;

pub use ids::{DocumentId, ProjectId};
pub use location::Location;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
