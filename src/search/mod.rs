//! The search layer: name queries, declaration search with remote
//! dispatch and local fallback, and the streaming reference engine.
//!
//! Declaration search routes through [`DeclarationDispatcher`]: a
//! capability probe picks [`RemoteStrategy`] when an out-of-process
//! session can be acquired and falls back to [`LocalStrategy`] on any
//! remote failure. The two strategies are observably equivalent for the
//! same scope/query/filter.
//!
//! Reference search never materializes a result list; it streams
//! definition/reference events through a [`crate::usages::UsageSink`].

mod declarations;
mod dispatch;
mod error;
mod literals;
mod query;
mod references;
pub mod remote;
mod scope;

pub use declarations::{LocalStrategy, add_matching_declarations};
pub use dispatch::{DeclarationDispatcher, DeclarationStrategy};
pub use error::{RemoteError, SearchError};
pub use literals::{LITERAL_TITLE_MAX, find_literal_references, literal_display_title};
pub use query::SearchQuery;
pub use references::{ReferenceSearchOptions, find_references};
pub use remote::{RemoteSession, RemoteSessionProvider, RemoteStrategy};
pub use scope::SearchScope;
