//! Definition identity tracking across pipeline phases.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;

use super::{DefinitionItem, DefinitionKey, ReferenceItem, UsageSink};

/// The definitions found so far in a run, keyed by identity and kept in
/// discovery order.
#[derive(Default)]
pub struct DefinitionTracker {
    seen: Mutex<IndexMap<DefinitionKey, Arc<DefinitionItem>>>,
}

impl DefinitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition. Returns `true` the first time its key is
    /// seen.
    pub fn insert(&self, definition: &Arc<DefinitionItem>) -> bool {
        self.seen
            .lock()
            .insert(definition.key.clone(), definition.clone())
            .is_none()
    }

    /// Snapshot of all definitions recorded so far, in discovery order.
    pub fn definitions(&self) -> Vec<Arc<DefinitionItem>> {
        self.seen.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}

/// A sink wrapper that records definitions in a tracker and forwards
/// each one downstream at most once.
pub struct TrackingSink<'a> {
    inner: &'a dyn UsageSink,
    tracker: &'a DefinitionTracker,
}

impl<'a> TrackingSink<'a> {
    pub fn new(inner: &'a dyn UsageSink, tracker: &'a DefinitionTracker) -> Self {
        Self { inner, tracker }
    }
}

#[async_trait]
impl UsageSink for TrackingSink<'_> {
    async fn set_search_title(&self, title: &str) {
        self.inner.set_search_title(title).await;
    }

    async fn report_message(&self, message: &str) {
        self.inner.report_message(message).await;
    }

    async fn on_definition_found(&self, definition: Arc<DefinitionItem>) {
        if self.tracker.insert(&definition) {
            self.inner.on_definition_found(definition).await;
        }
    }

    async fn on_reference_found(&self, reference: ReferenceItem) {
        self.inner.on_reference_found(reference).await;
    }
}
