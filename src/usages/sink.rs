//! The streaming progress sink.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{DefinitionItem, ReferenceItem};

/// The callback interface through which search results stream out.
///
/// All methods are fire-and-forget from the engine's perspective; a sink
/// that needs ordering sequences its own deliveries. Engines report a
/// definition before any of its references.
#[async_trait]
pub trait UsageSink: Send + Sync {
    /// Title describing the running search (e.g. `'Foo' references`).
    async fn set_search_title(&self, title: &str);

    /// An informational, user-facing message (e.g. nothing found at the
    /// caret). Not an error.
    async fn report_message(&self, message: &str);

    /// A definition was discovered.
    async fn on_definition_found(&self, definition: Arc<DefinitionItem>);

    /// A reference to a previously reported definition was discovered.
    async fn on_reference_found(&self, reference: ReferenceItem);
}

/// One event of a search run, as delivered by [`ChannelSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UsageEvent {
    SearchTitle(String),
    Message(String),
    Definition(Arc<DefinitionItem>),
    Reference(ReferenceItem),
}

/// A sink backed by a bounded channel.
///
/// Decouples producer cancellation from consumer backpressure: the
/// engine suspends when the consumer lags, and a dropped receiver simply
/// discards further events — aborting a search is the cancellation
/// token's job, not the channel's.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<UsageEvent>,
}

/// Create a bounded channel sink and its event stream.
pub fn usage_channel(capacity: usize) -> (ChannelSink, mpsc::Receiver<UsageEvent>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelSink { tx }, rx)
}

#[async_trait]
impl UsageSink for ChannelSink {
    async fn set_search_title(&self, title: &str) {
        let _ = self.tx.send(UsageEvent::SearchTitle(title.to_owned())).await;
    }

    async fn report_message(&self, message: &str) {
        let _ = self.tx.send(UsageEvent::Message(message.to_owned())).await;
    }

    async fn on_definition_found(&self, definition: Arc<DefinitionItem>) {
        let _ = self.tx.send(UsageEvent::Definition(definition)).await;
    }

    async fn on_reference_found(&self, reference: ReferenceItem) {
        let _ = self.tx.send(UsageEvent::Reference(reference)).await;
    }
}
