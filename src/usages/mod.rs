//! The find-usages pipeline: immutable definition/reference items, the
//! streaming progress sink, and the orchestrator that composes
//! disambiguation, the reference engines, and third-party augmentation
//! into one ordered run.

mod items;
mod orchestrator;
mod sink;
mod tracker;

pub use items::{DefinitionItem, DefinitionKey, ReferenceItem};
pub use orchestrator::{
    CANNOT_NAVIGATE_TO_IMPLEMENTATIONS_MESSAGE, DefinitionAugmenter, NO_USAGES_MESSAGE,
    SymbolMapper, UsagesOrchestrator, implementations_search_title, no_implementations_message,
    references_search_title,
};
pub use sink::{ChannelSink, UsageEvent, UsageSink, usage_channel};
pub use tracker::{DefinitionTracker, TrackingSink};
