//! Usages pipeline tests
//!
//! Tests for:
//! - Literal-vs-symbol disambiguation and mode exclusivity
//! - Primary search streaming and augmentation ordering
//! - Implementations mode and its distinct no-result outcomes
//! - The bounded channel sink

pub mod tests_channel_sink;
