//! Search layer tests
//!
//! Tests for:
//! - Local declaration search (query/filter semantics)
//! - Remote dispatch, fallback, and rehydration
//! - Streaming symbol reference search
//! - Streaming literal reference search

pub mod tests_literals;
