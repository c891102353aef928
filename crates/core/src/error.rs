//! Error types for corpus construction and measure parsing.
//!
//! Scoring never fails, and any sequence of strings makes a valid corpus, so
//! [`ConstructionError`] has no values.

use std::fmt;
use thiserror::Error;

/// Corpus input that cannot be processed.
///
/// A document list is always a value in Rust and every string (empty,
/// whitespace-only, or arbitrarily long) tokenizes to a bag, so there is
/// nothing to reject. The type is uninhabited: `Result<Corpus, ConstructionError>`
/// is always `Ok`, and callers can match it away with `match err {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {}

impl fmt::Display for ConstructionError {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for ConstructionError {}

/// A similarity measure name that does not match any known measure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown similarity measure '{0}' (expected 'jaccard' or 'frequency_dot')")]
pub struct ParseMeasureError(pub String);
