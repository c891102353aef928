//! Global configuration constants for docsim.
//!
//! Scoring precision and ranking tuning parameters are defined here.
//! These are compile-time constants; the engine has no runtime configuration.

/// Number of decimal places Jaccard similarity is rounded to.
///
/// Scores are rounded half away from zero, so `2/3` becomes `0.6667`.
pub const JACCARD_DECIMAL_PLACES: i32 = 4;

/// Upper bound on the heap capacity pre-allocated by top-k ranking.
///
/// Larger `k` values still work; the heap simply grows past this hint.
pub const TOP_K_HEAP_CAPACITY_HINT: usize = 1_024;
