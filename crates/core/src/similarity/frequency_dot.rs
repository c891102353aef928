//! Normalized term-frequency dot product.
//!
//! Each bag is L1-normalized (count divided by the bag's total token count)
//! and the score is the dot product over the query's tokens. There is no
//! division by vector magnitudes, so this is not cosine similarity and the
//! score is not capped at 1.

use crate::bag::Bag;

/// `Σ query_freq(t) * target_freq(t)` over every token `t` of `query`.
///
/// Tokens present only in `target` contribute nothing. An empty bag on either
/// side scores 0. Neither bag is modified; frequencies are derived per call.
pub fn frequency_dot(query: &Bag, target: &Bag) -> f64 {
    query
        .normalized()
        .map(|(token, query_freq)| query_freq * target.frequency(token))
        .sum()
}
