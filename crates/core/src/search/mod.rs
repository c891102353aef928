//! Search primitives: scored results and deterministic ranking.

/// Descending-score ordering with ascending-index tie-break, full or top-k.
pub mod ranking;
/// `SimilarityResult`: a corpus index with its score.
pub mod types;

pub use ranking::{rank, top_k};
pub use types::SimilarityResult;
