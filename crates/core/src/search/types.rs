//! Scored result types for similarity queries.

use serde::{Deserialize, Serialize};

/// A corpus position paired with its similarity to a query.
///
/// The `similarity` range depends on the measure that produced it:
/// - **Jaccard**: \[0, 1\], rounded to 4 decimals
/// - **Frequency-dot**: \[0, ∞), unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Position of the document in the corpus it was scored against.
    pub index: usize,
    /// Similarity score (higher = more similar).
    pub similarity: f64,
}

impl SimilarityResult {
    /// Creates a result for corpus position `index`.
    pub fn new(index: usize, similarity: f64) -> Self {
        Self { index, similarity }
    }
}
