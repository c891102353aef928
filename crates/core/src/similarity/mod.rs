//! Similarity measures between a query bag and a document bag.
//!
//! Two measures are available:
//! - **Jaccard**: unweighted token-set overlap, rounded to 4 decimals, in \[0, 1\]
//! - **Frequency-dot**: dot product of L1-normalized term frequencies, unrounded,
//!   non-negative (exposed by older callers under the name "cosine")
//!
//! Higher is more similar for both.

/// L1-normalized term-frequency dot product.
pub mod frequency_dot;
/// Token-set Jaccard similarity.
pub mod jaccard;

pub use frequency_dot::frequency_dot;
pub use jaccard::jaccard;

use crate::bag::Bag;
use crate::error::ParseMeasureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity measure used to score a query against the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    /// Token-set overlap `|A ∩ B| / |A ∪ B|`. Range: \[0, 1\].
    Jaccard,
    /// `Σ q̂(t) · d̂(t)` over query tokens with L1-normalized frequencies. Range: \[0, ∞).
    #[serde(alias = "cosine")]
    FrequencyDot,
}

impl SimilarityMeasure {
    /// Score `query` against `target` with this measure.
    pub fn score(&self, query: &Bag, target: &Bag) -> f64 {
        match self {
            SimilarityMeasure::Jaccard => jaccard(query, target),
            SimilarityMeasure::FrequencyDot => frequency_dot(query, target),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMeasure::Jaccard => "jaccard",
            SimilarityMeasure::FrequencyDot => "frequency_dot",
        }
    }
}

impl fmt::Display for SimilarityMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMeasure {
    type Err = ParseMeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jaccard" => Ok(SimilarityMeasure::Jaccard),
            "frequency_dot" | "frequency-dot" | "cosine" => Ok(SimilarityMeasure::FrequencyDot),
            _ => Err(ParseMeasureError(s.to_string())),
        }
    }
}
