//! # docsim-core
//!
//! In-memory bag-of-words document similarity. A [`Corpus`] is built once from
//! a list of reference documents; each query is scored against every document
//! and returned as a ranked list of [`SimilarityResult`]s.
//!
//! Two measures are available:
//!
//! - **Jaccard** over distinct token sets, rounded to 4 decimals
//! - **Frequency-dot**: dot product of L1-normalized term frequencies
//!
//! ```text
//! text → tokenize → Bag ─┐
//!                        ├→ Jaccard / Frequency-dot → rank (score desc, index asc)
//! Corpus { Bag, .. } ────┘
//! ```
//!
//! The engine is synchronous and allocation-light, with no I/O. A built corpus
//! is immutable and can be queried from many threads at once.

/// Bag-of-words: tokenizer and token count bags.
pub mod bag;
/// Global configuration constants: scoring precision and ranking tuning.
pub mod config;
/// Reference corpus: construction and ranked similarity queries.
pub mod corpus;
/// Error types: corpus construction and measure parsing.
pub mod error;
/// Search primitives: scored results and deterministic ranking.
pub mod search;
/// Similarity measures: Jaccard and normalized frequency dot product.
pub mod similarity;

pub use bag::{tokenize, Bag, Tokens};
pub use corpus::{build_corpus, Corpus};
pub use error::{ConstructionError, ParseMeasureError};
pub use search::{rank, top_k, SimilarityResult};
pub use similarity::{frequency_dot, jaccard, SimilarityMeasure};
