//! Reference corpus and query execution.
//!
//! A [`Corpus`] tokenizes and bags every reference document once, at
//! construction. Queries bag the query text, score it against every stored bag
//! and rank the results. Stored bags are never modified after construction, so
//! a corpus can be shared across threads and queried concurrently without
//! locking.

use crate::bag::Bag;
use crate::error::ConstructionError;
use crate::search::{rank, top_k, SimilarityResult};
use crate::similarity::SimilarityMeasure;

/// One reference document with its precomputed bag.
#[derive(Debug, Clone)]
struct Entry {
    text: String,
    bag: Bag,
}

/// Ordered, build-once collection of reference documents.
///
/// A document's position in the input is its permanent `index` in every
/// [`SimilarityResult`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
}

/// Builds a corpus from `documents`. See [`Corpus::new`].
pub fn build_corpus<I, S>(documents: I) -> Result<Corpus, ConstructionError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Corpus::new(documents)
}

impl Corpus {
    /// Tokenize and bag every document, in order.
    ///
    /// An empty input is valid and produces an empty corpus. Documents of any
    /// length are accepted; empty and blank ones get empty bags.
    pub fn new<I, S>(documents: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<Entry> = documents
            .into_iter()
            .map(|text| {
                let text: String = text.into();
                let bag = Bag::from_text(&text);
                Entry { text, bag }
            })
            .collect();

        tracing::debug!(
            "Built corpus with {} documents ({} tokens)",
            entries.len(),
            entries.iter().map(|e| e.bag.total()).sum::<u64>()
        );
        Ok(Self { entries })
    }

    /// Number of reference documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original text of the document at `index`.
    pub fn document(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.text.as_str())
    }

    /// Precomputed bag of the document at `index`.
    pub fn bag(&self, index: usize) -> Option<&Bag> {
        self.entries.get(index).map(|e| &e.bag)
    }

    /// Original document texts in index order.
    pub fn documents(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.text.as_str())
    }

    /// Jaccard similarity of `query` to every document, ranked.
    pub fn jaccard_similarity(&self, query: &str) -> Vec<SimilarityResult> {
        self.similarity(query, SimilarityMeasure::Jaccard)
    }

    /// Normalized term-frequency dot product of `query` to every document, ranked.
    pub fn frequency_dot_similarity(&self, query: &str) -> Vec<SimilarityResult> {
        self.similarity(query, SimilarityMeasure::FrequencyDot)
    }

    /// Score `query` against every document with `measure`.
    ///
    /// Always returns exactly [`Corpus::len`] results, one per index, sorted by
    /// similarity descending with ties broken by ascending index.
    pub fn similarity(&self, query: &str, measure: SimilarityMeasure) -> Vec<SimilarityResult> {
        rank(self.score_all(query, measure))
    }

    /// The `k` best results of [`Corpus::similarity`], in the same order.
    pub fn top_k(
        &self,
        query: &str,
        measure: SimilarityMeasure,
        k: usize,
    ) -> Vec<SimilarityResult> {
        top_k(self.score_all(query, measure), k)
    }

    /// Unranked scores in index order.
    fn score_all(&self, query: &str, measure: SimilarityMeasure) -> Vec<SimilarityResult> {
        let query_bag = Bag::from_text(query);
        tracing::trace!(
            "Scoring {} query tokens against {} documents ({})",
            query_bag.len(),
            self.entries.len(),
            measure
        );
        self.entries
            .iter()
            .enumerate()
            .map(|(index, e)| SimilarityResult::new(index, measure.score(&query_bag, &e.bag)))
            .collect()
    }
}
