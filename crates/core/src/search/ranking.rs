//! Ranking of per-document scores.
//!
//! Results are ordered by similarity descending, then by index ascending. The
//! composite key makes the order total, so equal scores always come out in the
//! same order regardless of the sort algorithm.

use crate::config;
use crate::search::types::SimilarityResult;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Sort key: larger similarity first, then smaller index first.
fn rank_key(r: &SimilarityResult) -> (Reverse<OrderedFloat<f64>>, usize) {
    (Reverse(OrderedFloat(r.similarity)), r.index)
}

/// Sort all results by `(similarity desc, index asc)`.
pub fn rank(mut results: Vec<SimilarityResult>) -> Vec<SimilarityResult> {
    results.sort_unstable_by_key(rank_key);
    results
}

/// The first `k` results of [`rank`], without sorting the whole input.
pub fn top_k(
    results: impl IntoIterator<Item = SimilarityResult>,
    k: usize,
) -> Vec<SimilarityResult> {
    if k == 0 {
        return Vec::new();
    }

    // Partial sort: O(n log k) via min-heap of size k. The heap's minimum is
    // the worst kept result: lowest score, and among equal scores the highest index.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, Reverse<usize>)>> =
        BinaryHeap::with_capacity((k + 1).min(config::TOP_K_HEAP_CAPACITY_HINT));
    for r in results {
        heap.push(Reverse((OrderedFloat(r.similarity), Reverse(r.index))));
        if heap.len() > k {
            heap.pop();
        }
    }
    let kept = heap
        .into_iter()
        .map(|Reverse((s, Reverse(index)))| SimilarityResult::new(index, s.0))
        .collect();
    rank(kept)
}
