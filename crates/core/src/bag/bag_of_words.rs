//! Bag-of-words: token occurrence counts for a single text.
//!
//! A [`Bag`] maps each distinct token to the number of times it occurs. Counts
//! are integers; the L1-normalized frequency view used by frequency-dot scoring
//! is derived on demand through [`Bag::frequency`] and [`Bag::normalized`] and
//! never written back into the bag.

use crate::bag::tokenizer::{tokenize, Tokens};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token → occurrence count mapping built from exactly one text.
///
/// Keys are kept in a `BTreeMap` so iteration order (and therefore every
/// floating-point sum over a bag) is identical across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, u64>", from = "BTreeMap<String, u64>")]
pub struct Bag {
    counts: BTreeMap<String, u64>,
    /// Sum of all counts (number of tokens in the source text).
    total: u64,
}

impl Bag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `text` and counts its tokens.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&tokenize(text))
    }

    /// Counts the tokens of an already tokenized text.
    pub fn from_tokens(tokens: &Tokens) -> Self {
        let mut bag = Self::new();
        for token in tokens.iter() {
            bag.insert(token);
        }
        bag
    }

    fn insert(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Occurrence count of `token`, 0 if absent.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns `true` if `token` occurs at least once.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the bag holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct tokens in ascending order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    /// `(token, count)` pairs in ascending token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// L1-normalized frequency of `token`: its count divided by [`Bag::total`].
    /// Returns 0 for absent tokens and for an empty bag.
    pub fn frequency(&self, token: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(token) as f64 / self.total as f64
    }

    /// Derived `(token, frequency)` view of the bag. The frequencies of a
    /// non-empty bag sum to 1.
    pub fn normalized(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        let total = self.total as f64;
        self.counts
            .iter()
            .map(move |(t, &c)| (t.as_str(), c as f64 / total))
    }
}

impl From<BTreeMap<String, u64>> for Bag {
    fn from(counts: BTreeMap<String, u64>) -> Self {
        let counts: BTreeMap<String, u64> = counts.into_iter().filter(|&(_, c)| c > 0).collect();
        let total = counts.values().fold(0u64, |acc, &c| acc.saturating_add(c));
        Self { counts, total }
    }
}

impl From<Bag> for BTreeMap<String, u64> {
    fn from(bag: Bag) -> Self {
        bag.counts
    }
}
