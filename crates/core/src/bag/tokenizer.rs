//! ASCII word tokenizer.
//!
//! Tokenizes text by lowercasing it and keeping every maximal run of `[a-z0-9]`
//! characters. Everything else, including non-ASCII letters, acts as a
//! separator. No stop words are removed and no stemming is applied. Uses a
//! zero-per-token allocation design via byte spans.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a single token. Its complement is the separator class.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z0-9]+").expect("token pattern must compile"));

/// Tokenized text: owns the lowercased buffer, provides &str slices via byte spans.
#[derive(Debug, Clone)]
pub struct Tokens {
    buffer: String,
    spans: Vec<(usize, usize)>, // (start, end) byte offsets into buffer
}

impl Tokens {
    /// Returns an iterator over the token `&str` slices, in text order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|&(s, e)| &self.buffer[s..e])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Tokenize text: lowercase, then split on every run of non-`[a-z0-9]` characters.
/// Empty fragments never appear. Never fails; empty input yields no tokens.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let spans = TOKEN_PATTERN
        .find_iter(&buffer)
        .map(|m| (m.start(), m.end()))
        .collect();

    Tokens { buffer, spans }
}
