//! Bag-of-words representation.
//!
//! Texts are tokenized into lowercase ASCII alphanumeric words and counted into
//! a [`Bag`]. No stemming and no stop word removal are applied.

/// Token counts per text, with a derived L1-normalized frequency view.
pub mod bag_of_words;
/// ASCII tokenizer driven by a process-wide compiled pattern.
pub mod tokenizer;

pub use bag_of_words::Bag;
pub use tokenizer::{tokenize, Tokens};
