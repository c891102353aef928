//! Jaccard similarity over token sets.
//!
//! `|A ∩ B| / |A ∪ B|` on the distinct tokens of two bags. Counts are ignored,
//! so the measure is unweighted set overlap.

use crate::bag::Bag;
use crate::config;

/// Jaccard similarity between two bags, rounded to
/// [`config::JACCARD_DECIMAL_PLACES`] decimals. Two empty bags score 0.
pub fn jaccard(a: &Bag, b: &Bag) -> f64 {
    // Probe the smaller bag against the larger one.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.tokens().filter(|t| large.contains(t)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    round_to(intersection as f64 / union as f64, config::JACCARD_DECIMAL_PLACES)
}

/// Round half away from zero to `places` decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
