//! # Tokenizer
//! Turns a month bucket's concatenated text into an ordered word-frequency
//! table. Normalization is lowercase + word-boundary extraction, matching
//! the lexicon's token convention — if the two ever diverge, lookups miss
//! silently.

use crate::post::Post;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Ordered word → count table: descending frequency, ties broken by
/// first-seen order. Downstream rendering depends on this ordering.
pub type TokenFrequencyTable = Vec<(String, u64)>;

// \w covers [A-Za-z0-9_]; (?u) enables Unicode
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w+\b").expect("tokenizer regex"));

/// Count normalized tokens in one document string.
///
/// Deterministic for identical input: the sort is stable, so equal
/// frequencies keep first-encountered order.
pub fn token_counts(text: &str) -> TokenFrequencyTable {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for m in WORD_RE.find_iter(&lowered) {
        let token = m.as_str();
        if token.is_empty() {
            continue;
        }
        let entry = counts.entry(token).or_insert(0);
        if *entry == 0 {
            first_seen.push(token);
        }
        *entry += 1;
    }

    let mut table: TokenFrequencyTable = first_seen
        .into_iter()
        .map(|t| (t.to_string(), counts[t]))
        .collect();
    table.sort_by_key(|(_, count)| Reverse(*count));
    table
}

/// Tokenize a bucket of posts: texts are concatenated in bucket order with a
/// single space separator, then counted as one document.
pub fn tokenize_posts(posts: &[Post]) -> TokenFrequencyTable {
    let document = posts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    token_counts(&document)
}
