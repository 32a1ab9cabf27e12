//! # Sentiment Mapper
//! Expands a token-frequency table into (token, category, frequency) hits
//! via the lexicon. One hit per (token, category) pair; tokens the lexicon
//! does not know simply produce nothing.

use crate::lexicon::{Category, Lexicon};
use crate::tokenize::TokenFrequencyTable;
use tracing::debug;

/// One lexicon hit: a token carrying its bucket frequency into a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentHit {
    pub token: String,
    pub category: Category,
    pub frequency: u64,
}

/// Map each table entry through the lexicon.
///
/// Counts are unsigned and originate internally, so malformed frequencies
/// cannot normally occur; a zero count would contribute nothing and is
/// dropped as a data-integrity guard.
pub fn map_to_sentiments(table: &TokenFrequencyTable, lexicon: &Lexicon) -> Vec<SentimentHit> {
    let mut hits = Vec::new();
    for (token, frequency) in table {
        if *frequency == 0 {
            debug!(%token, "dropping zero-frequency table entry");
            continue;
        }
        for &category in lexicon.categories_for(token) {
            hits.push(SentimentHit {
                token: token.clone(),
                category,
                frequency: *frequency,
            });
        }
    }
    hits
}
