//! # Pipeline Orchestrator
//! Wires filter → grouper → tokenizer → mapper → aggregator across all
//! months present in the filtered data. The only cross-month state lives
//! here; each month's profile is built independently.

use crate::aggregate::{aggregate, SentimentsByMonth};
use crate::filter::{filter_posts, DateRange};
use crate::grouping::group_by_month;
use crate::lexicon::Lexicon;
use crate::mapper::map_to_sentiments;
use crate::post::Post;
use crate::tokenize::tokenize_posts;
use tracing::info;

/// Run the full pipeline for one (country, range) request.
///
/// Months with zero matching posts never produce a bucket and are absent
/// from the result; an empty filtered set yields an empty mapping. Calling
/// twice with identical inputs yields identical results.
pub fn run_pipeline(
    posts: &[Post],
    country: &str,
    range: &DateRange,
    lexicon: &Lexicon,
) -> SentimentsByMonth {
    let filtered = filter_posts(posts, country, range);
    let kept = filtered.len();
    let buckets = group_by_month(filtered);

    let mut results = SentimentsByMonth::new();
    for (month, bucket) in buckets {
        let table = tokenize_posts(&bucket);
        let hits = map_to_sentiments(&table, lexicon);
        results.insert(month, aggregate(&hits));
    }

    info!(
        country,
        posts_in = posts.len(),
        posts_kept = kept,
        months = results.len(),
        "pipeline run complete"
    );
    results
}
