//! # Aggregator
//! Sums sentiment hits into per-category totals for one month. A running
//! sum is associative and commutative, so totals are independent of hit
//! ordering. Absent category means it never occurred; zero-filling for
//! presentation lives in the chart layer, not here.

use crate::lexicon::Category;
use crate::mapper::SentimentHit;
use std::collections::BTreeMap;

/// Category → aggregated frequency for one month.
pub type MonthlySentimentProfile = BTreeMap<Category, u64>;

/// MonthKey (`YYYY-MM`) → profile. The pipeline's terminal artifact.
pub type SentimentsByMonth = BTreeMap<String, MonthlySentimentProfile>;

/// Sum hit frequencies by category, starting each category at 0 the first
/// time it is seen.
pub fn aggregate(hits: &[SentimentHit]) -> MonthlySentimentProfile {
    let mut totals = MonthlySentimentProfile::new();
    for hit in hits {
        *totals.entry(hit.category).or_insert(0) += hit.frequency;
    }
    totals
}
