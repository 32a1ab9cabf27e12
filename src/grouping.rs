//! # Monthly Grouper
//! Partitions filtered posts into calendar-month buckets keyed by `YYYY-MM`.

use crate::post::Post;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Stable `YYYY-MM` key for a date. Same date always yields the same key.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Bucket posts by calendar month. Every input post lands in exactly one
/// bucket; nothing is dropped. Order within a bucket is not guaranteed.
pub fn group_by_month(posts: Vec<Post>) -> BTreeMap<String, Vec<Post>> {
    let mut buckets: BTreeMap<String, Vec<Post>> = BTreeMap::new();
    for post in posts {
        buckets.entry(month_key(post.date)).or_default().push(post);
    }
    buckets
}
