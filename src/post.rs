//! # Post Loading
//! CSV ingestion of social-media posts into typed [`Post`] records.
//!
//! The input is a delimited file with a header row; the first three columns
//! are read positionally as (text, country, date). The CSV parser preserves
//! quoting, so embedded delimiters and quote characters inside the text
//! field survive intact. Rows with too few fields or a date that does not
//! parse as strict `YYYY-MM-DD` are skipped and counted, never fatal —
//! partial rows are expected in bulk social-media exports.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::debug;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One social-media post. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    pub country: String,
    pub date: NaiveDate,
}

/// Loader output: the surviving posts plus row accounting for diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedPosts {
    pub posts: Vec<Post>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Strict `YYYY-MM-DD` parse; anything else is treated as unparseable.
pub fn parse_post_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Load posts from a delimited file with a header row.
///
/// A missing or unreadable file is fatal (the pipeline has no meaningful
/// partial result without its input); malformed rows are absorbed locally.
pub fn load_posts<P: AsRef<Path>>(path: P) -> Result<LoadedPosts> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open posts file '{}'", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut posts = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and CSV lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                debug!(line, error = %e, "skipping unparseable row");
                rows_skipped += 1;
                continue;
            }
        };

        let (text, country, date_str) = match (record.get(0), record.get(1), record.get(2)) {
            (Some(t), Some(c), Some(d)) => (t, c, d),
            _ => {
                debug!(line, fields = record.len(), "skipping short row");
                rows_skipped += 1;
                continue;
            }
        };

        let Some(date) = parse_post_date(date_str) else {
            debug!(line, date = date_str, "skipping row with unparseable date");
            rows_skipped += 1;
            continue;
        };

        posts.push(Post {
            text: text.to_string(),
            country: country.trim().to_string(),
            date,
        });
    }

    Ok(LoadedPosts {
        posts,
        rows_read,
        rows_skipped,
    })
}
