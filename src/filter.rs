//! # Date Filter
//! Pure predicate over loaded posts: exact country match plus an inclusive
//! date window.

use crate::post::Post;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date window. `start <= end` is the caller's responsibility and
/// is not validated here; an inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Jan 1 through Dec 31 of the given year. `None` only for years outside
    /// chrono's representable range.
    pub fn calendar_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self { start, end })
    }

    /// Boundary-inclusive containment on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Retain posts whose country equals `country` exactly (case-sensitive, no
/// normalization) and whose date falls inside `range`. Pure function; the
/// input is untouched.
pub fn filter_posts(posts: &[Post], country: &str, range: &DateRange) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.country == country && range.contains(p.date))
        .cloned()
        .collect()
}
