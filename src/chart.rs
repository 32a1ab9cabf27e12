//! # Chart Rendering
//! Terminal bar charts of category vs. frequency. Presentation-layer only:
//! the 12-month padding for full-year charts happens here, never in the
//! aggregator, so "absent means never occurred" holds upstream.

use crate::aggregate::{MonthlySentimentProfile, SentimentsByMonth};
use std::io::{self, Write};

const MAX_BAR_WIDTH: u64 = 40;

/// Render one month's profile as rows of `category | bar count`.
/// An empty profile renders a `(no data)` placeholder instead of rows.
pub fn render_profile(
    out: &mut impl Write,
    label: &str,
    profile: &MonthlySentimentProfile,
) -> io::Result<()> {
    writeln!(out, "Sentiment profile — {label}")?;

    if profile.is_empty() {
        writeln!(out, "  (no data)")?;
        return Ok(());
    }

    let max = profile.values().copied().max().unwrap_or(1).max(1);
    for (category, count) in profile {
        let width = (count * MAX_BAR_WIDTH / max).max(1) as usize;
        writeln!(
            out,
            "  {:>12} | {} {}",
            category.label(),
            "#".repeat(width),
            count
        )?;
    }
    Ok(())
}

/// Render a full calendar year: all 12 months of `year` appear, months with
/// no computed profile rendered as empty.
pub fn render_year(out: &mut impl Write, year: i32, results: &SentimentsByMonth) -> io::Result<()> {
    let empty = MonthlySentimentProfile::new();
    for month in 1..=12u32 {
        let key = format!("{year:04}-{month:02}");
        let profile = results.get(&key).unwrap_or(&empty);
        render_profile(out, &key, profile)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Category;

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_profile_renders_placeholder() {
        let out = render_to_string(|b| render_profile(b, "2024-03", &MonthlySentimentProfile::new()));
        assert!(out.contains("2024-03"));
        assert!(out.contains("(no data)"));
    }

    #[test]
    fn bars_scale_to_the_dominant_category() {
        let mut profile = MonthlySentimentProfile::new();
        profile.insert(Category::Joy, 40);
        profile.insert(Category::Anger, 1);

        let out = render_to_string(|b| render_profile(b, "2024-07", &profile));
        assert!(out.contains("joy"));
        assert!(out.contains(&"#".repeat(40)));
        // The small category still gets a visible bar.
        assert!(out.lines().any(|l| l.contains("anger") && l.contains('#')));
    }

    #[test]
    fn full_year_render_pads_all_twelve_months() {
        let mut results = SentimentsByMonth::new();
        let mut profile = MonthlySentimentProfile::new();
        profile.insert(Category::Joy, 3);
        results.insert("2024-07".to_string(), profile);

        let out = render_to_string(|b| render_year(b, 2024, &results));
        for month in 1..=12u32 {
            assert!(out.contains(&format!("2024-{month:02}")));
        }
        // Eleven empty months, one with data.
        assert_eq!(out.matches("(no data)").count(), 11);
    }
}
