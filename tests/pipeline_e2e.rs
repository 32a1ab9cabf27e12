// tests/pipeline_e2e.rs
//
// End-to-end pipeline scenarios: country/date filtering, per-month
// aggregation, and the documented empty-result behaviors.

use chrono::NaiveDate;
use social_sentiment_profiler::{run_pipeline, Category, DateRange, Lexicon, Post};

fn post(text: &str, country: &str, date: &str) -> Post {
    Post {
        text: text.to_string(),
        country: country.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

fn year_2024() -> DateRange {
    DateRange::calendar_year(2024).unwrap()
}

fn sample_posts() -> Vec<Post> {
    vec![
        post("I love this, it's joyful and great", "Uganda", "2024-07-10"),
        post("terrible day, I am angry", "Uganda", "2024-07-15"),
        post("neutral statement", "Kenya", "2024-07-12"),
    ]
}

#[test]
fn uganda_july_scenario() {
    let results = run_pipeline(&sample_posts(), "Uganda", &year_2024(), Lexicon::embedded());

    assert_eq!(results.len(), 1);
    let july = &results["2024-07"];

    // love + joyful carry joy; love/joyful/great carry trust and positive.
    assert!(july[&Category::Joy] >= 2);
    assert!(july[&Category::Trust] >= 3);
    assert!(july[&Category::Positive] >= 3);

    // terrible + angry carry anger.
    assert!(july[&Category::Anger] >= 2);
    assert!(july[&Category::Negative] >= 2);
}

#[test]
fn other_countries_contribute_nothing() {
    let with_kenya = run_pipeline(&sample_posts(), "Uganda", &year_2024(), Lexicon::embedded());
    let uganda_only: Vec<Post> = sample_posts()
        .into_iter()
        .filter(|p| p.country == "Uganda")
        .collect();
    let without_kenya = run_pipeline(&uganda_only, "Uganda", &year_2024(), Lexicon::embedded());
    assert_eq!(with_kenya, without_kenya);
}

#[test]
fn posts_split_across_months_yield_separate_profiles() {
    let posts = vec![
        post("a happy win", "Uganda", "2024-03-02"),
        post("a terrible loss", "Uganda", "2024-04-20"),
    ];
    let results = run_pipeline(&posts, "Uganda", &year_2024(), Lexicon::embedded());

    assert_eq!(results.len(), 2);
    assert!(results["2024-03"].contains_key(&Category::Joy));
    assert!(!results["2024-03"].contains_key(&Category::Anger));
    assert!(results["2024-04"].contains_key(&Category::Anger));
}

#[test]
fn pipeline_is_idempotent() {
    let posts = sample_posts();
    let a = run_pipeline(&posts, "Uganda", &year_2024(), Lexicon::embedded());
    let b = run_pipeline(&posts, "Uganda", &year_2024(), Lexicon::embedded());
    assert_eq!(a, b);
}

#[test]
fn empty_post_list_yields_empty_mapping() {
    let results = run_pipeline(&[], "Uganda", &year_2024(), Lexicon::embedded());
    assert!(results.is_empty());
}

#[test]
fn all_posts_outside_range_yield_empty_mapping() {
    let posts = vec![
        post("great stuff", "Uganda", "2023-06-01"),
        post("more great stuff", "Uganda", "2025-02-01"),
    ];
    let results = run_pipeline(&posts, "Uganda", &year_2024(), Lexicon::embedded());
    assert!(results.is_empty());
}

#[test]
fn range_boundaries_are_inclusive_end_to_end() {
    let posts = vec![
        post("happy new year", "Uganda", "2024-01-01"),
        post("happy end of year", "Uganda", "2024-12-31"),
    ];
    let results = run_pipeline(&posts, "Uganda", &year_2024(), Lexicon::embedded());
    assert!(results.contains_key("2024-01"));
    assert!(results.contains_key("2024-12"));
}

#[test]
fn bucket_with_no_lexicon_words_still_produces_a_month_entry() {
    let posts = vec![post("lorem ipsum dolor", "Uganda", "2024-05-05")];
    let results = run_pipeline(&posts, "Uganda", &year_2024(), Lexicon::embedded());
    assert_eq!(results.len(), 1);
    assert!(results["2024-05"].is_empty());
}
