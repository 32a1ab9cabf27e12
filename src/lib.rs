// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod aggregate;
pub mod chart;
pub mod filter;
pub mod grouping;
pub mod lexicon;
pub mod mapper;
pub mod pipeline;
pub mod post;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::aggregate::{aggregate, MonthlySentimentProfile, SentimentsByMonth};
pub use crate::filter::{filter_posts, DateRange};
pub use crate::grouping::{group_by_month, month_key};
pub use crate::lexicon::{Category, Lexicon};
pub use crate::mapper::{map_to_sentiments, SentimentHit};
pub use crate::pipeline::run_pipeline;
pub use crate::post::{load_posts, parse_post_date, LoadedPosts, Post};
pub use crate::tokenize::{token_counts, tokenize_posts, TokenFrequencyTable};
