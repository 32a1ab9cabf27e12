//! Monthly Sentiment Profiler — Binary Entrypoint
//! Loads posts from a delimited file, runs the per-month sentiment pipeline
//! for one country and date window, and renders bar charts (or JSON).

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use social_sentiment_profiler::chart;
use social_sentiment_profiler::filter::DateRange;
use social_sentiment_profiler::lexicon::Lexicon;
use social_sentiment_profiler::pipeline::run_pipeline;
use social_sentiment_profiler::post::load_posts;
use social_sentiment_profiler::MonthlySentimentProfile;

const ENV_LEXICON_PATH: &str = "SENTIMENT_LEXICON_PATH";

#[derive(Debug, Parser)]
#[command(about = "Monthly lexicon-based emotion profiling for social-media posts")]
struct Args {
    /// Delimited posts file with a header row; first three columns are
    /// (text, country, date as YYYY-MM-DD).
    #[arg(long)]
    file: PathBuf,

    /// Target country (exact, case-sensitive match).
    #[arg(long)]
    country: String,

    /// Month to chart: `all` for the full year, or a specific `YYYY-MM`.
    #[arg(long, default_value = "all")]
    month: String,

    /// Year defining the default Jan 1 – Dec 31 window (default: current year).
    #[arg(long)]
    year: Option<i32>,

    /// Override the window start (YYYY-MM-DD).
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Override the window end (YYYY-MM-DD).
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Path to a lexicon JSON file (word → list of category labels);
    /// falls back to $SENTIMENT_LEXICON_PATH, then the embedded seed.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Emit the month → profile mapping as JSON instead of charts.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn resolve_lexicon(args: &Args) -> Result<Lexicon> {
    let path = args
        .lexicon
        .clone()
        .or_else(|| std::env::var(ENV_LEXICON_PATH).ok().map(PathBuf::from));
    match path {
        Some(p) => Lexicon::load_from_file(&p),
        None => Ok(Lexicon::embedded().clone()),
    }
}

fn resolve_range(args: &Args, year: i32) -> Result<DateRange> {
    let default = DateRange::calendar_year(year)
        .with_context(|| format!("year {year} is out of the supported date range"))?;
    Ok(DateRange::new(
        args.start.unwrap_or(default.start),
        args.end.unwrap_or(default.end),
    ))
}

/// `YYYY-MM` validation for the month selector.
fn is_month_key(s: &str) -> bool {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok() && s.len() == 7
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();

    let lexicon = resolve_lexicon(&args)?;
    info!(words = lexicon.len(), "lexicon loaded");

    let year = args
        .start
        .map(|d| d.year())
        .or(args.year)
        .unwrap_or_else(|| Utc::now().year());
    let range = resolve_range(&args, year)?;

    let loaded = load_posts(&args.file)?;
    info!(
        rows_read = loaded.rows_read,
        rows_skipped = loaded.rows_skipped,
        posts = loaded.posts.len(),
        "posts loaded"
    );

    let results = run_pipeline(&loaded.posts, &args.country, &range, &lexicon);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&results).context("failed to serialize results")?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    match args.month.as_str() {
        "all" => chart::render_year(&mut out, year, &results)?,
        key if is_month_key(key) => {
            // Absent month means "no data", not an error.
            let empty = MonthlySentimentProfile::new();
            let profile = results.get(key).unwrap_or(&empty);
            chart::render_profile(&mut out, key, profile)?;
        }
        other => bail!("invalid --month '{other}': expected `all` or `YYYY-MM`"),
    }

    Ok(())
}
