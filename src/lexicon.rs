//! # Emotion Lexicon
//! Fixed word → categories lookup used by the sentiment mapper.
//!
//! The category vocabulary is closed: anger, anticipation, disgust, fear,
//! joy, sadness, surprise, trust, plus the negative/positive polarities.
//! Categories are never invented or merged here. A built-in seed lexicon is
//! embedded in the binary; a full lexicon can be loaded from a JSON file
//! (word → list of category labels) at startup.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

/// One label from the closed lexicon vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
    Negative,
    Positive,
}

impl Category {
    /// Lowercase label as it appears in lexicon files and chart output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Anger => "anger",
            Category::Anticipation => "anticipation",
            Category::Disgust => "disgust",
            Category::Fear => "fear",
            Category::Joy => "joy",
            Category::Sadness => "sadness",
            Category::Surprise => "surprise",
            Category::Trust => "trust",
            Category::Negative => "negative",
            Category::Positive => "positive",
        }
    }

    fn parse_label(label: &str) -> Option<Self> {
        match label {
            "anger" => Some(Category::Anger),
            "anticipation" => Some(Category::Anticipation),
            "disgust" => Some(Category::Disgust),
            "fear" => Some(Category::Fear),
            "joy" => Some(Category::Joy),
            "sadness" => Some(Category::Sadness),
            "surprise" => Some(Category::Surprise),
            "trust" => Some(Category::Trust),
            "negative" => Some(Category::Negative),
            "positive" => Some(Category::Positive),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static EMBEDDED: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../emotion_lexicon.json");
    Lexicon::from_json(raw).expect("valid embedded emotion lexicon")
});

/// Read-only word → categories table. Keys use the tokenizer's normalization
/// (lowercase, punctuation-free), so lookups hit without further massaging.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Category>>,
}

impl Lexicon {
    /// Built-in seed lexicon, parsed once.
    pub fn embedded() -> &'static Lexicon {
        &EMBEDDED
    }

    /// Load a lexicon from a JSON file mapping word → list of category labels.
    ///
    /// An unreadable or unparseable file is fatal; individual entries with
    /// unknown labels are skipped with a warning (data-integrity anomaly,
    /// not a reason to abort the run).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("failed to parse lexicon '{}'", path.display()))
    }

    /// Parse lexicon JSON, dropping unknown category labels per word.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: HashMap<String, Vec<String>> =
            serde_json::from_str(raw).context("lexicon is not a word → labels JSON map")?;

        let mut entries = HashMap::with_capacity(parsed.len());
        for (word, labels) in parsed {
            let mut cats: Vec<Category> = Vec::with_capacity(labels.len());
            for label in &labels {
                match Category::parse_label(label) {
                    Some(c) if !cats.contains(&c) => cats.push(c),
                    Some(_) => {}
                    None => {
                        warn!(%word, %label, "skipping unknown lexicon category label");
                    }
                }
            }
            if !cats.is_empty() {
                entries.insert(word.to_ascii_lowercase(), cats);
            }
        }

        Ok(Self { entries })
    }

    /// Categories for a normalized token; empty slice when the word is
    /// not in the lexicon.
    pub fn categories_for(&self, token: &str) -> &[Category] {
        self.entries.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct words in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
