//! # Lexicon Store
//! Loads and indexes the four sentiment word lists: positive words,
//! negative words, negation words, and degree adverbs with intensity
//! multipliers. The loaded store is read-only; concurrent readers never
//! need a lock.
//!
//! Resource format is one entry per line: `word` or `word<ws>weight`,
//! with `#` starting a comment. Positive/negative files carry weight
//! magnitudes (sign is applied by the loader), degree files carry the
//! multiplier.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tracing::info;

use crate::error::{Error, Result};

/// Built-in lexicon compiled from the bundled resource lists.
pub static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_lists(
        include_str!("../resources/lexicon/positive.txt"),
        include_str!("../resources/lexicon/negative.txt"),
        include_str!("../resources/lexicon/negation.txt"),
        include_str!("../resources/lexicon/degree.txt"),
    )
    .expect("valid embedded lexicon")
});

#[derive(Debug, Clone)]
pub struct Lexicon {
    /// word → score, > 0
    positive: HashMap<String, f64>,
    /// word → score, < 0
    negative: HashMap<String, f64>,
    negation: HashSet<String>,
    /// word → multiplier, typically 0.5–2.0
    degree: HashMap<String, f64>,
    /// Union of all entries, used by the segmenter for maximum matching.
    words: HashSet<String>,
    /// Longest entry in chars, bounds the maximum-match lookahead.
    max_word_chars: usize,
}

impl Lexicon {
    /// Build a lexicon from the four plain-text lists.
    ///
    /// A word present in both the positive and the negative list is a
    /// load error: the two sets must stay disjoint. Negation and degree
    /// entries are independent overlays and may repeat across files.
    pub fn from_lists(positive: &str, negative: &str, negation: &str, degree: &str) -> Result<Self> {
        let positive = parse_weighted(positive, "positive word list", 1.0)?;
        let raw_negative = parse_weighted(negative, "negative word list", 1.0)?;
        let negation = parse_plain(negation, "negation word list")?;
        let degree = parse_weighted(degree, "degree adverb list", 1.5)?;

        for word in raw_negative.keys() {
            if positive.contains_key(word) {
                return Err(Error::resource(
                    "lexicon",
                    format!("word `{word}` appears in both positive and negative lists"),
                ));
            }
        }

        // Negative scores are stored with their sign applied.
        let negative: HashMap<String, f64> = raw_negative
            .into_iter()
            .map(|(w, score)| (w, -score.abs()))
            .collect();

        let mut words: HashSet<String> = HashSet::new();
        words.extend(positive.keys().cloned());
        words.extend(negative.keys().cloned());
        words.extend(negation.iter().cloned());
        words.extend(degree.keys().cloned());
        let max_word_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

        if words.is_empty() {
            return Err(Error::resource("lexicon", "all word lists are empty"));
        }

        info!(
            positive = positive.len(),
            negative = negative.len(),
            negation = negation.len(),
            degree = degree.len(),
            "lexicon loaded"
        );

        Ok(Self {
            positive,
            negative,
            negation,
            degree,
            words,
            max_word_chars,
        })
    }

    /// Signed sentiment score for a word: positive, negative, or `None`
    /// when the word carries no sentiment.
    #[inline]
    pub fn sentiment_score(&self, word: &str) -> Option<f64> {
        self.positive
            .get(word)
            .or_else(|| self.negative.get(word))
            .copied()
    }

    #[inline]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negation.contains(word)
    }

    #[inline]
    pub fn degree_multiplier(&self, word: &str) -> Option<f64> {
        self.degree.get(word).copied()
    }

    /// True if the word is any lexicon entry (used for maximum matching).
    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }
}

/// Parse `word` / `word weight` lines. Missing weights fall back to
/// `default_weight`; a present but unparseable weight is a load error.
fn parse_weighted(raw: &str, resource: &str, default_weight: f64) -> Result<HashMap<String, f64>> {
    let mut out = HashMap::new();
    for (lineno, line) in raw.lines().enumerate() {
        let line = strip_comment(line);
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let word = parts.next().expect("non-empty line has a first token");
        let weight = match parts.next() {
            Some(w) => w.parse::<f64>().map_err(|_| {
                Error::resource(
                    resource,
                    format!("line {}: bad weight `{}` for `{}`", lineno + 1, w, word),
                )
            })?,
            None => default_weight,
        };
        out.insert(word.to_string(), weight);
    }
    Ok(out)
}

fn parse_plain(raw: &str, resource: &str) -> Result<HashSet<String>> {
    let mut out = HashSet::new();
    for (lineno, line) in raw.lines().enumerate() {
        let line = strip_comment(line);
        if line.is_empty() {
            continue;
        }
        if line.split_whitespace().count() > 1 {
            return Err(Error::resource(
                resource,
                format!("line {}: expected a single word, got `{}`", lineno + 1, line),
            ));
        }
        out.insert(line.to_string());
    }
    Ok(out)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}
