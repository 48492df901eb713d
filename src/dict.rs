//! # Dictionary Classifier
//! Lexicon/rule scoring: clause-by-clause scan that composes sentiment
//! word weights with nearby negation words and degree adverbs. Needs no
//! training data and handles negation/intensification that a plain
//! bag-of-words model misses.
//!
//! Fixed policies (tested, never errors):
//! - lookback window: 3 preceding tokens, clause-bounded, and never
//!   reaching past the previous sentiment word;
//! - every negation in the window flips the sign once, so two cancel;
//! - aggregate score exactly 0 resolves to negative.

use std::sync::Arc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lexicon::{Lexicon, DEFAULT_LEXICON};
use crate::segment;
use crate::Label;

/// Default lookback window in tokens for negation/degree modifiers.
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

#[derive(Debug, Clone)]
pub struct DictClassifier {
    lexicon: Arc<Lexicon>,
    window: usize,
}

impl Default for DictClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DictClassifier {
    /// Classifier over the bundled lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Arc::new(DEFAULT_LEXICON.clone()), DEFAULT_NEGATION_WINDOW)
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>, window: usize) -> Self {
        Self {
            lexicon,
            window: window.max(1),
        }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Binary polarity of a sentence: 1 iff the aggregate score > 0.
    pub fn analyse(&self, text: &str) -> Result<Label> {
        let score = self.score(text)?;
        Ok(if score > 0.0 { 1 } else { 0 })
    }

    /// Batch helper: blank entries are skipped, mirroring the serving
    /// layer's validation loop.
    pub fn analyse_batch(&self, texts: &[&str]) -> Result<Vec<(String, Label)>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            out.push((text.to_string(), self.analyse(text)?));
        }
        Ok(out)
    }

    /// Raw aggregate score across all clauses. Exposed for diagnostics
    /// and threshold experiments.
    pub fn score(&self, text: &str) -> Result<f64> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput("text to analyse".into()));
        }
        let clauses = segment::segment(text, &self.lexicon);
        let score: f64 = clauses.iter().map(|c| self.score_clause(c)).sum();
        debug!(score, clauses = clauses.len(), "dictionary score");
        Ok(score)
    }

    /// Score one clause: for each sentiment token, look back over the
    /// modifier window and compose `base * degree_product * (-1)^negations`.
    fn score_clause(&self, tokens: &[String]) -> f64 {
        let mut score = 0.0;
        // Modifiers belong to the nearest following sentiment word only.
        let mut prev_sentiment: Option<usize> = None;

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = self.lexicon.sentiment_score(token) else {
                continue;
            };

            let floor = match prev_sentiment {
                Some(p) => (p + 1).max(i.saturating_sub(self.window)),
                None => i.saturating_sub(self.window),
            };

            let mut multiplier = 1.0;
            let mut negations = 0u32;
            for prev in tokens[floor..i].iter() {
                if self.lexicon.is_negation(prev) {
                    negations += 1;
                } else if let Some(m) = self.lexicon.degree_multiplier(prev) {
                    multiplier *= m;
                }
            }

            let sign = if negations % 2 == 1 { -1.0 } else { 1.0 };
            score += base * multiplier * sign;
            prev_sentiment = Some(i);
        }

        score
    }
}
