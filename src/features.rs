//! # Feature Selector
//! Chi-square word informativeness against binary labels. Each candidate
//! word gets a 2×2 presence/absence contingency table; the ranking is
//! fully deterministic (score descending, then lexical order) so
//! repeated runs produce identical vocabularies.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::info;

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::segment;
use crate::Label;

#[derive(Debug)]
pub struct ChiSquare {
    /// All candidate words with their statistic, ranked.
    ranked: Vec<(String, f64)>,
}

impl ChiSquare {
    /// Rank every token of `docs` by its chi-square statistic against
    /// `labels`. Tokenization uses the same segmenter as the rest of the
    /// pipeline so training and classification agree on word boundaries.
    pub fn new(docs: &[String], labels: &[Label], lexicon: &Arc<Lexicon>) -> Result<Self> {
        if docs.is_empty() {
            return Err(Error::EmptyInput("feature selection corpus".into()));
        }
        if docs.len() != labels.len() {
            return Err(Error::mismatch(
                "feature selection docs vs labels",
                docs.len(),
                labels.len(),
            ));
        }

        let total = docs.len() as f64;
        let positives = labels.iter().filter(|&&l| l == 1).count() as f64;
        let negatives = total - positives;

        // Document frequency per word, split by class. Presence only,
        // repeated occurrences inside one document count once.
        let mut present_pos: HashMap<String, f64> = HashMap::new();
        let mut present_neg: HashMap<String, f64> = HashMap::new();
        for (doc, &label) in docs.iter().zip(labels) {
            let unique: HashSet<String> = segment::tokens(doc, lexicon).into_iter().collect();
            for word in unique {
                let slot = if label == 1 {
                    present_pos.entry(word).or_insert(0.0)
                } else {
                    present_neg.entry(word).or_insert(0.0)
                };
                *slot += 1.0;
            }
        }

        let mut words: HashSet<&String> = present_pos.keys().collect();
        words.extend(present_neg.keys());

        let mut ranked: Vec<(String, f64)> = words
            .into_iter()
            .map(|word| {
                let n11 = present_pos.get(word).copied().unwrap_or(0.0);
                let n10 = present_neg.get(word).copied().unwrap_or(0.0);
                let n01 = positives - n11;
                let n00 = negatives - n10;
                (word.clone(), chi_square(total, n11, n10, n01, n00))
            })
            .collect();

        // Score descending, lexical ascending on ties: the stable
        // secondary key that makes `best_words` reproducible.
        ranked.sort_by(|(wa, sa), (wb, sb)| {
            sb.partial_cmp(sa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| wa.cmp(wb))
        });

        info!(candidates = ranked.len(), "chi-square ranking built");
        Ok(Self { ranked })
    }

    /// Top `n` discriminative words, most informative first. Asking for
    /// more words than exist returns the whole pool; `best_words(n)` is
    /// always a prefix of `best_words(n + 1)`.
    pub fn best_words(&self, n: usize) -> Vec<String> {
        self.ranked
            .iter()
            .take(n)
            .map(|(w, _)| w.clone())
            .collect()
    }

    /// Number of distinct candidate words seen in the corpus.
    pub fn candidate_count(&self) -> usize {
        self.ranked.len()
    }
}

/// Chi-square statistic of a 2×2 contingency table. Degenerate tables
/// (any zero marginal) score 0: the word carries no class information.
fn chi_square(total: f64, n11: f64, n10: f64, n01: f64, n00: f64) -> f64 {
    let row1 = n11 + n10;
    let row0 = n01 + n00;
    let col1 = n11 + n01;
    let col0 = n10 + n00;
    let denom = row1 * row0 * col1 * col0;
    if denom == 0.0 {
        return 0.0;
    }
    let diff = n11 * n00 - n10 * n01;
    total * diff * diff / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::DEFAULT_LEXICON;

    fn sample() -> (Vec<String>, Vec<Label>) {
        let docs = vec![
            "好吃 好吃".to_string(),
            "很好吃".to_string(),
            "满意".to_string(),
            "难吃".to_string(),
            "太难吃".to_string(),
            "失望".to_string(),
        ];
        let labels = vec![1, 1, 1, 0, 0, 0];
        (docs, labels)
    }

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(DEFAULT_LEXICON.clone())
    }

    #[test]
    fn discriminative_words_outrank_shared_ones() {
        let (docs, labels) = sample();
        let chi = ChiSquare::new(&docs, &labels, &lexicon()).unwrap();
        let best = chi.best_words(2);
        // 好吃 and 难吃 each hit two documents of one class and none of
        // the other; every other token hits one document at most.
        assert!(best.contains(&"好吃".to_string()), "got {best:?}");
        assert!(best.contains(&"难吃".to_string()), "got {best:?}");
    }

    #[test]
    fn ranking_is_deterministic() {
        let (docs, labels) = sample();
        let lx = lexicon();
        let a = ChiSquare::new(&docs, &labels, &lx).unwrap();
        let b = ChiSquare::new(&docs, &labels, &lx).unwrap();
        assert_eq!(a.best_words(10), b.best_words(10));
    }

    #[test]
    fn best_words_n_is_prefix_of_n_plus_one() {
        let (docs, labels) = sample();
        let chi = ChiSquare::new(&docs, &labels, &lexicon()).unwrap();
        for n in 0..chi.candidate_count() {
            let shorter = chi.best_words(n);
            let longer = chi.best_words(n + 1);
            assert_eq!(shorter[..], longer[..n]);
        }
    }

    #[test]
    fn oversized_n_returns_whole_pool() {
        let (docs, labels) = sample();
        let chi = ChiSquare::new(&docs, &labels, &lexicon()).unwrap();
        assert_eq!(chi.best_words(10_000).len(), chi.candidate_count());
    }

    #[test]
    fn zero_variance_words_rank_last() {
        // 了 appears in every document of both classes.
        let docs = vec![
            "好吃了".to_string(),
            "满意了".to_string(),
            "难吃了".to_string(),
            "失望了".to_string(),
        ];
        let labels = vec![1, 1, 0, 0];
        let chi = ChiSquare::new(&docs, &labels, &lexicon()).unwrap();
        let all = chi.best_words(chi.candidate_count());
        // The uninformative token must not outrank the class-exclusive ones.
        assert_ne!(all[0], "了");
    }

    #[test]
    fn empty_or_mismatched_inputs_are_rejected() {
        let lx = lexicon();
        assert!(matches!(
            ChiSquare::new(&[], &[], &lx).unwrap_err(),
            Error::EmptyInput(_)
        ));
        assert!(matches!(
            ChiSquare::new(&["好吃".to_string()], &[1, 0], &lx).unwrap_err(),
            Error::DimensionMismatch { .. }
        ));
    }
}
