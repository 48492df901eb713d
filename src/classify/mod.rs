//! # Statistical classifiers
//! Three variants behind one capability trait: naive Bayes, k-nearest
//! neighbours and a margin-based linear model. All of them train from
//! `(documents, labels, vocabulary)` and classify raw text; vocabulary
//! restriction and tokenization live here so training and classification
//! can never disagree on the feature space.

pub mod bayes;
pub mod knn;
pub mod svm;

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::segment;
use crate::Label;

pub use bayes::BayesClassifier;
pub use knn::KnnClassifier;
pub use svm::SvmClassifier;

/// Trained model: immutable, shareable across threads, classifies raw
/// text into a binary polarity. A document with zero vocabulary overlap
/// always yields the deterministic default label 0.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Label;
}

/// Closed set of classifier variants, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    Bayes,
    Knn,
    Svm,
}

/// Variant-specific hyperparameters with the defaults the original
/// experiments used (k=3 neighbours, C=10 regularization).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrainParams {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_c")]
    pub c: f64,
}

fn default_k() -> usize {
    3
}

fn default_c() -> f64 {
    10.0
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            k: default_k(),
            c: default_c(),
        }
    }
}

/// Immutable feature vocabulary: the chi-square selection output plus
/// the segmenter needed to map raw text onto it.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, usize>,
    lexicon: Arc<Lexicon>,
}

impl Vocabulary {
    pub fn new(words: Vec<String>, lexicon: Arc<Lexicon>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyInput("feature vocabulary".into()));
        }
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        Ok(Self {
            words,
            index,
            lexicon,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count vector over the vocabulary; out-of-vocabulary tokens are
    /// dropped.
    pub fn counts(&self, text: &str) -> Vec<f64> {
        let mut v = vec![0.0; self.words.len()];
        for token in segment::tokens(text, &self.lexicon) {
            if let Some(&i) = self.index.get(&token) {
                v[i] += 1.0;
            }
        }
        v
    }

    /// L2-normalized count vector, the all-zero vector if nothing
    /// overlaps. Used by the distance/margin based variants so feature
    /// scaling is identical between training and classification.
    pub fn normalized(&self, text: &str) -> Vec<f64> {
        let mut v = self.counts(text);
        let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }
}

/// Reject empty or mismatched training inputs before any fitting runs.
pub(crate) fn check_training_inputs(docs: &[String], labels: &[Label]) -> Result<()> {
    if docs.is_empty() {
        return Err(Error::EmptyInput("training documents".into()));
    }
    if docs.len() != labels.len() {
        return Err(Error::mismatch(
            "training docs vs labels",
            docs.len(),
            labels.len(),
        ));
    }
    Ok(())
}

/// Train the configured variant. This is the statistical-path entry the
/// composition root uses; callers pick a variant by configuration and
/// never branch on the concrete type afterwards.
pub fn train_model(
    kind: ClassifierKind,
    docs: &[String],
    labels: &[Label],
    vocabulary: Arc<Vocabulary>,
    params: TrainParams,
) -> Result<Box<dyn Classifier>> {
    Ok(match kind {
        ClassifierKind::Bayes => Box::new(BayesClassifier::train(docs, labels, vocabulary)?),
        ClassifierKind::Knn => Box::new(KnnClassifier::train(docs, labels, vocabulary, params.k)?),
        ClassifierKind::Svm => Box::new(SvmClassifier::train(docs, labels, vocabulary, params.c)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::DEFAULT_LEXICON;

    #[test]
    fn vocabulary_counts_drop_oov_words() {
        let vocab = Vocabulary::new(
            vec!["好吃".into(), "难吃".into()],
            Arc::new(DEFAULT_LEXICON.clone()),
        )
        .unwrap();
        let v = vocab.counts("好吃好吃，米饭难吃");
        assert_eq!(v, vec![2.0, 1.0]);
    }

    #[test]
    fn normalization_handles_zero_overlap() {
        let vocab = Vocabulary::new(vec!["好吃".into()], Arc::new(DEFAULT_LEXICON.clone())).unwrap();
        assert_eq!(vocab.normalized("米饭"), vec![0.0]);
        let v = vocab.normalized("好吃好吃");
        assert!((v[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let err = Vocabulary::new(vec![], Arc::new(DEFAULT_LEXICON.clone())).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn classifier_kind_parses_from_config_strings() {
        #[derive(Deserialize)]
        struct Wrap {
            kind: ClassifierKind,
        }
        let w: Wrap = toml::from_str("kind = \"bayes\"").unwrap();
        assert_eq!(w.kind, ClassifierKind::Bayes);
        let w: Wrap = toml::from_str("kind = \"svm\"").unwrap();
        assert_eq!(w.kind, ClassifierKind::Svm);
    }
}
