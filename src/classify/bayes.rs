//! Naive Bayes with additive (Laplace) smoothing over the selected
//! vocabulary. Classification compares per-class log posteriors, so
//! unseen words can never zero out a whole class.

use std::sync::Arc;
use tracing::info;

use super::{check_training_inputs, Classifier, Vocabulary};
use crate::error::Result;
use crate::Label;

#[derive(Debug)]
pub struct BayesClassifier {
    vocabulary: Arc<Vocabulary>,
    /// log P(class), indexed by label.
    log_prior: [f64; 2],
    /// log P(word | class), indexed by label then vocabulary position.
    log_likelihood: [Vec<f64>; 2],
}

impl BayesClassifier {
    pub fn train(docs: &[String], labels: &[Label], vocabulary: Arc<Vocabulary>) -> Result<Self> {
        check_training_inputs(docs, labels)?;

        let v = vocabulary.len();
        let mut word_counts = [vec![0.0f64; v], vec![0.0f64; v]];
        let mut doc_counts = [0.0f64; 2];

        for (doc, &label) in docs.iter().zip(labels) {
            let class = label as usize;
            doc_counts[class] += 1.0;
            for (i, count) in vocabulary.counts(doc).into_iter().enumerate() {
                word_counts[class][i] += count;
            }
        }

        let total_docs = docs.len() as f64;
        // Classes absent from the training set keep a tiny prior instead
        // of -inf so classification stays total.
        let log_prior = [
            ((doc_counts[0] + 1.0) / (total_docs + 2.0)).ln(),
            ((doc_counts[1] + 1.0) / (total_docs + 2.0)).ln(),
        ];

        let log_likelihood = [0usize, 1].map(|class| {
            let total_words: f64 = word_counts[class].iter().sum();
            word_counts[class]
                .iter()
                .map(|&c| ((c + 1.0) / (total_words + v as f64)).ln())
                .collect()
        });

        info!(
            docs = docs.len(),
            vocabulary = v,
            "bayes classifier trained"
        );

        Ok(Self {
            vocabulary,
            log_prior,
            log_likelihood,
        })
    }
}

impl Classifier for BayesClassifier {
    fn classify(&self, text: &str) -> Label {
        let counts = self.vocabulary.counts(text);
        if counts.iter().all(|&c| c == 0.0) {
            return 0;
        }

        let posterior = |class: usize| -> f64 {
            self.log_prior[class]
                + counts
                    .iter()
                    .zip(&self.log_likelihood[class])
                    .map(|(c, ll)| c * ll)
                    .sum::<f64>()
        };

        // Exact ties resolve to negative.
        if posterior(1) > posterior(0) {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::lexicon::DEFAULT_LEXICON;

    fn vocab(words: &[&str]) -> Arc<Vocabulary> {
        Arc::new(
            Vocabulary::new(
                words.iter().map(|w| w.to_string()).collect(),
                Arc::new(DEFAULT_LEXICON.clone()),
            )
            .unwrap(),
        )
    }

    fn train_sample() -> (Vec<String>, Vec<Label>) {
        (
            vec![
                "好吃满意".into(),
                "很好吃".into(),
                "满意推荐".into(),
                "难吃失望".into(),
                "太难吃".into(),
                "失望差评".into(),
            ],
            vec![1, 1, 1, 0, 0, 0],
        )
    }

    #[test]
    fn separates_training_classes() {
        let (docs, labels) = train_sample();
        let vocab = vocab(&["好吃", "满意", "推荐", "难吃", "失望", "差评"]);
        let clf = BayesClassifier::train(&docs, &labels, vocab).unwrap();
        let predictions: Vec<Label> = docs.iter().map(|d| clf.classify(d)).collect();
        assert_eq!(predictions, labels);
    }

    #[test]
    fn zero_overlap_defaults_to_negative() {
        let (docs, labels) = train_sample();
        let vocab = vocab(&["好吃", "难吃"]);
        let clf = BayesClassifier::train(&docs, &labels, vocab).unwrap();
        assert_eq!(clf.classify("米饭"), 0);
    }

    #[test]
    fn rejects_empty_and_mismatched_inputs() {
        let vocab = vocab(&["好吃"]);
        assert!(matches!(
            BayesClassifier::train(&[], &[], vocab.clone()).unwrap_err(),
            Error::EmptyInput(_)
        ));
        assert!(matches!(
            BayesClassifier::train(&["好吃".into()], &[1, 0], vocab).unwrap_err(),
            Error::DimensionMismatch { .. }
        ));
    }
}
