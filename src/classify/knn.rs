//! k-nearest-neighbour classification over cosine distance. Lazy model:
//! training just stores the normalized vectors. Vote ties go to the
//! single nearest neighbour; distance ties prefer the lower training
//! index, keeping every outcome deterministic.

use std::sync::Arc;
use tracing::info;

use super::{check_training_inputs, Classifier, Vocabulary};
use crate::error::Result;
use crate::Label;

#[derive(Debug)]
pub struct KnnClassifier {
    vocabulary: Arc<Vocabulary>,
    vectors: Vec<Vec<f64>>,
    labels: Vec<Label>,
    k: usize,
}

impl KnnClassifier {
    pub fn train(
        docs: &[String],
        labels: &[Label],
        vocabulary: Arc<Vocabulary>,
        k: usize,
    ) -> Result<Self> {
        check_training_inputs(docs, labels)?;

        let vectors: Vec<Vec<f64>> = docs.iter().map(|d| vocabulary.normalized(d)).collect();
        info!(docs = docs.len(), k, "knn classifier ready");

        Ok(Self {
            vocabulary,
            vectors,
            labels: labels.to_vec(),
            k: k.max(1),
        })
    }

    /// Cosine distance between two L2-normalized vectors.
    fn distance(a: &[f64], b: &[f64]) -> f64 {
        let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        1.0 - dot
    }
}

impl Classifier for KnnClassifier {
    fn classify(&self, text: &str) -> Label {
        let query = self.vocabulary.normalized(text);
        if query.iter().all(|&x| x == 0.0) {
            return 0;
        }

        let mut neighbours: Vec<(f64, usize)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (Self::distance(&query, v), i))
            .collect();
        neighbours.sort_by(|(da, ia), (db, ib)| {
            da.partial_cmp(db)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| ia.cmp(ib))
        });

        let k = self.k.min(neighbours.len());
        let mut votes = [0usize; 2];
        for &(_, idx) in neighbours.iter().take(k) {
            votes[self.labels[idx] as usize] += 1;
        }

        if votes[1] > votes[0] {
            1
        } else if votes[0] > votes[1] {
            0
        } else {
            // Tied vote: the nearest single neighbour decides.
            self.labels[neighbours[0].1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::lexicon::DEFAULT_LEXICON;

    fn vocab() -> Arc<Vocabulary> {
        Arc::new(
            Vocabulary::new(
                vec!["好吃".into(), "满意".into(), "难吃".into(), "失望".into()],
                Arc::new(DEFAULT_LEXICON.clone()),
            )
            .unwrap(),
        )
    }

    fn train_sample() -> (Vec<String>, Vec<Label>) {
        (
            vec![
                "好吃满意".into(),
                "好吃".into(),
                "满意".into(),
                "难吃失望".into(),
                "难吃".into(),
                "失望".into(),
            ],
            vec![1, 1, 1, 0, 0, 0],
        )
    }

    #[test]
    fn classifies_near_training_points() {
        let (docs, labels) = train_sample();
        let clf = KnnClassifier::train(&docs, &labels, vocab(), 3).unwrap();
        assert_eq!(clf.classify("很好吃，很满意"), 1);
        assert_eq!(clf.classify("难吃，失望"), 0);
    }

    #[test]
    fn tied_vote_falls_back_to_nearest_neighbour() {
        let (docs, labels) = train_sample();
        // Even k forces potential vote ties.
        let clf = KnnClassifier::train(&docs, &labels, vocab(), 2).unwrap();
        // Exact match of a positive training doc: nearest neighbour is
        // positive, so a 1-1 vote resolves to 1.
        assert_eq!(clf.classify("好吃满意"), 1);
    }

    #[test]
    fn zero_overlap_defaults_to_negative() {
        let (docs, labels) = train_sample();
        let clf = KnnClassifier::train(&docs, &labels, vocab(), 3).unwrap();
        assert_eq!(clf.classify("米饭"), 0);
    }

    #[test]
    fn k_larger_than_training_set_still_works() {
        let (docs, labels) = train_sample();
        let clf = KnnClassifier::train(&docs, &labels, vocab(), 99).unwrap();
        let out = clf.classify("好吃");
        assert!(out == 0 || out == 1);
    }

    #[test]
    fn rejects_empty_training_set() {
        assert!(matches!(
            KnnClassifier::train(&[], &[], vocab(), 3).unwrap_err(),
            Error::EmptyInput(_)
        ));
    }
}
