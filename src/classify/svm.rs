//! Margin-based linear classifier trained with Pegasos-style
//! subgradient descent. No RNG: the solver sweeps the training set in a
//! fixed cyclic order for a fixed number of epochs, so a given input
//! always yields the same weight vector. Features are L2-normalized on
//! both sides of the train/classify boundary.

use std::sync::Arc;
use tracing::info;

use super::{check_training_inputs, Classifier, Vocabulary};
use crate::error::Result;
use crate::Label;

/// Fixed sweep count; enough for these small, near-separable corpora.
const EPOCHS: usize = 100;

#[derive(Debug)]
pub struct SvmClassifier {
    vocabulary: Arc<Vocabulary>,
    weights: Vec<f64>,
    bias: f64,
}

impl SvmClassifier {
    pub fn train(
        docs: &[String],
        labels: &[Label],
        vocabulary: Arc<Vocabulary>,
        c: f64,
    ) -> Result<Self> {
        check_training_inputs(docs, labels)?;

        let vectors: Vec<Vec<f64>> = docs.iter().map(|d| vocabulary.normalized(d)).collect();
        let targets: Vec<f64> = labels
            .iter()
            .map(|&l| if l == 1 { 1.0 } else { -1.0 })
            .collect();

        let n = vectors.len();
        let lambda = 1.0 / (c.max(f64::EPSILON) * n as f64);
        let mut weights = vec![0.0f64; vocabulary.len()];
        let mut bias = 0.0f64;
        let mut t = 1usize;

        for _ in 0..EPOCHS {
            for (x, &y) in vectors.iter().zip(&targets) {
                let eta = 1.0 / (lambda * t as f64);
                let margin = y * (dot(&weights, x) + bias);

                let shrink = 1.0 - eta * lambda;
                for w in &mut weights {
                    *w *= shrink;
                }
                if margin < 1.0 {
                    for (w, xi) in weights.iter_mut().zip(x) {
                        *w += eta * y * xi;
                    }
                    bias += eta * y;
                }
                t += 1;
            }
        }

        info!(docs = n, c, epochs = EPOCHS, "svm classifier trained");

        Ok(Self {
            vocabulary,
            weights,
            bias,
        })
    }

    /// Raw decision value; positive means positive class.
    pub fn decision(&self, text: &str) -> f64 {
        dot(&self.weights, &self.vocabulary.normalized(text)) + self.bias
    }
}

impl Classifier for SvmClassifier {
    fn classify(&self, text: &str) -> Label {
        let x = self.vocabulary.normalized(text);
        if x.iter().all(|&v| v == 0.0) {
            return 0;
        }
        // Sign exactly 0 resolves to negative.
        if dot(&self.weights, &x) + self.bias > 0.0 {
            1
        } else {
            0
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
