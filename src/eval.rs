//! # Evaluator
//! Pure metric functions over predicted vs. actual label sequences.
//! Argument order is fixed: predicted first, actual second.

use crate::error::{Error, Result};
use crate::Label;

fn check(predicted: &[Label], actual: &[Label]) -> Result<()> {
    if predicted.len() != actual.len() {
        return Err(Error::mismatch(
            "predicted vs actual labels",
            predicted.len(),
            actual.len(),
        ));
    }
    if predicted.is_empty() {
        return Err(Error::EmptyInput("label sequences to evaluate".into()));
    }
    Ok(())
}

/// Fraction of positions where prediction and truth agree, in [0, 1].
pub fn accuracy(predicted: &[Label], actual: &[Label]) -> Result<f64> {
    check(predicted, actual)?;
    let hits = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    Ok(hits as f64 / predicted.len() as f64)
}

/// Precision of the positive class. No positive predictions → 0.0 by
/// policy, not an error.
pub fn precision(predicted: &[Label], actual: &[Label]) -> Result<f64> {
    check(predicted, actual)?;
    let predicted_pos = predicted.iter().filter(|&&p| p == 1).count();
    if predicted_pos == 0 {
        return Ok(0.0);
    }
    let true_pos = predicted
        .iter()
        .zip(actual)
        .filter(|(&p, &a)| p == 1 && a == 1)
        .count();
    Ok(true_pos as f64 / predicted_pos as f64)
}

/// Recall of the positive class. No actual positives → 0.0 by policy.
pub fn recall(predicted: &[Label], actual: &[Label]) -> Result<f64> {
    check(predicted, actual)?;
    let actual_pos = actual.iter().filter(|&&a| a == 1).count();
    if actual_pos == 0 {
        return Ok(0.0);
    }
    let true_pos = predicted
        .iter()
        .zip(actual)
        .filter(|(&p, &a)| p == 1 && a == 1)
        .count();
    Ok(true_pos as f64 / actual_pos as f64)
}
