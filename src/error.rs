//! # Error taxonomy
//! Every fallible core operation returns one of these variants; ties,
//! unseen words and zero-score sentences are resolved by fixed policy in
//! the modules themselves and never surface as errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Lexicon or corpus resource is missing or malformed. Fatal at
    /// startup; callers are not expected to retry.
    #[error("failed to load {resource}: {reason}")]
    ResourceLoad { resource: String, reason: String },

    /// A corpus slice was requested past the end of the data. We refuse
    /// rather than silently truncate.
    #[error("requested {what} range is out of bounds: wanted {wanted}, have {available}")]
    Range {
        what: String,
        wanted: usize,
        available: usize,
    },

    /// Empty text, empty training set or empty vocabulary.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Evaluator or trainer was given sequences of different lengths.
    #[error("dimension mismatch: {left_len} vs {right_len} ({context})")]
    DimensionMismatch {
        context: String,
        left_len: usize,
        right_len: usize,
    },
}

impl Error {
    pub(crate) fn resource(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceLoad {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(context: impl Into<String>, left_len: usize, right_len: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            left_len,
            right_len,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
