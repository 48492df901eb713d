// src/lib.rs
// Public library surface for integration tests (and potential reuse).
//
// Binary sentiment polarity for short Chinese consumer reviews. Two
// paths share one engine: a lexicon/rule dictionary classifier, and a
// statistical pipeline (corpus → chi-square vocabulary → Bayes/kNN/SVM).
// The serving layer (HTTP framing, request validation, label rendering)
// lives outside this crate; it only sees `analyse`, `train_model` and
// `Classifier::classify`.

pub mod classify;
pub mod corpus;
pub mod dict;
pub mod engine;
pub mod error;
pub mod eval;
pub mod features;
pub mod lexicon;
pub mod segment;

/// Binary polarity label: 1 = positive, 0 = negative.
pub type Label = u8;

// ---- Re-exports for stable public API ----
pub use crate::classify::{Classifier, ClassifierKind, TrainParams, Vocabulary};
pub use crate::corpus::{Corpus, HotelCorpus, TakeoutCorpus, TsvCorpus};
pub use crate::dict::DictClassifier;
pub use crate::engine::{default_engine, EngineConfig, EngineHandle, SentimentEngine};
pub use crate::error::{Error, Result};
pub use crate::features::ChiSquare;
pub use crate::lexicon::Lexicon;
