//! # Engine
//! Composition root for both analysis paths. The engine owns the
//! long-lived, read-only pieces (lexicon, dictionary classifier,
//! configuration); `EngineHandle` is the cheap clonable handle request
//! handlers are given, so there is no ambient mutable state anywhere.
//!
//! Configuration comes from TOML, resolved the same way as every other
//! resource here: explicit string constructor for tests, env-pointed
//! path for deployments.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::classify::{self, Classifier, ClassifierKind, TrainParams, Vocabulary};
use crate::corpus::{Corpus, HotelCorpus, TakeoutCorpus};
use crate::dict::{DictClassifier, DEFAULT_NEGATION_WINDOW};
use crate::error::Result;
use crate::eval;
use crate::features::ChiSquare;
use crate::lexicon::{Lexicon, DEFAULT_LEXICON};
use crate::Label;

pub const DEFAULT_ENGINE_CONFIG_PATH: &str = "config/engine.toml";
pub const ENV_ENGINE_CONFIG_PATH: &str = "ENGINE_CONFIG_PATH";

/// Process-wide engine with default configuration, for callers that
/// want singleton ergonomics. Construction still happens exactly once,
/// guarded by the lazy cell.
static DEFAULT_ENGINE: Lazy<EngineHandle> =
    Lazy::new(|| EngineHandle::new(SentimentEngine::default()));

pub fn default_engine() -> &'static EngineHandle {
    &DEFAULT_ENGINE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusKind {
    Takeout,
    Hotel,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dictionary: DictionarySection,
    pub statistical: StatisticalSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DictionarySection {
    pub negation_window: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatisticalSection {
    pub classifier: ClassifierKind,
    pub corpus: CorpusKind,
    pub vocab_size: usize,
    pub train_per_class: usize,
    pub test_per_class: usize,
    pub k: usize,
    pub c: f64,
}

impl Default for DictionarySection {
    fn default() -> Self {
        Self {
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }
}

impl Default for StatisticalSection {
    fn default() -> Self {
        Self {
            classifier: ClassifierKind::Bayes,
            corpus: CorpusKind::Takeout,
            vocab_size: 500,
            train_per_class: 20,
            test_per_class: 5,
            k: 3,
            c: 10.0,
        }
    }
}

impl EngineConfig {
    /// Load from `$ENGINE_CONFIG_PATH` or `config/engine.toml`; a
    /// missing file falls back to defaults, a malformed one is an error.
    pub fn from_toml() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_ENGINE_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ENGINE_CONFIG_PATH));
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading engine config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: Self = toml::from_str(toml_str).context("parsing engine config")?;
        Ok(cfg)
    }
}

/// Long-lived analyzer instance. Everything inside is immutable after
/// construction; sharing across threads needs no locking.
#[derive(Debug)]
pub struct SentimentEngine {
    config: EngineConfig,
    lexicon: Arc<Lexicon>,
    dict: DictClassifier,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SentimentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_lexicon(config, Arc::new(DEFAULT_LEXICON.clone()))
    }

    pub fn with_lexicon(config: EngineConfig, lexicon: Arc<Lexicon>) -> Self {
        let dict = DictClassifier::with_lexicon(lexicon.clone(), config.dictionary.negation_window);
        info!(
            window = config.dictionary.negation_window,
            "sentiment engine ready"
        );
        Self {
            config,
            lexicon,
            dict,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dict(&self) -> &DictClassifier {
        &self.dict
    }

    /// Dictionary path: `analyse(text) -> {0, 1}`.
    pub fn analyse(&self, text: &str) -> Result<Label> {
        self.dict.analyse(text)
    }

    pub fn analyse_batch(&self, texts: &[&str]) -> Result<Vec<(String, Label)>> {
        self.dict.analyse_batch(texts)
    }

    fn corpus(&self) -> Box<dyn Corpus> {
        match self.config.statistical.corpus {
            CorpusKind::Takeout => Box::new(TakeoutCorpus::new()),
            CorpusKind::Hotel => Box::new(HotelCorpus::new()),
        }
    }

    /// Statistical path: train the configured variant on the configured
    /// corpus slice. Each call produces a fresh immutable model.
    pub fn train_model(&self) -> Result<Box<dyn Classifier>> {
        let stats = &self.config.statistical;
        let (docs, labels) = self.corpus().get_train_corpus(stats.train_per_class)?;
        self.train_model_on(&docs, &labels)
    }

    /// Train on caller-supplied documents, using the engine's lexicon,
    /// vocabulary size and classifier settings.
    pub fn train_model_on(&self, docs: &[String], labels: &[Label]) -> Result<Box<dyn Classifier>> {
        let stats = &self.config.statistical;
        let chi = ChiSquare::new(docs, labels, &self.lexicon)?;
        let words = chi.best_words(stats.vocab_size);
        let vocabulary = Arc::new(Vocabulary::new(words, self.lexicon.clone())?);
        classify::train_model(
            stats.classifier,
            docs,
            labels,
            vocabulary,
            TrainParams {
                k: stats.k,
                c: stats.c,
            },
        )
    }

    /// Train on the configured train slice, evaluate on the configured
    /// test slice. Mirrors the original offline experiments.
    pub fn run_experiment(&self) -> Result<ExperimentReport> {
        let stats = &self.config.statistical;
        let corpus = self.corpus();
        let (train_docs, train_labels) = corpus.get_train_corpus(stats.train_per_class)?;
        let model = self.train_model_on(&train_docs, &train_labels)?;

        let (test_docs, test_labels) = corpus.get_test_corpus(stats.test_per_class)?;
        let predicted: Vec<Label> = test_docs.iter().map(|d| model.classify(d)).collect();

        Ok(ExperimentReport {
            classifier: stats.classifier,
            corpus: stats.corpus,
            accuracy: eval::accuracy(&predicted, &test_labels)?,
            precision: eval::precision(&predicted, &test_labels)?,
            recall: eval::recall(&predicted, &test_labels)?,
        })
    }
}

/// Offline evaluation summary for one classifier/corpus configuration.
#[derive(Debug, Clone, Copy)]
pub struct ExperimentReport {
    pub classifier: ClassifierKind,
    pub corpus: CorpusKind,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
}

/// Clonable handle over one owned engine, for request handlers.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    inner: Arc<SentimentEngine>,
}

impl EngineHandle {
    pub fn new(engine: SentimentEngine) -> Self {
        Self {
            inner: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &SentimentEngine {
        &self.inner
    }

    pub fn analyse(&self, text: &str) -> Result<Label> {
        self.inner.analyse(text)
    }
}
