//! # Corpus Provider
//! Labeled review datasets behind one contract: raw index slices plus
//! deterministic train/test partitions. Two bundled variants (takeout
//! and hotel reviews) differ only in their backing resource.
//!
//! Resource format: one record per line, `label<TAB>text`, label 0|1.
//! Partition policy: `get_train_corpus(n)` is the first `n` documents of
//! each class (positive block first), `get_test_corpus(n)` the last `n`
//! of each class, so the slices are reproducible across runs and never
//! overlap while `train_n + test_n` fits in each class.

use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::info;

use crate::error::{Error, Result};
use crate::Label;

static TAKEOUT: Lazy<Arc<CorpusData>> = Lazy::new(|| {
    Arc::new(
        CorpusData::parse_tsv("takeout", include_str!("../resources/corpus/takeout.tsv"))
            .expect("valid embedded takeout corpus"),
    )
});

static HOTEL: Lazy<Arc<CorpusData>> = Lazy::new(|| {
    Arc::new(
        CorpusData::parse_tsv("hotel", include_str!("../resources/corpus/hotel.tsv"))
            .expect("valid embedded hotel corpus"),
    )
});

/// Shared corpus contract. Implementations are read-only after load.
pub trait Corpus {
    fn name(&self) -> &str;
    fn len(&self) -> usize;

    /// Documents `start..end` in resource order.
    fn get_corpus(&self, start: usize, end: usize) -> Result<(Vec<String>, Vec<Label>)>;

    /// First `n` positive + first `n` negative documents.
    fn get_train_corpus(&self, n: usize) -> Result<(Vec<String>, Vec<Label>)>;

    /// Last `n` positive + last `n` negative documents.
    fn get_test_corpus(&self, n: usize) -> Result<(Vec<String>, Vec<Label>)>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct CorpusData {
    name: &'static str,
    docs: Vec<(String, Label)>,
    positive: Vec<usize>,
    negative: Vec<usize>,
}

impl CorpusData {
    fn parse_tsv(name: &'static str, raw: &str) -> Result<Self> {
        let mut docs = Vec::new();
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (lineno, line) in raw.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let (label, text) = line.split_once('\t').ok_or_else(|| {
                Error::resource(
                    format!("{name} corpus"),
                    format!("line {}: expected `label<TAB>text`", lineno + 1),
                )
            })?;
            let label: Label = match label.trim() {
                "0" => 0,
                "1" => 1,
                other => {
                    return Err(Error::resource(
                        format!("{name} corpus"),
                        format!("line {}: bad label `{}`", lineno + 1, other),
                    ))
                }
            };
            let text = text.trim();
            if text.is_empty() {
                return Err(Error::resource(
                    format!("{name} corpus"),
                    format!("line {}: empty text", lineno + 1),
                ));
            }
            if label == 1 {
                positive.push(docs.len());
            } else {
                negative.push(docs.len());
            }
            docs.push((text.to_string(), label));
        }

        if docs.is_empty() {
            return Err(Error::resource(format!("{name} corpus"), "no records"));
        }

        info!(
            corpus = name,
            total = docs.len(),
            positive = positive.len(),
            negative = negative.len(),
            "corpus loaded"
        );

        Ok(Self {
            name,
            docs,
            positive,
            negative,
        })
    }

    fn collect(&self, idx: &[usize]) -> (Vec<String>, Vec<Label>) {
        let mut texts = Vec::with_capacity(idx.len());
        let mut labels = Vec::with_capacity(idx.len());
        for &i in idx {
            let (text, label) = &self.docs[i];
            texts.push(text.clone());
            labels.push(*label);
        }
        (texts, labels)
    }

    fn class_slice(&self, n: usize, from_end: bool) -> Result<(Vec<String>, Vec<Label>)> {
        let available = self.positive.len().min(self.negative.len());
        if n > available {
            return Err(Error::Range {
                what: format!("{} corpus per-class slice", self.name),
                wanted: n,
                available,
            });
        }
        let pick = |idx: &[usize]| -> Vec<usize> {
            if from_end {
                idx[idx.len() - n..].to_vec()
            } else {
                idx[..n].to_vec()
            }
        };
        let mut indices = pick(&self.positive);
        indices.extend(pick(&self.negative));
        Ok(self.collect(&indices))
    }
}

/// A corpus backed by one TSV resource, bundled or caller-supplied.
#[derive(Debug, Clone)]
pub struct TsvCorpus {
    data: Arc<CorpusData>,
}

impl TsvCorpus {
    /// Parse a caller-supplied TSV corpus. The name is used in error and
    /// log messages only.
    pub fn from_tsv_str(name: &'static str, raw: &str) -> Result<Self> {
        Ok(Self {
            data: Arc::new(CorpusData::parse_tsv(name, raw)?),
        })
    }
}

impl Corpus for TsvCorpus {
    fn name(&self) -> &str {
        self.data.name
    }

    fn len(&self) -> usize {
        self.data.docs.len()
    }

    fn get_corpus(&self, start: usize, end: usize) -> Result<(Vec<String>, Vec<Label>)> {
        if start > end || end > self.data.docs.len() {
            return Err(Error::Range {
                what: format!("{} corpus slice {}..{}", self.data.name, start, end),
                wanted: end,
                available: self.data.docs.len(),
            });
        }
        let indices: Vec<usize> = (start..end).collect();
        Ok(self.data.collect(&indices))
    }

    fn get_train_corpus(&self, n: usize) -> Result<(Vec<String>, Vec<Label>)> {
        self.data.class_slice(n, false)
    }

    fn get_test_corpus(&self, n: usize) -> Result<(Vec<String>, Vec<Label>)> {
        self.data.class_slice(n, true)
    }
}

/// Bundled takeout (waimai) review corpus.
#[derive(Debug, Clone)]
pub struct TakeoutCorpus(TsvCorpus);

impl TakeoutCorpus {
    pub fn new() -> Self {
        Self(TsvCorpus {
            data: TAKEOUT.clone(),
        })
    }
}

impl Default for TakeoutCorpus {
    fn default() -> Self {
        Self::new()
    }
}

/// Bundled hotel review corpus.
#[derive(Debug, Clone)]
pub struct HotelCorpus(TsvCorpus);

impl HotelCorpus {
    pub fn new() -> Self {
        Self(TsvCorpus {
            data: HOTEL.clone(),
        })
    }
}

impl Default for HotelCorpus {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! delegate_corpus {
    ($ty:ty) => {
        impl Corpus for $ty {
            fn name(&self) -> &str {
                self.0.name()
            }
            fn len(&self) -> usize {
                self.0.len()
            }
            fn get_corpus(&self, start: usize, end: usize) -> Result<(Vec<String>, Vec<Label>)> {
                self.0.get_corpus(start, end)
            }
            fn get_train_corpus(&self, n: usize) -> Result<(Vec<String>, Vec<Label>)> {
                self.0.get_train_corpus(n)
            }
            fn get_test_corpus(&self, n: usize) -> Result<(Vec<String>, Vec<Label>)> {
                self.0.get_test_corpus(n)
            }
        }
    };
}

delegate_corpus!(TakeoutCorpus);
delegate_corpus!(HotelCorpus);
