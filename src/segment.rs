//! # Sentence Splitter
//! Segments raw review text into clauses on punctuation boundaries and
//! clauses into tokens. Chinese runs are segmented by forward maximum
//! matching against the lexicon with a single-character fallback; Latin
//! and digit runs stay whole tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

/// Sentence-ending and comma-like punctuation that closes a clause.
const CLAUSE_BREAKS: &[char] = &[
    '，', ',', '。', '.', '！', '!', '？', '?', '；', ';', '…', '～', '~', '\n',
];

static LATIN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+").expect("latin regex"));

/// Split text into punctuation-delimited clauses, dropping empty segments.
pub fn split_clauses(text: &str) -> Vec<&str> {
    text.split(|c: char| CLAUSE_BREAKS.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Tokenize one clause.
///
/// Scans left to right: the longest lexicon entry starting at the current
/// position wins (lookahead bounded by the lexicon's longest word); a
/// Latin/digit run is one token; anything else falls back to a single
/// character. Whitespace separates tokens but is never emitted.
pub fn tokenize(clause: &str, lexicon: &Lexicon) -> Vec<String> {
    let chars: Vec<char> = clause.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c.is_ascii_alphanumeric() {
            let rest: String = chars[i..].iter().collect();
            let m = LATIN_RUN.find(&rest).expect("ascii alnum starts a run");
            tokens.push(m.as_str().to_string());
            i += m.as_str().chars().count();
            continue;
        }

        let max_len = lexicon.max_word_chars().min(chars.len() - i).max(1);
        let mut matched = 1;
        for len in (2..=max_len).rev() {
            let candidate: String = chars[i..i + len].iter().collect();
            if lexicon.contains_word(&candidate) {
                matched = len;
                break;
            }
        }
        tokens.push(chars[i..i + matched].iter().collect());
        i += matched;
    }

    tokens
}

/// Full segmentation: clauses of tokens, in reading order.
pub fn segment(text: &str, lexicon: &Lexicon) -> Vec<Vec<String>> {
    split_clauses(text)
        .into_iter()
        .map(|clause| tokenize(clause, lexicon))
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Flat token stream of a document, clause structure discarded. Used to
/// vectorize corpus documents for the statistical path.
pub fn tokens(text: &str, lexicon: &Lexicon) -> Vec<String> {
    segment(text, lexicon).into_iter().flatten().collect()
}
