//! Text normalization and tokenization

use crate::stopwords::Stopwords;
use regex::Regex;
use std::sync::OnceLock;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"[a-z0-9]+").unwrap())
}

/// Tokenizer owning the stop-word set it filters against
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Stopwords,
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Lowercase the input, extract alphanumeric runs, drop stop-words.
    ///
    /// The output is ordered and may be empty; callers pass an empty string
    /// for missing cells.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        token_re()
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}
