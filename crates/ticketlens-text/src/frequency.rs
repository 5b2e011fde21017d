//! Global token frequency counting

use std::collections::HashMap;

/// Token frequency table with a deterministic ranking.
///
/// Ties in `ranked` are broken by first-encountered order, so re-running
/// over identical input always yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record's token sequence into the table
    pub fn observe(&mut self, tokens: &[String]) {
        for token in tokens {
            if !self.counts.contains_key(token) {
                self.first_seen.push(token.clone());
            }
            *self.counts.entry(token.clone()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of tokens observed
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// (token, count) pairs by descending count.
    ///
    /// The stable sort over the first-seen sequence keeps encounter order
    /// for equal counts.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> = self
            .first_seen
            .iter()
            .map(|token| (token.clone(), self.counts[token]))
            .collect();
        pairs.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
        pairs
    }
}
