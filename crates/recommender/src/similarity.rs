//! Term-frequency cosine similarity between two texts.
//!
//! ## Algorithm
//! 1. Split each text on whitespace
//! 2. Count occurrences of each distinct word
//! 3. cosine = dot(a, b) / (|a| * |b|)
//!
//! Counts are integers, so the dot product and both squared norms are exact.
//! The square root is taken once over `|a|² * |b|²`, which keeps
//! `similarity(x, x) == 1.0` and makes the function symmetric bit-for-bit.

use std::collections::HashMap;

/// Word -> occurrence count for one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency<'a> {
    counts: HashMap<&'a str, u64>,
    total: u64,
}

impl<'a> TermFrequency<'a> {
    /// Tokenize `text` on whitespace and count every word
    pub fn from_text(text: &'a str) -> Self {
        let mut counts: HashMap<&'a str, u64> = HashMap::new();
        let mut total = 0;
        for word in text.split_whitespace() {
            *counts.entry(word).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn total_words(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Dot product over the union of both vocabularies.
    ///
    /// Words missing from one side contribute zero, so iterating the smaller
    /// map is enough.
    pub fn dot(&self, other: &TermFrequency<'_>) -> u64 {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(word, &count)| count * large.count(word))
            .sum()
    }

    /// Squared Euclidean norm
    pub fn norm_squared(&self) -> u64 {
        self.counts.values().map(|&c| c * c).sum()
    }

    /// Cosine similarity in [0, 1]; 0.0 when either side has no words
    pub fn cosine(&self, other: &TermFrequency<'_>) -> f64 {
        let norm_a = self.norm_squared();
        let norm_b = other.norm_squared();
        if norm_a == 0 || norm_b == 0 {
            return 0.0;
        }
        let dot = self.dot(other) as f64;
        let denominator = (norm_a as f64 * norm_b as f64).sqrt();
        (dot / denominator).clamp(0.0, 1.0)
    }
}

/// Cosine similarity of the term-frequency vectors of two texts
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    TermFrequency::from_text(text_a).cosine(&TermFrequency::from_text(text_b))
}
