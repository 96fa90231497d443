// Joint TF-IDF term space for exactly two documents.
//
// The vocabulary is rebuilt for every pair. Nothing persists between calls,
// so concurrent comparisons never share a vocabulary.
//
// Weighting follows the smoothed textbook form:
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1      with n = 2
//   w(t, d)   = tf(t, d) * idf(t)
//
// With two documents df is 1 or 2, so a shared term gets idf 1.0 and a term
// unique to one document gets 1 + ln(3/2).

use std::collections::BTreeMap;

use serde::Serialize;

use super::tokenize::tokenize;

/// Number of documents in every joint corpus.
const CORPUS_SIZE: f64 = 2.0;

/// A document's weights over the shared vocabulary, one entry per term in
/// vocabulary order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermVector {
    weights: Vec<f64>,
}

impl TermVector {
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product with another vector over the same vocabulary.
    pub fn dot(&self, other: &TermVector) -> f64 {
        self.weights
            .iter()
            .zip(other.weights.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

/// The vocabulary of a document pair and both documents' vectors over it.
#[derive(Debug, Clone, Serialize)]
pub struct TermSpace {
    /// Distinct case-folded terms of both documents, sorted.
    pub vocabulary: Vec<String>,
    pub first: TermVector,
    pub second: TermVector,
}

impl TermSpace {
    /// Tokenize both documents and weight them over their union vocabulary.
    pub fn build(text1: &str, text2: &str) -> Self {
        Self::from_tokens(&tokenize(text1), &tokenize(text2))
    }

    /// Build the space from already tokenized documents.
    pub fn from_tokens<S: AsRef<str>>(tokens1: &[S], tokens2: &[S]) -> Self {
        // term -> (count in first, count in second); BTreeMap keeps the
        // vocabulary order stable and identical for both vectors.
        let mut counts: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
        for token in tokens1 {
            counts.entry(token.as_ref()).or_default().0 += 1;
        }
        for token in tokens2 {
            counts.entry(token.as_ref()).or_default().1 += 1;
        }

        let mut vocabulary = Vec::with_capacity(counts.len());
        let mut first = Vec::with_capacity(counts.len());
        let mut second = Vec::with_capacity(counts.len());

        for (term, (c1, c2)) in counts {
            let doc_freq = u32::from(c1 > 0) + u32::from(c2 > 0);
            let idf = smoothed_idf(doc_freq);
            vocabulary.push(term.to_string());
            first.push(f64::from(c1) * idf);
            second.push(f64::from(c2) * idf);
        }

        Self {
            vocabulary,
            first: TermVector { weights: first },
            second: TermVector { weights: second },
        }
    }

    /// Weight of `term` in the first and second document (0.0 when absent).
    pub fn weights_of(&self, term: &str) -> (f64, f64) {
        match self.vocabulary.binary_search_by(|t| t.as_str().cmp(term)) {
            Ok(i) => (self.first.weights[i], self.second.weights[i]),
            Err(_) => (0.0, 0.0),
        }
    }
}

fn smoothed_idf(doc_freq: u32) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + f64::from(doc_freq))).ln() + 1.0
}
