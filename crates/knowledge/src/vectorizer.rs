//! TF-IDF vectorizer over normalized terms.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::normalizer::tokenize;

/// A fitted TF-IDF model: sorted vocabulary plus index-aligned IDF weights.
///
/// Vectors are plain `Vec<f64>` aligned to [`TfIdfVectorizer::vocabulary`].
/// They are not normalized; cosine similarity takes care of scale.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// Sorted distinct terms
    vocabulary: Vec<String>,
    /// term -> position in `vocabulary`
    index: HashMap<String, usize>,
    /// Smoothed IDF per vocabulary position
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer (empty vocabulary).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit a fresh model on `documents` and return it with one vector per document.
    ///
    /// `idf(t) = ln((N + 1) / (df(t) + 1)) + 1` with `N = max(1, documents)`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<Vec<f64>>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        // BTreeMap keeps terms sorted for deterministic indexing
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len().max(1) as f64;
        let mut vocabulary = Vec::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (term, df) in &doc_freq {
            vocabulary.push((*term).to_string());
            idf.push(((n + 1.0) / (*df as f64 + 1.0)).ln() + 1.0);
        }

        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let fitted = Self {
            vocabulary,
            index,
            idf,
        };

        let vectors = tokenized.iter().map(|tokens| fitted.vectorize(tokens)).collect();

        tracing::trace!(
            documents = documents.len(),
            vocabulary = fitted.vocabulary.len(),
            "Fitted TF-IDF model"
        );

        (fitted, vectors)
    }

    /// Refit in place, replacing vocabulary and IDF table as a unit.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<Vec<f64>> {
        let (fitted, vectors) = Self::fit(documents);
        *self = fitted;
        vectors
    }

    /// Vectorize a single text against the current vocabulary.
    ///
    /// Terms outside the vocabulary are ignored.
    pub fn transform_one(&self, text: &str) -> Vec<f64> {
        self.vectorize(&tokenize(text))
    }

    fn vectorize(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        if self.vocabulary.is_empty() || tokens.is_empty() {
            return vector;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        for (term, count) in counts {
            if let Some(&idx) = self.index.get(term) {
                vector[idx] = (count as f64 / total) * self.idf[idx];
            }
        }

        vector
    }

    /// Sorted vocabulary of the last fit.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// IDF weights, aligned with [`Self::vocabulary`].
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Vocabulary size (vector length).
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
