//! In-memory knowledge base with its TF-IDF vector cache.

use crate::similarity::{self, ScoredMatch};
use crate::types::FaqEntry;
use crate::vectorizer::TfIdfVectorizer;

/// Fitted model plus one cached vector per entry.
///
/// Always built from the full question list and swapped in whole, so the
/// vocabulary, IDF table and vectors never disagree with each other.
#[derive(Debug, Clone, Default)]
pub struct VectorCache {
    vectorizer: TfIdfVectorizer,
    vectors: Vec<Vec<f64>>,
}

impl VectorCache {
    /// Fit over the questions of `entries`, in order.
    pub fn build(entries: &[FaqEntry]) -> Self {
        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let (vectorizer, vectors) = TfIdfVectorizer::fit(&questions);
        Self {
            vectorizer,
            vectors,
        }
    }

    /// Vectorize a query against the cached vocabulary.
    pub fn query_vector(&self, text: &str) -> Vec<f64> {
        self.vectorizer.transform_one(text)
    }

    pub fn vectors(&self) -> &[Vec<f64>] {
        &self.vectors
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

/// Ordered question/answer store.
///
/// Every append rebuilds the vector cache synchronously; `&mut self` on
/// [`KnowledgeBase::add_entry`] keeps readers out while that happens.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
    cache: VectorCache,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a knowledge base from entries with a single rebuild.
    pub fn from_entries(entries: impl IntoIterator<Item = FaqEntry>) -> Self {
        let entries: Vec<FaqEntry> = entries.into_iter().collect();
        let cache = VectorCache::build(&entries);
        tracing::debug!(
            entries = entries.len(),
            vocabulary = cache.vectorizer().len(),
            "Built knowledge base"
        );
        Self { entries, cache }
    }

    /// Append an entry and refit the whole cache.
    pub fn add_entry(&mut self, entry: FaqEntry) {
        self.entries.push(entry);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.cache = VectorCache::build(&self.entries);
        tracing::debug!(
            entries = self.entries.len(),
            vocabulary = self.cache.vectorizer().len(),
            "Rebuilt vector cache"
        );
    }

    /// Best-scoring entry for `text`, regardless of threshold.
    pub fn best_match(&self, text: &str) -> Option<ScoredMatch> {
        let query = self.cache.query_vector(text);
        similarity::best_match(&query, self.cache.vectors())
    }

    /// Best entry for `text` whose score is at least `threshold`.
    pub fn search(&self, text: &str, threshold: f64) -> Option<(ScoredMatch, &FaqEntry)> {
        let query = self.cache.query_vector(text);
        let found = similarity::confident_match(&query, self.cache.vectors(), threshold)?;
        self.entries.get(found.index).map(|entry| (found, entry))
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cache(&self) -> &VectorCache {
        &self.cache
    }
}
