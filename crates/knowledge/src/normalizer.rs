//! Text normalization for retrieval.
//!
//! Lowercases, strips everything outside `[a-z0-9 ]`, drops stopwords and
//! applies a naive suffix stripper. Output terms feed the TF-IDF vectorizer.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Closed stopword list: articles, auxiliaries, pronouns, common
/// prepositions/conjunctions, wh-words and modal verbs.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "am", "was", "were", "be", "been", "being", "to", "of", "in",
    "for", "on", "and", "or", "not", "with", "this", "that", "these", "those", "it", "its", "i",
    "you", "he", "she", "we", "they", "me", "my", "your", "our", "their", "can", "could",
    "should", "would", "will", "shall", "may", "might", "do", "does", "did", "what", "when",
    "where", "why", "how", "which", "who", "whom", "as", "at", "by", "from", "have", "has", "had",
    "if", "else", "then", "than", "so", "such", "also", "about",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Returns true if `word` (already lowercased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOP_SET.contains(word)
}

/// Tokenize text into normalized terms.
///
/// Empty or symbol-only input yields an empty vector.
///
/// ```
/// use faqbot_knowledge::normalizer::tokenize;
///
/// assert_eq!(tokenize("What is the time?"), vec!["time"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .map(stem)
        .filter(|term| !term.is_empty())
        .collect()
}

/// Strip one common English suffix.
///
/// Words of three characters or fewer pass through. Otherwise the first
/// matching rule wins: "ing" (only if more than one character remains),
/// "ed", "es", then a single trailing "s".
pub fn stem(word: &str) -> String {
    let word = word.to_lowercase();
    let len = word.chars().count();
    if len <= 3 {
        return word;
    }

    if len > 4 {
        if let Some(base) = word.strip_suffix("ing") {
            return base.to_string();
        }
    }

    word.strip_suffix("ed")
        .or_else(|| word.strip_suffix("es"))
        .or_else(|| word.strip_suffix('s'))
        .map(str::to_string)
        .unwrap_or(word)
}
