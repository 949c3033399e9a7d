//! FAQ knowledge base and retrieval core.
//!
//! Answers questions from a small, mutable set of question/answer pairs:
//! - `normalizer`: tokenization, stopwords, suffix stripping
//! - `vectorizer`: TF-IDF over normalized terms
//! - `similarity`: cosine ranking with a confidence gate
//! - `rules`: greetings, thanks, date/time and other canned replies
//! - `base`: ordered entries plus their vector cache
//! - `chatbot`: the orchestrator tying it all together

pub mod base;
pub mod chatbot;
pub mod normalizer;
pub mod rules;
pub mod seed;
pub mod similarity;
pub mod types;
pub mod vectorizer;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use base::{KnowledgeBase, VectorCache};
pub use chatbot::{Chatbot, FALLBACK_MESSAGE, GREETING, PROMPT_MESSAGE};
pub use rules::{try_rules, RuleKind};
pub use similarity::{best_match, cosine, ScoredMatch};
pub use types::{BotStats, FaqEntry, Reply, ReplyKind};
pub use vectorizer::TfIdfVectorizer;
