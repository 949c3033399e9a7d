//! Knowledge system type definitions.

use serde::{Deserialize, Serialize};

use crate::rules::RuleKind;

/// A stored question/answer pair.
///
/// Entries are identified by their position in the knowledge base and are
/// never edited after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question a user might ask
    pub question: String,

    /// Answer the bot should reply with
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// How a reply was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyKind {
    /// Blank input; the user was asked to type something
    Prompt,

    /// A canned rule fired
    Rule { rule: RuleKind },

    /// A knowledge base entry cleared the confidence threshold
    Faq { index: usize, score: f64 },

    /// Nothing matched confidently
    Fallback,
}

/// A display-ready reply plus how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(flatten)]
    pub kind: ReplyKind,

    /// Text shown to the user
    pub text: String,
}

/// Snapshot of the bot's knowledge state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BotStats {
    /// Number of stored entries
    pub entries: usize,

    /// Distinct terms in the fitted vocabulary
    pub vocabulary_size: usize,

    /// Confidence threshold for FAQ matches
    pub threshold: f64,
}
