//! Retrieval core: rules first, then TF-IDF lookup, then a fallback.

use chrono::{Local, NaiveDateTime};
use faqbot_core::config::{AppConfig, DEFAULT_THRESHOLD};
use faqbot_core::AppResult;

use crate::base::KnowledgeBase;
use crate::rules;
use crate::seed;
use crate::types::{BotStats, FaqEntry, Reply, ReplyKind};

/// Reply to blank input.
pub const PROMPT_MESSAGE: &str = "Please type something.";

/// Reply when neither a rule nor a confident FAQ match fires.
pub const FALLBACK_MESSAGE: &str = "I am not sure about that yet. Could you rephrase?\n\
Tip: You can also use /train to teach me the right answer!";

/// Banner shown when a chat session starts.
pub const GREETING: &str = "Hi! I am your FAQ Chatbot.\n\
- Ask me anything.\n\
- I am trained on FAQs and use NLP + TF-IDF.\n\
- Type /train <question> | <answer> to teach me new Q&A.\n";

/// The question-answering bot.
///
/// All operations are synchronous. `respond` only reads; `add_entry` needs
/// exclusive access, so callers sharing a bot across threads must serialize
/// access themselves (the CLI does this with a single worker).
#[derive(Debug, Clone)]
pub struct Chatbot {
    knowledge: KnowledgeBase,
    threshold: f64,
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new()
    }
}

impl Chatbot {
    /// Create a bot seeded with the built-in entries and default threshold.
    pub fn new() -> Self {
        Self::with_entries(seed::builtin_entries(), DEFAULT_THRESHOLD)
    }

    /// Create a bot from explicit entries and threshold.
    pub fn with_entries(entries: impl IntoIterator<Item = FaqEntry>, threshold: f64) -> Self {
        Self {
            knowledge: KnowledgeBase::from_entries(entries),
            threshold,
        }
    }

    /// Create a bot from application configuration.
    ///
    /// Loads the built-in seeds (unless disabled) followed by the configured
    /// seed file.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let mut entries = if config.builtin_seed {
            seed::builtin_entries()
        } else {
            Vec::new()
        };

        if let Some(ref path) = config.seed_file {
            entries.extend(seed::load_seed_file(path)?);
        }

        tracing::info!(
            entries = entries.len(),
            threshold = config.threshold,
            "Initializing chatbot"
        );

        Ok(Self::with_entries(entries, config.threshold))
    }

    /// Answer `input` with display-ready text. Never fails.
    pub fn respond(&self, input: &str) -> String {
        self.explain(input).text
    }

    /// Answer `input` and report how the answer was produced.
    pub fn explain(&self, input: &str) -> Reply {
        self.explain_at(input, Local::now().naive_local())
    }

    /// Like [`Chatbot::explain`], with an explicit clock for the date/time rules.
    pub fn explain_at(&self, input: &str, now: NaiveDateTime) -> Reply {
        if input.trim().is_empty() {
            return Reply {
                kind: ReplyKind::Prompt,
                text: PROMPT_MESSAGE.to_string(),
            };
        }

        if let Some(hit) = rules::match_rule(input, now) {
            tracing::debug!(rule = ?hit.kind, "Rule matched");
            return Reply {
                kind: ReplyKind::Rule { rule: hit.kind },
                text: hit.response,
            };
        }

        if let Some((found, entry)) = self.knowledge.search(input, self.threshold) {
            tracing::debug!(index = found.index, score = found.score, "FAQ matched");
            return Reply {
                kind: ReplyKind::Faq {
                    index: found.index,
                    score: found.score,
                },
                text: format!(
                    "{}\n\n(Found via FAQ match - similarity={:.2})",
                    entry.answer, found.score
                ),
            };
        }

        Reply {
            kind: ReplyKind::Fallback,
            text: FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Teach the bot a new pair; the vector cache is rebuilt before returning.
    ///
    /// Callers are expected to reject blank questions and answers.
    pub fn add_entry(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let entry = FaqEntry::new(question, answer);
        tracing::info!(question = %entry.question, "Adding FAQ entry");
        self.knowledge.add_entry(entry);
    }

    /// Stored entries in insertion order.
    pub fn entries(&self) -> &[FaqEntry] {
        self.knowledge.entries()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn stats(&self) -> BotStats {
        BotStats {
            entries: self.knowledge.len(),
            vocabulary_size: self.knowledge.cache().vectorizer().len(),
            threshold: self.threshold,
        }
    }
}
