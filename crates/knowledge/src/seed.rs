//! Seed entries loaded at startup.
//!
//! The built-in set covers AI, ML, NLP and the bot itself. A YAML seed file
//! can add more:
//!
//! ```yaml
//! - question: What is Rust?
//!   answer: A systems programming language.
//! ```

use crate::types::FaqEntry;
use faqbot_core::{AppError, AppResult};
use std::fs;
use std::path::Path;

const BUILTIN: &[(&str, &str)] = &[
    (
        "What is Artificial Intelligence?",
        "Artificial Intelligence (AI) is the simulation of human intelligence in machines that are programmed to think and learn.",
    ),
    (
        "What is Machine Learning?",
        "Machine Learning (ML) is a subset of AI that enables systems to learn patterns from data and improve over time without being explicitly programmed.",
    ),
    (
        "What is NLP?",
        "Natural Language Processing (NLP) helps computers understand, interpret, and generate human language.",
    ),
    (
        "How do I train this chatbot?",
        "Type /train followed by a question and its answer separated by '|', for example: /train What is Rust? | A systems programming language.",
    ),
    (
        "What technologies does this chatbot use?",
        "It's built in Rust, with NLP preprocessing and TF-IDF similarity to retrieve FAQ answers.",
    ),
    (
        "Can I integrate this with a web app?",
        "Yes. Call Chatbot::respond from an HTTP handler or a WebSocket endpoint in your web service.",
    ),
    (
        "How can I reset or clear training?",
        "Restart the app to restore the default seeded FAQs. Trained entries only live for the current session.",
    ),
];

/// The built-in seed entries, in order.
pub fn builtin_entries() -> Vec<FaqEntry> {
    BUILTIN
        .iter()
        .map(|(question, answer)| FaqEntry::new(*question, *answer))
        .collect()
}

/// Load extra seed entries from a YAML file.
///
/// Fails if the file is unreadable, malformed, or any entry has a blank
/// question or answer.
pub fn load_seed_file(path: &Path) -> AppResult<Vec<FaqEntry>> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Knowledge(format!("Failed to read seed file {:?}: {}", path, e))
    })?;

    let entries: Vec<FaqEntry> = serde_yaml::from_str::<Option<Vec<FaqEntry>>>(&content)
        .map_err(|e| AppError::Knowledge(format!("Failed to parse seed file {:?}: {}", path, e)))?
        .unwrap_or_default();

    if let Some(pos) = entries
        .iter()
        .position(|e| e.question.trim().is_empty() || e.answer.trim().is_empty())
    {
        return Err(AppError::Knowledge(format!(
            "Seed entry #{} in {:?} needs both a question and an answer",
            pos + 1,
            path
        )));
    }

    tracing::debug!("Loaded {} seed entries from {:?}", entries.len(), path);
    Ok(entries)
}
