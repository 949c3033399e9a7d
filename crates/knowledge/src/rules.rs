//! Rule-based intents checked before retrieval.
//!
//! Date and time are matched by plain substring; everything else goes through
//! an ordered table of word-boundary patterns where the first hit wins.

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Which rule produced a canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Time,
    Date,
    Greeting,
    Thanks,
    Farewell,
    Identity,
    Help,
}

/// A fired rule and its response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub kind: RuleKind,
    pub response: String,
}

struct Rule {
    kind: RuleKind,
    pattern: Regex,
    response: &'static str,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (
            RuleKind::Greeting,
            r"(?i)\b(hi|hello|hey|yo)\b",
            "Hello! How can I help you today?",
        ),
        (RuleKind::Thanks, r"(?i)\b(thank(s| you)?)\b", "You're welcome!"),
        (
            RuleKind::Farewell,
            r"(?i)\b(bye|goodbye|see you|ttyl)\b",
            "Goodbye! Have a great day!",
        ),
        (
            RuleKind::Identity,
            r"(?i)\b(who are you|what are you)\b",
            "I am a Rust-based FAQ chatbot using NLP + TF-IDF.",
        ),
        (
            RuleKind::Help,
            r"(?i)\b(help|what can you do)\b",
            "I can answer FAQs, handle small talk, and you can train me with the /train command.",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern, response)| Rule {
        kind,
        pattern: Regex::new(pattern).expect("built-in rule pattern must compile"),
        response,
    })
    .collect()
});

/// Check the rules against `text` using the local clock.
///
/// Returns `None` when no rule fires.
pub fn try_rules(text: &str) -> Option<String> {
    match_rule(text, Local::now().naive_local()).map(|hit| hit.response)
}

/// Check the rules against `text`, formatting date/time from `now`.
pub fn match_rule(text: &str, now: NaiveDateTime) -> Option<RuleHit> {
    let text = text.trim().to_lowercase();

    if text.contains("time") {
        return Some(RuleHit {
            kind: RuleKind::Time,
            response: format!("It's {} (system time).", now.format("%Y-%m-%d %H:%M")),
        });
    }

    if text.contains("date") {
        return Some(RuleHit {
            kind: RuleKind::Date,
            response: format!("Today's date is {}.", now.format("%Y-%m-%d")),
        });
    }

    RULES
        .iter()
        .find(|rule| rule.pattern.is_match(&text))
        .map(|rule| RuleHit {
            kind: rule.kind,
            response: rule.response.to_string(),
        })
}
