//! Tests for the respond pipeline: validation, rules, retrieval, fallback.

use crate::chatbot::{Chatbot, FALLBACK_MESSAGE, PROMPT_MESSAGE};
use crate::rules::RuleKind;
use crate::types::{FaqEntry, ReplyKind};
use chrono::{NaiveDate, NaiveDateTime};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// One long question so that single-term queries score 1/sqrt(25) = 0.2.
fn wide_bot() -> Chatbot {
    let question = (1..=25)
        .map(|i| format!("t{:02}", i))
        .collect::<Vec<_>>()
        .join(" ");
    Chatbot::with_entries([FaqEntry::new(question, "wide answer")], 0.22)
}

#[test]
fn test_blank_input_prompts() {
    let bot = Chatbot::new();
    assert_eq!(bot.respond(""), PROMPT_MESSAGE);
    assert_eq!(bot.respond("   "), PROMPT_MESSAGE);
    assert_eq!(bot.respond("\t\n"), PROMPT_MESSAGE);
    assert_eq!(bot.explain("  ").kind, ReplyKind::Prompt);
}

#[test]
fn test_greeting_regardless_of_knowledge() {
    let seeded = Chatbot::new();
    let empty = Chatbot::with_entries(Vec::new(), 0.22);
    let greedy = Chatbot::with_entries([FaqEntry::new("hello", "from the FAQ")], 0.22);

    for bot in [seeded, empty, greedy] {
        assert_eq!(bot.respond("hello"), "Hello! How can I help you today?");
    }
}

#[test]
fn test_time_and_date_rules() {
    let bot = Chatbot::new();

    let reply = bot.explain_at("what's the time?", noon());
    assert_eq!(reply.kind, ReplyKind::Rule { rule: RuleKind::Time });
    assert_eq!(reply.text, "It's 2025-12-31 12:00 (system time).");

    let reply = bot.explain_at("What is the date", noon());
    assert_eq!(reply.text, "Today's date is 2025-12-31.");
}

#[test]
fn test_seeded_exact_question() {
    let bot = Chatbot::new();
    let reply = bot.explain_at("What is Machine Learning?", noon());

    match reply.kind {
        ReplyKind::Faq { index, score } => {
            assert_eq!(index, 1);
            assert!((score - 1.0).abs() < 1e-9);
        }
        other => panic!("expected FAQ reply, got {:?}", other),
    }
    assert!(reply.text.starts_with("Machine Learning (ML) is a subset of AI"));
    assert!(reply.text.ends_with("\n\n(Found via FAQ match - similarity=1.00)"));
}

#[test]
fn test_seeded_paraphrase() {
    let bot = Chatbot::new();
    let text = bot.respond("tell me about nlp");
    assert!(text.starts_with("Natural Language Processing (NLP)"));
}

#[test]
fn test_nonsense_falls_back() {
    let bot = Chatbot::new();
    assert_eq!(bot.respond("asdkjaslkdj nonsense"), FALLBACK_MESSAGE);
    assert_eq!(bot.explain("asdkjaslkdj nonsense").kind, ReplyKind::Fallback);
}

#[test]
fn test_empty_knowledge_base_falls_back() {
    let bot = Chatbot::with_entries(Vec::new(), 0.22);
    assert_eq!(bot.respond("what is machine learning"), FALLBACK_MESSAGE);
}

#[test]
fn test_below_threshold_falls_back() {
    let bot = wide_bot();
    assert_eq!(bot.respond("t01"), FALLBACK_MESSAGE);
}

#[test]
fn test_similarity_annotation_two_decimals() {
    let bot = wide_bot();
    // 2 / (sqrt(2) * 5) ~ 0.2828
    assert_eq!(
        bot.respond("t01 t02"),
        "wide answer\n\n(Found via FAQ match - similarity=0.28)"
    );
}

#[test]
fn test_threshold_is_configurable() {
    let strict = Chatbot::with_entries([FaqEntry::new("alpha gamma", "a")], 0.9);
    assert_eq!(strict.respond("alpha"), FALLBACK_MESSAGE);

    let lenient = Chatbot::with_entries([FaqEntry::new("alpha gamma", "a")], 0.1);
    assert!(lenient.respond("alpha").starts_with("a\n\n"));
}

#[test]
fn test_ties_prefer_earlier_entry() {
    let bot = Chatbot::with_entries(
        [
            FaqEntry::new("What is Rust?", "first"),
            FaqEntry::new("What is Rust?", "second"),
        ],
        0.22,
    );

    let reply = bot.explain("rust");
    assert!(matches!(reply.kind, ReplyKind::Faq { index: 0, .. }));
    assert!(reply.text.starts_with("first"));
}

#[test]
fn test_reply_json_shape() {
    let bot = Chatbot::new();
    let value = serde_json::to_value(bot.explain_at("What is NLP?", noon())).unwrap();

    assert_eq!(value["kind"], "faq");
    assert_eq!(value["index"], 2);
    assert!(value["text"].as_str().unwrap().contains("similarity=1.00"));

    let value = serde_json::to_value(bot.explain_at("thanks!", noon())).unwrap();
    assert_eq!(value["kind"], "rule");
    assert_eq!(value["rule"], "thanks");
}
