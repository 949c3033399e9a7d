//! Tests for training (add_entry) and configuration-driven construction.

use crate::chatbot::{Chatbot, FALLBACK_MESSAGE};
use crate::types::ReplyKind;
use faqbot_core::config::AppConfig;
use tempfile::TempDir;

#[test]
fn test_trained_question_is_answered_immediately() {
    let mut bot = Chatbot::new();
    assert_eq!(bot.respond("What is the capital of France?"), FALLBACK_MESSAGE);

    bot.add_entry("What is the capital of France?", "Paris.");

    let text = bot.respond("What is the capital of France?");
    assert_eq!(text, "Paris.\n\n(Found via FAQ match - similarity=1.00)");

    let text = bot.respond("capital city of france");
    assert!(text.starts_with("Paris."));
}

#[test]
fn test_new_entry_beats_partial_seed_match() {
    let mut bot = Chatbot::new();
    bot.add_entry("What is deep learning?", "Neural networks with many layers.");

    let reply = bot.explain("deep learning");
    assert!(matches!(reply.kind, ReplyKind::Faq { index: 7, .. }));
}

#[test]
fn test_training_updates_stats() {
    let mut bot = Chatbot::new();
    let before = bot.stats();
    assert_eq!(before.entries, 7);
    assert_eq!(before.vocabulary_size, 14);
    assert_eq!(before.threshold, 0.22);

    bot.add_entry("Which editor works best?", "Any editor with rust-analyzer.");

    let after = bot.stats();
    assert_eq!(after.entries, 8);
    // "editor", "work", "best"
    assert_eq!(after.vocabulary_size, 17);
    assert_eq!(bot.entries().last().unwrap().answer, "Any editor with rust-analyzer.");
}

#[test]
fn test_rules_still_win_after_training() {
    let mut bot = Chatbot::new();
    bot.add_entry("hello there", "FAQ hello");
    assert_eq!(bot.respond("hello there"), "Hello! How can I help you today?");
}

#[test]
fn test_from_config_with_seed_file() {
    let temp = TempDir::new().unwrap();
    let seed_path = temp.path().join("faqs.yaml");
    std::fs::write(
        &seed_path,
        "- question: What is cargo?\n  answer: Rust's package manager.\n",
    )
    .unwrap();

    let config = AppConfig {
        seed_file: Some(seed_path),
        builtin_seed: false,
        threshold: 0.3,
        ..AppConfig::default()
    };

    let bot = Chatbot::from_config(&config).unwrap();
    assert_eq!(bot.entries().len(), 1);
    assert_eq!(bot.threshold(), 0.3);
    assert!(bot.respond("cargo").starts_with("Rust's package manager."));
}

#[test]
fn test_from_config_builtin_plus_seed_file() {
    let temp = TempDir::new().unwrap();
    let seed_path = temp.path().join("faqs.yaml");
    std::fs::write(&seed_path, "- question: Q\n  answer: A\n").unwrap();

    let config = AppConfig {
        seed_file: Some(seed_path),
        ..AppConfig::default()
    };

    let bot = Chatbot::from_config(&config).unwrap();
    assert_eq!(bot.entries().len(), 8);
    assert_eq!(bot.entries()[7].question, "Q");
}

#[test]
fn test_from_config_missing_seed_file() {
    let config = AppConfig {
        seed_file: Some("/definitely/not/here.yaml".into()),
        ..AppConfig::default()
    };
    assert!(Chatbot::from_config(&config).is_err());
}
