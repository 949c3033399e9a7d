//! Chat command handler.
//!
//! Interactive REPL over stdin/stdout. Messages go to the bot worker; lines
//! starting with `/` are session commands.

use clap::Args;
use faqbot_core::AppResult;
use faqbot_knowledge::{Chatbot, GREETING};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::worker::BotWorker;

const HELP_TEXT: &str = "Commands:
  /train <question> | <answer>   teach me a new Q&A pair
  /list                          show what I know
  /stats                         show knowledge base statistics
  /help                          show this help
  /quit                          leave the chat";

/// Start an interactive chat session
#[derive(Args, Debug, Default)]
pub struct ChatCommand {
    /// Don't print the greeting banner
    #[arg(long)]
    pub quiet: bool,
}

/// One parsed line of chat input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Nothing typed
    Empty,
    Message(String),
    Train { question: String, answer: String },
    /// `/train` without both parts
    InvalidTrain,
    List,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

/// Split `question | answer`, rejecting blank halves.
pub fn parse_training_pair(raw: &str) -> Option<(String, String)> {
    let (question, answer) = raw.split_once('|')?;
    let (question, answer) = (question.trim(), answer.trim());
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question.to_string(), answer.to_string()))
}

/// Classify a line typed by the user.
pub fn parse_line(line: &str) -> ChatInput {
    let line = line.trim();
    if line.is_empty() {
        return ChatInput::Empty;
    }

    let Some(command) = line.strip_prefix('/') else {
        return ChatInput::Message(line.to_string());
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .unwrap_or((command, ""));

    match name.to_lowercase().as_str() {
        "train" => match parse_training_pair(rest) {
            Some((question, answer)) => ChatInput::Train { question, answer },
            None => ChatInput::InvalidTrain,
        },
        "list" => ChatInput::List,
        "stats" => ChatInput::Stats,
        "help" => ChatInput::Help,
        "quit" | "exit" => ChatInput::Quit,
        _ => ChatInput::Unknown(name.to_string()),
    }
}

impl ChatCommand {
    pub async fn execute(&self, bot: Chatbot) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let worker = BotWorker::spawn(bot);

        if !self.quiet {
            println!("BOT: {}", GREETING);
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("YOU: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // EOF
                println!();
                break;
            };

            match parse_line(&line) {
                ChatInput::Empty => continue,
                ChatInput::Message(text) => {
                    let reply = worker.respond(text).await?;
                    println!("BOT: {}\n", reply.text);
                }
                ChatInput::Train { question, answer } => {
                    worker.train(question.clone(), answer.clone()).await?;
                    println!("[SYSTEM] Training added OK\nQ: {}\nA: {}\n", question, answer);
                }
                ChatInput::InvalidTrain => {
                    println!("[SYSTEM] Both question and answer are required: /train <question> | <answer>\n");
                }
                ChatInput::List => {
                    for (i, entry) in worker.entries().await?.iter().enumerate() {
                        println!("{:>3}. {}", i + 1, entry.question);
                    }
                    println!();
                }
                ChatInput::Stats => {
                    let stats = worker.stats().await?;
                    println!(
                        "[SYSTEM] {} entries, {} terms, threshold {:.2}\n",
                        stats.entries, stats.vocabulary_size, stats.threshold
                    );
                }
                ChatInput::Help => println!("{}\n", HELP_TEXT),
                ChatInput::Quit => break,
                ChatInput::Unknown(name) => {
                    println!("[SYSTEM] Unknown command '/{}'. Type /help for commands.\n", name);
                }
            }
        }

        worker.shutdown().await?;
        tracing::info!("Chat session ended");
        Ok(())
    }
}
