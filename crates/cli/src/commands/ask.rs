//! Ask command handler.
//!
//! Answers a single question, optionally after applying training pairs.

use clap::Args;
use faqbot_core::{AppError, AppResult};
use faqbot_knowledge::Chatbot;

use super::chat::parse_training_pair;

/// Ask a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Training pair applied before answering ("question | answer"), repeatable
    #[arg(short, long, value_name = "QUESTION | ANSWER")]
    pub train: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub fn execute(&self, mut bot: Chatbot) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask options: {:?}", self);

        for raw in &self.train {
            let (question, answer) = parse_training_pair(raw).ok_or_else(|| {
                AppError::Config(format!(
                    "Invalid training pair {:?}: expected \"question | answer\"",
                    raw
                ))
            })?;
            bot.add_entry(question, answer);
        }

        let question = self.question.join(" ");
        let reply = bot.explain(&question);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reply)?);
        } else {
            println!("{}", reply.text);
        }

        Ok(())
    }
}
