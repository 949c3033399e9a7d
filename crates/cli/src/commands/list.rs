//! List command handler.

use clap::Args;
use faqbot_core::AppResult;
use faqbot_knowledge::Chatbot;

/// List the knowledge base entries
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Show answers as well as questions
    #[arg(short, long)]
    pub answers: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, bot: &Chatbot) -> AppResult<()> {
        tracing::info!("Executing list command");

        if self.json {
            println!("{}", serde_json::to_string_pretty(bot.entries())?);
            return Ok(());
        }

        for (i, entry) in bot.entries().iter().enumerate() {
            println!("{:>3}. {}", i + 1, entry.question);
            if self.answers {
                println!("     {}", entry.answer);
            }
        }

        Ok(())
    }
}
