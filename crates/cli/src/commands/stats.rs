//! Stats command handler.

use clap::Args;
use faqbot_core::AppResult;
use faqbot_knowledge::Chatbot;

/// Show knowledge base statistics
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub fn execute(&self, bot: &Chatbot) -> AppResult<()> {
        tracing::info!("Executing stats command");

        let stats = bot.stats();

        if self.json {
            let output = serde_json::json!({
                "entries": stats.entries,
                "vocabularySize": stats.vocabulary_size,
                "threshold": stats.threshold,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Knowledge base:");
            println!("  Entries: {}", stats.entries);
            println!("  Vocabulary: {} terms", stats.vocabulary_size);
            println!("  Threshold: {:.2}", stats.threshold);
        }

        Ok(())
    }
}
