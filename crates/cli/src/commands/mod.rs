//! Command handlers for the FAQ Bot CLI.

pub mod ask;
pub mod chat;
pub mod list;
pub mod stats;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use list::ListCommand;
pub use stats::StatsCommand;
