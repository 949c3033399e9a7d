//! Background worker owning the chatbot.
//!
//! The bot lives on a blocking thread and serves requests from a channel one
//! at a time, so training and answering never overlap and the REPL stays
//! responsive while a rebuild runs.

use faqbot_core::{AppError, AppResult};
use faqbot_knowledge::{BotStats, Chatbot, FaqEntry, Reply};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

const QUEUE_DEPTH: usize = 32;

enum Request {
    Respond {
        text: String,
        reply: oneshot::Sender<Reply>,
    },
    Train {
        question: String,
        answer: String,
        reply: oneshot::Sender<BotStats>,
    },
    Stats {
        reply: oneshot::Sender<BotStats>,
    },
    List {
        reply: oneshot::Sender<Vec<FaqEntry>>,
    },
}

/// Handle to a running bot worker.
pub struct BotWorker {
    tx: mpsc::Sender<Request>,
    handle: JoinHandle<()>,
}

impl BotWorker {
    /// Move `bot` onto a dedicated blocking thread.
    pub fn spawn(bot: Chatbot) -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(QUEUE_DEPTH);

        let handle = tokio::task::spawn_blocking(move || {
            let mut bot = bot;
            tracing::debug!("Bot worker started");

            while let Some(request) = rx.blocking_recv() {
                // A dropped receiver means the caller gave up; nothing to do
                match request {
                    Request::Respond { text, reply } => {
                        let _ = reply.send(bot.explain(&text));
                    }
                    Request::Train {
                        question,
                        answer,
                        reply,
                    } => {
                        bot.add_entry(question, answer);
                        let _ = reply.send(bot.stats());
                    }
                    Request::Stats { reply } => {
                        let _ = reply.send(bot.stats());
                    }
                    Request::List { reply } => {
                        let _ = reply.send(bot.entries().to_vec());
                    }
                }
            }

            tracing::debug!("Bot worker stopped");
        });

        Self { tx, handle }
    }

    /// Answer a message.
    pub async fn respond(&self, text: impl Into<String>) -> AppResult<Reply> {
        let text = text.into();
        self.call(|reply| Request::Respond { text, reply }).await
    }

    /// Add a training pair; returns stats after the rebuild.
    pub async fn train(
        &self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> AppResult<BotStats> {
        let (question, answer) = (question.into(), answer.into());
        self.call(|reply| Request::Train {
            question,
            answer,
            reply,
        })
        .await
    }

    pub async fn stats(&self) -> AppResult<BotStats> {
        self.call(|reply| Request::Stats { reply }).await
    }

    pub async fn entries(&self) -> AppResult<Vec<FaqEntry>> {
        self.call(|reply| Request::List { reply }).await
    }

    async fn call<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Request) -> AppResult<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| AppError::Knowledge("Bot worker is not running".to_string()))?;
        reply_rx
            .await
            .map_err(|_| AppError::Knowledge("Bot worker dropped the request".to_string()))
    }

    /// Close the queue and wait for pending requests to finish.
    pub async fn shutdown(self) -> AppResult<()> {
        drop(self.tx);
        self.handle
            .await
            .map_err(|e| AppError::Other(format!("Bot worker panicked: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_knowledge::{ReplyKind, FALLBACK_MESSAGE};

    #[tokio::test]
    async fn test_respond_through_worker() {
        let worker = BotWorker::spawn(Chatbot::new());

        let reply = worker.respond("hello").await.unwrap();
        assert_eq!(reply.text, "Hello! How can I help you today?");

        worker.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_train_then_respond_in_order() {
        let worker = BotWorker::spawn(Chatbot::new());

        let before = worker.respond("Who maintains tokio?").await.unwrap();
        assert_eq!(before.text, FALLBACK_MESSAGE);

        let stats = worker
            .train("Who maintains tokio?", "The tokio-rs organization.")
            .await
            .unwrap();
        assert_eq!(stats.entries, 8);

        let after = worker.respond("Who maintains tokio?").await.unwrap();
        assert!(matches!(after.kind, ReplyKind::Faq { index: 7, .. }));

        let entries = worker.entries().await.unwrap();
        assert_eq!(entries.len(), 8);
        assert_eq!(worker.stats().await.unwrap(), stats);

        worker.shutdown().await.unwrap();
    }
}
