pub mod practicum;
pub mod telegram;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::BotError;

/// Source of homework status snapshots.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetches everything updated since `from_date` (Unix seconds). The body
    /// is returned parsed but unvalidated.
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError>;
}

/// Outbound delivery to the configured chat. Best effort: implementations
/// log their own failures and never return them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, message: &str);
}
