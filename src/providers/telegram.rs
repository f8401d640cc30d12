use async_trait::async_trait;
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::{error, info};

use crate::providers::Notifier;

pub struct Telegram {
    bot: Bot,
    chat: Recipient,
}

impl Telegram {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Telegram {
            bot: Bot::new(token),
            chat: chat_recipient(chat_id),
        }
    }

    /// Talk to a self-hosted Bot API server instead of api.telegram.org.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.bot = self.bot.set_api_url(api_url);
        self
    }
}

/// Numeric ids address a chat directly; anything else is treated as a
/// channel username such as `@my_channel`.
pub fn chat_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}

#[async_trait]
impl Notifier for Telegram {
    async fn send_message(&self, message: &str) {
        match self.bot.send_message(self.chat.clone(), message).await {
            Ok(_) => info!(chat = ?self.chat, "Message sent: {}", message),
            Err(e) => error!(
                chat = ?self.chat,
                "Failed to send message {:?}: {}",
                message,
                e
            ),
        }
    }
}
