//! Delivery of formatted messages to Telegram.

use std::future::Future;
use std::time::Duration;

use teloxide::payloads::SendMessageSetters;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, LinkPreviewOptions, MessageId, ParseMode, ThreadId};
use teloxide::{ApiError, Bot, RequestError};
use tracing::{debug, warn};

use crate::config::TelegramConfig;

/// Destination for rendered notifications.
///
/// One operation, so the webhook handler can be exercised without Telegram.
pub trait Notifier: Send + Sync + Clone + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Delivers one MarkdownV2 message. Never retried by callers.
    fn notify(&self, text: String) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("rate limited by Telegram, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("chat migrated to {}; update TELEGRAM_CHAT_ID", new_chat_id.0)]
    ChatMigrated { new_chat_id: ChatId },

    #[error("Telegram rejected the message: {0}")]
    Api(#[source] ApiError),

    #[error("could not reach Telegram: {0}")]
    Transport(#[source] RequestError),
}

impl From<RequestError> for SendError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::RetryAfter(secs) => SendError::RateLimited {
                retry_after: secs.duration(),
            },
            RequestError::MigrateToChatId(new_chat_id) => SendError::ChatMigrated { new_chat_id },
            RequestError::Api(api) => SendError::Api(api),
            other => SendError::Transport(other),
        }
    }
}

/// Sends notifications to one chat (and optionally one forum topic).
#[derive(Clone)]
pub struct TelegramSender {
    bot: Bot,
    chat_id: ChatId,
    thread_id: Option<ThreadId>,
}

impl TelegramSender {
    pub fn new(config: &TelegramConfig) -> Self {
        let mut bot = Bot::new(&config.bot_token);
        if let Some(url) = &config.api_url {
            bot = bot.set_api_url(url.clone());
        }
        Self {
            bot,
            chat_id: ChatId(config.chat_id),
            thread_id: config.topic_id.map(|id| ThreadId(MessageId(id))),
        }
    }
}

fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

impl Notifier for TelegramSender {
    type Error = SendError;

    async fn notify(&self, text: String) -> Result<(), SendError> {
        let mut req = self
            .bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(no_link_preview());

        if let Some(thread_id) = self.thread_id {
            req.message_thread_id = Some(thread_id);
        }

        match req.await {
            Ok(message) => {
                debug!(
                    chat_id = self.chat_id.0,
                    message_id = message.id.0,
                    "Sent Telegram message"
                );
                Ok(())
            }
            Err(e) => {
                let err = SendError::from(e);
                match &err {
                    SendError::RateLimited { retry_after } => {
                        warn!(
                            retry_after = ?retry_after,
                            "Telegram flood control hit, dropping message"
                        )
                    }
                    SendError::ChatMigrated { new_chat_id } => {
                        warn!(
                            new_chat_id = new_chat_id.0,
                            "Telegram chat migrated, message dropped"
                        )
                    }
                    SendError::Api(_) | SendError::Transport(_) => {
                        warn!(error = %err, "Failed to send Telegram message")
                    }
                }
                Err(err)
            }
        }
    }
}
