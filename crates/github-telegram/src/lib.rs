#![recursion_limit = "256"]

//! # github-telegram
//!
//! Relays GitHub webhook deliveries to a Telegram chat.
//!
//! ## How it works
//!
//! 1. GitHub sends `POST /webhook` with `X-Hub-Signature-256`, `X-GitHub-Event`,
//!    and `X-GitHub-Delivery` headers plus a JSON payload.
//! 2. The server validates the HMAC-SHA256 signature against `GITHUB_WEBHOOK_SECRET`.
//! 3. The payload is decoded into a [`github_types::GithubEvent`] and rendered
//!    as a Telegram MarkdownV2 message. Noise (unknown events, unreported
//!    actions, duplicate push/create/delete deliveries) renders to nothing.
//! 4. The message is sent with the Bot API to `TELEGRAM_CHAT_ID`, optionally
//!    inside forum topic `TELEGRAM_TOPIC_ID`. Failed sends are not retried;
//!    GitHub's delivery log shows them as 500s.
//!
//! ## Configuration (env vars)
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `GITHUB_WEBHOOK_SECRET` | none | HMAC-SHA256 secret (omit to skip validation) |
//! | `GITHUB_WEBHOOK_PORT` | `8080` | HTTP listening port |
//! | `TELEGRAM_BOT_TOKEN` | required | Bot API token |
//! | `TELEGRAM_CHAT_ID` | required | Destination chat id |
//! | `TELEGRAM_TOPIC_ID` | none | Forum topic (message thread) id |
//! | `TELEGRAM_API_URL` | `https://api.telegram.org` | Bot API base URL |

pub mod config;
pub mod format;
pub mod markdown;
pub mod sender;
pub mod server;
pub mod signature;

pub use config::{ConfigError, GithubTelegramConfig, TelegramConfig};
pub use format::{FormatError, format_event, format_payload, format_with_fallback};
pub use sender::{Notifier, SendError, TelegramSender};
pub use server::{router, serve};
