//! Server-side delivery of submissions to the operator's Telegram chat.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0} not set")]
    MissingVar(&'static str),
    #[error("request to chat API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat API rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl RelayConfig {
    /// Read the relay settings, loading `.env` first when present.
    pub fn from_env() -> Result<Self, RelayError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| RelayError::MissingVar("TELEGRAM_BOT_TOKEN"))?,
            chat_id: std::env::var("TELEGRAM_CHAT_ID")
                .map_err(|_| RelayError::MissingVar("TELEGRAM_CHAT_ID"))?,
            api_base: std::env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Post `text` to the configured chat.
pub async fn send(config: &RelayConfig, text: &str) -> Result<(), RelayError> {
    let reply: SendMessageReply = reqwest::Client::new()
        .post(config.send_message_url())
        .json(&SendMessageRequest {
            chat_id: &config.chat_id,
            text,
        })
        .send()
        .await?
        .json()
        .await?;

    if reply.ok {
        Ok(())
    } else {
        Err(RelayError::Rejected(
            reply
                .description
                .unwrap_or_else(|| "no description".to_string()),
        ))
    }
}
