use std::net::SocketAddr;

use dotenvy::dotenv;
use thiserror::Error;
use tracing::Level;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELOXIDE_TOKEN should be set")]
    MissingToken,

    #[error("LOG_LEVEL '{0}' is not a valid level")]
    InvalidLogLevel(String),

    #[error("NGROK_URL can't be parsed: {0}")]
    InvalidWebhookUrl(#[from] url::ParseError),

    #[error("NGROK_ADDR can't be parsed: {0}")]
    InvalidWebhookAddr(#[from] std::net::AddrParseError),

    #[error("NGROK_URL and NGROK_ADDR must be set together")]
    IncompleteWebhook,
}

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: Url,
    pub addr: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub log_level: Level,
    /// `None` means long polling.
    pub webhook: Option<WebhookConfig>,
}

impl BotConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("TELOXIDE_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => Level::ERROR,
        };

        let webhook = match (lookup("NGROK_URL"), lookup("NGROK_ADDR")) {
            (Some(url), Some(addr)) => Some(WebhookConfig {
                url: url.parse()?,
                addr: addr.parse()?,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteWebhook),
        };

        Ok(Self {
            token,
            log_level,
            webhook,
        })
    }
}
