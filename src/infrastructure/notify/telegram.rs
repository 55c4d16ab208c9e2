use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::settings::AppConfig;

/// Outbound one-shot notification capability.
///
/// `send` reports success as a bool and never errors: delivery is
/// best-effort by contract, and the stored message is the record of truth.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> bool;
}

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Relays texts to a Telegram chat via the Bot API.
///
/// Constructed disabled when either credential is missing; a disabled
/// notifier performs no network activity at all.
pub struct TelegramNotifier {
    client: reqwest::Client,
    credentials: Option<Credentials>,
}

struct Credentials {
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn from_config(config: &AppConfig) -> Self {
        let credentials = match (&config.telegram_bot_token, &config.telegram_chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(Credentials {
                bot_token: bot_token.clone(),
                chat_id: chat_id.clone(),
            }),
            _ => {
                debug!("Telegram credentials not configured, notifier disabled");
                None
            }
        };

        TelegramNotifier {
            client: reqwest::Client::builder()
                .timeout(SEND_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            credentials,
        }
    }

    /// A notifier that never sends anything, for environments without
    /// Telegram access (tests, local development).
    pub fn disabled() -> Self {
        TelegramNotifier {
            client: reqwest::Client::new(),
            credentials: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> bool {
        let Some(credentials) = &self.credentials else {
            return false;
        };

        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            credentials.bot_token
        );
        let body = serde_json::json!({
            "chat_id": credentials.chat_id,
            "text": text,
        });

        match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!(status = %response.status(), "Telegram send rejected");
                false
            }
            Err(e) => {
                warn!("Telegram send failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AppConfig, AppEnvironment};

    fn config(token: Option<&str>, chat_id: Option<&str>) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "sqlite::memory:".into(),
            api_prefix: "/api".into(),
            cors_allowed_origins: vec!["*".into()],
            telegram_bot_token: token.map(String::from),
            telegram_chat_id: chat_id.map(String::from),
            social_admin_token: None,
        }
    }

    #[test]
    fn notifier_is_disabled_unless_both_credentials_exist() {
        assert!(!TelegramNotifier::from_config(&config(None, None)).is_enabled());
        assert!(!TelegramNotifier::from_config(&config(Some("123:abc"), None)).is_enabled());
        assert!(!TelegramNotifier::from_config(&config(None, Some("42"))).is_enabled());
        assert!(TelegramNotifier::from_config(&config(Some("123:abc"), Some("42"))).is_enabled());
    }

    #[tokio::test]
    async fn disabled_notifier_send_is_a_no_op() {
        let notifier = TelegramNotifier::disabled();
        assert!(!notifier.send("hello").await);
    }
}
