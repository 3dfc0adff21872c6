use std::fmt;

use trogon_std::env::ReadEnv;
use url::Url;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Configuration for the GitHub → Telegram relay.
///
/// Resolved from environment variables:
/// - `GITHUB_WEBHOOK_SECRET`: HMAC-SHA256 secret configured in GitHub
///   (unset or empty skips validation)
/// - `GITHUB_WEBHOOK_PORT`: HTTP listening port (default: 8080)
/// - `TELEGRAM_BOT_TOKEN`: Bot API token (required)
/// - `TELEGRAM_CHAT_ID`: destination chat (required)
/// - `TELEGRAM_TOPIC_ID`: forum topic inside the chat (optional)
/// - `TELEGRAM_API_URL`: Bot API base URL override (optional)
#[derive(Clone)]
pub struct GithubTelegramConfig {
    pub webhook_secret: Option<String>,
    pub port: u16,
    pub telegram: TelegramConfig,
}

#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
    pub topic_id: Option<i32>,
    pub api_url: Option<Url>,
}

impl GithubTelegramConfig {
    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self, ConfigError> {
        Ok(Self {
            webhook_secret: env.non_empty("GITHUB_WEBHOOK_SECRET"),
            port: env
                .non_empty("GITHUB_WEBHOOK_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            telegram: TelegramConfig::from_env(env)?,
        })
    }
}

impl TelegramConfig {
    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self, ConfigError> {
        let bot_token = env
            .non_empty("TELEGRAM_BOT_TOKEN")
            .ok_or(ConfigError::Missing("TELEGRAM_BOT_TOKEN"))?;
        let chat_id = parse_required(env, "TELEGRAM_CHAT_ID")?;
        let topic_id = parse_optional(env, "TELEGRAM_TOPIC_ID")?;
        let api_url = parse_optional(env, "TELEGRAM_API_URL")?;

        Ok(Self {
            bot_token,
            chat_id,
            topic_id,
            api_url,
        })
    }
}

fn parse_required<E, T>(env: &E, name: &'static str) -> Result<T, ConfigError>
where
    E: ReadEnv,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    parse_optional(env, name)?.ok_or(ConfigError::Missing(name))
}

fn parse_optional<E, T>(env: &E, name: &'static str) -> Result<Option<T>, ConfigError>
where
    E: ReadEnv,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    env.non_empty(name)
        .map(|raw| {
            raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
}

impl fmt::Debug for GithubTelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubTelegramConfig")
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .field("telegram", &self.telegram)
            .finish()
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("topic_id", &self.topic_id)
            .field("api_url", &self.api_url.as_ref().map(Url::as_str))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trogon_std::env::InMemoryEnv;

    fn required() -> InMemoryEnv {
        let env = InMemoryEnv::new();
        env.set("TELEGRAM_BOT_TOKEN", "123:abc");
        env.set("TELEGRAM_CHAT_ID", "-1001234567890");
        env
    }

    #[test]
    fn defaults_with_only_required_vars() {
        let config = GithubTelegramConfig::from_env(&required()).unwrap();

        assert!(config.webhook_secret.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.telegram.bot_token, "123:abc");
        assert_eq!(config.telegram.chat_id, -1001234567890);
        assert!(config.telegram.topic_id.is_none());
        assert!(config.telegram.api_url.is_none());
    }

    #[test]
    fn reads_all_env_vars() {
        let env = required();
        env.set("GITHUB_WEBHOOK_SECRET", "my-secret");
        env.set("GITHUB_WEBHOOK_PORT", "9090");
        env.set("TELEGRAM_TOPIC_ID", "42");
        env.set("TELEGRAM_API_URL", "http://127.0.0.1:8081");

        let config = GithubTelegramConfig::from_env(&env).unwrap();

        assert_eq!(config.webhook_secret.as_deref(), Some("my-secret"));
        assert_eq!(config.port, 9090);
        assert_eq!(config.telegram.topic_id, Some(42));
        assert_eq!(
            config.telegram.api_url.as_ref().map(Url::as_str),
            Some("http://127.0.0.1:8081/")
        );
    }

    #[test]
    fn empty_secret_disables_verification() {
        let env = required();
        env.set("GITHUB_WEBHOOK_SECRET", "");

        let config = GithubTelegramConfig::from_env(&env).unwrap();

        assert!(config.webhook_secret.is_none());
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let env = required();
        env.set("GITHUB_WEBHOOK_PORT", "not-a-number");

        let config = GithubTelegramConfig::from_env(&env).unwrap();

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn missing_token_is_an_error() {
        let env = required();
        env.remove("TELEGRAM_BOT_TOKEN");

        let err = GithubTelegramConfig::from_env(&env).unwrap_err();

        assert!(matches!(err, ConfigError::Missing("TELEGRAM_BOT_TOKEN")));
    }

    #[test]
    fn missing_chat_id_is_an_error() {
        let env = required();
        env.remove("TELEGRAM_CHAT_ID");

        let err = GithubTelegramConfig::from_env(&env).unwrap_err();

        assert!(matches!(err, ConfigError::Missing("TELEGRAM_CHAT_ID")));
    }

    #[test]
    fn malformed_numbers_are_errors() {
        let env = required();
        env.set("TELEGRAM_CHAT_ID", "general");
        assert!(matches!(
            GithubTelegramConfig::from_env(&env),
            Err(ConfigError::Invalid { name: "TELEGRAM_CHAT_ID", .. })
        ));

        let env = required();
        env.set("TELEGRAM_TOPIC_ID", "99999999999");
        assert!(matches!(
            GithubTelegramConfig::from_env(&env),
            Err(ConfigError::Invalid { name: "TELEGRAM_TOPIC_ID", .. })
        ));
    }

    #[test]
    fn malformed_api_url_is_an_error() {
        let env = required();
        env.set("TELEGRAM_API_URL", "not a url");

        let err = GithubTelegramConfig::from_env(&env).unwrap_err();

        assert!(err.to_string().starts_with("TELEGRAM_API_URL has an invalid value"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let env = required();
        env.set("GITHUB_WEBHOOK_SECRET", "hunter2");

        let rendered = format!("{:?}", GithubTelegramConfig::from_env(&env).unwrap());

        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("123:abc"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("-1001234567890"));
    }
}
