use anyhow::Context;
use github_telegram::{GithubTelegramConfig, TelegramSender, serve};
use trogon_std::env::SystemEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GithubTelegramConfig::from_env(&SystemEnv).context("Invalid configuration")?;
    tracing::debug!(config = ?config, "Loaded configuration");

    let sender = TelegramSender::new(&config.telegram);
    serve(config, sender).await.context("Server failed")
}
