use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::GithubTelegramConfig;
use crate::format::format_with_fallback;
use crate::sender::Notifier;
use crate::signature;

struct AppState<N> {
    notifier: N,
    webhook_secret: Option<String>,
}

/// Builds the relay's routes: `POST /webhook` and `GET /health`.
pub fn router<N: Notifier>(webhook_secret: Option<String>, notifier: N) -> Router {
    if webhook_secret.is_none() {
        warn!("GITHUB_WEBHOOK_SECRET is not set, webhook signatures will not be verified");
    }

    let state = Arc::new(AppState {
        notifier,
        webhook_secret,
    });

    Router::new()
        .route("/webhook", post(handle_webhook::<N>))
        .route("/health", get(health))
        .with_state(state)
}

/// Starts the webhook HTTP server and relays deliveries through `notifier`.
pub async fn serve<N: Notifier>(
    config: GithubTelegramConfig,
    notifier: N,
) -> Result<(), std::io::Error> {
    let app = router(config.webhook_secret, notifier);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "GitHub webhook relay listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> &'static str {
    "ok"
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[instrument(
    name = "github.webhook",
    skip_all,
    fields(
        event = tracing::field::Empty,
        delivery = tracing::field::Empty,
    )
)]
async fn handle_webhook<N: Notifier>(
    State(state): State<Arc<AppState<N>>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let span = tracing::Span::current();
    if let Some(delivery) = header(&headers, "x-github-delivery") {
        span.record("delivery", delivery);
    }

    if let Some(secret) = &state.webhook_secret {
        let Some(sig) = header(&headers, "x-hub-signature-256") else {
            warn!("Missing X-Hub-Signature-256 header");
            return StatusCode::FORBIDDEN;
        };

        match signature::verify(secret, &body, sig) {
            Ok(true) => {}
            Ok(false) => {
                warn!("Invalid GitHub webhook signature");
                return StatusCode::FORBIDDEN;
            }
            Err(e) => {
                warn!(error = %e, "Signature verification failed");
                return StatusCode::INTERNAL_SERVER_ERROR;
            }
        }
    }

    let Some(event) = header(&headers, "x-github-event") else {
        warn!("Missing X-GitHub-Event header");
        return StatusCode::BAD_REQUEST;
    };
    span.record("event", event);

    if event == "ping" {
        info!("Received GitHub ping");
        return StatusCode::OK;
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Webhook body is not valid JSON");
            return StatusCode::BAD_REQUEST;
        }
    };

    let Some(message) = format_with_fallback(event, payload) else {
        debug!("Nothing to relay for this delivery");
        return StatusCode::OK;
    };

    match state.notifier.notify(message).await {
        Ok(()) => {
            info!("Relayed GitHub event to Telegram");
            StatusCode::OK
        }
        Err(e) => {
            warn!(error = %e, "Failed to relay GitHub event");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
