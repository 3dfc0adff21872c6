//! End-to-end tests for the webhook relay.
//!
//! Each test binds the real server on its own local port and records the
//! messages it would have sent to Telegram.
//!
//! Run with:
//!   cargo test -p github-telegram --test webhook_e2e

use std::future::Future;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use github_telegram::signature::sign;
use github_telegram::{GithubTelegramConfig, Notifier, serve};
use reqwest::StatusCode;
use trogon_std::env::InMemoryEnv;

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
#[error("telegram is unavailable")]
struct Unavailable;

/// Records notifications instead of sending them.
#[derive(Clone, Default)]
struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    type Error = Unavailable;

    fn notify(&self, text: String) -> impl Future<Output = Result<(), Unavailable>> + Send {
        let result = if self.fail {
            Err(Unavailable)
        } else {
            self.sent.lock().unwrap().push(text);
            Ok(())
        };
        std::future::ready(result)
    }
}

static PORT_COUNTER: AtomicU16 = AtomicU16::new(28400);

fn next_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

async fn wait_for_port(port: u16, timeout: Duration) {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        match tokio::net::TcpStream::connect(format!("127.0.0.1:{port}")).await {
            Ok(_) => return,
            Err(_) => {
                if tokio::time::Instant::now() >= deadline {
                    panic!("Port {port} not ready within {timeout:?}");
                }
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    }
}

fn make_config(http_port: u16, secret: Option<&str>) -> GithubTelegramConfig {
    let env = InMemoryEnv::new();
    env.set("GITHUB_WEBHOOK_PORT", http_port.to_string());
    env.set("TELEGRAM_BOT_TOKEN", "123:unused");
    env.set("TELEGRAM_CHAT_ID", "-10042");
    if let Some(s) = secret {
        env.set("GITHUB_WEBHOOK_SECRET", s);
    }
    GithubTelegramConfig::from_env(&env).unwrap()
}

/// Starts the server in a background task and returns its base URL.
async fn spawn_server(secret: Option<&str>, notifier: RecordingNotifier) -> String {
    let http_port = next_port();
    let config = make_config(http_port, secret);

    tokio::spawn(async move {
        serve(config, notifier).await.expect("server error");
    });

    wait_for_port(http_port, Duration::from_secs(5)).await;
    format!("http://127.0.0.1:{http_port}")
}

fn post(base: &str, event: Option<&str>, body: &'static [u8]) -> reqwest::RequestBuilder {
    let mut req = reqwest::Client::new()
        .post(format!("{base}/webhook"))
        .header("Content-Type", "application/json")
        .header("X-GitHub-Delivery", "72d3162e-cc78-11e3-81ab-4c9367dc0958")
        .body(body);
    if let Some(event) = event {
        req = req.header("X-GitHub-Event", event);
    }
    req
}

const SECRET: &str = "test-secret";
const STAR: &[u8] =
    br#"{"action":"created","repository":{"full_name":"octo/repo.rs"},"sender":{"login":"mona"}}"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn signed_event_is_relayed() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(Some(SECRET), notifier.clone()).await;

    let resp = post(&base, Some("star"), STAR)
        .header("X-Hub-Signature-256", sign(SECRET, STAR).unwrap())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(notifier.sent(), vec!["⭐ mona starred octo/repo\\.rs".to_string()]);
}

#[tokio::test]
async fn bad_signature_is_forbidden() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(Some(SECRET), notifier.clone()).await;

    let resp = post(&base, Some("star"), STAR)
        .header("X-Hub-Signature-256", sign("wrong-secret", STAR).unwrap())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn malformed_signature_header_is_forbidden() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(Some(SECRET), notifier.clone()).await;

    let resp = post(&base, Some("star"), STAR)
        .header("X-Hub-Signature-256", "sha1=deadbeef")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn missing_signature_is_forbidden() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(Some(SECRET), notifier.clone()).await;

    let resp = post(&base, Some("star"), STAR).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn unsigned_event_accepted_without_secret() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(None, notifier.clone()).await;

    let resp = post(&base, Some("star"), STAR).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn missing_event_header_is_bad_request() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(None, notifier.clone()).await;

    let resp = post(&base, None, STAR).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(Some(SECRET), notifier.clone()).await;
    let body: &[u8] = b"{not json";

    let resp = post(&base, Some("push"), body)
        .header("X-Hub-Signature-256", sign(SECRET, body).unwrap())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn ping_is_acknowledged_silently() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(None, notifier.clone()).await;

    let resp = post(&base, Some("ping"), br#"{"zen":"Design for failure.","hook_id":1}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn unknown_event_is_acknowledged_silently() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(None, notifier.clone()).await;

    let resp = post(&base, Some("sponsorship"), br#"{"action":"created"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn undecodable_payload_sends_fallback() {
    let notifier = RecordingNotifier::default();
    let base = spawn_server(None, notifier.clone()).await;

    let resp = post(&base, Some("push"), b"[1,2,3]").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(notifier.sent(), vec!["📣 New *push* event".to_string()]);
}

#[tokio::test]
async fn delivery_failure_is_server_error() {
    let base = spawn_server(None, RecordingNotifier::failing()).await;

    let resp = post(&base, Some("star"), STAR).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_endpoint() {
    let base = spawn_server(None, RecordingNotifier::default()).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
