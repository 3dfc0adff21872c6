//! Turns decoded GitHub events into Telegram MarkdownV2 messages.
//!
//! Every supported payload type implements [`Render`]. `None` from a
//! renderer means "nothing worth notifying" and is a normal outcome, as is an
//! event type this crate does not know.

mod ci;
mod common;
mod discussion;
mod issues;
mod pull_request;
mod push;
mod repository;
mod security;

use github_types::GithubEvent;
use serde_json::Value;
use tracing::{debug, warn};

use crate::markdown::{bold, link_or_text};

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("payload could not be decoded: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{event} message is {len} characters, over the {TELEGRAM_MESSAGE_LIMIT} limit")]
    TooLong { event: &'static str, len: usize },
}

/// A payload that knows how to describe itself.
pub(crate) trait Render {
    fn render(&self) -> Option<String>;
}

/// Formats a decoded event. `Ok(None)` suppresses the notification.
pub fn format_event(event: &GithubEvent) -> Result<Option<String>, FormatError> {
    let message = match event {
        GithubEvent::Ping(e) => e.render(),
        GithubEvent::Push(e) => e.render(),
        GithubEvent::Create(e) => e.render(),
        GithubEvent::Delete(e) => e.render(),
        GithubEvent::PullRequest(e) => e.render(),
        GithubEvent::PullRequestReview(e) => e.render(),
        GithubEvent::PullRequestReviewComment(e) => e.render(),
        GithubEvent::PullRequestReviewThread(e) => e.render(),
        GithubEvent::Issues(e) => e.render(),
        GithubEvent::IssueComment(e) => e.render(),
        GithubEvent::CommitComment(e) => e.render(),
        GithubEvent::Discussion(e) => e.render(),
        GithubEvent::DiscussionComment(e) => e.render(),
        GithubEvent::Label(e) => e.render(),
        GithubEvent::Release(e) => e.render(),
        GithubEvent::Repository(e) => e.render(),
        GithubEvent::BranchProtectionRule(e) => e.render(),
        GithubEvent::WorkflowJob(e) => e.render(),
        GithubEvent::WorkflowRun(e) => e.render(),
        GithubEvent::CheckSuite(e) => e.render(),
        GithubEvent::CheckRun(e) => e.render(),
        GithubEvent::Status(e) => e.render(),
        GithubEvent::PageBuild(e) => e.render(),
        GithubEvent::DeploymentStatus(e) => e.render(),
        GithubEvent::DependabotAlert(e) => e.render(),
        GithubEvent::CodeScanningAlert(e) => e.render(),
        GithubEvent::Fork(e) => e.render(),
        GithubEvent::Star(e) => e.render(),
        GithubEvent::Watch(e) => e.render(),
        GithubEvent::Member(e) => e.render(),
        GithubEvent::Public(e) => e.render(),
        GithubEvent::Milestone(e) => e.render(),
        GithubEvent::Package(e) => e.render(),
        GithubEvent::Gollum(e) => e.render(),
        GithubEvent::Team(e) => e.render(),
    };

    match message {
        Some(text) => {
            let len = text.chars().count();
            if len > TELEGRAM_MESSAGE_LIMIT {
                return Err(FormatError::TooLong {
                    event: event.name(),
                    len,
                });
            }
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

/// Decodes and formats a raw payload for the given `X-GitHub-Event` tag.
pub fn format_payload(event_type: &str, payload: Value) -> Result<Option<String>, FormatError> {
    match GithubEvent::parse(event_type, payload)? {
        Some(event) => format_event(&event),
        None => {
            debug!(event_type, "Unsupported GitHub event type");
            Ok(None)
        }
    }
}

/// [`format_payload`], degrading to a minimal message when formatting fails
/// instead of dropping the delivery.
pub fn format_with_fallback(event_type: &str, payload: Value) -> Option<String> {
    let repo = payload
        .pointer("/repository/full_name")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let repo_url = payload
        .pointer("/repository/html_url")
        .and_then(Value::as_str)
        .map(str::to_owned);

    match format_payload(event_type, payload) {
        Ok(message) => message,
        Err(e) => {
            warn!(event_type, error = %e, "Formatting failed, sending fallback message");
            Some(fallback_message(event_type, repo.as_deref(), repo_url.as_deref()))
        }
    }
}

/// `📣 New <event> event in <repo>`, fully escaped.
pub fn fallback_message(event_type: &str, repo: Option<&str>, repo_url: Option<&str>) -> String {
    let clause = repo
        .map(|name| format!(" in {}", link_or_text(name, repo_url)))
        .unwrap_or_default();
    format!("📣 New {} event{clause}", bold(&event_label(event_type)))
}

/// Event tags come from a request header; cap them before echoing.
fn event_label(event_type: &str) -> String {
    event_type.chars().take(64).collect()
}
