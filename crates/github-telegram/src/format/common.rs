//! Shared fragments: actors, repository clauses, CI status icons and
//! durations.

use chrono::DateTime;
use github_types::common::{Comment, CommentAction};
use github_types::{Repository, User};

use crate::markdown::{blockquote, escape, link_or_text, preview};

pub(crate) const COMMENT_PREVIEW_CHARS: usize = 150;
pub(crate) const RELEASE_PREVIEW_CHARS: usize = 200;

const UNKNOWN: &str = "unknown";

/// Actor reference: profile link when known, escaped login otherwise.
pub(crate) fn actor(user: Option<&User>) -> String {
    let login = user.and_then(|u| u.login.as_deref()).unwrap_or(UNKNOWN);
    link_or_text(login, user.and_then(|u| u.html_url.as_deref()))
}

pub(crate) fn repo_name(repo: Option<&Repository>) -> Option<&str> {
    let repo = repo?;
    repo.full_name.as_deref().or(repo.name.as_deref())
}

pub(crate) fn repo_link(repo: Option<&Repository>) -> Option<String> {
    let name = repo_name(repo)?;
    Some(link_or_text(name, repo.and_then(|r| r.html_url.as_deref())))
}

/// `" in <repo>"`, or nothing for deliveries without a repository.
pub(crate) fn in_repo(repo: Option<&Repository>) -> String {
    repo_link(repo)
        .map(|link| format!(" in {link}"))
        .unwrap_or_default()
}

/// `"#12 Title"` linked to `url` when known.
pub(crate) fn numbered(number: Option<u64>, title: Option<&str>, url: Option<&str>) -> String {
    let text = match (number, title) {
        (Some(n), Some(t)) => format!("#{n} {t}"),
        (Some(n), None) => format!("#{n}"),
        (None, Some(t)) => t.to_string(),
        (None, None) => UNKNOWN.to_string(),
    };
    link_or_text(&text, url)
}

/// Escaped, truncated blockquote of a free-form body, preceded by a
/// newline. Empty for missing or blank bodies.
pub(crate) fn body_preview(body: Option<&str>, max_chars: usize) -> String {
    match body.map(str::trim) {
        Some(body) if !body.is_empty() => format!("\n{}", blockquote(&preview(body, max_chars))),
        _ => String::new(),
    }
}

/// Shared shape of every `*_comment` event: who, what, where, and a quote
/// of the comment for creations and edits.
pub(crate) fn comment_message(
    action: Option<CommentAction>,
    who: &str,
    subject: &str,
    repo: &str,
    comment: Option<&Comment>,
) -> Option<String> {
    let url = comment.and_then(|c| c.html_url.as_deref());
    let body = comment.and_then(|c| c.body.as_deref());

    let message = match action? {
        CommentAction::Created => format!(
            "💬 {who} {} on {subject}{repo}{}",
            link_or_text("commented", url),
            body_preview(body, COMMENT_PREVIEW_CHARS)
        ),
        CommentAction::Edited => format!(
            "✏️ {who} edited a {} on {subject}{repo}{}",
            link_or_text("comment", url),
            body_preview(body, COMMENT_PREVIEW_CHARS)
        ),
        CommentAction::Deleted => format!("🗑️ {who} deleted a comment on {subject}{repo}"),
        CommentAction::Other => return None,
    };
    Some(message)
}

pub(crate) fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(7) {
        Some((cut, _)) => &sha[..cut],
        None => sha,
    }
}

/// Icon for a CI `(status, conclusion)` pair.
pub(crate) fn status_icon(status: Option<&str>, conclusion: Option<&str>) -> &'static str {
    match (status, conclusion) {
        (Some("completed"), Some("success")) => "✅",
        (Some("completed"), Some("failure")) => "❌",
        (Some("completed"), Some("cancelled")) => "🚫",
        (Some("completed"), Some("skipped")) => "⏭️",
        (Some("completed"), _) => "⚪",
        (Some("queued" | "waiting" | "pending"), _) => "⏳",
        (Some("in_progress"), _) => "🔄",
        (Some("requested"), _) => "📋",
        _ => "ℹ️",
    }
}

/// Human label for a `(status, conclusion)` pair: the conclusion once
/// completed, the status before that.
pub(crate) fn status_label<'a>(status: Option<&'a str>, conclusion: Option<&'a str>) -> &'a str {
    match (status, conclusion) {
        (Some("completed"), Some(conclusion)) => conclusion,
        (Some(status), _) => status,
        (None, _) => UNKNOWN,
    }
}

/// Elapsed time between two RFC 3339 timestamps as `"1h 2m 5s"`, dropping
/// zero-valued leading units. `None` when either side is unparseable or
/// `end` precedes `start`.
pub(crate) fn duration(start: &str, end: &str) -> Option<String> {
    let start = DateTime::parse_from_rfc3339(start).ok()?;
    let end = DateTime::parse_from_rfc3339(end).ok()?;
    let secs = (end - start).num_seconds();
    if secs < 0 {
        return None;
    }

    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    Some(if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    })
}

/// Escaped `" (took 1m 5s)"` clause, or nothing.
pub(crate) fn took(start: Option<&str>, end: Option<&str>) -> String {
    start
        .zip(end)
        .and_then(|(start, end)| duration(start, end))
        .map(|d| format!(" {}", escape(&format!("(took {d})"))))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(login: &str, url: Option<&str>) -> User {
        User {
            login: Some(login.to_string()),
            html_url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn actor_links_when_profile_known() {
        assert_eq!(
            actor(Some(&user("octocat", Some("https://github.com/octocat")))),
            "[octocat](https://github.com/octocat)"
        );
    }

    #[test]
    fn actor_escapes_plain_login() {
        assert_eq!(actor(Some(&user("dependabot[bot]", None))), "dependabot\\[bot\\]");
    }

    #[test]
    fn actor_placeholder_when_missing() {
        assert_eq!(actor(None), "unknown");
        assert_eq!(actor(Some(&User::default())), "unknown");
    }

    #[test]
    fn in_repo_omitted_without_repository() {
        assert_eq!(in_repo(None), "");
        assert_eq!(in_repo(Some(&Repository::default())), "");
    }

    #[test]
    fn in_repo_links_repository() {
        let repo = Repository {
            full_name: Some("octo/my.repo".into()),
            html_url: Some("https://github.com/octo/my.repo".into()),
            ..Default::default()
        };
        assert_eq!(
            in_repo(Some(&repo)),
            " in [octo/my\\.repo](https://github.com/octo/my.repo)"
        );
    }

    #[test]
    fn numbered_variants() {
        assert_eq!(numbered(Some(5), Some("Fix"), None), "\\#5 Fix");
        assert_eq!(numbered(Some(5), None, Some("https://x")), "[\\#5](https://x)");
        assert_eq!(numbered(None, None, None), "unknown");
    }

    #[test]
    fn body_preview_skips_blank() {
        assert_eq!(body_preview(None, 10), "");
        assert_eq!(body_preview(Some("   "), 10), "");
        assert_eq!(body_preview(Some("hi!"), 10), "\n>hi\\!");
    }

    #[test]
    fn comment_message_actions() {
        let comment = Comment {
            body: Some("Looks good!".into()),
            html_url: Some("https://x/c/1".into()),
            ..Default::default()
        };

        assert_eq!(
            comment_message(Some(CommentAction::Created), "a", "b", " in r", Some(&comment))
                .unwrap(),
            "💬 a [commented](https://x/c/1) on b in r\n>Looks good\\!"
        );
        assert!(
            comment_message(Some(CommentAction::Edited), "a", "b", "", Some(&comment))
                .unwrap()
                .starts_with("✏️ a edited a [comment](https://x/c/1) on b")
        );
        assert_eq!(
            comment_message(Some(CommentAction::Deleted), "a", "b", "", Some(&comment)).unwrap(),
            "🗑️ a deleted a comment on b"
        );
        assert!(comment_message(Some(CommentAction::Other), "a", "b", "", None).is_none());
        assert!(comment_message(None, "a", "b", "", None).is_none());
    }

    #[test]
    fn comment_preview_is_truncated() {
        let comment = Comment {
            body: Some("y".repeat(400)),
            ..Default::default()
        };
        let message =
            comment_message(Some(CommentAction::Created), "a", "b", "", Some(&comment)).unwrap();
        assert!(message.contains(&format!(">{}\\.\\.\\.", "y".repeat(COMMENT_PREVIEW_CHARS))));
        assert!(!message.contains(&"y".repeat(COMMENT_PREVIEW_CHARS + 1)));
    }

    #[test]
    fn short_sha_takes_seven() {
        assert_eq!(short_sha("abcdef0123456789"), "abcdef0");
        assert_eq!(short_sha("abc"), "abc");
    }

    #[test]
    fn status_icon_table() {
        assert_eq!(status_icon(Some("completed"), Some("success")), "✅");
        assert_eq!(status_icon(Some("completed"), Some("failure")), "❌");
        assert_eq!(status_icon(Some("completed"), Some("cancelled")), "🚫");
        assert_eq!(status_icon(Some("completed"), Some("skipped")), "⏭️");
        assert_eq!(status_icon(Some("completed"), Some("neutral")), "⚪");
        assert_eq!(status_icon(Some("completed"), None), "⚪");
        assert_eq!(status_icon(Some("queued"), None), "⏳");
        assert_eq!(status_icon(Some("waiting"), None), "⏳");
        assert_eq!(status_icon(Some("in_progress"), None), "🔄");
        assert_eq!(status_icon(Some("requested"), None), "📋");
        assert_eq!(status_icon(Some("mystery"), None), "ℹ️");
        assert_eq!(status_icon(None, None), "ℹ️");
    }

    #[test]
    fn status_label_prefers_conclusion_when_completed() {
        assert_eq!(status_label(Some("completed"), Some("failure")), "failure");
        assert_eq!(status_label(Some("in_progress"), None), "in_progress");
        assert_eq!(status_label(None, None), "unknown");
    }

    #[test]
    fn duration_hours_minutes_seconds() {
        assert_eq!(
            duration("2024-01-01T00:00:00Z", "2024-01-01T01:02:05Z").as_deref(),
            Some("1h 2m 5s")
        );
    }

    #[test]
    fn duration_seconds_only() {
        assert_eq!(
            duration("2024-01-01T00:00:00Z", "2024-01-01T00:00:45Z").as_deref(),
            Some("45s")
        );
    }

    #[test]
    fn duration_minutes_and_seconds() {
        assert_eq!(
            duration("2024-01-01T00:00:00Z", "2024-01-01T00:03:00Z").as_deref(),
            Some("3m 0s")
        );
    }

    #[test]
    fn duration_keeps_inner_zero_units() {
        assert_eq!(
            duration("2024-01-01T00:00:00Z", "2024-01-01T01:00:05Z").as_deref(),
            Some("1h 0m 5s")
        );
    }

    #[test]
    fn duration_across_offsets() {
        assert_eq!(
            duration("2024-01-01T10:00:00+02:00", "2024-01-01T08:00:30Z").as_deref(),
            Some("30s")
        );
    }

    #[test]
    fn duration_rejects_reversed_span() {
        assert!(duration("2024-01-01T00:00:10Z", "2024-01-01T00:00:00Z").is_none());
    }

    #[test]
    fn duration_rejects_garbage() {
        assert!(duration("yesterday", "2024-01-01T00:00:00Z").is_none());
        assert!(duration("2024-01-01T00:00:00Z", "").is_none());
    }

    #[test]
    fn took_is_escaped() {
        assert_eq!(
            took(Some("2024-01-01T00:00:00Z"), Some("2024-01-01T00:00:45Z")),
            " \\(took 45s\\)"
        );
        assert_eq!(took(None, Some("2024-01-01T00:00:45Z")), "");
    }
}
