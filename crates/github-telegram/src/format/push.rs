use github_types::push::{Commit, CreateEvent, DeleteEvent, PushEvent, RefType};

use super::Render;
use super::common::{actor, in_repo, short_sha};
use crate::markdown::{code, escape, link, link_or_text};

const LISTED_COMMITS: usize = 3;

/// Splits `refs/heads/main` into `("branch", "main")`.
fn split_ref(git_ref: &str) -> (&'static str, &str) {
    if let Some(branch) = git_ref.strip_prefix("refs/heads/") {
        ("branch", branch)
    } else if let Some(tag) = git_ref.strip_prefix("refs/tags/") {
        ("tag", tag)
    } else {
        ("ref", git_ref)
    }
}

fn ref_type_label(ref_type: Option<RefType>) -> &'static str {
    match ref_type {
        Some(RefType::Branch) => "branch",
        Some(RefType::Tag) => "tag",
        _ => "ref",
    }
}

fn commit_line(commit: &Commit) -> String {
    let sha = short_sha(commit.id.as_deref().unwrap_or("0000000"));
    let subject = commit
        .message
        .as_deref()
        .and_then(|m| m.lines().next())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or("(no message)");
    let author = commit
        .author
        .as_ref()
        .and_then(|a| a.name.as_deref().or(a.username.as_deref()));

    let mut line = format!(
        "• {} {}",
        code(sha),
        link_or_text(subject, commit.url.as_deref())
    );
    if let Some(author) = author {
        line.push_str(&format!(" by {}", escape(author)));
    }
    line
}

fn compare_line(compare: Option<&str>) -> String {
    match compare {
        Some(url) if !url.is_empty() => format!("\n{}", link("Compare changes", url)),
        _ => String::new(),
    }
}

impl Render for PushEvent {
    fn render(&self) -> Option<String> {
        // Ref deletions arrive as both `push` and `delete`; `delete` reports them.
        if self.deleted == Some(true) {
            return None;
        }

        let commits = self.commits.as_deref().unwrap_or_default();
        let forced = self.forced == Some(true);

        // Same for a bare ref creation, which `create` reports.
        if self.created == Some(true) && commits.is_empty() && !forced {
            return None;
        }

        let who = match (&self.sender, &self.pusher) {
            (Some(_), _) | (None, None) => actor(self.sender.as_ref()),
            (None, Some(pusher)) => escape(pusher.name.as_deref().unwrap_or("unknown")),
        };
        let (kind, name) = split_ref(self.r#ref.as_deref().unwrap_or("unknown"));
        let target = format!("{kind} {}", code(name));
        let repo = in_repo(self.repository.as_ref());
        let compare = compare_line(self.compare.as_deref());

        if commits.is_empty() {
            let message = if forced {
                format!("⚠️ {who} force\\-pushed {target}{repo} with no new commits{compare}")
            } else {
                format!("📌 {who} updated {target}{repo}{compare}")
            };
            return Some(message);
        }

        let (icon, verb) = if forced {
            ("⚠️", "force\\-pushed")
        } else {
            ("🚀", "pushed")
        };
        let noun = if commits.len() == 1 { "commit" } else { "commits" };

        let mut message = format!(
            "{icon} {who} {verb} {} {noun} to {target}{repo}",
            commits.len()
        );
        for commit in commits.iter().take(LISTED_COMMITS) {
            message.push('\n');
            message.push_str(&commit_line(commit));
        }
        if commits.len() > LISTED_COMMITS {
            message.push_str(&format!(
                "\n{}",
                escape(&format!("...and {} more", commits.len() - LISTED_COMMITS))
            ));
        }
        message.push_str(&compare);

        Some(message)
    }
}

impl Render for CreateEvent {
    fn render(&self) -> Option<String> {
        let kind = ref_type_label(self.ref_type);
        let icon = if self.ref_type == Some(RefType::Tag) {
            "🏷️"
        } else {
            "🌱"
        };
        Some(format!(
            "{icon} {} created {kind} {}{}",
            actor(self.sender.as_ref()),
            code(self.r#ref.as_deref().unwrap_or("unknown")),
            in_repo(self.repository.as_ref())
        ))
    }
}

impl Render for DeleteEvent {
    fn render(&self) -> Option<String> {
        Some(format!(
            "🗑️ {} deleted {} {}{}",
            actor(self.sender.as_ref()),
            ref_type_label(self.ref_type),
            code(self.r#ref.as_deref().unwrap_or("unknown")),
            in_repo(self.repository.as_ref())
        ))
    }
}
