use github_types::issues::{CommitCommentEvent, Issue, IssueAction, IssueCommentEvent, IssuesEvent};

use super::Render;
use super::common::{actor, comment_message, in_repo, numbered, short_sha};
use crate::markdown::{bold, code, escape};

fn issue_link(issue: Option<&Issue>) -> String {
    numbered(
        issue.and_then(|i| i.number),
        issue.and_then(|i| i.title.as_deref()),
        issue.and_then(|i| i.html_url.as_deref()),
    )
}

/// Issue comments are delivered for pull requests too; the `pull_request`
/// link tells them apart.
fn noun(issue: Option<&Issue>) -> &'static str {
    if issue.and_then(|i| i.pull_request.as_ref()).is_some() {
        "pull request"
    } else {
        "issue"
    }
}

impl Render for IssuesEvent {
    fn render(&self) -> Option<String> {
        let issue = self.issue.as_ref();
        let who = actor(self.sender.as_ref());
        let subject = format!("issue {}", issue_link(issue));
        let repo = in_repo(self.repository.as_ref());
        let named = |name: Option<&str>| bold(name.unwrap_or("unknown"));
        let label = || named(self.label.as_ref().and_then(|l| l.name.as_deref()));
        let milestone = || named(self.milestone.as_ref().and_then(|m| m.title.as_deref()));
        let issue_type = || {
            named(
                self.r#type
                    .as_ref()
                    .or(issue.and_then(|i| i.r#type.as_ref()))
                    .and_then(|t| t.name.as_deref()),
            )
        };

        let message = match self.action? {
            IssueAction::Opened => format!("🐛 {who} opened {subject}{repo}"),
            IssueAction::Closed => {
                let reason = match issue.and_then(|i| i.state_reason.as_deref()) {
                    Some("not_planned") => " as not planned",
                    Some("duplicate") => " as duplicate",
                    _ => "",
                };
                format!("✅ {who} closed {subject}{reason}{repo}")
            }
            IssueAction::Reopened => format!("🔁 {who} reopened {subject}{repo}"),
            IssueAction::Edited => format!("✏️ {who} edited {subject}{repo}"),
            IssueAction::Deleted => format!("🗑️ {who} deleted {subject}{repo}"),
            IssueAction::Transferred => format!("📦 {who} transferred {subject}{repo}"),
            IssueAction::Assigned => format!(
                "👤 {who} assigned {} to {subject}{repo}",
                actor(self.assignee.as_ref())
            ),
            IssueAction::Unassigned => format!(
                "👤 {who} unassigned {} from {subject}{repo}",
                actor(self.assignee.as_ref())
            ),
            IssueAction::Labeled => {
                format!("🏷️ {who} added label {} to {subject}{repo}", label())
            }
            IssueAction::Unlabeled => {
                format!("🏷️ {who} removed label {} from {subject}{repo}", label())
            }
            IssueAction::Locked => format!("🔒 {who} locked {subject}{repo}"),
            IssueAction::Unlocked => format!("🔓 {who} unlocked {subject}{repo}"),
            IssueAction::Milestoned => {
                format!("🎯 {who} added {subject} to milestone {}{repo}", milestone())
            }
            IssueAction::Demilestoned => {
                format!("🎯 {who} removed {subject} from milestone {}{repo}", milestone())
            }
            IssueAction::Pinned => format!("📌 {who} pinned {subject}{repo}"),
            IssueAction::Unpinned => format!("📍 {who} unpinned {subject}{repo}"),
            IssueAction::Typed => {
                format!("🔖 {who} set the type of {subject} to {}{repo}", issue_type())
            }
            IssueAction::Untyped => {
                format!("🔖 {who} removed the type {} from {subject}{repo}", issue_type())
            }
            IssueAction::Other => return None,
        };

        Some(message)
    }
}

impl Render for IssueCommentEvent {
    fn render(&self) -> Option<String> {
        let issue = self.issue.as_ref();
        comment_message(
            self.action,
            &actor(self.sender.as_ref()),
            &format!("{} {}", noun(issue), issue_link(issue)),
            &in_repo(self.repository.as_ref()),
            self.comment.as_ref(),
        )
    }
}

impl Render for CommitCommentEvent {
    fn render(&self) -> Option<String> {
        let sha = self
            .comment
            .as_ref()
            .and_then(|c| c.commit_id.as_deref())
            .map(|sha| code(short_sha(sha)))
            .unwrap_or_else(|| escape("unknown"));
        comment_message(
            self.action,
            &actor(self.sender.as_ref()),
            &format!("commit {sha}"),
            &in_repo(self.repository.as_ref()),
            self.comment.as_ref(),
        )
    }
}
