use github_types::discussion::{
    Discussion, DiscussionAction, DiscussionCommentEvent, DiscussionEvent,
};

use super::Render;
use super::common::{COMMENT_PREVIEW_CHARS, actor, body_preview, comment_message, in_repo, numbered};
use crate::markdown::{bold, link_or_text};

fn discussion_link(discussion: Option<&Discussion>) -> String {
    let link = numbered(
        discussion.and_then(|d| d.number),
        discussion.and_then(|d| d.title.as_deref()),
        discussion.and_then(|d| d.html_url.as_deref()),
    );
    format!("discussion {link}")
}

impl Render for DiscussionEvent {
    fn render(&self) -> Option<String> {
        let discussion = self.discussion.as_ref();
        let who = actor(self.sender.as_ref());
        let subject = discussion_link(discussion);
        let repo = in_repo(self.repository.as_ref());
        let label = || {
            bold(
                self.label
                    .as_ref()
                    .and_then(|l| l.name.as_deref())
                    .unwrap_or("unknown"),
            )
        };

        let message = match self.action? {
            DiscussionAction::Created => {
                let category = discussion
                    .and_then(|d| d.category.as_ref())
                    .and_then(|c| c.name.as_deref())
                    .map(|name| format!(" in category {}", bold(name)))
                    .unwrap_or_default();
                let body = body_preview(
                    discussion.and_then(|d| d.body.as_deref()),
                    COMMENT_PREVIEW_CHARS,
                );
                format!("💭 {who} started {subject}{category}{repo}{body}")
            }
            DiscussionAction::Edited => format!("✏️ {who} edited {subject}{repo}"),
            DiscussionAction::Deleted => format!("🗑️ {who} deleted {subject}{repo}"),
            DiscussionAction::Pinned => format!("📌 {who} pinned {subject}{repo}"),
            DiscussionAction::Unpinned => format!("📍 {who} unpinned {subject}{repo}"),
            DiscussionAction::Locked => format!("🔒 {who} locked {subject}{repo}"),
            DiscussionAction::Unlocked => format!("🔓 {who} unlocked {subject}{repo}"),
            DiscussionAction::Transferred => format!("📦 {who} transferred {subject}{repo}"),
            DiscussionAction::CategoryChanged => {
                let category = discussion
                    .and_then(|d| d.category.as_ref())
                    .and_then(|c| c.name.as_deref())
                    .unwrap_or("unknown");
                format!("🗂️ {who} moved {subject} to category {}{repo}", bold(category))
            }
            DiscussionAction::Answered => {
                let answer = self
                    .answer
                    .as_ref()
                    .and_then(|a| a.html_url.as_deref())
                    .or(discussion.and_then(|d| d.answer_html_url.as_deref()));
                format!(
                    "✅ {who} marked an {} for {subject}{repo}",
                    link_or_text("answer", answer)
                )
            }
            DiscussionAction::Unanswered => {
                format!("❔ {who} unmarked the answer for {subject}{repo}")
            }
            DiscussionAction::Labeled => {
                format!("🏷️ {who} added label {} to {subject}{repo}", label())
            }
            DiscussionAction::Unlabeled => {
                format!("🏷️ {who} removed label {} from {subject}{repo}", label())
            }
            DiscussionAction::Other => return None,
        };

        Some(message)
    }
}

impl Render for DiscussionCommentEvent {
    fn render(&self) -> Option<String> {
        comment_message(
            self.action,
            &actor(self.sender.as_ref()),
            &discussion_link(self.discussion.as_ref()),
            &in_repo(self.repository.as_ref()),
            self.comment.as_ref(),
        )
    }
}
