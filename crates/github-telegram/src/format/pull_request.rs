use github_types::pull_request::{
    PullRequest, PullRequestAction, PullRequestEvent, PullRequestReviewCommentEvent,
    PullRequestReviewEvent, PullRequestReviewThreadEvent, ReviewAction, ReviewState,
    ReviewThreadAction,
};

use super::Render;
use super::common::{COMMENT_PREVIEW_CHARS, actor, body_preview, comment_message, in_repo, numbered};
use crate::markdown::{bold, code, escape};

fn pr_link(pr: Option<&PullRequest>, fallback_number: Option<u64>) -> String {
    let subject = numbered(
        pr.and_then(|p| p.number).or(fallback_number),
        pr.and_then(|p| p.title.as_deref()),
        pr.and_then(|p| p.html_url.as_deref()),
    );
    format!("pull request {subject}")
}

/// `` `feature` → `main` `` line for newly opened pull requests.
fn branches(pr: Option<&PullRequest>) -> String {
    let head = pr.and_then(|p| p.head.as_ref()).and_then(|h| h.r#ref.as_deref());
    let base = pr.and_then(|p| p.base.as_ref()).and_then(|b| b.r#ref.as_deref());
    match (head, base) {
        (Some(head), Some(base)) => format!("\n{} → {}", code(head), code(base)),
        _ => String::new(),
    }
}

impl Render for PullRequestEvent {
    fn render(&self) -> Option<String> {
        let pr = self.pull_request.as_ref();
        let who = actor(self.sender.as_ref());
        let subject = pr_link(pr, self.number);
        let repo = in_repo(self.repository.as_ref());
        let label = || {
            bold(
                self.label
                    .as_ref()
                    .and_then(|l| l.name.as_deref())
                    .unwrap_or("unknown"),
            )
        };
        let milestone = || {
            bold(
                self.milestone
                    .as_ref()
                    .and_then(|m| m.title.as_deref())
                    .unwrap_or("unknown"),
            )
        };

        let message = match self.action? {
            PullRequestAction::Opened => {
                let draft = if pr.and_then(|p| p.draft) == Some(true) {
                    "draft "
                } else {
                    ""
                };
                format!("🔀 {who} opened {draft}{subject}{repo}{}", branches(pr))
            }
            PullRequestAction::Closed if pr.and_then(|p| p.merged) == Some(true) => {
                let merger = pr.and_then(|p| p.merged_by.as_ref()).or(self.sender.as_ref());
                format!("🟣 {} merged {subject}{repo}", actor(merger))
            }
            PullRequestAction::Closed => format!("🔴 {who} closed {subject}{repo}"),
            PullRequestAction::Reopened => format!("🔁 {who} reopened {subject}{repo}"),
            PullRequestAction::Edited => {
                let renamed = self
                    .changes
                    .as_ref()
                    .and_then(|c| c.title.as_ref())
                    .and_then(|t| t.from.as_deref())
                    .map(|from| format!("\nTitle was: {}", escape(from)))
                    .unwrap_or_default();
                format!("✏️ {who} edited {subject}{repo}{renamed}")
            }
            PullRequestAction::Assigned => format!(
                "👤 {who} assigned {} to {subject}{repo}",
                actor(self.assignee.as_ref())
            ),
            PullRequestAction::Unassigned => format!(
                "👤 {who} unassigned {} from {subject}{repo}",
                actor(self.assignee.as_ref())
            ),
            PullRequestAction::ReviewRequested => format!(
                "👀 {who} requested a review from {} on {subject}{repo}",
                reviewer(self)
            ),
            PullRequestAction::ReviewRequestRemoved => format!(
                "👀 {who} removed the review request for {} on {subject}{repo}",
                reviewer(self)
            ),
            PullRequestAction::Labeled => {
                format!("🏷️ {who} added label {} to {subject}{repo}", label())
            }
            PullRequestAction::Unlabeled => {
                format!("🏷️ {who} removed label {} from {subject}{repo}", label())
            }
            PullRequestAction::Synchronize => {
                format!("🔄 {who} pushed new commits to {subject}{repo}")
            }
            PullRequestAction::ReadyForReview => {
                format!("🟢 {who} marked {subject} ready for review{repo}")
            }
            PullRequestAction::ConvertedToDraft => {
                format!("📝 {who} converted {subject} to a draft{repo}")
            }
            PullRequestAction::Locked => format!("🔒 {who} locked {subject}{repo}"),
            PullRequestAction::Unlocked => format!("🔓 {who} unlocked {subject}{repo}"),
            PullRequestAction::AutoMergeEnabled => {
                format!("⚙️ {who} enabled auto\\-merge for {subject}{repo}")
            }
            PullRequestAction::AutoMergeDisabled => {
                format!("⚙️ {who} disabled auto\\-merge for {subject}{repo}")
            }
            PullRequestAction::Milestoned => {
                format!("🎯 {who} added {subject} to milestone {}{repo}", milestone())
            }
            PullRequestAction::Demilestoned => {
                format!("🎯 {who} removed {subject} from milestone {}{repo}", milestone())
            }
            PullRequestAction::Enqueued => {
                format!("🚂 {who} added {subject} to the merge queue{repo}")
            }
            PullRequestAction::Dequeued => {
                let reason = self
                    .reason
                    .as_deref()
                    .map(|r| {
                        let reason = r.to_lowercase().replace('_', " ");
                        format!(" {}", escape(&format!("({reason})")))
                    })
                    .unwrap_or_default();
                format!("🚂 {subject} was removed from the merge queue{reason}{repo}")
            }
            PullRequestAction::Other => return None,
        };

        Some(message)
    }
}

/// Requested reviewer, or the requested team for team review requests.
fn reviewer(event: &PullRequestEvent) -> String {
    match (&event.requested_reviewer, &event.requested_team) {
        (Some(user), _) => actor(Some(user)),
        (None, Some(team)) => {
            let name = team.name.as_deref().or(team.slug.as_deref()).unwrap_or("unknown");
            format!("team {}", bold(name))
        }
        (None, None) => actor(None),
    }
}

impl Render for PullRequestReviewEvent {
    fn render(&self) -> Option<String> {
        let who = actor(self.sender.as_ref());
        let subject = pr_link(self.pull_request.as_ref(), None);
        let repo = in_repo(self.repository.as_ref());
        let review = self.review.as_ref();
        let body = body_preview(
            review.and_then(|r| r.body.as_deref()),
            COMMENT_PREVIEW_CHARS,
        );

        let (icon, verb) = match self.action? {
            ReviewAction::Submitted => match review.and_then(|r| r.state) {
                Some(ReviewState::Approved) => ("✅", "approved"),
                Some(ReviewState::ChangesRequested) => ("🔶", "requested changes on"),
                Some(ReviewState::Commented) => ("💬", "reviewed"),
                Some(ReviewState::Dismissed) => ("🚫", "dismissed a review on"),
                Some(ReviewState::Pending) => return None,
                Some(ReviewState::Other) | None => ("👀", "reviewed"),
            },
            ReviewAction::Dismissed => ("🚫", "dismissed a review on"),
            ReviewAction::Edited | ReviewAction::Other => return None,
        };

        Some(format!("{icon} {who} {verb} {subject}{repo}{body}"))
    }
}

impl Render for PullRequestReviewCommentEvent {
    fn render(&self) -> Option<String> {
        let mut subject = pr_link(self.pull_request.as_ref(), None);
        if let Some(path) = self.comment.as_ref().and_then(|c| c.path.as_deref()) {
            subject.push_str(&format!(" at {}", code(path)));
        }
        comment_message(
            self.action,
            &actor(self.sender.as_ref()),
            &subject,
            &in_repo(self.repository.as_ref()),
            self.comment.as_ref(),
        )
    }
}

impl Render for PullRequestReviewThreadEvent {
    fn render(&self) -> Option<String> {
        let who = actor(self.sender.as_ref());
        let subject = pr_link(self.pull_request.as_ref(), None);
        let repo = in_repo(self.repository.as_ref());
        match self.action? {
            ReviewThreadAction::Resolved => {
                Some(format!("✅ {who} resolved a review thread on {subject}{repo}"))
            }
            ReviewThreadAction::Unresolved => {
                Some(format!("🔁 {who} unresolved a review thread on {subject}{repo}"))
            }
            ReviewThreadAction::Other => None,
        }
    }
}
