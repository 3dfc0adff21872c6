//! Pull request lifecycle, reviews, review comments and review threads.

use crate::common::{Changes, Comment, CommentAction, Label, Milestone, Repository, Team, User};
use crate::lenient::{List, payload};

payload! {
    /// `head`/`base` side of a pull request.
    pub struct PullRequestRef {
        r#ref: String,
        sha: String,
        label: String,
    }
}

payload! {
    pub struct PullRequest {
        number: u64,
        title: String,
        html_url: String,
        state: String,
        body: String,
        draft: bool,
        merged: bool,
        merged_by: User,
        user: User,
        head: PullRequestRef,
        base: PullRequestRef,
        additions: u64,
        deletions: u64,
        changed_files: u64,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    Opened,
    Closed,
    Reopened,
    Edited,
    Assigned,
    Unassigned,
    ReviewRequested,
    ReviewRequestRemoved,
    Labeled,
    Unlabeled,
    Synchronize,
    ReadyForReview,
    ConvertedToDraft,
    Locked,
    Unlocked,
    AutoMergeEnabled,
    AutoMergeDisabled,
    Milestoned,
    Demilestoned,
    Enqueued,
    Dequeued,
    #[serde(other)]
    Other,
}

payload! {
    pub struct PullRequestEvent {
        action: PullRequestAction,
        number: u64,
        pull_request: PullRequest,
        assignee: User,
        requested_reviewer: User,
        requested_team: Team,
        label: Label,
        milestone: Milestone,
        changes: Changes,
        before: String,
        after: String,
        reason: String,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Submitted,
    Edited,
    Dismissed,
    #[serde(other)]
    Other,
}

/// Review verdict. Webhooks send lowercase states; the REST API uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    #[serde(alias = "APPROVED")]
    Approved,
    #[serde(alias = "CHANGES_REQUESTED")]
    ChangesRequested,
    #[serde(alias = "COMMENTED")]
    Commented,
    #[serde(alias = "DISMISSED")]
    Dismissed,
    #[serde(alias = "PENDING")]
    Pending,
    #[serde(other)]
    Other,
}

payload! {
    pub struct Review {
        state: ReviewState,
        body: String,
        html_url: String,
        user: User,
    }
}

payload! {
    pub struct PullRequestReviewEvent {
        action: ReviewAction,
        review: Review,
        pull_request: PullRequest,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct PullRequestReviewCommentEvent {
        action: CommentAction,
        comment: Comment,
        pull_request: PullRequest,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewThreadAction {
    Resolved,
    Unresolved,
    #[serde(other)]
    Other,
}

payload! {
    pub struct ReviewThread {
        comments: List<Comment>,
    }
}

payload! {
    pub struct PullRequestReviewThreadEvent {
        action: ReviewThreadAction,
        thread: ReviewThread,
        pull_request: PullRequest,
        repository: Repository,
        sender: User,
    }
}
