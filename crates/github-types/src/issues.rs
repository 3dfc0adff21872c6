//! Issues, issue comments and commit comments.

use crate::common::{Changes, Comment, CommentAction, Label, Milestone, Repository, User};
use crate::lenient::payload;

payload! {
    /// Present on an issue when it is really a pull request.
    pub struct IssuePullRequestLink {
        html_url: String,
    }
}

payload! {
    /// Organization-defined issue type (`Bug`, `Feature`, ...).
    pub struct IssueType {
        name: String,
    }
}

payload! {
    pub struct Issue {
        number: u64,
        title: String,
        html_url: String,
        state: String,
        state_reason: String,
        body: String,
        user: User,
        pull_request: IssuePullRequestLink,
        r#type: IssueType,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueAction {
    Opened,
    Closed,
    Reopened,
    Edited,
    Deleted,
    Transferred,
    Assigned,
    Unassigned,
    Labeled,
    Unlabeled,
    Locked,
    Unlocked,
    Milestoned,
    Demilestoned,
    Pinned,
    Unpinned,
    Typed,
    Untyped,
    #[serde(other)]
    Other,
}

payload! {
    pub struct IssuesEvent {
        action: IssueAction,
        issue: Issue,
        assignee: User,
        label: Label,
        milestone: Milestone,
        r#type: IssueType,
        changes: Changes,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct IssueCommentEvent {
        action: CommentAction,
        issue: Issue,
        comment: Comment,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct CommitCommentEvent {
        action: CommentAction,
        comment: Comment,
        repository: Repository,
        sender: User,
    }
}
