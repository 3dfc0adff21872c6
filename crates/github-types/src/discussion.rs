//! Discussions and discussion comments.

use crate::common::{Comment, CommentAction, Label, Repository, User};
use crate::lenient::payload;

payload! {
    pub struct DiscussionCategory {
        name: String,
        emoji: String,
    }
}

payload! {
    pub struct Discussion {
        number: u64,
        title: String,
        html_url: String,
        body: String,
        category: DiscussionCategory,
        answer_html_url: String,
        user: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionAction {
    Created,
    Edited,
    Deleted,
    Pinned,
    Unpinned,
    Locked,
    Unlocked,
    Transferred,
    CategoryChanged,
    Answered,
    Unanswered,
    Labeled,
    Unlabeled,
    #[serde(other)]
    Other,
}

payload! {
    pub struct DiscussionEvent {
        action: DiscussionAction,
        discussion: Discussion,
        answer: Comment,
        label: Label,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct DiscussionCommentEvent {
        action: CommentAction,
        comment: Comment,
        discussion: Discussion,
        repository: Repository,
        sender: User,
    }
}
