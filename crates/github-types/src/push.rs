//! `push`, `create` and `delete` events.

use crate::common::{Repository, User};
use crate::lenient::{List, payload};

payload! {
    pub struct CommitAuthor {
        name: String,
        email: String,
        username: String,
    }
}

payload! {
    pub struct Commit {
        id: String,
        message: String,
        url: String,
        author: CommitAuthor,
    }
}

payload! {
    /// The `pusher` object is a git identity, not a GitHub account.
    pub struct Pusher {
        name: String,
        email: String,
    }
}

payload! {
    pub struct PushEvent {
        r#ref: String,
        before: String,
        after: String,
        created: bool,
        deleted: bool,
        forced: bool,
        compare: String,
        commits: List<Commit>,
        head_commit: Commit,
        pusher: Pusher,
        repository: Repository,
        sender: User,
    }
}

/// Kind of git ref named by `create`/`delete` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefType {
    Branch,
    Tag,
    #[serde(other)]
    Other,
}

payload! {
    pub struct CreateEvent {
        r#ref: String,
        ref_type: RefType,
        master_branch: String,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct DeleteEvent {
        r#ref: String,
        ref_type: RefType,
        repository: Repository,
        sender: User,
    }
}
