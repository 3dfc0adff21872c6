//! Sub-structures shared by most event payloads.

use crate::lenient::payload;

payload! {
    /// A GitHub account: the `sender`, an author, an assignee.
    pub struct User {
        login: String,
        html_url: String,
        r#type: String,
    }
}

payload! {
    pub struct Repository {
        name: String,
        full_name: String,
        html_url: String,
        owner: User,
        private: bool,
        default_branch: String,
        stargazers_count: u64,
        forks_count: u64,
    }
}

payload! {
    /// Organization stub attached to org-scoped deliveries.
    ///
    /// GitHub sends the API `url` here, not an `html_url`.
    pub struct Organization {
        login: String,
        url: String,
    }
}

payload! {
    pub struct Label {
        name: String,
        color: String,
        description: String,
    }
}

payload! {
    pub struct Milestone {
        number: u64,
        title: String,
        html_url: String,
        state: String,
    }
}

payload! {
    pub struct Team {
        name: String,
        slug: String,
        html_url: String,
    }
}

payload! {
    /// `{ "from": ... }` wrapper used by the `changes` object.
    pub struct ChangeFrom {
        from: String,
    }
}

payload! {
    pub struct RepositoryChange {
        name: ChangeFrom,
    }
}

payload! {
    pub struct OwnerChange {
        from: OwnerFrom,
    }
}

payload! {
    pub struct OwnerFrom {
        user: User,
        organization: Organization,
    }
}

payload! {
    /// Previous values reported alongside `edited`, `renamed` and
    /// `transferred` actions.
    pub struct Changes {
        title: ChangeFrom,
        body: ChangeFrom,
        name: ChangeFrom,
        repository: RepositoryChange,
        owner: OwnerChange,
    }
}

payload! {
    /// Generic comment shape shared by issue, review, commit and discussion
    /// comments. Review-comment-only fields are `None` elsewhere.
    pub struct Comment {
        body: String,
        html_url: String,
        user: User,
        path: String,
        line: u64,
        commit_id: String,
    }
}

/// Action carried by every comment-style event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentAction {
    Created,
    Edited,
    Deleted,
    #[serde(other)]
    Other,
}
