//! Repository-scoped housekeeping events: labels, releases, settings,
//! social signals, wiki, packages, teams and collaborators.

use crate::common::{Changes, Label, Milestone, Organization, Repository, Team, User};
use crate::lenient::{List, payload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAction {
    Created,
    Edited,
    Deleted,
    #[serde(other)]
    Other,
}

payload! {
    pub struct LabelEvent {
        action: LabelAction,
        label: Label,
        changes: Changes,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct Release {
        tag_name: String,
        name: String,
        html_url: String,
        body: String,
        draft: bool,
        prerelease: bool,
        author: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseAction {
    Published,
    Unpublished,
    Created,
    Edited,
    Deleted,
    Prereleased,
    Released,
    #[serde(other)]
    Other,
}

payload! {
    pub struct ReleaseEvent {
        action: ReleaseAction,
        release: Release,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryAction {
    Created,
    Deleted,
    Archived,
    Unarchived,
    Publicized,
    Privatized,
    Edited,
    Renamed,
    Transferred,
    #[serde(other)]
    Other,
}

payload! {
    pub struct RepositoryEvent {
        action: RepositoryAction,
        changes: Changes,
        repository: Repository,
        organization: Organization,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchProtectionRuleAction {
    Created,
    Edited,
    Deleted,
    #[serde(other)]
    Other,
}

payload! {
    pub struct BranchProtectionRule {
        name: String,
    }
}

payload! {
    pub struct BranchProtectionRuleEvent {
        action: BranchProtectionRuleAction,
        rule: BranchProtectionRule,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct ForkEvent {
        forkee: Repository,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarAction {
    Created,
    Deleted,
    #[serde(other)]
    Other,
}

payload! {
    pub struct StarEvent {
        action: StarAction,
        starred_at: String,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchAction {
    Started,
    #[serde(other)]
    Other,
}

payload! {
    pub struct WatchEvent {
        action: WatchAction,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberAction {
    Added,
    Removed,
    Edited,
    #[serde(other)]
    Other,
}

payload! {
    pub struct MemberEvent {
        action: MemberAction,
        member: User,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct PublicEvent {
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneAction {
    Created,
    Opened,
    Closed,
    Edited,
    Deleted,
    #[serde(other)]
    Other,
}

payload! {
    pub struct MilestoneEvent {
        action: MilestoneAction,
        milestone: Milestone,
        repository: Repository,
        sender: User,
    }
}

payload! {
    /// One entry of a `gollum` delivery. `action` is `created` or `edited`.
    pub struct WikiPage {
        page_name: String,
        title: String,
        action: String,
        html_url: String,
    }
}

payload! {
    pub struct GollumEvent {
        pages: List<WikiPage>,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamAction {
    Created,
    Deleted,
    Edited,
    AddedToRepository,
    RemovedFromRepository,
    #[serde(other)]
    Other,
}

payload! {
    pub struct TeamEvent {
        action: TeamAction,
        team: Team,
        repository: Repository,
        organization: Organization,
        sender: User,
    }
}

payload! {
    pub struct PackageVersion {
        version: String,
        html_url: String,
    }
}

payload! {
    pub struct Package {
        name: String,
        package_type: String,
        html_url: String,
        package_version: PackageVersion,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageAction {
    Published,
    Updated,
    #[serde(other)]
    Other,
}

payload! {
    pub struct PackageEvent {
        action: PackageAction,
        package: Package,
        repository: Repository,
        sender: User,
    }
}

payload! {
    /// Webhook installation handshake.
    pub struct PingEvent {
        zen: String,
        hook_id: u64,
        repository: Repository,
        organization: Organization,
        sender: User,
    }
}
