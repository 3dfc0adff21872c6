//! The closed set of event kinds and their dispatch from the
//! `X-GitHub-Event` tag.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::ci::{
    CheckRunEvent, CheckSuiteEvent, DeploymentStatusEvent, PageBuildEvent, StatusEvent,
    WorkflowJobEvent, WorkflowRunEvent,
};
use crate::common::{Repository, User};
use crate::discussion::{DiscussionCommentEvent, DiscussionEvent};
use crate::issues::{CommitCommentEvent, IssueCommentEvent, IssuesEvent};
use crate::pull_request::{
    PullRequestEvent, PullRequestReviewCommentEvent, PullRequestReviewEvent,
    PullRequestReviewThreadEvent,
};
use crate::push::{CreateEvent, DeleteEvent, PushEvent};
use crate::repository::{
    BranchProtectionRuleEvent, ForkEvent, GollumEvent, LabelEvent, MemberEvent, MilestoneEvent,
    PackageEvent, PingEvent, PublicEvent, ReleaseEvent, RepositoryEvent, StarEvent, TeamEvent,
    WatchEvent,
};
use crate::security::{CodeScanningAlertEvent, DependabotAlertEvent};

/// A decoded webhook delivery, one variant per supported event kind.
#[derive(Debug, Clone, PartialEq)]
pub enum GithubEvent {
    Ping(PingEvent),
    Push(PushEvent),
    Create(CreateEvent),
    Delete(DeleteEvent),
    PullRequest(PullRequestEvent),
    PullRequestReview(PullRequestReviewEvent),
    PullRequestReviewComment(PullRequestReviewCommentEvent),
    PullRequestReviewThread(PullRequestReviewThreadEvent),
    Issues(IssuesEvent),
    IssueComment(IssueCommentEvent),
    CommitComment(CommitCommentEvent),
    Discussion(DiscussionEvent),
    DiscussionComment(DiscussionCommentEvent),
    Label(LabelEvent),
    Release(ReleaseEvent),
    Repository(RepositoryEvent),
    BranchProtectionRule(BranchProtectionRuleEvent),
    WorkflowJob(WorkflowJobEvent),
    WorkflowRun(WorkflowRunEvent),
    CheckSuite(CheckSuiteEvent),
    CheckRun(CheckRunEvent),
    Status(StatusEvent),
    PageBuild(PageBuildEvent),
    DeploymentStatus(DeploymentStatusEvent),
    DependabotAlert(DependabotAlertEvent),
    CodeScanningAlert(CodeScanningAlertEvent),
    Fork(ForkEvent),
    Star(StarEvent),
    Watch(WatchEvent),
    Member(MemberEvent),
    Public(PublicEvent),
    Milestone(MilestoneEvent),
    Package(PackageEvent),
    Gollum(GollumEvent),
    Team(TeamEvent),
}

impl GithubEvent {
    /// Decodes `payload` according to the `X-GitHub-Event` tag.
    ///
    /// * `Ok(Some(event))` - a supported event kind
    /// * `Ok(None)` - an event kind this crate does not model (not an error)
    /// * `Err(e)` - a supported event kind whose payload is not a JSON object
    ///
    /// Field-level problems never surface here: they decode to `None`.
    pub fn parse(event_type: &str, payload: Value) -> Result<Option<Self>, serde_json::Error> {
        let event = match event_type {
            "ping" => Self::Ping(decode(event_type, payload)?),
            "push" => Self::Push(decode(event_type, payload)?),
            "create" => Self::Create(decode(event_type, payload)?),
            "delete" => Self::Delete(decode(event_type, payload)?),
            "pull_request" => Self::PullRequest(decode(event_type, payload)?),
            "pull_request_review" => Self::PullRequestReview(decode(event_type, payload)?),
            "pull_request_review_comment" => {
                Self::PullRequestReviewComment(decode(event_type, payload)?)
            }
            "pull_request_review_thread" => {
                Self::PullRequestReviewThread(decode(event_type, payload)?)
            }
            "issues" => Self::Issues(decode(event_type, payload)?),
            "issue_comment" => Self::IssueComment(decode(event_type, payload)?),
            "commit_comment" => Self::CommitComment(decode(event_type, payload)?),
            "discussion" => Self::Discussion(decode(event_type, payload)?),
            "discussion_comment" => Self::DiscussionComment(decode(event_type, payload)?),
            "label" => Self::Label(decode(event_type, payload)?),
            "release" => Self::Release(decode(event_type, payload)?),
            "repository" => Self::Repository(decode(event_type, payload)?),
            "branch_protection_rule" => {
                Self::BranchProtectionRule(decode(event_type, payload)?)
            }
            "workflow_job" => Self::WorkflowJob(decode(event_type, payload)?),
            "workflow_run" => Self::WorkflowRun(decode(event_type, payload)?),
            "check_suite" => Self::CheckSuite(decode(event_type, payload)?),
            "check_run" => Self::CheckRun(decode(event_type, payload)?),
            "status" => Self::Status(decode(event_type, payload)?),
            "page_build" => Self::PageBuild(decode(event_type, payload)?),
            "deployment_status" => Self::DeploymentStatus(decode(event_type, payload)?),
            "dependabot_alert" => Self::DependabotAlert(decode(event_type, payload)?),
            "code_scanning_alert" => Self::CodeScanningAlert(decode(event_type, payload)?),
            "fork" => Self::Fork(decode(event_type, payload)?),
            "star" => Self::Star(decode(event_type, payload)?),
            "watch" => Self::Watch(decode(event_type, payload)?),
            "member" => Self::Member(decode(event_type, payload)?),
            "public" => Self::Public(decode(event_type, payload)?),
            "milestone" => Self::Milestone(decode(event_type, payload)?),
            "package" => Self::Package(decode(event_type, payload)?),
            "gollum" => Self::Gollum(decode(event_type, payload)?),
            "team" => Self::Team(decode(event_type, payload)?),
            _ => return Ok(None),
        };

        Ok(Some(event))
    }

    /// The `X-GitHub-Event` tag this variant was decoded from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ping(_) => "ping",
            Self::Push(_) => "push",
            Self::Create(_) => "create",
            Self::Delete(_) => "delete",
            Self::PullRequest(_) => "pull_request",
            Self::PullRequestReview(_) => "pull_request_review",
            Self::PullRequestReviewComment(_) => "pull_request_review_comment",
            Self::PullRequestReviewThread(_) => "pull_request_review_thread",
            Self::Issues(_) => "issues",
            Self::IssueComment(_) => "issue_comment",
            Self::CommitComment(_) => "commit_comment",
            Self::Discussion(_) => "discussion",
            Self::DiscussionComment(_) => "discussion_comment",
            Self::Label(_) => "label",
            Self::Release(_) => "release",
            Self::Repository(_) => "repository",
            Self::BranchProtectionRule(_) => "branch_protection_rule",
            Self::WorkflowJob(_) => "workflow_job",
            Self::WorkflowRun(_) => "workflow_run",
            Self::CheckSuite(_) => "check_suite",
            Self::CheckRun(_) => "check_run",
            Self::Status(_) => "status",
            Self::PageBuild(_) => "page_build",
            Self::DeploymentStatus(_) => "deployment_status",
            Self::DependabotAlert(_) => "dependabot_alert",
            Self::CodeScanningAlert(_) => "code_scanning_alert",
            Self::Fork(_) => "fork",
            Self::Star(_) => "star",
            Self::Watch(_) => "watch",
            Self::Member(_) => "member",
            Self::Public(_) => "public",
            Self::Milestone(_) => "milestone",
            Self::Package(_) => "package",
            Self::Gollum(_) => "gollum",
            Self::Team(_) => "team",
        }
    }

    /// Repository the delivery belongs to, if any.
    pub fn repository(&self) -> Option<&Repository> {
        match self {
            Self::Ping(e) => e.repository.as_ref(),
            Self::Push(e) => e.repository.as_ref(),
            Self::Create(e) => e.repository.as_ref(),
            Self::Delete(e) => e.repository.as_ref(),
            Self::PullRequest(e) => e.repository.as_ref(),
            Self::PullRequestReview(e) => e.repository.as_ref(),
            Self::PullRequestReviewComment(e) => e.repository.as_ref(),
            Self::PullRequestReviewThread(e) => e.repository.as_ref(),
            Self::Issues(e) => e.repository.as_ref(),
            Self::IssueComment(e) => e.repository.as_ref(),
            Self::CommitComment(e) => e.repository.as_ref(),
            Self::Discussion(e) => e.repository.as_ref(),
            Self::DiscussionComment(e) => e.repository.as_ref(),
            Self::Label(e) => e.repository.as_ref(),
            Self::Release(e) => e.repository.as_ref(),
            Self::Repository(e) => e.repository.as_ref(),
            Self::BranchProtectionRule(e) => e.repository.as_ref(),
            Self::WorkflowJob(e) => e.repository.as_ref(),
            Self::WorkflowRun(e) => e.repository.as_ref(),
            Self::CheckSuite(e) => e.repository.as_ref(),
            Self::CheckRun(e) => e.repository.as_ref(),
            Self::Status(e) => e.repository.as_ref(),
            Self::PageBuild(e) => e.repository.as_ref(),
            Self::DeploymentStatus(e) => e.repository.as_ref(),
            Self::DependabotAlert(e) => e.repository.as_ref(),
            Self::CodeScanningAlert(e) => e.repository.as_ref(),
            Self::Fork(e) => e.repository.as_ref(),
            Self::Star(e) => e.repository.as_ref(),
            Self::Watch(e) => e.repository.as_ref(),
            Self::Member(e) => e.repository.as_ref(),
            Self::Public(e) => e.repository.as_ref(),
            Self::Milestone(e) => e.repository.as_ref(),
            Self::Package(e) => e.repository.as_ref(),
            Self::Gollum(e) => e.repository.as_ref(),
            Self::Team(e) => e.repository.as_ref(),
        }
    }

    /// Account that triggered the delivery, if any.
    pub fn sender(&self) -> Option<&User> {
        match self {
            Self::Ping(e) => e.sender.as_ref(),
            Self::Push(e) => e.sender.as_ref(),
            Self::Create(e) => e.sender.as_ref(),
            Self::Delete(e) => e.sender.as_ref(),
            Self::PullRequest(e) => e.sender.as_ref(),
            Self::PullRequestReview(e) => e.sender.as_ref(),
            Self::PullRequestReviewComment(e) => e.sender.as_ref(),
            Self::PullRequestReviewThread(e) => e.sender.as_ref(),
            Self::Issues(e) => e.sender.as_ref(),
            Self::IssueComment(e) => e.sender.as_ref(),
            Self::CommitComment(e) => e.sender.as_ref(),
            Self::Discussion(e) => e.sender.as_ref(),
            Self::DiscussionComment(e) => e.sender.as_ref(),
            Self::Label(e) => e.sender.as_ref(),
            Self::Release(e) => e.sender.as_ref(),
            Self::Repository(e) => e.sender.as_ref(),
            Self::BranchProtectionRule(e) => e.sender.as_ref(),
            Self::WorkflowJob(e) => e.sender.as_ref(),
            Self::WorkflowRun(e) => e.sender.as_ref(),
            Self::CheckSuite(e) => e.sender.as_ref(),
            Self::CheckRun(e) => e.sender.as_ref(),
            Self::Status(e) => e.sender.as_ref(),
            Self::PageBuild(e) => e.sender.as_ref(),
            Self::DeploymentStatus(e) => e.sender.as_ref(),
            Self::DependabotAlert(e) => e.sender.as_ref(),
            Self::CodeScanningAlert(e) => e.sender.as_ref(),
            Self::Fork(e) => e.sender.as_ref(),
            Self::Star(e) => e.sender.as_ref(),
            Self::Watch(e) => e.sender.as_ref(),
            Self::Member(e) => e.sender.as_ref(),
            Self::Public(e) => e.sender.as_ref(),
            Self::Milestone(e) => e.sender.as_ref(),
            Self::Package(e) => e.sender.as_ref(),
            Self::Gollum(e) => e.sender.as_ref(),
            Self::Team(e) => e.sender.as_ref(),
        }
    }
}

fn decode<T: DeserializeOwned>(event_type: &str, payload: Value) -> Result<T, serde_json::Error> {
    if !payload.is_object() {
        return Err(serde_json::Error::custom(format!(
            "{event_type} payload must be a JSON object"
        )));
    }
    serde_json::from_value(payload)
}
