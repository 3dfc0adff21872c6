//! CI and delivery events: Actions workflows, the Checks API, the legacy
//! Status API, Pages builds and deployments.
//!
//! `status`/`conclusion` are kept as strings. They are only ever mapped to
//! an icon, and GitHub extends both vocabularies without notice.

use crate::common::{Repository, User};
use crate::lenient::{List, payload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowJobAction {
    Queued,
    InProgress,
    Completed,
    Waiting,
    #[serde(other)]
    Other,
}

payload! {
    pub struct WorkflowJob {
        name: String,
        workflow_name: String,
        status: String,
        conclusion: String,
        html_url: String,
        head_branch: String,
        run_id: u64,
        started_at: String,
        completed_at: String,
    }
}

payload! {
    pub struct WorkflowJobEvent {
        action: WorkflowJobAction,
        workflow_job: WorkflowJob,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowRunAction {
    Requested,
    InProgress,
    Completed,
    #[serde(other)]
    Other,
}

payload! {
    pub struct WorkflowRun {
        name: String,
        display_title: String,
        status: String,
        conclusion: String,
        html_url: String,
        run_number: u64,
        head_branch: String,
        event: String,
        actor: User,
        triggering_actor: User,
        run_started_at: String,
        created_at: String,
        updated_at: String,
    }
}

payload! {
    pub struct Workflow {
        name: String,
    }
}

payload! {
    pub struct WorkflowRunEvent {
        action: WorkflowRunAction,
        workflow_run: WorkflowRun,
        workflow: Workflow,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct App {
        name: String,
        slug: String,
    }
}

payload! {
    pub struct CheckSuite {
        status: String,
        conclusion: String,
        head_branch: String,
        head_sha: String,
        app: App,
        created_at: String,
        updated_at: String,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckSuiteAction {
    Completed,
    Requested,
    Rerequested,
    #[serde(other)]
    Other,
}

payload! {
    pub struct CheckSuiteEvent {
        action: CheckSuiteAction,
        check_suite: CheckSuite,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct CheckRun {
        name: String,
        status: String,
        conclusion: String,
        html_url: String,
        started_at: String,
        completed_at: String,
        app: App,
        check_suite: CheckSuite,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRunAction {
    Created,
    Completed,
    Rerequested,
    RequestedAction,
    #[serde(other)]
    Other,
}

payload! {
    pub struct CheckRunEvent {
        action: CheckRunAction,
        check_run: CheckRun,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitState {
    Error,
    Failure,
    Pending,
    Success,
    #[serde(other)]
    Other,
}

payload! {
    pub struct Branch {
        name: String,
    }
}

payload! {
    pub struct StatusCommit {
        html_url: String,
    }
}

payload! {
    /// Legacy commit Status API update.
    pub struct StatusEvent {
        sha: String,
        state: CommitState,
        context: String,
        description: String,
        target_url: String,
        branches: List<Branch>,
        commit: StatusCommit,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct PageBuildError {
        message: String,
    }
}

payload! {
    /// `status` is `building`, `built` or `errored`.
    pub struct PageBuild {
        status: String,
        error: PageBuildError,
        duration: u64,
        commit: String,
    }
}

payload! {
    pub struct PageBuildEvent {
        build: PageBuild,
        repository: Repository,
        sender: User,
    }
}

payload! {
    pub struct Deployment {
        environment: String,
        r#ref: String,
        sha: String,
    }
}

payload! {
    pub struct DeploymentStatus {
        state: String,
        environment: String,
        description: String,
        target_url: String,
        environment_url: String,
        log_url: String,
    }
}

payload! {
    pub struct DeploymentStatusEvent {
        deployment_status: DeploymentStatus,
        deployment: Deployment,
        repository: Repository,
        sender: User,
    }
}
