use github_types::ci::{
    CheckRunAction, CheckRunEvent, CheckSuiteAction, CheckSuiteEvent, CommitState,
    DeploymentStatusEvent, PageBuildEvent, StatusEvent, WorkflowJobAction, WorkflowJobEvent,
    WorkflowRunAction, WorkflowRunEvent,
};
use github_types::{Repository, User};

use super::Render;
use super::common::{actor, in_repo, short_sha, status_icon, status_label, took};
use crate::markdown::{bold, code, escape, link, link_or_text};

fn on_branch(branch: Option<&str>) -> String {
    branch.map(|b| format!(" on {}", code(b))).unwrap_or_default()
}

fn details(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => format!("\n{}", link(label, url)),
        _ => String::new(),
    }
}

fn completed(status: Option<&str>) -> bool {
    status == Some("completed")
}

impl Render for WorkflowJobEvent {
    fn render(&self) -> Option<String> {
        if self.action? == WorkflowJobAction::Other {
            return None;
        }
        let job = self.workflow_job.as_ref();
        let status = job.and_then(|j| j.status.as_deref());
        let conclusion = job.and_then(|j| j.conclusion.as_deref());
        let name = bold(job.and_then(|j| j.name.as_deref()).unwrap_or("unknown"));
        let workflow = job
            .and_then(|j| j.workflow_name.as_deref())
            .map(|w| format!(" in workflow {}", escape(w)))
            .unwrap_or_default();
        let duration = if completed(status) {
            took(
                job.and_then(|j| j.started_at.as_deref()),
                job.and_then(|j| j.completed_at.as_deref()),
            )
        } else {
            String::new()
        };

        Some(format!(
            "{} Job {name}{workflow} {}{}{}{duration}{}",
            status_icon(status, conclusion),
            escape(status_label(status, conclusion)),
            on_branch(job.and_then(|j| j.head_branch.as_deref())),
            in_repo(self.repository.as_ref()),
            details("View job", job.and_then(|j| j.html_url.as_deref())),
        ))
    }
}

fn same_login(a: Option<&User>, b: Option<&User>) -> bool {
    a.and_then(|u| u.login.as_deref()) == b.and_then(|u| u.login.as_deref())
}

impl Render for WorkflowRunEvent {
    fn render(&self) -> Option<String> {
        if self.action? == WorkflowRunAction::Other {
            return None;
        }
        let run = self.workflow_run.as_ref();
        let status = run.and_then(|r| r.status.as_deref());
        let conclusion = run.and_then(|r| r.conclusion.as_deref());
        let name = run
            .and_then(|r| r.name.as_deref())
            .or(self.workflow.as_ref().and_then(|w| w.name.as_deref()))
            .unwrap_or("unknown");
        let number = run
            .and_then(|r| r.run_number)
            .map(|n| format!(" \\#{n}"))
            .unwrap_or_default();
        let duration = if completed(status) {
            took(
                run.and_then(|r| r.run_started_at.as_deref().or(r.created_at.as_deref())),
                run.and_then(|r| r.updated_at.as_deref()),
            )
        } else {
            String::new()
        };

        let requester = run.and_then(|r| r.actor.as_ref()).or(self.sender.as_ref());
        let trigger = run.and_then(|r| r.triggering_actor.as_ref());
        let mut by = format!("\nby {}", actor(requester));
        if trigger.is_some() && !same_login(requester, trigger) {
            by.push_str(&format!(" \\(triggered by {}\\)", actor(trigger)));
        }
        if let Some(event) = run.and_then(|r| r.event.as_deref()) {
            by.push_str(&format!(" via {}", code(event)));
        }

        Some(format!(
            "{} Workflow {}{number} {}{}{}{duration}{by}{}",
            status_icon(status, conclusion),
            bold(name),
            escape(status_label(status, conclusion)),
            on_branch(run.and_then(|r| r.head_branch.as_deref())),
            in_repo(self.repository.as_ref()),
            details("View run", run.and_then(|r| r.html_url.as_deref())),
        ))
    }
}

impl Render for CheckSuiteEvent {
    fn render(&self) -> Option<String> {
        if self.action? == CheckSuiteAction::Other {
            return None;
        }
        let suite = self.check_suite.as_ref();
        let status = suite.and_then(|s| s.status.as_deref());
        let conclusion = suite.and_then(|s| s.conclusion.as_deref());
        let app = suite
            .and_then(|s| s.app.as_ref())
            .and_then(|a| a.name.as_deref().or(a.slug.as_deref()))
            .map(|name| format!(" from {}", bold(name)))
            .unwrap_or_default();
        let commit = suite
            .and_then(|s| s.head_sha.as_deref())
            .map(|sha| format!(" for {}", code(short_sha(sha))))
            .unwrap_or_default();
        let duration = if completed(status) {
            took(
                suite.and_then(|s| s.created_at.as_deref()),
                suite.and_then(|s| s.updated_at.as_deref()),
            )
        } else {
            String::new()
        };

        Some(format!(
            "{} Check suite{app} {}{commit}{}{}{duration}",
            status_icon(status, conclusion),
            escape(status_label(status, conclusion)),
            on_branch(suite.and_then(|s| s.head_branch.as_deref())),
            in_repo(self.repository.as_ref()),
        ))
    }
}

impl Render for CheckRunEvent {
    fn render(&self) -> Option<String> {
        if self.action? == CheckRunAction::Other {
            return None;
        }
        let run = self.check_run.as_ref();
        let status = run.and_then(|r| r.status.as_deref());
        let conclusion = run.and_then(|r| r.conclusion.as_deref());
        let name = bold(run.and_then(|r| r.name.as_deref()).unwrap_or("unknown"));
        let branch = run
            .and_then(|r| r.check_suite.as_ref())
            .and_then(|s| s.head_branch.as_deref());
        let duration = if completed(status) {
            took(
                run.and_then(|r| r.started_at.as_deref()),
                run.and_then(|r| r.completed_at.as_deref()),
            )
        } else {
            String::new()
        };

        Some(format!(
            "{} Check {name} {}{}{}{duration}{}",
            status_icon(status, conclusion),
            escape(status_label(status, conclusion)),
            on_branch(branch),
            in_repo(self.repository.as_ref()),
            details("View check", run.and_then(|r| r.html_url.as_deref())),
        ))
    }
}

impl Render for StatusEvent {
    fn render(&self) -> Option<String> {
        let (icon, state) = match self.state? {
            CommitState::Success => ("✅", "succeeded"),
            CommitState::Failure => ("❌", "failed"),
            CommitState::Error => ("⚠️", "errored"),
            CommitState::Pending => ("⏳", "is pending"),
            CommitState::Other => return None,
        };
        let context = bold(self.context.as_deref().unwrap_or("default"));
        let sha = self.sha.as_deref().map(short_sha).unwrap_or("unknown");
        let commit = link_or_text(
            sha,
            self.commit.as_ref().and_then(|c| c.html_url.as_deref()),
        );
        let branch = self
            .branches
            .as_deref()
            .and_then(|b| b.first())
            .and_then(|b| b.name.as_deref());
        let description = self
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| format!("\n{}", escape(d)))
            .unwrap_or_default();

        Some(format!(
            "{icon} {context} {state} for {commit}{}{}{description}{}",
            on_branch(branch),
            in_repo(self.repository.as_ref()),
            details("Details", self.target_url.as_deref()),
        ))
    }
}

/// Best-effort GitHub Pages address: `<owner>.github.io` serves the user
/// site at the root, every other repository under `/<name>/`.
fn pages_url(repo: Option<&Repository>) -> Option<String> {
    let repo = repo?;
    let owner = repo
        .owner
        .as_ref()
        .and_then(|o| o.login.as_deref())
        .or_else(|| repo.full_name.as_deref()?.split_once('/').map(|(owner, _)| owner))?
        .to_lowercase();
    let name = repo
        .name
        .as_deref()
        .or_else(|| repo.full_name.as_deref()?.split_once('/').map(|(_, name)| name))?;

    let host = format!("{owner}.github.io");
    if name.eq_ignore_ascii_case(&host) {
        Some(format!("https://{host}/"))
    } else {
        Some(format!("https://{host}/{name}/"))
    }
}

impl Render for PageBuildEvent {
    fn render(&self) -> Option<String> {
        let build = self.build.as_ref();
        let repo = in_repo(self.repository.as_ref());

        let message = match build.and_then(|b| b.status.as_deref()) {
            Some("building") => format!("🔨 GitHub Pages build started{repo}"),
            Some("built") => {
                let site = pages_url(self.repository.as_ref())
                    .map(|url| format!("\n{}", link(&url, &url)))
                    .unwrap_or_default();
                format!("✅ GitHub Pages site deployed{repo}{site}")
            }
            Some("errored") => {
                let error = build
                    .and_then(|b| b.error.as_ref())
                    .and_then(|e| e.message.as_deref())
                    .map(|m| format!("\n{}", escape(m)))
                    .unwrap_or_default();
                format!("❌ GitHub Pages build failed{repo}{error}")
            }
            _ => return None,
        };
        Some(message)
    }
}

impl Render for DeploymentStatusEvent {
    fn render(&self) -> Option<String> {
        let status = self.deployment_status.as_ref()?;
        let deployment = self.deployment.as_ref();
        let state = status.state.as_deref().unwrap_or("unknown");
        let icon = match state {
            "success" => "✅",
            "failure" | "error" => "❌",
            "pending" | "queued" => "⏳",
            "in_progress" => "🔄",
            "inactive" => "⚪",
            _ => "ℹ️",
        };
        let environment = status
            .environment
            .as_deref()
            .or(deployment.and_then(|d| d.environment.as_deref()))
            .unwrap_or("unknown");
        let git_ref = deployment
            .and_then(|d| d.r#ref.as_deref())
            .map(|r| format!(" of {}", code(r)))
            .unwrap_or_default();
        let url = status
            .environment_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(status.target_url.as_deref())
            .or(status.log_url.as_deref());

        Some(format!(
            "{icon} Deployment{git_ref} to {} {}{}{}",
            bold(environment),
            escape(state),
            in_repo(self.repository.as_ref()),
            details("Open", url),
        ))
    }
}
