use github_types::security::{
    CodeScanningAlertAction, CodeScanningAlertEvent, DependabotAlertAction, DependabotAlertEvent,
};

use super::Render;
use super::common::{actor, in_repo, numbered};
use crate::markdown::{bold, code, escape};

fn severity_icon(severity: &str) -> &'static str {
    match severity.to_ascii_lowercase().as_str() {
        "critical" => "🟥",
        "high" => "🟧",
        "medium" | "moderate" => "🟨",
        "low" | "note" | "warning" => "🟦",
        _ => "⬜",
    }
}

/// `" 🟧 *high*"`, or nothing when the severity is unknown.
fn severity(level: Option<&str>) -> String {
    level
        .map(|s| format!(" {} {}", severity_icon(s), bold(s)))
        .unwrap_or_default()
}

impl Render for DependabotAlertEvent {
    fn render(&self) -> Option<String> {
        let alert = self.alert.as_ref();
        let (icon, verb) = match self.action? {
            DependabotAlertAction::Created => ("🚨", "opened"),
            DependabotAlertAction::Reintroduced => ("🚨", "reintroduced"),
            DependabotAlertAction::Reopened => ("🔁", "reopened"),
            DependabotAlertAction::AutoReopened => ("🔁", "automatically reopened"),
            DependabotAlertAction::Fixed => ("✅", "fixed"),
            DependabotAlertAction::Dismissed => ("🙈", "dismissed"),
            DependabotAlertAction::AutoDismissed => ("🙈", "automatically dismissed"),
            DependabotAlertAction::Other => return None,
        };

        let subject = numbered(
            alert.and_then(|a| a.number),
            None,
            alert.and_then(|a| a.html_url.as_deref()),
        );
        let level = alert.and_then(|a| {
            a.security_advisory
                .as_ref()
                .and_then(|s| s.severity.as_deref())
                .or(a.security_vulnerability.as_ref().and_then(|v| v.severity.as_deref()))
        });
        let package = alert
            .and_then(|a| {
                a.dependency
                    .as_ref()
                    .and_then(|d| d.package.as_ref())
                    .or(a.security_vulnerability.as_ref().and_then(|v| v.package.as_ref()))
            })
            .and_then(|p| p.name.as_deref())
            .map(|name| format!(" in {}", code(name)))
            .unwrap_or_default();
        let summary = alert
            .and_then(|a| a.security_advisory.as_ref())
            .and_then(|s| s.summary.as_deref())
            .map(|s| format!("\n{}", escape(s)))
            .unwrap_or_default();

        Some(format!(
            "{icon} Dependabot alert {subject}{} {verb}{package}{}{summary}",
            severity(level),
            in_repo(self.repository.as_ref())
        ))
    }
}

impl Render for CodeScanningAlertEvent {
    fn render(&self) -> Option<String> {
        let alert = self.alert.as_ref();
        let rule = alert.and_then(|a| a.rule.as_ref());
        let level = rule.and_then(|r| {
            r.security_severity_level
                .as_deref()
                .or(r.severity.as_deref())
        });
        let subject = format!(
            "Code scanning alert {}{}",
            numbered(
                alert.and_then(|a| a.number),
                None,
                alert.and_then(|a| a.html_url.as_deref()),
            ),
            severity(level)
        );
        let who = actor(self.sender.as_ref());

        let headline = match self.action? {
            CodeScanningAlertAction::Created => format!("🚨 {subject} created"),
            CodeScanningAlertAction::AppearedInBranch => {
                let branch = self
                    .r#ref
                    .as_deref()
                    .map(|r| format!(" on {}", code(r.strip_prefix("refs/heads/").unwrap_or(r))))
                    .unwrap_or_default();
                format!("🚨 {subject} appeared{branch}")
            }
            CodeScanningAlertAction::Fixed => format!("✅ {subject} fixed"),
            CodeScanningAlertAction::ClosedByUser => format!("🙈 {subject} closed by {who}"),
            CodeScanningAlertAction::ReopenedByUser => format!("🔁 {subject} reopened by {who}"),
            CodeScanningAlertAction::Reopened => format!("🔁 {subject} reopened"),
            CodeScanningAlertAction::Other => return None,
        };

        let description = rule
            .and_then(|r| r.description.as_deref().or(r.id.as_deref()))
            .map(|d| format!("\n{}", escape(d)))
            .unwrap_or_default();
        let tool = alert
            .and_then(|a| a.tool.as_ref())
            .and_then(|t| t.name.as_deref())
            .map(|name| format!(" \\({}\\)", escape(name)))
            .unwrap_or_default();

        Some(format!(
            "{headline}{}{description}{tool}",
            in_repo(self.repository.as_ref())
        ))
    }
}
