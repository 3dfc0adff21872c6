//! Dependabot and code scanning alerts.

use crate::common::{Repository, User};
use crate::lenient::payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependabotAlertAction {
    Created,
    Fixed,
    Dismissed,
    Reopened,
    AutoDismissed,
    AutoReopened,
    Reintroduced,
    #[serde(other)]
    Other,
}

payload! {
    pub struct AdvisoryPackage {
        name: String,
        ecosystem: String,
    }
}

payload! {
    pub struct SecurityAdvisory {
        ghsa_id: String,
        cve_id: String,
        summary: String,
        severity: String,
    }
}

payload! {
    pub struct SecurityVulnerability {
        severity: String,
        package: AdvisoryPackage,
    }
}

payload! {
    pub struct Dependency {
        package: AdvisoryPackage,
        manifest_path: String,
    }
}

payload! {
    pub struct DependabotAlert {
        number: u64,
        html_url: String,
        state: String,
        dependency: Dependency,
        security_advisory: SecurityAdvisory,
        security_vulnerability: SecurityVulnerability,
    }
}

payload! {
    pub struct DependabotAlertEvent {
        action: DependabotAlertAction,
        alert: DependabotAlert,
        repository: Repository,
        sender: User,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeScanningAlertAction {
    Created,
    Fixed,
    ClosedByUser,
    ReopenedByUser,
    AppearedInBranch,
    Reopened,
    #[serde(other)]
    Other,
}

payload! {
    pub struct ScanningRule {
        id: String,
        description: String,
        severity: String,
        security_severity_level: String,
    }
}

payload! {
    pub struct ScanningTool {
        name: String,
    }
}

payload! {
    pub struct CodeScanningAlert {
        number: u64,
        html_url: String,
        state: String,
        rule: ScanningRule,
        tool: ScanningTool,
    }
}

payload! {
    pub struct CodeScanningAlertEvent {
        action: CodeScanningAlertAction,
        alert: CodeScanningAlert,
        r#ref: String,
        repository: Repository,
        sender: User,
    }
}
