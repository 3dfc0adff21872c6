use github_types::Organization;
use github_types::repository::{
    BranchProtectionRuleAction, BranchProtectionRuleEvent, ForkEvent, GollumEvent, LabelAction,
    LabelEvent, MemberAction, MemberEvent, MilestoneAction, MilestoneEvent, PackageAction,
    PackageEvent, PingEvent, PublicEvent, ReleaseAction, ReleaseEvent, RepositoryAction,
    RepositoryEvent, StarAction, StarEvent, TeamAction, TeamEvent, WatchAction, WatchEvent,
};

use super::Render;
use super::common::{RELEASE_PREVIEW_CHARS, actor, body_preview, in_repo, numbered, repo_link};
use crate::markdown::{bold, code, escape, link_or_text};

impl Render for LabelEvent {
    fn render(&self) -> Option<String> {
        let who = actor(self.sender.as_ref());
        let name = bold(self.label.as_ref().and_then(|l| l.name.as_deref()).unwrap_or("unknown"));
        let repo = in_repo(self.repository.as_ref());

        let message = match self.action? {
            LabelAction::Created => format!("🏷️ {who} created label {name}{repo}"),
            LabelAction::Edited => {
                let previous = self
                    .changes
                    .as_ref()
                    .and_then(|c| c.name.as_ref())
                    .and_then(|n| n.from.as_deref());
                match previous {
                    Some(from) => {
                        format!("🏷️ {who} renamed label {} to {name}{repo}", bold(from))
                    }
                    None => format!("🏷️ {who} edited label {name}{repo}"),
                }
            }
            LabelAction::Deleted => format!("🏷️ {who} deleted label {name}{repo}"),
            LabelAction::Other => return None,
        };
        Some(message)
    }
}

impl Render for ReleaseEvent {
    fn render(&self) -> Option<String> {
        let release = self.release.as_ref();
        let who = actor(self.sender.as_ref().or(release.and_then(|r| r.author.as_ref())));
        let tag = release.and_then(|r| r.tag_name.as_deref());
        let title = release
            .and_then(|r| r.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .or(tag)
            .unwrap_or("unknown");
        let subject = link_or_text(title, release.and_then(|r| r.html_url.as_deref()));
        let repo = in_repo(self.repository.as_ref());
        let notes = || {
            body_preview(
                release.and_then(|r| r.body.as_deref()),
                RELEASE_PREVIEW_CHARS,
            )
        };

        let message = match self.action? {
            ReleaseAction::Published | ReleaseAction::Released => {
                format!("🚀 {who} released {subject}{repo}{}", notes())
            }
            ReleaseAction::Prereleased => {
                format!("🧪 {who} published pre\\-release {subject}{repo}{}", notes())
            }
            ReleaseAction::Created if release.and_then(|r| r.draft) == Some(true) => {
                format!("📝 {who} drafted release {subject}{repo}")
            }
            ReleaseAction::Created => format!("📦 {who} created release {subject}{repo}"),
            ReleaseAction::Edited => format!("✏️ {who} edited release {subject}{repo}"),
            ReleaseAction::Unpublished => format!("📤 {who} unpublished release {subject}{repo}"),
            ReleaseAction::Deleted => format!("🗑️ {who} deleted release {subject}{repo}"),
            ReleaseAction::Other => return None,
        };
        Some(message)
    }
}

fn organization_name(org: Option<&Organization>) -> Option<&str> {
    org.and_then(|o| o.login.as_deref())
}

impl Render for RepositoryEvent {
    fn render(&self) -> Option<String> {
        let who = actor(self.sender.as_ref());
        let repo = repo_link(self.repository.as_ref()).unwrap_or_else(|| escape("unknown"));
        let changes = self.changes.as_ref();

        let message = match self.action? {
            RepositoryAction::Created => format!("🆕 {who} created repository {repo}"),
            RepositoryAction::Deleted => format!("🗑️ {who} deleted repository {repo}"),
            RepositoryAction::Archived => format!("🗄️ {who} archived repository {repo}"),
            RepositoryAction::Unarchived => format!("📂 {who} unarchived repository {repo}"),
            RepositoryAction::Publicized => format!("🌍 {who} made repository {repo} public"),
            RepositoryAction::Privatized => format!("🔒 {who} made repository {repo} private"),
            RepositoryAction::Edited => format!("✏️ {who} edited repository {repo}"),
            RepositoryAction::Renamed => {
                let from = changes
                    .and_then(|c| c.repository.as_ref())
                    .and_then(|r| r.name.as_ref())
                    .and_then(|n| n.from.as_deref());
                match from {
                    Some(from) => format!("📝 {who} renamed repository {} to {repo}", code(from)),
                    None => format!("📝 {who} renamed repository {repo}"),
                }
            }
            RepositoryAction::Transferred => {
                let from = changes
                    .and_then(|c| c.owner.as_ref())
                    .and_then(|o| o.from.as_ref())
                    .and_then(|f| {
                        f.user
                            .as_ref()
                            .and_then(|u| u.login.as_deref())
                            .or(organization_name(f.organization.as_ref()))
                    });
                match from {
                    Some(from) => {
                        format!("🚚 {who} transferred repository {repo} from {}", escape(from))
                    }
                    None => format!("🚚 {who} transferred repository {repo}"),
                }
            }
            RepositoryAction::Other => return None,
        };
        Some(message)
    }
}

impl Render for BranchProtectionRuleEvent {
    fn render(&self) -> Option<String> {
        let verb = match self.action? {
            BranchProtectionRuleAction::Created => "created",
            BranchProtectionRuleAction::Edited => "edited",
            BranchProtectionRuleAction::Deleted => "deleted",
            BranchProtectionRuleAction::Other => return None,
        };
        let pattern = self.rule.as_ref().and_then(|r| r.name.as_deref()).unwrap_or("unknown");
        Some(format!(
            "🛡️ {} {verb} branch protection rule {}{}",
            actor(self.sender.as_ref()),
            code(pattern),
            in_repo(self.repository.as_ref())
        ))
    }
}

impl Render for ForkEvent {
    fn render(&self) -> Option<String> {
        let fork = repo_link(self.forkee.as_ref()).unwrap_or_else(|| escape("a new repository"));
        let source = repo_link(self.repository.as_ref()).unwrap_or_else(|| escape("unknown"));
        let count = self
            .repository
            .as_ref()
            .and_then(|r| r.forks_count)
            .map(|n| format!(" {}", escape(&format!("({n} forks)"))))
            .unwrap_or_default();
        Some(format!(
            "🍴 {} forked {source} to {fork}{count}",
            actor(self.sender.as_ref())
        ))
    }
}

impl Render for StarEvent {
    fn render(&self) -> Option<String> {
        let who = actor(self.sender.as_ref());
        let repo = repo_link(self.repository.as_ref()).unwrap_or_else(|| escape("unknown"));
        let count = self
            .repository
            .as_ref()
            .and_then(|r| r.stargazers_count)
            .map(|n| format!(" {}", escape(&format!("({n} ⭐)"))))
            .unwrap_or_default();

        match self.action? {
            StarAction::Created => Some(format!("⭐ {who} starred {repo}{count}")),
            StarAction::Deleted => Some(format!("💔 {who} unstarred {repo}{count}")),
            StarAction::Other => None,
        }
    }
}

impl Render for WatchEvent {
    fn render(&self) -> Option<String> {
        match self.action? {
            WatchAction::Started => Some(format!(
                "👀 {} started watching {}",
                actor(self.sender.as_ref()),
                repo_link(self.repository.as_ref()).unwrap_or_else(|| escape("unknown"))
            )),
            WatchAction::Other => None,
        }
    }
}

impl Render for MemberEvent {
    fn render(&self) -> Option<String> {
        let who = actor(self.sender.as_ref());
        let member = actor(self.member.as_ref());
        let repo = in_repo(self.repository.as_ref());
        let message = match self.action? {
            MemberAction::Added => format!("👥 {who} added {member} as a collaborator{repo}"),
            MemberAction::Removed => format!("👥 {who} removed collaborator {member}{repo}"),
            MemberAction::Edited => {
                format!("👥 {who} changed the permissions of {member}{repo}")
            }
            MemberAction::Other => return None,
        };
        Some(message)
    }
}

impl Render for PublicEvent {
    fn render(&self) -> Option<String> {
        Some(format!(
            "🌍 {} made {} public",
            actor(self.sender.as_ref()),
            repo_link(self.repository.as_ref()).unwrap_or_else(|| escape("a repository"))
        ))
    }
}

impl Render for MilestoneEvent {
    fn render(&self) -> Option<String> {
        let milestone = self.milestone.as_ref();
        let verb = match self.action? {
            MilestoneAction::Created => "created",
            MilestoneAction::Opened => "opened",
            MilestoneAction::Closed => "closed",
            MilestoneAction::Edited => "edited",
            MilestoneAction::Deleted => "deleted",
            MilestoneAction::Other => return None,
        };
        let subject = numbered(
            None,
            milestone.and_then(|m| m.title.as_deref()),
            milestone.and_then(|m| m.html_url.as_deref()),
        );
        Some(format!(
            "🎯 {} {verb} milestone {subject}{}",
            actor(self.sender.as_ref()),
            in_repo(self.repository.as_ref())
        ))
    }
}

impl Render for GollumEvent {
    fn render(&self) -> Option<String> {
        let pages = self.pages.as_deref().unwrap_or_default();
        let first = pages.first()?;
        let verb = match first.action.as_deref() {
            Some("created") => "created",
            _ => "edited",
        };
        let title = first
            .title
            .as_deref()
            .or(first.page_name.as_deref())
            .unwrap_or("unknown");
        let more = match pages.len() - 1 {
            0 => String::new(),
            1 => " and 1 more page".to_string(),
            n => format!(" and {n} more pages"),
        };

        Some(format!(
            "📖 {} {verb} wiki page {}{more}{}",
            actor(self.sender.as_ref()),
            link_or_text(title, first.html_url.as_deref()),
            in_repo(self.repository.as_ref())
        ))
    }
}

impl Render for TeamEvent {
    fn render(&self) -> Option<String> {
        let team = self.team.as_ref();
        let name = bold(
            team.and_then(|t| t.name.as_deref().or(t.slug.as_deref()))
                .unwrap_or("unknown"),
        );
        let org = organization_name(self.organization.as_ref())
            .map(|login| format!(" in {}", escape(login)))
            .unwrap_or_default();
        let repo = repo_link(self.repository.as_ref()).unwrap_or_else(|| escape("a repository"));

        let message = match self.action? {
            TeamAction::Created => format!("👥 Team {name} was created{org}"),
            TeamAction::Deleted => format!("👥 Team {name} was deleted{org}"),
            TeamAction::Edited => format!("👥 Team {name} was edited{org}"),
            TeamAction::AddedToRepository => format!("👥 Team {name} was given access to {repo}"),
            TeamAction::RemovedFromRepository => {
                format!("👥 Team {name} lost access to {repo}")
            }
            TeamAction::Other => return None,
        };

        // Usually org admin housekeeping: mention who did it, without a link.
        let by = self
            .sender
            .as_ref()
            .and_then(|s| s.login.as_deref())
            .map(|login| format!(" by {}", escape(login)))
            .unwrap_or_default();
        Some(format!("{message}{by}"))
    }
}

impl Render for PackageEvent {
    fn render(&self) -> Option<String> {
        let package = self.package.as_ref();
        let verb = match self.action? {
            PackageAction::Published => "published",
            PackageAction::Updated => "updated",
            PackageAction::Other => return None,
        };
        let name = link_or_text(
            package.and_then(|p| p.name.as_deref()).unwrap_or("unknown"),
            package.and_then(|p| p.html_url.as_deref()),
        );
        let version = package
            .and_then(|p| p.package_version.as_ref())
            .and_then(|v| v.version.as_deref())
            .map(|v| format!(" {}", code(v)))
            .unwrap_or_default();
        let kind = package
            .and_then(|p| p.package_type.as_deref())
            .map(|t| format!(" {}", escape(&format!("({t})"))))
            .unwrap_or_default();

        Some(format!(
            "📦 {} {verb} package {name}{version}{kind}{}",
            actor(self.sender.as_ref()),
            in_repo(self.repository.as_ref())
        ))
    }
}

impl Render for PingEvent {
    /// Handshake deliveries are acknowledged, never forwarded.
    fn render(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::format::format_payload;
    use serde_json::{Value, json};

    fn render(event: &str, payload: Value) -> Option<String> {
        format_payload(event, payload).unwrap()
    }

    #[test]
    fn star_created_deleted_and_unknown() {
        let payload = |action: &str| {
            json!({
                "action": action,
                "repository": { "full_name": "a/b" },
                "sender": { "login": "u" }
            })
        };

        assert_eq!(render("star", payload("created")).unwrap(), "⭐ u starred a/b");
        assert_eq!(render("star", payload("deleted")).unwrap(), "💔 u unstarred a/b");
        assert!(render("star", payload("edited")).is_none());
    }

    #[test]
    fn star_reports_stargazer_count() {
        let message = render(
            "star",
            json!({
                "action": "created",
                "repository": { "full_name": "a/b", "stargazers_count": 1234 },
                "sender": { "login": "u" }
            }),
        )
        .unwrap();
        assert_eq!(message, "⭐ u starred a/b \\(1234 ⭐\\)");
    }

    #[test]
    fn release_published_previews_notes() {
        let notes = format!("## Changes\n{}", "z".repeat(300));
        let message = render(
            "release",
            json!({
                "action": "published",
                "release": {
                    "tag_name": "v1.2.0",
                    "html_url": "https://github.com/octo/repo/releases/v1.2.0",
                    "body": notes
                },
                "repository": { "full_name": "octo/repo" },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();

        assert!(message.starts_with(
            "🚀 mona released [v1\\.2\\.0](https://github.com/octo/repo/releases/v1.2.0) \
             in octo/repo\n>\\#\\# Changes\n>z"
        ));
        assert!(message.ends_with("\\.\\.\\."));
        // 200 chars of notes: "## Changes\n" is 11 of them.
        assert!(message.contains(&"z".repeat(189)));
        assert!(!message.contains(&"z".repeat(190)));
    }

    #[test]
    fn release_edits_skip_notes() {
        let message = render(
            "release",
            json!({
                "action": "edited",
                "release": { "tag_name": "v1", "name": "First", "body": "notes" },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();
        assert_eq!(message, "✏️ mona edited release First");
    }

    #[test]
    fn release_draft_creation() {
        let message = render(
            "release",
            json!({
                "action": "created",
                "release": { "tag_name": "v2", "draft": true }
            }),
        )
        .unwrap();
        assert_eq!(message, "📝 unknown drafted release v2");
    }

    #[test]
    fn every_release_action_renders() {
        for action in [
            "published",
            "unpublished",
            "created",
            "edited",
            "deleted",
            "prereleased",
            "released",
        ] {
            let payload = json!({ "action": action, "release": { "tag_name": "v9" } });
            let message = render("release", payload).unwrap_or_else(|| panic!("{action}"));
            assert!(message.contains("v9"), "{action}: {message}");
        }
    }

    #[test]
    fn repository_actions() {
        let payload = |action: &str, changes: Value| {
            json!({
                "action": action,
                "changes": changes,
                "repository": { "full_name": "octo/new-name", "html_url": "https://x" },
                "sender": { "login": "mona" }
            })
        };

        let renamed = payload(
            "renamed",
            json!({ "repository": { "name": { "from": "old_name" } } }),
        );
        assert_eq!(
            render("repository", renamed).unwrap(),
            "📝 mona renamed repository `old_name` to [octo/new\\-name](https://x)"
        );
        let transferred = payload(
            "transferred",
            json!({
                "owner": { "from": { "organization": { "login": "old-org" } } }
            }),
        );
        assert!(
            render("repository", transferred)
                .unwrap()
                .ends_with("from old\\-org")
        );
        for action in [
            "created",
            "deleted",
            "archived",
            "unarchived",
            "publicized",
            "privatized",
            "edited",
            "renamed",
            "transferred",
        ] {
            assert!(render("repository", payload(action, json!(null))).is_some(), "{action}");
        }
        assert!(render("repository", payload("exploded", json!(null))).is_none());
    }

    #[test]
    fn label_rename() {
        let message = render(
            "label",
            json!({
                "action": "edited",
                "label": { "name": "bug" },
                "changes": { "name": { "from": "defect" } },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();
        assert_eq!(message, "🏷️ mona renamed label *defect* to *bug*");
    }

    #[test]
    fn branch_protection_rule() {
        let message = render(
            "branch_protection_rule",
            json!({
                "action": "created",
                "rule": { "name": "release/*" },
                "repository": { "full_name": "octo/repo" },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();
        assert_eq!(message, "🛡️ mona created branch protection rule `release/*` in octo/repo");
    }

    #[test]
    fn fork_links_both_repositories() {
        let message = render(
            "fork",
            json!({
                "forkee": { "full_name": "mona/repo", "html_url": "https://github.com/mona/repo" },
                "repository": { "full_name": "octo/repo", "forks_count": 3 },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();
        assert_eq!(
            message,
            "🍴 mona forked octo/repo to [mona/repo](https://github.com/mona/repo) \\(3 forks\\)"
        );
    }

    #[test]
    fn watch_started_only() {
        let payload = |action: &str| {
            json!({ "action": action, "repository": { "full_name": "a/b" } })
        };
        assert_eq!(render("watch", payload("started")).unwrap(), "👀 unknown started watching a/b");
        assert!(render("watch", payload("stopped")).is_none());
    }

    #[test]
    fn gollum_counts_additional_pages() {
        let message = render(
            "gollum",
            json!({
                "pages": [
                    { "title": "Home", "action": "created", "html_url": "https://x/wiki/Home" },
                    { "title": "Setup", "action": "edited" },
                    { "title": "FAQ", "action": "edited" }
                ],
                "repository": { "full_name": "octo/repo" },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();
        assert_eq!(
            message,
            "📖 mona created wiki page [Home](https://x/wiki/Home) and 2 more pages in octo/repo"
        );
    }

    #[test]
    fn gollum_without_pages_is_suppressed() {
        assert!(render("gollum", json!({ "pages": [] })).is_none());
        assert!(render("gollum", json!({})).is_none());
    }

    #[test]
    fn team_message_leads_with_team() {
        let message = render(
            "team",
            json!({
                "action": "added_to_repository",
                "team": { "name": "core" },
                "repository": { "full_name": "octo/repo" },
                "organization": { "login": "octo" },
                "sender": { "login": "admin", "html_url": "https://github.com/admin" }
            }),
        )
        .unwrap();
        assert_eq!(message, "👥 Team *core* was given access to octo/repo by admin");

        let message = render(
            "team",
            json!({
                "action": "created",
                "team": { "slug": "ops" },
                "organization": { "login": "octo" }
            }),
        )
        .unwrap();
        assert_eq!(message, "👥 Team *ops* was created in octo");
    }

    #[test]
    fn package_published_with_version_and_type() {
        let message = render(
            "package",
            json!({
                "action": "published",
                "package": {
                    "name": "widget",
                    "package_type": "npm",
                    "package_version": { "version": "1.0.0" }
                },
                "sender": { "login": "mona" }
            }),
        )
        .unwrap();
        assert_eq!(message, "📦 mona published package widget `1.0.0` \\(npm\\)");
    }

    #[test]
    fn member_and_public_and_milestone() {
        assert_eq!(
            render(
                "member",
                json!({
                    "action": "added",
                    "member": { "login": "newbie" },
                    "sender": { "login": "mona" }
                })
            )
            .unwrap(),
            "👥 mona added newbie as a collaborator"
        );
        assert_eq!(
            render(
                "public",
                json!({ "repository": { "full_name": "octo/repo" }, "sender": { "login": "mona" } })
            )
            .unwrap(),
            "🌍 mona made octo/repo public"
        );
        assert_eq!(
            render(
                "milestone",
                json!({
                    "action": "closed",
                    "milestone": { "title": "v1.0" },
                    "sender": { "login": "mona" }
                })
            )
            .unwrap(),
            "🎯 mona closed milestone v1\\.0"
        );
    }

    #[test]
    fn ping_is_never_forwarded() {
        let ping = json!({ "zen": "Keep it logically awesome.", "hook_id": 1 });
        assert!(render("ping", ping).is_none());
    }
}
