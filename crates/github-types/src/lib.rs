//! # github-types
//!
//! Typed model of GitHub webhook payloads, built for relaying rather than
//! for acting on events.
//!
//! GitHub payloads are untrusted input whose shape drifts across event
//! subtypes and API versions. Every field in this crate is therefore an
//! `Option`, and deserialization is lenient: a field that is absent, `null`,
//! or of an unexpected JSON type becomes `None` instead of failing the whole
//! record. Action discriminants carry an `Other` variant for values GitHub
//! adds later.
//!
//! ## Entry point
//!
//! ```
//! use github_types::GithubEvent;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "action": "created",
//!     "repository": { "full_name": "octo/repo" },
//!     "sender": { "login": "octocat" }
//! });
//!
//! let event = GithubEvent::parse("star", payload).unwrap();
//! assert!(matches!(event, Some(GithubEvent::Star(_))));
//!
//! // Unknown event types are not an error.
//! assert!(GithubEvent::parse("sponsorship", json!({})).unwrap().is_none());
//! ```

mod lenient;

pub mod ci;
pub mod common;
pub mod discussion;
pub mod events;
pub mod issues;
pub mod pull_request;
pub mod push;
pub mod repository;
pub mod security;

pub use common::{Changes, Label, Milestone, Organization, Repository, Team, User};
pub use events::GithubEvent;
pub use lenient::List;
