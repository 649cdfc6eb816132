//! Data models for Bitbucket Cloud API payloads.
//!
//! Public types deserialise directly from the wire records and pass through
//! as returned by the API; the client does not reshape them. Types suffixed
//! with `Body` are internal serialisation sources for the create operations
//! and pin the fields the client always sends.

use serde::{Deserialize, Serialize};

#[cfg(feature = "test-support")]
pub mod test_support;

/// Account record attached to repositories, pull requests, and issues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    /// Account username; absent when the owner hides it.
    pub username: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Public nickname.
    pub nickname: Option<String>,
    /// Opaque account UUID in braces form.
    pub uuid: Option<String>,
}

/// Workspace-scoped repository record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Identity in `{workspace}/{slug}` form.
    pub full_name: String,
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub is_private: Option<bool>,
    /// Owning account.
    pub owner: Option<Account>,
    /// Creation timestamp (ISO 8601 format).
    pub created_on: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_on: Option<String>,
}

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PullRequestState {
    /// Open and awaiting review.
    Open,
    /// Merged into the destination branch.
    Merged,
    /// Closed without merging.
    Declined,
}

impl PullRequestState {
    /// Wire form of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
            Self::Declined => "DECLINED",
        }
    }
}

/// Branch reference inside a pull request endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub name: String,
}

/// Repository reference inside a pull request endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRef {
    /// Identity in `{workspace}/{slug}` form.
    pub full_name: String,
    /// Display name.
    pub name: Option<String>,
}

/// Source or destination of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestEndpoint {
    /// Branch the endpoint points at.
    pub branch: Option<Branch>,
    /// Repository the branch lives in; absent when the fork was deleted.
    pub repository: Option<RepositoryRef>,
}

/// Pull request record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// Pull request identifier, unique within its repository.
    pub id: u64,
    /// Title.
    pub title: Option<String>,
    /// Description in markdown.
    pub description: Option<String>,
    /// Lifecycle state.
    pub state: Option<PullRequestState>,
    /// Authoring account.
    pub author: Option<Account>,
    /// Branch being merged.
    pub source: Option<PullRequestEndpoint>,
    /// Branch being merged into.
    pub destination: Option<PullRequestEndpoint>,
    /// Whether the source branch is deleted on merge.
    pub close_source_branch: Option<bool>,
    /// Creation timestamp (ISO 8601 format).
    pub created_on: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_on: Option<String>,
}

/// Workflow state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Newly reported, not yet triaged.
    New,
    /// Acknowledged and open.
    Open,
    /// Fixed.
    Resolved,
    /// Parked; the wire form is `"on hold"` with a space.
    #[serde(rename = "on hold")]
    OnHold,
    /// Not a real defect.
    Invalid,
    /// Duplicate of another issue.
    Duplicate,
    /// Acknowledged but deliberately left unfixed.
    Wontfix,
    /// Closed.
    Closed,
}

impl IssueState {
    /// Wire form of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Open => "open",
            Self::Resolved => "resolved",
            Self::OnHold => "on hold",
            Self::Invalid => "invalid",
            Self::Duplicate => "duplicate",
            Self::Wontfix => "wontfix",
            Self::Closed => "closed",
        }
    }
}

/// Issue priority scale.
///
/// Bitbucket's scale has exactly five levels, `trivial` through `blocker`;
/// there is no `high`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    /// Cosmetic.
    Trivial,
    /// Low urgency.
    Minor,
    /// Normal urgency; the server default.
    #[default]
    Major,
    /// High urgency.
    Critical,
    /// Blocks all other work.
    Blocker,
}

impl IssuePriority {
    /// Wire form of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
            Self::Blocker => "blocker",
        }
    }
}

/// Issue body in authored and rendered forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueContent {
    /// Source text as authored.
    pub raw: Option<String>,
    /// Markup language of `raw`.
    pub markup: Option<String>,
    /// Server-rendered HTML.
    pub html: Option<String>,
}

/// Issue tracker record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    /// Issue identifier, unique within its repository.
    pub id: u64,
    /// Title.
    pub title: Option<String>,
    /// Body content.
    pub content: Option<IssueContent>,
    /// Workflow state.
    pub state: Option<IssueState>,
    /// Issue kind (`bug`, `enhancement`, `proposal`, `task`).
    pub kind: Option<String>,
    /// Priority level.
    pub priority: Option<IssuePriority>,
    /// Reporting account.
    pub reporter: Option<Account>,
    /// Assigned account.
    pub assignee: Option<Account>,
    /// Creation timestamp (ISO 8601 format).
    pub created_on: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_on: Option<String>,
}

/// Authenticated user profile returned by `/user`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Account username.
    pub username: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Atlassian account identifier.
    pub account_id: Option<String>,
    /// Opaque account UUID in braces form.
    pub uuid: Option<String>,
    /// Account creation timestamp (ISO 8601 format).
    pub created_on: Option<String>,
}

/// Email address attached to the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserEmail {
    /// The address itself.
    pub email: String,
    /// Whether this is the primary address.
    pub is_primary: Option<bool>,
    /// Whether the address has been confirmed.
    pub is_confirmed: Option<bool>,
}

/// Workspace record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workspace {
    /// URL slug identifying the workspace.
    pub slug: String,
    /// Display name.
    pub name: Option<String>,
    /// Opaque workspace UUID in braces form.
    pub uuid: Option<String>,
}

/// Membership record returned by the workspace members listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkspaceMembership {
    /// Member account.
    pub user: Option<Account>,
    /// Workspace the membership belongs to.
    pub workspace: Option<Workspace>,
}

/// Request body for repository creation.
#[derive(Debug, Clone, Serialize)]
pub(super) struct CreateRepositoryBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) description: Option<&'a str>,
    pub(super) is_private: bool,
    pub(super) fork_policy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct BranchBody<'a> {
    pub(super) name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct RepositoryRefBody {
    pub(super) full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct EndpointBody<'a> {
    pub(super) branch: BranchBody<'a>,
    pub(super) repository: RepositoryRefBody,
}

/// Request body for pull request creation.
#[derive(Debug, Clone, Serialize)]
pub(super) struct CreatePullRequestBody<'a> {
    pub(super) title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) description: Option<&'a str>,
    pub(super) source: EndpointBody<'a>,
    pub(super) destination: EndpointBody<'a>,
    pub(super) close_source_branch: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct IssueContentBody<'a> {
    pub(super) raw: &'a str,
    pub(super) markup: &'static str,
}

/// Request body for issue creation.
#[derive(Debug, Clone, Serialize)]
pub(super) struct CreateIssueBody<'a> {
    pub(super) title: &'a str,
    pub(super) kind: &'static str,
    pub(super) priority: IssuePriority,
    pub(super) content: IssueContentBody<'a>,
}
