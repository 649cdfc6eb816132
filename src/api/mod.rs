//! Bitbucket Cloud API access.
//!
//! This module wraps reqwest into a credential-scoped client for the
//! Bitbucket Cloud REST API. A single [`BitbucketClient`] owns the
//! credentials, the workspace every request is scoped to, and an optional
//! default repository; typed operations over repositories, pull requests,
//! issues, users, and workspaces hang off the client, grouped by resource.
//! Server failures surface as precise error variants carrying the status and
//! raw body rather than being interpreted.

pub mod client;
pub mod credentials;
pub mod error;
pub mod issues;
pub mod models;
pub mod pull_requests;
pub mod repositories;
pub mod users;
pub mod workspaces;

pub use client::{API_BASE_URL, BitbucketClient};
pub use credentials::{AppPassword, Credentials, RepositorySlug, Username, WorkspaceId};
pub use error::BitbucketError;
pub use issues::CreateIssueParams;
pub use models::{
    Account, Branch, Issue, IssueContent, IssuePriority, IssueState, PullRequest,
    PullRequestEndpoint, PullRequestState, Repository, RepositoryRef, UserEmail, UserProfile,
    Workspace, WorkspaceMembership,
};
pub use pull_requests::CreatePullRequestParams;
pub use repositories::CreateRepositoryParams;
