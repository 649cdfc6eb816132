//! Bitbucket Cloud client library for the 2.0 REST API.
//!
//! The library wraps reqwest to authenticate with username and app password
//! pairs, scope every request to a configured workspace, and deserialise
//! Bitbucket responses into typed models with friendly errors that can be
//! displayed in the CLI.

pub mod api;
pub mod config;

pub use api::{
    API_BASE_URL, BitbucketClient, BitbucketError, CreateIssueParams, CreatePullRequestParams,
    CreateRepositoryParams, Credentials, Issue, PullRequest, Repository, RepositorySlug,
    WorkspaceId,
};
pub use config::BitbucketConfig;
