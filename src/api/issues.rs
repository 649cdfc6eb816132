//! Issue tracker operations.

use super::client::BitbucketClient;
use super::credentials::RepositorySlug;
use super::error::BitbucketError;
use super::models::{CreateIssueBody, Issue, IssueContentBody, IssuePriority};

/// Options accepted when reporting an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueParams {
    /// Title shown in the issue list.
    pub title: String,
    /// Body text in markdown; sent as an empty string when unset.
    pub content: Option<String>,
    /// Priority level; `major` applies when unset.
    pub priority: Option<IssuePriority>,
}

impl BitbucketClient {
    /// Lists the issues of a repository.
    ///
    /// Returns the first page of results exactly as Bitbucket orders them.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn list_issues(
        &self,
        repository: Option<&RepositorySlug>,
    ) -> Result<Vec<Issue>, BitbucketError> {
        let path = format!("{}/issues", self.repository_path(repository)?);
        self.get_values(&path).await
    }

    /// Fetches a single issue by identifier.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn issue(
        &self,
        repository: Option<&RepositorySlug>,
        id: u64,
    ) -> Result<Issue, BitbucketError> {
        let path = format!("{}/issues/{id}", self.repository_path(repository)?);
        self.get_json(&path).await
    }

    /// Reports an issue against the repository.
    ///
    /// Issues are always filed as bugs (`kind` is pinned to `bug`), the body
    /// is wrapped as markdown content, and the priority falls back to
    /// `major` when the caller does not pick one.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn create_issue(
        &self,
        repository: Option<&RepositorySlug>,
        params: &CreateIssueParams,
    ) -> Result<Issue, BitbucketError> {
        let path = format!("{}/issues", self.repository_path(repository)?);
        let body = CreateIssueBody {
            title: params.title.as_str(),
            kind: "bug",
            priority: params.priority.unwrap_or_default(),
            content: IssueContentBody {
                raw: params.content.as_deref().unwrap_or(""),
                markup: "markdown",
            },
        };
        self.post_json(&path, &body).await
    }
}
