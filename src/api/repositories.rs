//! Repository operations.

use super::client::BitbucketClient;
use super::credentials::RepositorySlug;
use super::error::BitbucketError;
use super::models::{CreateRepositoryBody, Repository};

/// Options accepted when creating a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRepositoryParams {
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the repository is private; treated as `false` when unset.
    pub is_private: Option<bool>,
}

impl BitbucketClient {
    /// Lists the repositories in the workspace.
    ///
    /// Returns the first page of results exactly as Bitbucket orders them.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request fails or the response
    /// cannot be decoded.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>, BitbucketError> {
        self.get_values(&self.repositories_path()).await
    }

    /// Fetches a single repository.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn repository(
        &self,
        repository: Option<&RepositorySlug>,
    ) -> Result<Repository, BitbucketError> {
        let path = self.repository_path(repository)?;
        self.get_json(&path).await
    }

    /// Creates a repository under the workspace.
    ///
    /// The new repository's slug is always explicit; the configured default
    /// never names a repository to create. Forking stays enabled
    /// (`fork_policy` is pinned to `allow_forks`) and the repository is
    /// public unless `params.is_private` says otherwise.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request fails or the response
    /// cannot be decoded.
    pub async fn create_repository(
        &self,
        name: &RepositorySlug,
        params: &CreateRepositoryParams,
    ) -> Result<Repository, BitbucketError> {
        let path = format!("{}/{}", self.repositories_path(), name.as_str());
        let body = CreateRepositoryBody {
            description: params.description.as_deref(),
            is_private: params.is_private.unwrap_or(false),
            fork_policy: "allow_forks",
        };
        self.post_json(&path, &body).await
    }
}
