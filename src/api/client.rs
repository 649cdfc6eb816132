//! Credential-scoped request dispatcher for the Bitbucket Cloud API.

use http::header::{ACCEPT, HeaderValue};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::credentials::{Credentials, RepositorySlug, WorkspaceId};
use super::error::BitbucketError;

/// Root of the public Bitbucket Cloud REST API.
pub const API_BASE_URL: &str = "https://api.bitbucket.org/2.0";

const USER_AGENT: &str = concat!("bitbucket-cloud/", env!("CARGO_PKG_VERSION"));

/// Collection envelope wrapping every Bitbucket listing.
#[derive(Debug, Deserialize)]
struct ValuesEnvelope<T> {
    values: Vec<T>,
}

/// Credential-scoped Bitbucket Cloud client.
///
/// The client owns the HTTP transport, the credentials, the workspace every
/// request is scoped to, and an optional default repository for
/// repository-scoped operations. Operations are grouped by resource in the
/// sibling modules and attached here as inherent methods.
///
/// The client is thin: it shapes requests, authenticates with HTTP Basic, and
/// unwraps the collection envelope. It never retries, never follows
/// pagination, and carries server failures to the caller unaltered.
///
/// # Examples
///
/// ```no_run
/// use bitbucket_cloud::{BitbucketClient, Credentials, WorkspaceId};
///
/// # async fn demo() -> Result<(), bitbucket_cloud::BitbucketError> {
/// let credentials = Credentials::new("alice", "app-password")?;
/// let workspace = WorkspaceId::new("acme")?;
/// let client = BitbucketClient::new(credentials, workspace, None)?;
/// let repositories = client.list_repositories().await?;
/// assert!(
///     repositories
///         .iter()
///         .all(|repository| repository.full_name.starts_with("acme/"))
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BitbucketClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    workspace: WorkspaceId,
    default_repository: Option<RepositorySlug>,
}

impl BitbucketClient {
    /// Creates a client against the public Bitbucket Cloud API root.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::ClientBuild` when the HTTP transport cannot
    /// be constructed.
    pub fn new(
        credentials: Credentials,
        workspace: WorkspaceId,
        default_repository: Option<RepositorySlug>,
    ) -> Result<Self, BitbucketError> {
        Self::with_base_url(credentials, workspace, default_repository, API_BASE_URL)
    }

    /// Creates a client against an alternative API root, for tests or an
    /// HTTP proxy.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::InvalidBaseUrl` when the URL cannot be
    /// parsed, or `BitbucketError::ClientBuild` when the HTTP transport
    /// cannot be constructed.
    pub fn with_base_url(
        credentials: Credentials,
        workspace: WorkspaceId,
        default_repository: Option<RepositorySlug>,
        base_url: &str,
    ) -> Result<Self, BitbucketError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| BitbucketError::ClientBuild {
                message: error.to_string(),
            })?;
        Self::with_http_client(http, credentials, workspace, default_repository, base_url)
    }

    /// Creates a client on a caller-built transport.
    ///
    /// The client sets no timeouts of its own; configure transport policy
    /// (timeouts, proxies, TLS) on `http` before passing it in.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::InvalidBaseUrl` when the URL cannot be
    /// parsed.
    pub fn with_http_client(
        http: reqwest::Client,
        credentials: Credentials,
        workspace: WorkspaceId,
        default_repository: Option<RepositorySlug>,
        base_url: &str,
    ) -> Result<Self, BitbucketError> {
        let parsed = Url::parse(base_url)
            .map_err(|error| BitbucketError::InvalidBaseUrl(error.to_string()))?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
            credentials,
            workspace,
            default_repository,
        })
    }

    /// Workspace every request is scoped to.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceId {
        &self.workspace
    }

    /// Default repository used when an operation receives no explicit one.
    #[must_use]
    pub const fn default_repository(&self) -> Option<&RepositorySlug> {
        self.default_repository.as_ref()
    }

    /// API root requests are dispatched against, without a trailing slash.
    #[must_use]
    pub const fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Picks the repository for a repository-scoped operation.
    ///
    /// An explicit argument wins; otherwise the configured default is used.
    /// Fails before any request is dispatched when neither is present.
    pub(super) fn resolve_repository<'a>(
        &'a self,
        explicit: Option<&'a RepositorySlug>,
    ) -> Result<&'a RepositorySlug, BitbucketError> {
        explicit
            .or(self.default_repository.as_ref())
            .ok_or(BitbucketError::MissingRepository)
    }

    /// Synthesises the `{workspace}/{repository}` identity.
    pub(super) fn full_name(&self, repository: &RepositorySlug) -> String {
        format!("{}/{}", self.workspace.as_str(), repository.as_str())
    }

    pub(super) fn repositories_path(&self) -> String {
        format!("/repositories/{}", self.workspace.as_str())
    }

    pub(super) fn repository_path(
        &self,
        repository: Option<&RepositorySlug>,
    ) -> Result<String, BitbucketError> {
        let slug = self.resolve_repository(repository)?;
        Ok(format!("{}/{}", self.repositories_path(), slug.as_str()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!("{method} {path}");
        self.http
            .request(method, self.endpoint(path))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .basic_auth(
                self.credentials.username().as_str(),
                Some(self.credentials.app_password().value()),
            )
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, BitbucketError> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|error| BitbucketError::Network {
                message: error.to_string(),
            })?;
        Self::decode(response).await
    }

    pub(super) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, BitbucketError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(|error| BitbucketError::Network {
                message: error.to_string(),
            })?;
        Self::decode(response).await
    }

    pub(super) async fn get_values<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, BitbucketError> {
        self.get_json::<ValuesEnvelope<T>>(path)
            .await
            .map(|envelope| envelope.values)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BitbucketError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| BitbucketError::Network {
                message: error.to_string(),
            })?;

        if !status.is_success() {
            tracing::debug!("Bitbucket answered {status}");
            return Err(BitbucketError::Api { status, body });
        }

        serde_json::from_str(&body).map_err(|error| BitbucketError::Decode {
            message: error.to_string(),
        })
    }
}
