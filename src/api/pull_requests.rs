//! Pull request operations.

use super::client::BitbucketClient;
use super::credentials::RepositorySlug;
use super::error::BitbucketError;
use super::models::{
    BranchBody, CreatePullRequestBody, EndpointBody, PullRequest, RepositoryRefBody,
};

/// Options accepted when opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePullRequestParams {
    /// Title shown in the pull request list.
    pub title: String,
    /// Branch being merged.
    pub source_branch: String,
    /// Branch being merged into.
    pub destination_branch: String,
    /// Optional description in markdown.
    pub description: Option<String>,
}

impl BitbucketClient {
    /// Lists the pull requests of a repository.
    ///
    /// Returns the first page of results exactly as Bitbucket orders them.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn list_pull_requests(
        &self,
        repository: Option<&RepositorySlug>,
    ) -> Result<Vec<PullRequest>, BitbucketError> {
        let path = format!("{}/pullrequests", self.repository_path(repository)?);
        self.get_values(&path).await
    }

    /// Fetches a single pull request by identifier.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn pull_request(
        &self,
        repository: Option<&RepositorySlug>,
        id: u64,
    ) -> Result<PullRequest, BitbucketError> {
        let path = format!("{}/pullrequests/{id}", self.repository_path(repository)?);
        self.get_json(&path).await
    }

    /// Opens a pull request between two branches of the repository.
    ///
    /// Both endpoints name the same repository: the `{workspace}/{repository}`
    /// identity of the resolved repository. The source branch survives the
    /// merge (`close_source_branch` is pinned to `false`).
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when no repository is
    /// supplied and no default is configured, and a transport error when the
    /// request fails.
    pub async fn create_pull_request(
        &self,
        repository: Option<&RepositorySlug>,
        params: &CreatePullRequestParams,
    ) -> Result<PullRequest, BitbucketError> {
        let slug = self.resolve_repository(repository)?;
        let full_name = self.full_name(slug);
        let path = format!("{}/{}/pullrequests", self.repositories_path(), slug.as_str());

        let body = CreatePullRequestBody {
            title: params.title.as_str(),
            description: params.description.as_deref(),
            source: EndpointBody {
                branch: BranchBody {
                    name: params.source_branch.as_str(),
                },
                repository: RepositoryRefBody {
                    full_name: full_name.clone(),
                },
            },
            destination: EndpointBody {
                branch: BranchBody {
                    name: params.destination_branch.as_str(),
                },
                repository: RepositoryRefBody { full_name },
            },
            close_source_branch: false,
        };
        self.post_json(&path, &body).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::CreatePullRequestParams;
    use crate::api::client::BitbucketClient;
    use crate::api::credentials::{Credentials, RepositorySlug, WorkspaceId};
    use crate::api::models::PullRequestState;
    use crate::api::models::test_support::{pull_request_json, values_page};

    fn client_with_default(server: &MockServer) -> BitbucketClient {
        let credentials =
            Credentials::new("alice", "app-pass").expect("credentials should be valid");
        let workspace = WorkspaceId::new("acme").expect("workspace should be valid");
        let default_repository = RepositorySlug::new("widgets").expect("slug should be valid");
        BitbucketClient::with_base_url(
            credentials,
            workspace,
            Some(default_repository),
            &server.uri(),
        )
        .expect("client should build")
    }

    fn sample_params() -> CreatePullRequestParams {
        CreatePullRequestParams {
            title: "Widen the widget".to_owned(),
            source_branch: "feature/wider".to_owned(),
            destination_branch: "main".to_owned(),
            description: None,
        }
    }

    #[tokio::test]
    async fn list_pull_requests_uses_the_default_repository() {
        let server = MockServer::start().await;
        let page = values_page(vec![pull_request_json(7, "Widen the widget")]);
        Mock::given(method("GET"))
            .and(path("/repositories/acme/widgets/pullrequests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page))
            .mount(&server)
            .await;

        let client = client_with_default(&server);
        let pull_requests = client
            .list_pull_requests(None)
            .await
            .expect("request should succeed");

        assert_eq!(pull_requests.len(), 1, "expected the single listed PR");
        assert_eq!(
            pull_requests.first().map(|pull_request| pull_request.id),
            Some(7)
        );
    }

    #[tokio::test]
    async fn pull_request_fetches_by_identifier() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repositories/acme/widgets/pullrequests/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(pull_request_json(7, "Widen the widget")),
            )
            .mount(&server)
            .await;

        let client = client_with_default(&server);
        let pull_request = client
            .pull_request(None, 7)
            .await
            .expect("request should succeed");

        assert_eq!(pull_request.id, 7);
        assert_eq!(pull_request.state, Some(PullRequestState::Open));
    }

    #[tokio::test]
    async fn create_pull_request_names_both_endpoints_from_the_workspace() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repositories/acme/widgets/pullrequests"))
            .and(body_partial_json(serde_json::json!({
                "title": "Widen the widget",
                "source": {
                    "branch": { "name": "feature/wider" },
                    "repository": { "full_name": "acme/widgets" }
                },
                "destination": {
                    "branch": { "name": "main" },
                    "repository": { "full_name": "acme/widgets" }
                },
                "close_source_branch": false
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(pull_request_json(8, "Widen the widget")),
            )
            .mount(&server)
            .await;

        let client = client_with_default(&server);
        let pull_request = client
            .create_pull_request(None, &sample_params())
            .await
            .expect("request should succeed");

        assert_eq!(pull_request.id, 8);
    }

    #[tokio::test]
    async fn create_pull_request_omits_an_absent_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repositories/acme/widgets/pullrequests"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(pull_request_json(9, "Widen the widget")),
            )
            .mount(&server)
            .await;

        let client = client_with_default(&server);
        client
            .create_pull_request(None, &sample_params())
            .await
            .expect("request should succeed");

        let requests = server
            .received_requests()
            .await
            .expect("request recording should be enabled");
        let request = requests.first().expect("one request should be recorded");
        let body: serde_json::Value =
            serde_json::from_slice(&request.body).expect("body should be JSON");
        assert!(
            body.get("description").is_none(),
            "absent description must not be serialised: {body}"
        );
    }
}
