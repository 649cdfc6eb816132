//! Authenticated user operations.

use super::client::BitbucketClient;
use super::error::BitbucketError;
use super::models::{UserEmail, UserProfile};

impl BitbucketClient {
    /// Fetches the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request fails or the response
    /// cannot be decoded.
    pub async fn current_user(&self) -> Result<UserProfile, BitbucketError> {
        self.get_json("/user").await
    }

    /// Lists the email addresses of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request fails or the response
    /// cannot be decoded.
    pub async fn user_emails(&self) -> Result<Vec<UserEmail>, BitbucketError> {
        self.get_values("/user/emails").await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::client::BitbucketClient;
    use crate::api::credentials::{Credentials, WorkspaceId};
    use crate::api::models::test_support::{user_email_json, user_profile_json, values_page};

    fn client_for(server: &MockServer) -> BitbucketClient {
        let credentials =
            Credentials::new("alice", "app-pass").expect("credentials should be valid");
        let workspace = WorkspaceId::new("acme").expect("workspace should be valid");
        BitbucketClient::with_base_url(credentials, workspace, None, &server.uri())
            .expect("client should build")
    }

    #[tokio::test]
    async fn current_user_fetches_the_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_profile_json("alice")))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let profile = client.current_user().await.expect("request should succeed");

        assert_eq!(profile.username.as_deref(), Some("alice"));
        assert_eq!(profile.account_id.as_deref(), Some("557058:aaaa-bbbb"));
    }

    #[tokio::test]
    async fn user_emails_returns_the_values_array() {
        let server = MockServer::start().await;
        let page = values_page(vec![
            user_email_json("alice@example.com", true),
            user_email_json("alice@example.org", false),
        ]);
        Mock::given(method("GET"))
            .and(path("/user/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let emails = client.user_emails().await.expect("request should succeed");

        assert_eq!(emails.len(), 2, "expected both addresses");
        let primary = emails
            .iter()
            .find(|email| email.is_primary == Some(true))
            .expect("a primary address should be listed");
        assert_eq!(primary.email, "alice@example.com");
    }
}
