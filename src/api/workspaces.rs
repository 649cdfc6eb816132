//! Workspace operations.

use super::client::BitbucketClient;
use super::error::BitbucketError;
use super::models::{Workspace, WorkspaceMembership};

impl BitbucketClient {
    /// Lists the workspaces visible to the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request fails or the response
    /// cannot be decoded.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, BitbucketError> {
        self.get_values("/workspaces").await
    }

    /// Lists the members of the client's workspace.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request fails or the response
    /// cannot be decoded.
    pub async fn workspace_members(&self) -> Result<Vec<WorkspaceMembership>, BitbucketError> {
        let path = format!("/workspaces/{}/members", self.workspace().as_str());
        self.get_values(&path).await
    }
}
