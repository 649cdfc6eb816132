//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.bitbucket.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `BITBUCKET_USERNAME`,
//!    `BITBUCKET_APP_PASSWORD`, and friends
//! 4. **Command-line arguments** – `--username`/`-u`, `--workspace`/`-w`, etc.
//!
//! # Configuration File
//!
//! Place `.bitbucket.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! username = "alice"
//! app_password = "example-app-password"
//! workspace = "acme"
//! repository = "widgets"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::client::API_BASE_URL;
use crate::api::credentials::{Credentials, RepositorySlug, WorkspaceId};
use crate::api::error::BitbucketError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `BITBUCKET_USERNAME` or `--username`: Bitbucket account username
/// - `BITBUCKET_APP_PASSWORD` or `--app-password`: App password for Basic auth
/// - `BITBUCKET_WORKSPACE` or `--workspace`: Workspace every request targets
/// - `BITBUCKET_REPOSITORY` or `--repository`: Default repository slug
/// - `BITBUCKET_API_BASE_URL` or `--api-base-url`: Alternative API root
///
/// # Example
///
/// ```no_run
/// use bitbucket_cloud::BitbucketConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BitbucketConfig::load().expect("failed to load configuration");
/// let credentials = config.require_credentials().expect("credentials required");
/// let workspace = config.require_workspace().expect("workspace required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BITBUCKET",
    discovery(
        dotfile_name = ".bitbucket.toml",
        config_file_name = "bitbucket.toml",
        app_name = "bitbucket"
    )
)]
pub struct BitbucketConfig {
    /// Bitbucket account username.
    ///
    /// Can be provided via:
    /// - CLI: `--username <NAME>` or `-u <NAME>`
    /// - Environment: `BITBUCKET_USERNAME`
    /// - Config file: `username = "..."`
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// App password used for HTTP Basic authentication.
    ///
    /// This is a scoped app password created under Bitbucket account
    /// settings, never the account password.
    ///
    /// Can be provided via:
    /// - CLI: `--app-password <SECRET>` or `-p <SECRET>`
    /// - Environment: `BITBUCKET_APP_PASSWORD`
    /// - Config file: `app_password = "..."`
    #[ortho_config(cli_short = 'p')]
    pub app_password: Option<String>,

    /// Workspace every request is scoped to.
    ///
    /// Can be provided via:
    /// - CLI: `--workspace <SLUG>` or `-w <SLUG>`
    /// - Environment: `BITBUCKET_WORKSPACE`
    /// - Config file: `workspace = "..."`
    #[ortho_config(cli_short = 'w')]
    pub workspace: Option<String>,

    /// Default repository slug for repository-scoped operations.
    ///
    /// Operations that take an explicit repository argument override this
    /// value. A blank value is treated as unset.
    ///
    /// Can be provided via:
    /// - CLI: `--repository <SLUG>` or `-r <SLUG>`
    /// - Environment: `BITBUCKET_REPOSITORY`
    /// - Config file: `repository = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repository: Option<String>,

    /// Alternative API root, for proxies and testing.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>`
    /// - Environment: `BITBUCKET_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    pub api_base_url: Option<String>,
}

impl BitbucketConfig {
    /// Builds validated credentials from the configured username and app
    /// password.
    ///
    /// # Errors
    ///
    /// Returns [`BitbucketError::MissingUsername`] or
    /// [`BitbucketError::MissingAppPassword`] when either value is absent or
    /// blank.
    pub fn require_credentials(&self) -> Result<Credentials, BitbucketError> {
        Credentials::new(
            self.username.as_deref().unwrap_or(""),
            self.app_password.as_deref().unwrap_or(""),
        )
    }

    /// Returns the validated workspace identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BitbucketError::MissingWorkspace`] when no workspace is
    /// configured or the value is blank.
    pub fn require_workspace(&self) -> Result<WorkspaceId, BitbucketError> {
        WorkspaceId::new(self.workspace.as_deref().unwrap_or(""))
    }

    /// Returns the configured default repository, treating a blank value as
    /// unset.
    #[must_use]
    pub fn default_repository(&self) -> Option<RepositorySlug> {
        self.repository
            .as_deref()
            .and_then(|value| RepositorySlug::new(value).ok())
    }

    /// Returns the configured API root, falling back to the public Bitbucket
    /// Cloud endpoint.
    #[must_use]
    pub fn resolve_api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use ortho_config::MergeComposer;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::BitbucketConfig;
    use crate::api::client::API_BASE_URL;
    use crate::api::error::BitbucketError;

    /// Applies a configuration layer to the composer based on the layer type.
    fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
        match layer_type {
            "defaults" => composer.push_defaults(value),
            "file" => composer.push_file(value, None),
            "environment" => composer.push_environment(value),
            "cli" => composer.push_cli(value),
            _ => panic!("unknown layer type: {layer_type}"),
        }
    }

    #[rstest]
    #[case::file_overrides_defaults(
        vec![("defaults", json!({"username": "default-name"})), ("file", json!({"username": "file-name"}))],
        "username",
        "file-name",
        "file should override default"
    )]
    #[case::environment_overrides_file(
        vec![("file", json!({"app_password": "file-secret"})), ("environment", json!({"app_password": "env-secret"}))],
        "app_password",
        "env-secret",
        "environment should override file"
    )]
    #[case::cli_overrides_environment(
        vec![("environment", json!({"workspace": "env-space"})), ("cli", json!({"workspace": "cli-space"}))],
        "workspace",
        "cli-space",
        "CLI should override environment"
    )]
    fn test_layer_precedence(
        #[case] layers: Vec<(&str, Value)>,
        #[case] field: &str,
        #[case] expected: &str,
        #[case] message: &str,
    ) {
        let mut composer = MergeComposer::new();

        for (layer_type, value) in layers {
            apply_layer(&mut composer, layer_type, value);
        }

        let config =
            BitbucketConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        let actual = match field {
            "username" => config.username.as_deref(),
            "app_password" => config.app_password.as_deref(),
            "workspace" => config.workspace.as_deref(),
            _ => panic!("unknown field: {field}"),
        };

        assert_eq!(actual, Some(expected), "{message}");
    }

    #[rstest]
    fn defaults_are_none_when_no_sources_provided() {
        let mut composer = MergeComposer::new();
        composer.push_defaults(json!({"username": null, "workspace": null}));

        let config = BitbucketConfig::merge_from_layers(composer.layers())
            .expect("merge should succeed with empty defaults");

        assert!(config.username.is_none(), "username should be None");
        assert!(config.workspace.is_none(), "workspace should be None");
    }

    #[rstest]
    fn full_precedence_chain() {
        let mut composer = MergeComposer::new();
        composer.push_defaults(json!({"username": "default", "app_password": "default-secret"}));
        composer.push_file(json!({"username": "file", "app_password": "file-secret"}), None);
        composer.push_environment(json!({"username": "env"}));
        composer.push_cli(json!({"username": "cli"}));

        let config =
            BitbucketConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.username.as_deref(), Some("cli"), "CLI wins for username");
        assert_eq!(
            config.app_password.as_deref(),
            Some("file-secret"),
            "file wins for app_password (no env/cli override)"
        );
    }

    #[rstest]
    fn require_credentials_reports_the_missing_half() {
        let config = BitbucketConfig::default();
        let error = config
            .require_credentials()
            .expect_err("empty configuration should fail");
        assert_eq!(error, BitbucketError::MissingUsername);

        let with_name = BitbucketConfig {
            username: Some("alice".to_owned()),
            ..Default::default()
        };
        let missing_password = with_name
            .require_credentials()
            .expect_err("missing password should fail");
        assert_eq!(missing_password, BitbucketError::MissingAppPassword);
    }

    #[rstest]
    fn require_credentials_returns_the_validated_pair() {
        let config = BitbucketConfig {
            username: Some("alice".to_owned()),
            app_password: Some("app-secret".to_owned()),
            ..Default::default()
        };

        let credentials = config
            .require_credentials()
            .expect("credentials should be valid");
        assert_eq!(credentials.username().as_str(), "alice");
        assert_eq!(credentials.app_password().value(), "app-secret");
    }

    #[rstest]
    fn require_workspace_rejects_absent_and_blank_values() {
        let config = BitbucketConfig::default();
        let error = config
            .require_workspace()
            .expect_err("absent workspace should fail");
        assert_eq!(error, BitbucketError::MissingWorkspace);

        let blank = BitbucketConfig {
            workspace: Some("   ".to_owned()),
            ..Default::default()
        };
        let blank_error = blank
            .require_workspace()
            .expect_err("blank workspace should fail");
        assert_eq!(blank_error, BitbucketError::MissingWorkspace);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("widgets"), Some("widgets"))]
    fn default_repository_treats_blank_as_unset(
        #[case] configured: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let config = BitbucketConfig {
            repository: configured.map(ToOwned::to_owned),
            ..Default::default()
        };

        let resolved = config.default_repository();
        assert_eq!(
            resolved.as_ref().map(|slug| slug.as_str()),
            expected,
            "blank repository values must behave like unset ones"
        );
    }

    #[rstest]
    fn resolve_api_base_url_falls_back_to_the_public_root() {
        let config = BitbucketConfig::default();
        assert_eq!(config.resolve_api_base_url(), API_BASE_URL);

        let custom = BitbucketConfig {
            api_base_url: Some("https://proxy.example.net/bitbucket".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            custom.resolve_api_base_url(),
            "https://proxy.example.net/bitbucket"
        );
    }
}
