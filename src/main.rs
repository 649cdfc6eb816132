//! Demo CLI entrypoint for the Bitbucket Cloud client.

use std::io::{self, Write};
use std::process::ExitCode;

use bitbucket_cloud::api::UserProfile;
use bitbucket_cloud::{BitbucketClient, BitbucketConfig, BitbucketError, Repository};
use ortho_config::OrthoConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BitbucketError> {
    let config = load_config()?;

    let credentials = config.require_credentials()?;
    let workspace = config.require_workspace()?;
    let default_repository = config.default_repository();

    let client = BitbucketClient::with_base_url(
        credentials,
        workspace,
        default_repository,
        config.resolve_api_base_url(),
    )?;

    let user = client.current_user().await?;
    let repositories = client.list_repositories().await?;

    write_summary(&user, &repositories)?;
    Ok(())
}

/// Initialises logging from the `BITBUCKET_LOG` environment variable.
///
/// Defaults to `warn` when the variable is unset or fails to parse.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("BITBUCKET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BitbucketError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BitbucketConfig, BitbucketError> {
    BitbucketConfig::load().map_err(|error| BitbucketError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(user: &UserProfile, repositories: &[Repository]) -> Result<(), BitbucketError> {
    let mut stdout = io::stdout().lock();
    let name = user
        .display_name
        .as_deref()
        .or(user.username.as_deref())
        .unwrap_or("unknown user");
    let mut message = format!(
        "Authenticated as {name}\nRepositories in workspace: {}",
        repositories.len()
    );
    for repository in repositories {
        message.push_str("\n  ");
        message.push_str(&repository.full_name);
    }

    writeln!(stdout, "{message}").map_err(|error| BitbucketError::Io {
        message: error.to_string(),
    })
}
