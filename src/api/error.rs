//! Error types exposed by the Bitbucket Cloud client.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while validating configuration or communicating with
/// Bitbucket.
///
/// Variants fall into two groups. Configuration errors are raised locally,
/// before any request leaves the process. Transport errors carry whatever the
/// network or the server reported, uninterpreted: a 401 arrives as
/// [`BitbucketError::Api`] with status 401 and the raw body, exactly as a 500
/// would. Classify with [`BitbucketError::is_configuration`] and
/// [`BitbucketError::is_transport`]; recover the HTTP status with
/// [`BitbucketError::status`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BitbucketError {
    /// The username was missing or blank.
    #[error("username is required")]
    MissingUsername,

    /// The app password was missing or blank.
    #[error("app password is required")]
    MissingAppPassword,

    /// The workspace identifier was missing or blank.
    #[error("workspace is required")]
    MissingWorkspace,

    /// No repository was supplied and no default is configured.
    #[error("repository is required: pass one explicitly or configure a default")]
    MissingRepository,

    /// The API base URL could not be parsed.
    #[error("base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP transport could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    ClientBuild {
        /// Error detail from the transport builder.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Bitbucket answered with a non-success status.
    #[error("Bitbucket returned {status}: {body}")]
    Api {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Raw response body, carried unaltered.
        body: String,
    },

    /// Networking failed while calling Bitbucket.
    #[error("network error talking to Bitbucket: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode Bitbucket response: {message}")]
    Decode {
        /// Deserialization error detail.
        message: String,
    },
}

impl BitbucketError {
    /// Returns true when the error was raised locally, before any request was
    /// dispatched.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingUsername
                | Self::MissingAppPassword
                | Self::MissingWorkspace
                | Self::MissingRepository
                | Self::InvalidBaseUrl(_)
                | Self::ClientBuild { .. }
                | Self::Configuration { .. }
        )
    }

    /// Returns true when the error came from the transport or the server.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Network { .. } | Self::Decode { .. }
        )
    }

    /// HTTP status carried by a [`BitbucketError::Api`] failure.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
