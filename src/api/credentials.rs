//! Identity and credential wrappers for the Bitbucket client.

use std::fmt;

use super::error::BitbucketError;

/// Bitbucket username wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validates that the username is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingUsername` when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BitbucketError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BitbucketError::MissingUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the username value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// App password wrapper enforcing presence.
///
/// Bitbucket app passwords are scoped secrets created under account settings;
/// the account password itself is never accepted by the API.
#[derive(Clone, PartialEq, Eq)]
pub struct AppPassword(String);

impl AppPassword {
    /// Validates that the app password is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingAppPassword` when the supplied string
    /// is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BitbucketError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BitbucketError::MissingAppPassword);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the app password value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AppPassword {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

// The secret must not leak through debug formatting of the client or of
// error context that captures it.
impl fmt::Debug for AppPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppPassword(\"<redacted>\")")
    }
}

/// Validated username and app password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    app_password: AppPassword,
}

impl Credentials {
    /// Validates both halves of the credential pair.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingUsername` or
    /// `BitbucketError::MissingAppPassword` when either value is blank.
    pub fn new(
        username: impl AsRef<str>,
        app_password: impl AsRef<str>,
    ) -> Result<Self, BitbucketError> {
        Ok(Self {
            username: Username::new(username)?,
            app_password: AppPassword::new(app_password)?,
        })
    }

    /// Borrow the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Borrow the app password.
    #[must_use]
    pub const fn app_password(&self) -> &AppPassword {
        &self.app_password
    }
}

/// Workspace identifier wrapper.
///
/// Bitbucket scopes repositories under a workspace; the identifier appears as
/// a path segment in almost every endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    /// Validates that the workspace identifier is non-blank and trims
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingWorkspace` when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BitbucketError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BitbucketError::MissingWorkspace);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the workspace identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository slug wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug(String);

impl RepositorySlug {
    /// Validates that the repository slug is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `BitbucketError::MissingRepository` when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BitbucketError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BitbucketError::MissingRepository);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository slug.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
