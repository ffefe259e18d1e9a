// SPDX-License-Identifier: Apache-2.0

//! Environment-based configuration for issueboard.
//!
//! Each accessor reads one named environment variable and fails with a
//! [`IssueboardError::Config`] naming that variable when it is unset or
//! empty. Accessors do not cache; every call re-reads the environment.
//!
//! Commands compose the accessors into a [`Settings`] value once at startup
//! and pass it explicitly into client construction, so nothing below the
//! command layer touches the environment.

use secrecy::SecretString;

use crate::Result;
use crate::error::IssueboardError;

/// Environment variable holding the GitHub bearer token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the repository owner (user or org login).
pub const GITHUB_REPO_OWNER_ENV: &str = "GITHUB_REPO_OWNER";

/// Environment variable holding the repository name.
pub const GITHUB_REPO_NAME_ENV: &str = "GITHUB_REPO_NAME";

/// Environment variable holding the default Project V2 node id.
pub const GITHUB_PROJECT_ID_ENV: &str = "GITHUB_PROJECT_ID";

/// Environment variable overriding the REST base URL (GitHub Enterprise).
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";

/// Default REST base URL for the public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Reads a required environment variable, rejecting empty values.
fn required_env(variable: &'static str) -> Result<String> {
    match std::env::var(variable) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(IssueboardError::Config { variable }),
    }
}

/// Reads the GitHub bearer token from `GITHUB_TOKEN`.
pub fn github_token() -> Result<SecretString> {
    Ok(SecretString::from(required_env(GITHUB_TOKEN_ENV)?))
}

/// Reads the repository owner from `GITHUB_REPO_OWNER`.
pub fn repo_owner() -> Result<String> {
    required_env(GITHUB_REPO_OWNER_ENV)
}

/// Reads the repository name from `GITHUB_REPO_NAME`.
pub fn repo_name() -> Result<String> {
    required_env(GITHUB_REPO_NAME_ENV)
}

/// Reads the default Project V2 node id from `GITHUB_PROJECT_ID`.
///
/// Only required when an add-to-project path runs without an explicit
/// project id or title.
pub fn project_id() -> Result<String> {
    required_env(GITHUB_PROJECT_ID_ENV)
}

/// Returns the REST base URL: `GITHUB_API_URL` when set, the public API
/// otherwise. Trailing slashes are stripped.
pub fn api_base_url() -> String {
    match std::env::var(GITHUB_API_URL_ENV) {
        Ok(value) if !value.is_empty() => value.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Resolved settings for commands that operate on a repository.
///
/// Built once at command start; the token never appears in `Debug` output.
#[derive(Debug)]
pub struct Settings {
    /// Bearer token used for every API call.
    pub token: SecretString,
    /// Repository owner (user or organization login).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl Settings {
    /// Builds settings from the environment, validating each variable.
    ///
    /// # Errors
    ///
    /// Returns a [`IssueboardError::Config`] naming the first variable that
    /// is unset or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: github_token()?,
            owner: repo_owner()?,
            repo: repo_name()?,
        })
    }
}
