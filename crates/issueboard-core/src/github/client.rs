// SPDX-License-Identifier: Apache-2.0

//! Authenticated HTTP transport shared by the REST and GraphQL operations.

use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::Result;
use crate::config;
use crate::error::IssueboardError;

/// Authenticated GitHub API client.
///
/// Holds the HTTP client, bearer token, and endpoint URLs for reuse across
/// the one or two calls a command performs. No timeout is configured beyond
/// the transport default.
pub struct GitHubClient {
    /// Underlying HTTP client.
    http: Client,
    /// Bearer credential attached to every request.
    token: SecretString,
    /// REST base URL, without a trailing slash.
    rest_url: String,
    /// GraphQL endpoint, derived from the REST base URL.
    graphql_url: String,
}

impl GitHubClient {
    /// Creates a client against the configured API host.
    ///
    /// The REST base URL comes from `GITHUB_API_URL` when set, the public
    /// GitHub API otherwise; the GraphQL endpoint is derived from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: SecretString) -> Result<Self> {
        Self::with_base_url(token, &config::api_base_url())
    }

    /// Creates a client against an explicit REST base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_base_url(token: SecretString, base_url: &str) -> Result<Self> {
        let base = base_url.trim_end_matches('/');
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            token,
            rest_url: base.to_string(),
            graphql_url: format!("{base}/graphql"),
        })
    }

    /// REST base URL, without a trailing slash.
    pub(crate) fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// Issues an authenticated POST and decodes the JSON response.
    ///
    /// A non-2xx status is mapped to [`IssueboardError::Api`] carrying the
    /// status code and raw body, before any attempt to interpret the payload.
    pub(crate) async fn post_json(&self, url: &str, payload: &Value) -> Result<Value> {
        debug!(%url, "Sending POST request");
        let response = self
            .http
            .post(url)
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
            .header("Accept", super::ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", super::API_VERSION)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Maps non-success statuses to API errors, decodes JSON otherwise.
    async fn handle_response(response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IssueboardError::Api {
                message: format!(
                    "GitHub API error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
                status: Some(status.as_u16()),
                body: Some(body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| IssueboardError::Api {
            message: format!("GitHub API error: invalid JSON response: {e}"),
            status: None,
            body: Some(body),
        })
    }

    /// Sends a GraphQL request and returns the `data` payload.
    ///
    /// A top-level `errors` array is a failure regardless of HTTP status;
    /// all error messages are joined into a single API error.
    pub(crate) async fn graphql(&self, query: &str, variables: Value) -> Result<Value> {
        let payload = serde_json::json!({ "query": query, "variables": variables });
        let response = self.post_json(&self.graphql_url, &payload).await?;

        if let Some(errors) = response.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect();
            return Err(IssueboardError::Api {
                message: format!("GraphQL error: {}", messages.join("; ")),
                status: None,
                body: None,
            });
        }

        response
            .get("data")
            .cloned()
            .ok_or_else(|| IssueboardError::Api {
                message: "GraphQL response missing 'data' field".to_string(),
                status: None,
                body: None,
            })
    }
}

/// Decodes an extracted JSON value into a typed payload.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| IssueboardError::Api {
        message: format!("Unexpected {what} payload: {e}"),
        status: None,
        body: None,
    })
}
