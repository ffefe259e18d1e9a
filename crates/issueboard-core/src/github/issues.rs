// SPDX-License-Identifier: Apache-2.0

//! Issue creation over the REST API.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use super::GitHubClient;
use super::client::decode;
use crate::Result;

/// Reference to a created issue.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    /// Issue number within the repository.
    pub number: u64,
    /// Web URL of the issue.
    pub html_url: String,
    /// Opaque GraphQL node identifier, used to attach the issue to boards.
    pub node_id: String,
}

impl GitHubClient {
    /// Creates an issue in `owner/repo`.
    ///
    /// The `labels` field is omitted from the payload when no labels are
    /// supplied; an absent field and an empty array are not interchangeable
    /// on every backend.
    ///
    /// # Errors
    ///
    /// Returns an API error carrying the status code and raw body for any
    /// non-success response.
    #[instrument(skip(self, body), fields(owner = %owner, repo = %repo))]
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<IssueRef> {
        let url = format!("{}/repos/{owner}/{repo}/issues", self.rest_url());
        let mut payload = json!({ "title": title, "body": body });
        if !labels.is_empty() {
            payload["labels"] = json!(labels);
        }

        let response = self.post_json(&url, &payload).await?;
        let issue: IssueRef = decode(response, "issue")?;
        debug!(number = issue.number, node_id = %issue.node_id, "Issue created");
        Ok(issue)
    }
}
