// SPDX-License-Identifier: Apache-2.0

//! Project V2 operations over the GraphQL API.
//!
//! Two fixed query texts: a paginated listing of the owner organization's
//! boards, and the `addProjectV2ItemById` mutation.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use super::client::decode;
use super::{GitHubClient, PROJECT_PAGE_SIZE};
use crate::Result;
use crate::error::IssueboardError;

/// Paginated query listing an organization's Project V2 boards.
const LIST_PROJECTS_QUERY: &str = r"
query($owner: String!, $pageSize: Int!, $cursor: String) {
  organization(login: $owner) {
    projectsV2(first: $pageSize, after: $cursor) {
      nodes { id title }
      pageInfo { hasNextPage endCursor }
    }
  }
}
";

/// Mutation attaching an existing issue to a Project V2 board.
const ADD_ITEM_MUTATION: &str = r"
mutation($projectId: ID!, $contentId: ID!) {
  addProjectV2ItemById(input: {projectId: $projectId, contentId: $contentId}) {
    item { id }
  }
}
";

/// An item created on a Project V2 board.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectItem {
    /// Opaque identifier of the board item.
    pub id: String,
}

/// One project node from the listing query.
#[derive(Debug, Deserialize)]
struct ProjectNode {
    id: String,
    title: String,
}

/// Cursor state of a connection page.
#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "hasNextPage")]
    has_next_page: bool,
    #[serde(rename = "endCursor")]
    end_cursor: Option<String>,
}

/// Projects connection from the listing query.
#[derive(Debug, Deserialize)]
struct ProjectsConnection {
    nodes: Vec<ProjectNode>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
}

impl GitHubClient {
    /// Resolves a Project V2 node id by exact (case-sensitive) title match.
    ///
    /// Walks the organization's project list page by page, forwarding the
    /// opaque end cursor, and returns the first matching node.
    ///
    /// # Errors
    ///
    /// Returns an API error naming the title and owner when no page yields
    /// a match.
    #[instrument(skip(self), fields(owner = %owner, title = %title))]
    pub async fn find_project_by_title(&self, owner: &str, title: &str) -> Result<String> {
        let mut cursor: Option<String> = None;
        loop {
            let variables = json!({
                "owner": owner,
                "pageSize": PROJECT_PAGE_SIZE,
                "cursor": cursor,
            });
            let data = self.graphql(LIST_PROJECTS_QUERY, variables).await?;
            let connection = data
                .get("organization")
                .and_then(|org| org.get("projectsV2"))
                .cloned()
                .ok_or_else(|| IssueboardError::Api {
                    message: format!("No projects listing returned for org '{owner}'"),
                    status: None,
                    body: None,
                })?;
            let page: ProjectsConnection = decode(connection, "project listing")?;

            debug!(nodes = page.nodes.len(), "Scanning project page");
            if let Some(node) = page.nodes.into_iter().find(|n| n.title == title) {
                debug!(project_id = %node.id, "Project found");
                return Ok(node.id);
            }
            if !page.page_info.has_next_page {
                break;
            }
            cursor = page.page_info.end_cursor;
        }

        Err(IssueboardError::Api {
            message: format!("Project with title '{title}' not found in org '{owner}'"),
            status: None,
            body: None,
        })
    }

    /// Attaches an issue to a Project V2 board, returning the created item.
    ///
    /// # Errors
    ///
    /// Returns an API error for non-success statuses or a GraphQL `errors`
    /// array.
    #[instrument(skip(self), fields(project_id = %project_id))]
    pub async fn add_to_project(
        &self,
        project_id: &str,
        issue_node_id: &str,
    ) -> Result<ProjectItem> {
        let variables = json!({ "projectId": project_id, "contentId": issue_node_id });
        let data = self.graphql(ADD_ITEM_MUTATION, variables).await?;
        let item = data
            .get("addProjectV2ItemById")
            .and_then(|m| m.get("item"))
            .cloned()
            .ok_or_else(|| IssueboardError::Api {
                message: "Mutation response missing project item".to_string(),
                status: None,
                body: None,
            })?;
        let item: ProjectItem = decode(item, "project item")?;
        debug!(item_id = %item.id, "Issue attached to project");
        Ok(item)
    }
}
