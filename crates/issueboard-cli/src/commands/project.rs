// SPDX-License-Identifier: Apache-2.0

//! Project V2 commands: attach an existing issue, or create-and-attach.

use std::path::Path;

use anyhow::Result;
use tracing::instrument;

use issueboard_core::github::GitHubClient;
use issueboard_core::{IssueboardError, Settings, config};

use super::issue::{print_issue, read_body};

/// Where the project reference comes from; exactly one source applies.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ProjectSource {
    /// Explicit node id from `--project-id`.
    Id(String),
    /// Title from `--project-title`, resolved via GraphQL.
    Title(String),
    /// Configured default from `GITHUB_PROJECT_ID`.
    Default,
}

/// Picks the project source from the mutually exclusive CLI flags.
///
/// Runs before any client is built, so the error path never touches the
/// network.
pub(crate) fn project_source(
    project_id: Option<String>,
    project_title: Option<String>,
) -> Result<ProjectSource, IssueboardError> {
    match (project_id, project_title) {
        (Some(_), Some(_)) => Err(IssueboardError::Usage(
            "Provide --project-id or --project-title, not both.".to_string(),
        )),
        (Some(id), None) => Ok(ProjectSource::Id(id)),
        (None, Some(title)) => Ok(ProjectSource::Title(title)),
        (None, None) => Ok(ProjectSource::Default),
    }
}

/// Resolves the source to a concrete project node id.
async fn resolve_project_id(
    client: &GitHubClient,
    owner: &str,
    source: ProjectSource,
) -> Result<String> {
    match source {
        ProjectSource::Id(id) => Ok(id),
        ProjectSource::Title(title) => Ok(client.find_project_by_title(owner, &title).await?),
        ProjectSource::Default => Ok(config::project_id()?),
    }
}

/// Attaches an existing issue to a project board and prints the item id.
#[instrument(skip_all, fields(issue_node_id = %issue_node_id))]
pub async fn run_add(
    issue_node_id: &str,
    project_id: Option<String>,
    project_title: Option<String>,
) -> Result<()> {
    let source = project_source(project_id, project_title)?;
    let token = config::github_token()?;
    let owner = config::repo_owner()?;

    let client = GitHubClient::new(token)?;
    let project = resolve_project_id(&client, &owner, source).await?;
    let item = client.add_to_project(&project, issue_node_id).await?;

    println!("Added to project. Item ID: {}", item.id);
    Ok(())
}

/// Creates an issue, then attaches it to a project board.
///
/// The issue's identifiers are printed as soon as it exists; an attach
/// failure after that point leaves a created issue behind and the printed
/// reference is the operator's handle on it.
#[instrument(skip_all, fields(title = %title))]
pub async fn run_create_and_add(
    title: &str,
    body_file: &Path,
    labels: &[String],
    project_id: Option<String>,
    project_title: Option<String>,
) -> Result<()> {
    let source = project_source(project_id, project_title)?;
    let settings = Settings::from_env()?;
    let body = read_body(body_file)?;

    let client = GitHubClient::new(settings.token)?;
    let project = resolve_project_id(&client, &settings.owner, source).await?;

    let issue = client
        .create_issue(&settings.owner, &settings.repo, title, &body, labels)
        .await?;
    print_issue(&issue);

    let item = client.add_to_project(&project, &issue.node_id).await?;
    println!("Added to project. Item ID: {}", item.id);
    Ok(())
}
