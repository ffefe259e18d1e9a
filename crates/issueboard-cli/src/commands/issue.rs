// SPDX-License-Identifier: Apache-2.0

//! Issue creation command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use issueboard_core::Settings;
use issueboard_core::github::{GitHubClient, IssueRef};

/// Creates an issue from a markdown file and prints its identifiers.
#[instrument(skip_all, fields(title = %title))]
pub async fn run_create(title: &str, body_file: &Path, labels: &[String]) -> Result<()> {
    let settings = Settings::from_env()?;
    let body = read_body(body_file)?;
    debug!(body_len = body.len(), labels = labels.len(), "Read issue body");

    let client = GitHubClient::new(settings.token)?;
    let issue = client
        .create_issue(&settings.owner, &settings.repo, title, &body, labels)
        .await?;

    print_issue(&issue);
    Ok(())
}

/// Reads the issue body from a local markdown file.
pub(crate) fn read_body(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read body file: {}", path.display()))
}

/// Prints the created issue's identifiers to stdout.
pub(crate) fn print_issue(issue: &IssueRef) {
    println!("Created issue #{}: {}", issue.number, issue.html_url);
    println!("Node ID: {}", issue.node_id);
}
