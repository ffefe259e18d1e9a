// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the issueboard CLI.

pub mod issue;
pub mod project;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, Commands};

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::CreateIssue {
            title,
            body_file,
            label,
        } => issue::run_create(&title, &body_file, &label).await,

        Commands::AddToProject {
            issue_node_id,
            project_id,
            project_title,
        } => project::run_add(&issue_node_id, project_id, project_title).await,

        Commands::CreateAndAdd {
            title,
            body_file,
            label,
            project_id,
            project_title,
        } => {
            project::run_create_and_add(&title, &body_file, &label, project_id, project_title)
                .await
        }

        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "issueboard",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
