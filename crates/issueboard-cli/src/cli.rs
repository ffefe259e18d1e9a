// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for issueboard.
//!
//! Uses clap's derive API for declarative parsing. Three operations plus
//! shell completion generation; project flags are validated in the command
//! layer so the mutual-exclusion error carries a precise message.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// issueboard - create GitHub issues and add them to Project V2 boards.
///
/// Credentials and repository coordinates come from the environment:
/// GITHUB_TOKEN, GITHUB_REPO_OWNER, GITHUB_REPO_NAME, and optionally
/// GITHUB_PROJECT_ID as the default board.
#[derive(Parser)]
#[command(name = "issueboard")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a GitHub issue from a markdown file
    CreateIssue {
        /// Issue title
        #[arg(long, short = 't')]
        title: String,

        /// Path to a markdown file with the issue body
        #[arg(long, short = 'f', value_name = "PATH")]
        body_file: PathBuf,

        /// Label to add (repeatable)
        #[arg(long, short = 'l', value_name = "LABEL")]
        label: Vec<String>,
    },

    /// Add an existing issue to a GitHub Project V2 board
    AddToProject {
        /// Issue node ID
        #[arg(long, short = 'i')]
        issue_node_id: String,

        /// Project V2 node ID (fallback: GITHUB_PROJECT_ID env var)
        #[arg(long, short = 'p')]
        project_id: Option<String>,

        /// Project V2 title (looked up via GraphQL)
        #[arg(long, short = 'T')]
        project_title: Option<String>,
    },

    /// Create an issue and add it to a GitHub Project V2 board
    CreateAndAdd {
        /// Issue title
        #[arg(long, short = 't')]
        title: String,

        /// Path to a markdown file with the issue body
        #[arg(long, short = 'f', value_name = "PATH")]
        body_file: PathBuf,

        /// Label to add (repeatable)
        #[arg(long, short = 'l', value_name = "LABEL")]
        label: Vec<String>,

        /// Project V2 node ID (fallback: GITHUB_PROJECT_ID env var)
        #[arg(long, short = 'p')]
        project_id: Option<String>,

        /// Project V2 title (looked up via GraphQL)
        #[arg(long, short = 'T')]
        project_title: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
