// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # issueboard-core
//!
//! Core library for the issueboard CLI - create GitHub issues and link them
//! to Project V2 boards.
//!
//! This crate provides the reusable pieces behind the command surface:
//! - Environment-based configuration resolution
//! - An authenticated GitHub API client (REST + GraphQL)
//! - The error taxonomy shared by every operation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use issueboard_core::{Settings, github::GitHubClient};
//!
//! # async fn example() -> issueboard_core::Result<()> {
//! // Resolve credentials and repository from the environment
//! let settings = Settings::from_env()?;
//!
//! // Create the client and post an issue
//! let client = GitHubClient::new(settings.token)?;
//! let issue = client
//!     .create_issue(
//!         &settings.owner,
//!         &settings.repo,
//!         "Panic on empty input",
//!         "Steps to reproduce...",
//!         &["bug".to_string()],
//!     )
//!     .await?;
//! println!("Created #{}", issue.number);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment accessors and the resolved [`Settings`] object
//! - [`error`] - Error types
//! - [`github`] - GitHub API client (issue creation, project lookups)

pub mod config;
pub mod error;
pub mod github;

pub use config::Settings;
pub use error::IssueboardError;

/// Convenience Result type for issueboard operations.
///
/// This is equivalent to `std::result::Result<T, IssueboardError>`.
pub type Result<T> = std::result::Result<T, IssueboardError>;
