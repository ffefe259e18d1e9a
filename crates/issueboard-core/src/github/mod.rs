// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Issue creation goes over REST; project lookups and attachment go over
//! GraphQL. Both share one authenticated [`GitHubClient`] and one error
//! mapping: HTTP status is checked before the body is interpreted, and a
//! GraphQL `errors` array fails the call regardless of status.

mod client;
mod issues;
mod projects;

pub use client::GitHubClient;
pub use issues::IssueRef;
pub use projects::ProjectItem;

/// Versioned JSON media type GitHub expects on every call.
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Pinned API schema version sent with every call.
pub const API_VERSION: &str = "2022-11-28";

/// Page size for the paginated project listing query.
pub(crate) const PROJECT_PAGE_SIZE: u32 = 100;
