// SPDX-License-Identifier: Apache-2.0

//! Error types for issueboard.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during issueboard operations.
#[derive(Error, Debug)]
pub enum IssueboardError {
    /// Required environment variable is missing or empty.
    #[error("{variable} environment variable is not set")]
    Config {
        /// Name of the missing variable.
        variable: &'static str,
    },

    /// GitHub reported a failure, over REST or GraphQL.
    ///
    /// Transport-level failures carry the HTTP status and the raw response
    /// body; backend-reported failures (GraphQL `errors`, lookup misses)
    /// carry only a message.
    #[error("{message}")]
    Api {
        /// Human-readable description of the failure.
        message: String,
        /// HTTP status code, when the failure was transport-level.
        status: Option<u16>,
        /// Raw response body, when one was received.
        body: Option<String>,
    },

    /// Invalid combination of command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Request could not be completed at the transport level.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
