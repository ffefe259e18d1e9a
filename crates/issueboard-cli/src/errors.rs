// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error` to
//! `IssueboardError` and adds per-variant hints. The raw response body, when
//! GitHub returned one, is appended so failed calls stay diagnosable.

use std::fmt::Write;

use anyhow::Error;
use issueboard_core::IssueboardError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not an `IssueboardError`, returns the original error
/// chain unchanged.
pub fn format_error(error: &Error) -> String {
    if let Some(err) = error.downcast_ref::<IssueboardError>() {
        match err {
            IssueboardError::Config { variable } => {
                format!("{err}\n\nTip: export {variable}=<value> and re-run.")
            }
            IssueboardError::Api { body, .. } => {
                let mut msg = err.to_string();
                if let Some(body) = body {
                    if !body.is_empty() {
                        let _ = write!(msg, "\nResponse: {body}");
                    }
                }
                msg
            }
            IssueboardError::Usage(_) => err.to_string(),
            IssueboardError::Network(_) => {
                format!("{err}\n\nTip: Check your internet connection and try again.")
            }
        }
    } else {
        format!("{error:#}")
    }
}
