// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the issueboard CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging. Events
//! go to stderr so stdout stays machine-parseable. The `RUST_LOG`
//! environment variable overrides the defaults.
//!
//! # Examples
//!
//! ```bash
//! # Debug output for troubleshooting
//! RUST_LOG=issueboard_core=debug issueboard create-issue -t "Title" -f body.md
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// The `--verbose` flag raises the default filter to debug level;
/// `RUST_LOG`, when set, overrides both defaults.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "issueboard_cli=debug,issueboard_core=debug,reqwest=warn"
    } else {
        "issueboard_cli=warn,issueboard_core=warn,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
