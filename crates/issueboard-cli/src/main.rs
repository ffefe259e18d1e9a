// SPDX-License-Identifier: Apache-2.0

//! issueboard - create GitHub issues and add them to Project V2 boards.

mod cli;
mod commands;
mod errors;
mod logging;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = commands::run(cli.command).await {
        eprintln!("Error: {}", errors::format_error(&e));
        std::process::exit(1);
    }
}
