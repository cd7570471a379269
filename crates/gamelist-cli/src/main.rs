//! gamelist - command-line client for the gamelist service.
//!
//! A thin wrapper over `gamelist-http`: log in, search the catalog and
//! curate game lists from the terminal.

mod cli;
mod commands;
mod output;
mod session;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use gamelist_core::user_message;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    match commands::handle(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

/// The failing step, followed by a readable reason when the service was involved.
fn describe(err: &anyhow::Error) -> String {
    match err
        .chain()
        .find_map(|cause| cause.downcast_ref::<gamelist_core::Error>())
    {
        Some(api_err) => format!("{err}: {}", user_message(api_err, &api_err.to_string())),
        None => format!("{err:#}"),
    }
}
