//! CLI argument definitions.

use clap::{Args, Parser};

use gamelist_core::types::DEFAULT_API_URL;

use crate::commands::Commands;

/// Command-line client for the gamelist service.
#[derive(Parser, Debug)]
#[command(name = "gamelist")]
#[command(author, version = env!("GAMELIST_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how to reach the service.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the gamelist API
    #[arg(long, env = "GAMELIST_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout_secs: u64,
}
