//! Subcommand implementations.

mod list;
mod login;
mod logout;
mod register;
mod search;
mod whoami;

use anyhow::Result;
use clap::Subcommand;
use tracing::warn;

use crate::cli::Cli;
use crate::session::CliContext;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and save the session
    Login(login::LoginArgs),

    /// Create a new account
    Register(register::RegisterArgs),

    /// End the session
    Logout(logout::LogoutArgs),

    /// Show the signed-in user
    Whoami(whoami::WhoamiArgs),

    /// Search the game catalog by name
    Search(search::SearchArgs),

    /// Manage game lists
    List(list::ListCommand),
}

pub async fn handle(cli: Cli) -> Result<()> {
    let ctx = CliContext::open(&cli.connection)?;

    let result = match cli.command {
        Commands::Login(args) => login::run(args, &ctx).await,
        Commands::Register(args) => register::run(args, &ctx).await,
        Commands::Logout(args) => logout::run(args, &ctx).await,
        Commands::Whoami(args) => whoami::run(args, &ctx).await,
        Commands::Search(args) => search::run(args, &ctx).await,
        Commands::List(cmd) => list::handle(cmd, &ctx).await,
    };

    // Tokens may have been refreshed or dropped along the way.
    finish(result, ctx.persist())
}

/// The command's own failure takes precedence over a failure to save.
fn finish(result: Result<()>, persisted: Result<()>) -> Result<()> {
    match result {
        Ok(()) => persisted,
        Err(err) => {
            if let Err(persist_err) = persisted {
                warn!(error = %format!("{persist_err:#}"), "Failed to save session state");
            }
            Err(err)
        }
    }
}
