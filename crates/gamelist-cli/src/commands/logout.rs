//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, ctx: &CliContext) -> Result<()> {
    ctx.require_login()?;

    ctx.client
        .auth()
        .logout()
        .await
        .context("Server did not confirm logout, local session removed anyway")?;

    output::success("Logged out");
    Ok(())
}
