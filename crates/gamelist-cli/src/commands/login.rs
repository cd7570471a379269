//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gamelist_core::Credentials;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long, env = "GAMELIST_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, ctx: &CliContext) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);
    credentials.validate().context("Invalid login details")?;

    eprintln!("{}", "Logging in...".dimmed());

    ctx.client
        .auth()
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", credentials.username());
    output::field("API", ctx.client.api().config().base_url.as_str());

    Ok(())
}
