//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gamelist_core::{Credentials, FormValidator};

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username (at least 5 characters, starting with a letter or digit)
    #[arg(long)]
    pub username: String,

    /// Password (at least 6 characters)
    #[arg(long, env = "GAMELIST_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Repeat the password to guard against typos
    #[arg(long)]
    pub confirm_password: Option<String>,
}

pub async fn run(args: RegisterArgs, ctx: &CliContext) -> Result<()> {
    let credentials = Credentials::new(&args.username, &args.password);
    credentials.validate().context("Invalid account details")?;
    if let Some(confirmation) = &args.confirm_password {
        FormValidator::validate_password_match(&args.password, confirmation)
            .map_err(gamelist_core::Error::from)
            .context("Invalid account details")?;
    }

    eprintln!("{}", "Creating account...".dimmed());

    ctx.client
        .auth()
        .register(&credentials)
        .await
        .context("Failed to register")?;

    output::success("Account created");
    println!();
    output::field("User", credentials.username());
    eprintln!("{}", "Run 'gamelist login' to start a session.".dimmed());

    Ok(())
}
