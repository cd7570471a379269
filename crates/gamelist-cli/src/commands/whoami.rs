//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the user record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, ctx: &CliContext) -> Result<()> {
    ctx.require_login()?;

    let user = ctx
        .client
        .users()
        .current_user()
        .await
        .context("Failed to fetch current user")?;

    if args.json {
        return output::json_pretty(&user);
    }

    output::field("User", &user.username);
    output::field("ID", &user.id);
    output::field("Registered", &user.registration_date.to_rfc3339());
    output::field("API", ctx.client.api().config().base_url.as_str());

    Ok(())
}
