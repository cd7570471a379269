//! Show list command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// List id
    pub id: String,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, ctx: &CliContext) -> Result<()> {
    let list = ctx
        .client
        .lists()
        .get_list(&args.id)
        .await
        .context("Failed to fetch list")?;

    if args.json {
        return output::json_pretty(&list);
    }

    output::game_list(&list);
    Ok(())
}
