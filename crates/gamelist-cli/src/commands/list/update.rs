//! Update list command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use gamelist_core::UpdateListPayload;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// List id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

pub async fn run(args: UpdateArgs, ctx: &CliContext) -> Result<()> {
    if args.name.is_none() && args.description.is_none() {
        bail!("Nothing to update. Pass --name and/or --description.");
    }

    let lists = ctx.client.lists();
    let current = lists
        .get_list(&args.id)
        .await
        .context("Failed to fetch list")?;

    let mut payload = UpdateListPayload::from(current);
    if let Some(name) = args.name {
        payload.name = name;
    }
    if let Some(description) = args.description {
        payload.description = description;
    }

    lists
        .update_list(&payload)
        .await
        .context("Failed to update list")?;

    output::success("List updated");
    println!();
    output::field("Name", &payload.name);
    output::field("Description", &payload.description);

    Ok(())
}
