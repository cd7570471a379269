//! Create list command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new list
    pub name: String,
}

pub async fn run(args: CreateArgs, ctx: &CliContext) -> Result<()> {
    let id = ctx
        .client
        .lists()
        .create_list(&args.name)
        .await
        .context("Failed to create list")?;

    output::success("List created");
    println!();
    output::field("Name", &args.name);
    if let Some(id) = id {
        output::field("ID", &id);
    }

    Ok(())
}
