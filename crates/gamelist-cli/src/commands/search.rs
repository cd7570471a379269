//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name (or part of a name) to look for
    pub name: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs, ctx: &CliContext) -> Result<()> {
    let games = ctx
        .client
        .games()
        .search_games(&args.name)
        .await
        .context("Search failed")?;

    if args.json {
        return output::json_pretty(&games);
    }

    if games.is_empty() {
        eprintln!("{}", "No games found.".dimmed());
        return Ok(());
    }

    for game in &games {
        output::game(game);
    }

    Ok(())
}
