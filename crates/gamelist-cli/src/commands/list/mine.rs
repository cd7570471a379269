//! Lists-by-user command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct MineArgs {
    /// User id (defaults to the signed-in user)
    #[arg(long)]
    pub user: Option<String>,

    /// Only lists you may add games to
    #[arg(long)]
    pub available: bool,

    /// Print lists as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: MineArgs, ctx: &CliContext) -> Result<()> {
    let user_id = match args.user {
        Some(id) => id,
        None => {
            ctx.client
                .users()
                .current_user()
                .await
                .context("Failed to fetch current user")?
                .id
        }
    };

    let lists = ctx.client.lists();
    let lists = if args.available {
        lists.available_lists(&user_id).await
    } else {
        lists.user_lists(&user_id).await
    }
    .context("Failed to fetch lists")?;

    if args.json {
        return output::json_pretty(&lists);
    }

    if lists.is_empty() {
        eprintln!("{}", "No lists found.".dimmed());
        return Ok(());
    }

    for list in &lists {
        output::game_list(list);
        println!();
    }

    Ok(())
}
