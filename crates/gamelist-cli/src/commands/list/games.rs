//! Commands that edit the games on a list.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct GameArgs {
    /// List id
    #[arg(long)]
    pub list: String,

    /// Game id
    #[arg(long)]
    pub game: String,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    #[command(flatten)]
    pub target: GameArgs,

    /// User to assign the game to
    #[arg(long)]
    pub user: String,
}

pub async fn add(args: GameArgs, ctx: &CliContext) -> Result<()> {
    ctx.client
        .lists()
        .add_game(&args.list, &args.game)
        .await
        .context("Failed to add game")?;

    output::success("Game added");
    Ok(())
}

pub async fn remove(args: GameArgs, ctx: &CliContext) -> Result<()> {
    ctx.client
        .lists()
        .remove_game(&args.list, &args.game)
        .await
        .context("Failed to remove game")?;

    output::success("Game removed");
    Ok(())
}

pub async fn assign(args: AssignArgs, ctx: &CliContext) -> Result<()> {
    ctx.client
        .lists()
        .attach_game_to_user(&args.target.list, &args.target.game, &args.user)
        .await
        .context("Failed to assign game")?;

    output::success("Game assigned");
    output::field("User", &args.user);
    Ok(())
}

pub async fn unassign(args: GameArgs, ctx: &CliContext) -> Result<()> {
    ctx.client
        .lists()
        .detach_game_from_user(&args.list, &args.game)
        .await
        .context("Failed to unassign game")?;

    output::success("Game unassigned");
    Ok(())
}
