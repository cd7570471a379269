//! List subcommand implementations.

mod create;
mod games;
mod mine;
mod show;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(subcommand)]
    pub command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ListSubcommand {
    /// Create a new list
    Create(create::CreateArgs),

    /// Show one list with its games
    Show(show::ShowArgs),

    /// Show lists belonging to a user (defaults to you)
    Mine(mine::MineArgs),

    /// Rename a list or change its description
    Update(update::UpdateArgs),

    /// Add a game to a list
    AddGame(games::GameArgs),

    /// Remove a game from a list
    RemoveGame(games::GameArgs),

    /// Assign a game on a list to a user
    Assign(games::AssignArgs),

    /// Clear the user assigned to a game on a list
    Unassign(games::GameArgs),
}

pub async fn handle(cmd: ListCommand, ctx: &CliContext) -> Result<()> {
    ctx.require_login()?;

    match cmd.command {
        ListSubcommand::Create(args) => create::run(args, ctx).await,
        ListSubcommand::Show(args) => show::run(args, ctx).await,
        ListSubcommand::Mine(args) => mine::run(args, ctx).await,
        ListSubcommand::Update(args) => update::run(args, ctx).await,
        ListSubcommand::AddGame(args) => games::add(args, ctx).await,
        ListSubcommand::RemoveGame(args) => games::remove(args, ctx).await,
        ListSubcommand::Assign(args) => games::assign(args, ctx).await,
        ListSubcommand::Unassign(args) => games::unassign(args, ctx).await,
    }
}
