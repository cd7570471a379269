//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use gamelist_core::{Game, GameList};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning to stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one game as a single line.
pub fn game(game: &Game) {
    println!("{}  {}", game.id.dimmed(), game.name.bold());
}

/// Print a list header followed by its games.
pub fn game_list(list: &GameList) {
    println!("{}  {}", list.id.dimmed(), list.name.bold());
    if !list.description.is_empty() && list.description != list.name {
        println!("    {}", list.description);
    }
    field("    Created", &list.created_at.format("%Y-%m-%d %H:%M").to_string());
    if let Some(user) = &list.user {
        field("    Owner", user);
    }
    for game in &list.games {
        println!("    - {} {}", game.name, format!("({})", game.id).dimmed());
    }
}
