//! Records exchanged with the gamelist service.
//!
//! Field names follow the service's camelCase JSON.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A game from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,

    /// Fields this client does not interpret.
    ///
    /// Kept so that a list can be written back with its games unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A user's list of games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameList {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Owner of the list, when the service includes it.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub games: Vec<Game>,
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(deserialize_with = "timestamp")]
    pub registration_date: DateTime<Utc>,
}

/// Body of `PATCH /gamelists/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateListPayload {
    pub id: String,
    pub name: String,
    pub description: String,
    pub games: Vec<Game>,
}

impl From<GameList> for UpdateListPayload {
    fn from(list: GameList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            description: list.description,
            games: list.games,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 timestamps, and offset-less ones which are taken as UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}
