//! Endpoint paths and wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const LOGIN: &[&str] = &["auth", "login"];
pub const REGISTER: &[&str] = &["auth", "register"];
pub const LOGOUT: &[&str] = &["auth", "logout"];
pub const REFRESH: &[&str] = &["auth", "refresh"];

pub const CURRENT_USER: &[&str] = &["user", "me"];

/// `/gamelists/` keeps its trailing slash.
pub const GAMELISTS_ROOT: &[&str] = &["gamelists", ""];
pub const GAMELISTS: &[&str] = &["gamelists"];
pub const ADD_GAME: &[&str] = &["gamelists", "addgame"];
pub const REMOVE_GAME: &[&str] = &["gamelists", "removegame"];
pub const EDIT_GAME_USER: &[&str] = &["gamelists", "editgameuser"];

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of login and register.
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from login and refresh.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Body of `POST /gamelists`.
#[derive(Debug, Serialize)]
pub struct CreateListRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Response from `POST /gamelists`.
#[derive(Debug, Deserialize)]
pub struct CreateListResponse {
    #[serde(default)]
    pub id: Option<String>,
}

/// Body of addgame and removegame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGameRequest<'a> {
    pub game_id: &'a str,
    pub list_id: &'a str,
}

/// Body of editgameuser. A `None` user is sent as `null` to detach.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditGameUserRequest<'a> {
    pub game_id: &'a str,
    pub list_id: &'a str,
    pub user_id: Option<&'a str>,
}

/// Error body returned by the service.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
