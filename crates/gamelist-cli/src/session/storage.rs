//! Session storage for persisting login state between runs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use gamelist_core::{ApiUrl, SessionStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredSession {
    pub api_url: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "gamelist").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save the credentials held by `session` to disk.
pub fn save_session(api_url: &ApiUrl, session: &SessionStore) -> Result<()> {
    let refresh_token = session.refresh_token();
    let stored = StoredSession {
        api_url: api_url.to_string(),
        access_token: session.access_token().as_str().to_string(),
        refresh_token: (!refresh_token.is_empty()).then(|| refresh_token.as_str().to_string()),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load the saved session, if there is one.
pub fn load_session() -> Result<Option<StoredSession>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    Ok(Some(stored))
}

/// Clear the stored session.
pub fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
