//! Client setup around the persisted session.

pub mod storage;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use gamelist_core::error::AuthError;
use gamelist_core::{ApiUrl, Error, Navigator, Route, SessionStore};
use gamelist_http::{ClientConfig, GameListClient};

use crate::cli::ConnectionArgs;
use crate::output;

/// Sends the user back to `gamelist login` when the session has ended.
#[derive(Debug, Default)]
pub struct LoginPrompt;

impl Navigator for LoginPrompt {
    fn navigate(&self, route: Route) {
        match route {
            Route::Login => {
                if let Err(e) = storage::clear_session() {
                    warn!(error = %e, "Failed to remove stale session");
                }
                output::warning("Your session has expired. Run 'gamelist login' to sign in again.");
            }
            other => debug!(route = other.name(), path = %other, "Ignoring navigation"),
        }
    }
}

/// A client wired to the saved session.
pub struct CliContext {
    pub client: GameListClient,
    api_url: ApiUrl,
}

impl CliContext {
    /// Build a client, restoring the saved session if it was made against
    /// the same API.
    pub fn open(args: &ConnectionArgs) -> Result<Self> {
        let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;

        let session = match storage::load_session().context("Failed to load session")? {
            Some(stored) if ApiUrl::new(&stored.api_url).ok().as_ref() == Some(&api_url) => {
                SessionStore::with_credentials(stored.access_token, stored.refresh_token)
            }
            Some(stored) => {
                warn!(saved = %stored.api_url, "Saved session belongs to another API, ignoring it");
                SessionStore::new()
            }
            None => SessionStore::new(),
        };

        let config = ClientConfig::new(api_url.clone())
            .with_timeout(Duration::from_secs(args.timeout_secs));
        let client = GameListClient::new(config, Arc::new(session), Arc::new(LoginPrompt))
            .context("Failed to create HTTP client")?;

        Ok(Self { client, api_url })
    }

    /// Fail early when a command needs a session and there is none.
    pub fn require_login(&self) -> Result<()> {
        if !self.client.session().is_authenticated() {
            return Err(Error::from(AuthError::NotAuthenticated))
                .context("Not logged in, run 'gamelist login' first");
        }
        Ok(())
    }

    /// Write the current credentials back, or remove them once logged out.
    pub fn persist(&self) -> Result<()> {
        let session = self.client.session();
        if session.is_authenticated() {
            storage::save_session(&self.api_url, session).context("Failed to save session")
        } else {
            storage::clear_session().context("Failed to clear session")
        }
    }
}
