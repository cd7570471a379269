//! Catalog search.

use tracing::{debug, instrument};

use gamelist_core::{Game, Result};

use crate::client::ApiClient;
use crate::request::ApiRequest;

#[derive(Debug, Clone)]
pub struct GameService {
    client: ApiClient,
}

impl GameService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Games whose name matches `name`.
    ///
    /// The term is trimmed; a blank term yields no results without a call.
    #[instrument(skip(self))]
    pub async fn search_games(&self, name: &str) -> Result<Vec<Game>> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Blank search term, skipping request");
            return Ok(Vec::new());
        }

        let request = ApiRequest::get(self.client.url(&["game", "name", name]));
        let games: Option<Vec<Game>> = self.client.fetch(request).await?;
        let games = games.unwrap_or_default();

        debug!(count = games.len(), "Search finished");
        Ok(games)
    }
}
