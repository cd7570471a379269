//! Typed operations over the request pipeline.

mod auth;
mod games;
mod lists;
mod users;

use std::sync::Arc;

use gamelist_core::{Navigator, Result, SessionStore};

pub use auth::AuthService;
pub use games::GameService;
pub use lists::ListService;
pub use users::UserService;

use crate::client::ApiClient;
use crate::config::ClientConfig;

/// All services over one shared [`ApiClient`].
#[derive(Debug, Clone)]
pub struct GameListClient {
    client: ApiClient,
}

impl GameListClient {
    pub fn new(
        config: ClientConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(config, session, navigator)?))
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn api(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.client.session()
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    pub fn games(&self) -> GameService {
        GameService::new(self.client.clone())
    }

    pub fn lists(&self) -> ListService {
        ListService::new(self.client.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.client.clone())
    }
}
