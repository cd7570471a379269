//! User profile.

use tracing::instrument;

use gamelist_core::{Result, User};

use crate::client::ApiClient;
use crate::endpoints::CURRENT_USER;
use crate::request::ApiRequest;

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The account the session belongs to.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User> {
        self.client
            .fetch(ApiRequest::get(self.client.url(CURRENT_USER)))
            .await
    }
}
