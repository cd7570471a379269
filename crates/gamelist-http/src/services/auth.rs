//! Login, registration and logout.

use tracing::{debug, info, instrument, warn};

use gamelist_core::{AccessToken, Credentials, Result};

use crate::client::ApiClient;
use crate::endpoints::{AuthRequest, LOGIN, LOGOUT, REGISTER, TokenResponse};
use crate::request::ApiRequest;

/// Account operations. Login and logout update the shared session store.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for an access token and start a session.
    ///
    /// The returned token is also committed to the session store, so later
    /// calls through the same client carry it automatically.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        info!("Logging in");

        let body = AuthRequest {
            username: credentials.username(),
            password: credentials.password(),
        };
        let request = ApiRequest::post(self.client.url(LOGIN)).json(&body)?.public();
        let tokens: TokenResponse = self.client.fetch(request).await?;

        let access = AccessToken::new(tokens.access_token);
        self.client
            .session()
            .set_credentials(access.as_str(), tokens.refresh_token);

        debug!("Session started");
        Ok(access)
    }

    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        info!("Registering account");

        let body = AuthRequest {
            username: credentials.username(),
            password: credentials.password(),
        };
        let request = ApiRequest::post(self.client.url(REGISTER))
            .json(&body)?
            .public();
        self.client.send(request).await
    }

    /// End the session on the server and forget the local credentials.
    ///
    /// The local session is cleared even if the server call fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        info!("Logging out");

        let result = self
            .client
            .send(ApiRequest::post(self.client.url(LOGOUT)))
            .await;
        self.client.session().clear_credentials();

        if let Err(ref err) = result {
            warn!(error = %err, "Server-side logout failed");
        }
        result
    }
}
