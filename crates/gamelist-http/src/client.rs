//! The authenticated request pipeline.
//!
//! Every call to the service goes through [`ApiClient::execute`]. The
//! request phase decorates the call with the current access token; the
//! response phase turns a 401 on a first attempt into one refresh and one
//! replay:
//!
//! ```text
//! SENT ─ success ──────────────────────────────▶ DONE
//!      ─ 401, first attempt ─▶ REFRESHING ─ ok ─▶ REPLAYED ─▶ DONE | FAILED
//!      │                                 ─ err ▶ LOGGED_OUT ─▶ FAILED
//!      ─ 401 on replay, or any other failure ──▶ FAILED
//! ```

use std::sync::{Arc, Mutex};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use gamelist_core::error::{ProtocolError, TransportError};
use gamelist_core::{AccessToken, Error, Navigator, Result, SessionStore};

use crate::config::ClientConfig;
use crate::endpoints::ErrorResponse;
use crate::refresh::RefreshState;
use crate::request::{ApiRequest, FirstAttempt, Replay};

/// HTTP client that attaches and renews session credentials.
///
/// Cheap to clone; clones share the connection pool, cookie jar, session
/// store and in-flight refresh.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) config: ClientConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) session: Arc<SessionStore>,
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) refresh: Mutex<RefreshState>,
}

/// How a first attempt ended.
enum FirstOutcome {
    Done(Result<reqwest::Response>),
    /// The server rejected `token`; the request may be replayed once.
    Rejected { replay: Replay, token: AccessToken },
}

impl ApiClient {
    /// Create a client for the configured service.
    ///
    /// `session` is shared with whoever performs login and logout;
    /// `navigator` is told to show the login view when a session cannot be
    /// refreshed.
    pub fn new(
        config: ClientConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                http,
                session,
                navigator,
                refresh: Mutex::new(RefreshState::default()),
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The session store this client reads credentials from.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.inner.session
    }

    /// URL of an endpoint under the configured base.
    pub fn url(&self, segments: &[&str]) -> Url {
        self.inner.config.base_url.endpoint(segments)
    }

    /// Send a request through the pipeline.
    ///
    /// Returns the successful response, or the failure of the last attempt.
    /// When the session could not be refreshed the error is
    /// [`AuthError::RefreshFailed`](gamelist_core::error::AuthError::RefreshFailed).
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn execute(&self, request: ApiRequest) -> Result<reqwest::Response> {
        if !request.is_refreshable() {
            let token = self.inner.session.access_token();
            return self.inner.dispatch(&request, &token).await;
        }

        match self.inner.send_first(FirstAttempt::new(request)).await {
            FirstOutcome::Done(result) => result,
            FirstOutcome::Rejected { replay, token } => {
                debug!("Access token rejected, refreshing session");
                let fresh = self.inner.refreshed_token(&token).await?;
                debug!("Replaying request with refreshed token");
                self.inner.dispatch(replay.request(), &fresh).await
            }
        }
    }

    /// Send a request and decode its JSON body.
    ///
    /// An empty body decodes as JSON `null`, so `Option<T>` targets accept it.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = self.execute(request).await?;
        decode_body(response, &self.inner.config).await
    }

    /// Send a request whose response body is ignored.
    pub async fn send(&self, request: ApiRequest) -> Result<()> {
        self.execute(request).await?;
        Ok(())
    }
}

impl ClientInner {
    async fn send_first(&self, attempt: FirstAttempt) -> FirstOutcome {
        let token = self.session.access_token();
        match self.dispatch(attempt.request(), &token).await {
            Err(err) if err.is_auth_error() => FirstOutcome::Rejected {
                replay: attempt.into_replay(),
                token,
            },
            result => FirstOutcome::Done(result),
        }
    }

    /// Put one request on the wire with `token` as its bearer credential.
    pub(crate) async fn dispatch(
        &self,
        request: &ApiRequest,
        token: &AccessToken,
    ) -> Result<reqwest::Response> {
        let mut builder = self
            .http
            .request(request.method().clone(), request.url().clone());

        if let Some(value) = bearer(token) {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, &self.config))?;

        check_status(response).await
    }
}

/// Authorization header for a non-empty token.
fn bearer(token: &AccessToken) -> Option<HeaderValue> {
    if token.is_empty() {
        return None;
    }
    match HeaderValue::from_str(&format!("Bearer {}", token.as_str())) {
        Ok(mut value) => {
            value.set_sensitive(true);
            Some(value)
        }
        Err(_) => {
            warn!("Access token is not a valid header value, sending request without it");
            None
        }
    }
}

/// Pass successful responses through; turn the rest into [`ProtocolError`].
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    trace!(status = %status, "HTTP response");

    if status.is_success() {
        return Ok(response);
    }

    let status = status.as_u16();
    let message = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorResponse>(&bytes)
            .ok()
            .and_then(|body| body.message),
        Err(_) => None,
    };
    Err(ProtocolError::new(status, message).into())
}

/// Decode a JSON body, reading an empty body as `null`.
pub(crate) async fn decode_body<R: DeserializeOwned>(
    response: reqwest::Response,
    config: &ClientConfig,
) -> Result<R> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| transport_error(e, config))?;

    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };

    serde_json::from_slice(body).map_err(|e| {
        TransportError::Decode {
            message: e.to_string(),
        }
        .into()
    })
}

pub(crate) fn transport_error(err: reqwest::Error, config: &ClientConfig) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: u64::try_from(config.timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    err.into()
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.config.base_url)
            .field("session", &self.inner.session)
            .finish()
    }
}
