//! Session refresh with a single request in flight.
//!
//! Requests that are rejected while a refresh is running wait for that
//! refresh instead of starting their own. The refresh runs on its own task,
//! so a waiter that gives up does not cancel it for the others.

use std::sync::{Arc, PoisonError};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tracing::{debug, info, instrument, warn};

use gamelist_core::error::{AuthError, TransportError};
use gamelist_core::{AccessToken, Error, Result, Route};

use crate::client::{ClientInner, check_status, decode_body, transport_error};
use crate::endpoints::{REFRESH, TokenResponse};

type SharedRefresh = Shared<BoxFuture<'static, Result<AccessToken>>>;

/// Bookkeeping behind the client's refresh mutex.
#[derive(Default)]
pub(crate) struct RefreshState {
    /// The refresh currently running, if any.
    pending: Option<SharedRefresh>,
    /// The token a failed refresh tried to replace, and how it failed.
    failed: Option<(AccessToken, Error)>,
}

impl ClientInner {
    /// A token to replay with after `rejected` was refused by the server.
    pub(crate) async fn refreshed_token(self: &Arc<Self>, rejected: &AccessToken) -> Result<AccessToken> {
        let pending = {
            let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);

            // Read before the token, so a change in between is caught on commit.
            let generation = self.session.generation();
            let current = self.session.access_token();
            if !current.is_empty() && current != *rejected {
                debug!("Session already holds a newer token");
                return Ok(current);
            }

            if let Some((token, err)) = &state.failed
                && !rejected.is_empty()
                && token == rejected
            {
                debug!("Refresh for this token already failed");
                return Err(err.clone());
            }

            if current != *rejected {
                debug!("Session ended while the request was in flight");
                return Err(AuthError::NotAuthenticated.into());
            }

            match &state.pending {
                Some(pending) => {
                    debug!("Joining in-flight refresh");
                    pending.clone()
                }
                None => {
                    let pending = self.spawn_refresh(rejected.clone(), generation);
                    state.pending = Some(pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    fn spawn_refresh(self: &Arc<Self>, rejected: AccessToken, generation: u64) -> SharedRefresh {
        let inner = Arc::clone(self);
        let task = tokio::spawn(async move { inner.run_refresh(rejected, generation).await });

        async move {
            task.await.unwrap_or_else(|e| {
                Err(TransportError::Http {
                    message: format!("refresh task failed: {e}"),
                }
                .into())
            })
        }
        .boxed()
        .shared()
    }

    /// Obtain new credentials and commit them, or end the session.
    ///
    /// Nothing is committed if the session was changed (by login or logout)
    /// after `generation` was read; that change wins.
    #[instrument(skip_all)]
    async fn run_refresh(&self, rejected: AccessToken, generation: u64) -> Result<AccessToken> {
        info!("Refreshing session");
        let outcome = self.request_credentials().await;

        let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);
        state.pending = None;

        match outcome {
            Ok(tokens) => {
                let access = AccessToken::new(tokens.access_token);
                if !self.session.set_credentials_if_current(
                    generation,
                    access.as_str(),
                    tokens.refresh_token,
                ) {
                    debug!("Session changed during refresh, discarding new credentials");
                    return self.current_token();
                }
                state.failed = None;
                debug!("Session refreshed successfully");
                Ok(access)
            }
            Err(err) => {
                let err = Error::from(AuthError::refresh_failed(err));
                if !self.session.clear_credentials_if_current(generation) {
                    debug!(error = %err, "Session changed during failed refresh, keeping it");
                    return self.current_token();
                }
                warn!(error = %err, "Session refresh failed, logging out");
                state.failed = Some((rejected, err.clone()));
                drop(state);

                self.navigator.navigate(Route::Login);
                Err(err)
            }
        }
    }

    /// The session's token, or `NotAuthenticated` once it has been cleared.
    fn current_token(&self) -> Result<AccessToken> {
        let current = self.session.access_token();
        if current.is_empty() {
            return Err(AuthError::NotAuthenticated.into());
        }
        Ok(current)
    }

    /// `POST /auth/refresh`, straight on the HTTP client.
    ///
    /// The session is linked by the cookie jar and, when one is held, by the
    /// refresh token sent as a bearer credential.
    async fn request_credentials(&self) -> Result<TokenResponse> {
        let mut request = self.http.post(self.config.base_url.endpoint(REFRESH));

        let refresh_token = self.session.refresh_token();
        if !refresh_token.is_empty() {
            request = request.bearer_auth(refresh_token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, &self.config))?;
        let response = check_status(response).await?;
        decode_body(response, &self.config).await
    }
}
