//! Request descriptors and per-attempt retry state.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use gamelist_core::Result;
use gamelist_core::error::InvalidInputError;

/// An outgoing call, described independently of any credential.
///
/// The descriptor never changes once built; the authorization header is
/// derived from the session at dispatch time, so the same descriptor can be
/// replayed after a refresh.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    body: Option<serde_json::Value>,
    refreshable: bool,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            refreshable: true,
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn patch(url: Url) -> Self {
        Self::new(Method::PATCH, url)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Body {
            message: e.to_string(),
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Mark the call as one that must not trigger a session refresh.
    ///
    /// Used for the credential-issuing endpoints, where a 401 means the
    /// submitted username or password was wrong.
    pub fn public(mut self) -> Self {
        self.refreshable = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn is_refreshable(&self) -> bool {
        self.refreshable
    }
}

/// The first dispatch of a request. It alone may lead to a refresh.
#[derive(Debug)]
pub(crate) struct FirstAttempt(ApiRequest);

/// The single replay that follows a refresh. It has no way back to a
/// refresh, so a request is retried at most once.
#[derive(Debug)]
pub(crate) struct Replay(ApiRequest);

impl FirstAttempt {
    pub(crate) fn new(request: ApiRequest) -> Self {
        Self(request)
    }

    pub(crate) fn request(&self) -> &ApiRequest {
        &self.0
    }

    /// Spend the first attempt, yielding its only replay.
    pub(crate) fn into_replay(self) -> Replay {
        Replay(self.0)
    }
}

impl Replay {
    pub(crate) fn request(&self) -> &ApiRequest {
        &self.0
    }
}
