//! In-memory session state.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::{AccessToken, RefreshToken};

/// The current credential pair.
///
/// One store is created per client and shared (by `Arc`) between the
/// request pipeline and the login/logout flows, so all of them observe the
/// same credentials. Reads return an empty token when nothing is held.
///
/// # Example
///
/// ```
/// use gamelist_core::SessionStore;
///
/// let store = SessionStore::new();
/// assert!(store.access_token().is_empty());
///
/// store.set_credentials("access", Some("refresh".to_string()));
/// assert_eq!(store.access_token().as_str(), "access");
///
/// store.clear_credentials();
/// assert!(!store.is_authenticated());
/// ```
#[derive(Default)]
pub struct SessionStore {
    tokens: RwLock<SessionTokens>,
}

#[derive(Default)]
struct SessionTokens {
    access_token: AccessToken,
    refresh_token: RefreshToken,
    /// Bumped on every change to the pair.
    generation: u64,
}

impl SessionTokens {
    fn replace(&mut self, access: AccessToken, refresh: RefreshToken) {
        self.access_token = access;
        self.refresh_token = refresh;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl SessionStore {
    /// Create an empty (logged out) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding previously saved credentials.
    pub fn with_credentials(access: impl Into<String>, refresh: Option<String>) -> Self {
        let store = Self::new();
        store.set_credentials(access, refresh);
        store
    }

    /// Replace both credentials.
    ///
    /// A missing refresh credential clears the stored one.
    pub fn set_credentials(&self, access: impl Into<String>, refresh: Option<String>) {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        tokens.replace(
            AccessToken::new(access),
            refresh.map(RefreshToken::new).unwrap_or_default(),
        );
        debug!(
            has_refresh_token = !tokens.refresh_token.is_empty(),
            "Session credentials updated"
        );
    }

    /// Forget both credentials.
    pub fn clear_credentials(&self) {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        tokens.replace(AccessToken::default(), RefreshToken::default());
        debug!("Session credentials cleared");
    }

    /// Changes each time the credentials are set or cleared.
    pub fn generation(&self) -> u64 {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    /// Like [`set_credentials`](Self::set_credentials), but only while the
    /// store is still at `generation`. Returns whether the pair was replaced.
    pub fn set_credentials_if_current(
        &self,
        generation: u64,
        access: impl Into<String>,
        refresh: Option<String>,
    ) -> bool {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        if tokens.generation != generation {
            return false;
        }
        tokens.replace(
            AccessToken::new(access),
            refresh.map(RefreshToken::new).unwrap_or_default(),
        );
        debug!("Session credentials renewed");
        true
    }

    /// Like [`clear_credentials`](Self::clear_credentials), but only while
    /// the store is still at `generation`. Returns whether it was cleared.
    pub fn clear_credentials_if_current(&self, generation: u64) -> bool {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        if tokens.generation != generation {
            return false;
        }
        tokens.replace(AccessToken::default(), RefreshToken::default());
        debug!("Session credentials cleared");
        true
    }

    pub fn access_token(&self) -> AccessToken {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    pub fn refresh_token(&self) -> RefreshToken {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .refresh_token
            .clone()
    }

    /// True while an access credential is held.
    pub fn is_authenticated(&self) -> bool {
        !self.access_token().is_empty()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
