//! gamelist-http - Authenticated HTTP client for the gamelist service.
//!
//! [`ApiClient`] is the single egress point: it attaches the session's access
//! token to each call and, when the service answers 401, refreshes the
//! session once and replays the call. The domain services wrap it with typed
//! operations.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gamelist_core::{ApiUrl, Credentials, NoopNavigator, SessionStore};
//! use gamelist_http::{ClientConfig, GameListClient};
//!
//! # async fn example() -> Result<(), gamelist_core::Error> {
//! let config = ClientConfig::new(ApiUrl::new("https://games.example/api")?);
//! let client = GameListClient::new(config, Arc::new(SessionStore::new()), Arc::new(NoopNavigator))?;
//!
//! client.auth().login(&Credentials::new("alice", "hunter22")).await?;
//! for game in client.games().search_games("zelda").await? {
//!     println!("{}: {}", game.id, game.name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoints;
mod refresh;
mod request;
mod services;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use request::ApiRequest;
pub use services::{AuthService, GameListClient, GameService, ListService, UserService};
