//! gamelist-core - Core types for the gamelist client.
//!
//! Holds the pieces every front end shares: validated values, the session
//! store, the navigation collaborator, entity records, form validation and
//! the error type with its display mapping.

pub mod credentials;
pub mod entities;
pub mod error;
pub mod messages;
pub mod navigation;
pub mod session;
pub mod tokens;
pub mod types;
pub mod validation;

pub use credentials::Credentials;
pub use entities::{Game, GameList, UpdateListPayload, User};
pub use error::Error;
pub use messages::user_message;
pub use navigation::{Navigator, NoopNavigator, Route};
pub use session::SessionStore;
pub use tokens::{AccessToken, RefreshToken};
pub use types::ApiUrl;
pub use validation::FormValidator;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
