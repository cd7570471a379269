//! Navigation targets and the collaborator that follows them.

use std::fmt;

/// The client's views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    Profile,
    Fortune,
    CreateList,
    /// A single list, by id.
    List(String),
}

impl Route {
    /// The path of this view.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Fortune => "/fortune".to_string(),
            Route::CreateList => "/createlist".to_string(),
            Route::List(id) => format!("/list/{id}"),
        }
    }

    /// Route name as used by the view layer.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::Signup => "signup",
            Route::Profile => "profile",
            Route::Fortune => "fortune",
            Route::CreateList => "createList",
            Route::List(_) => "list",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Moves the user to another view.
///
/// The request pipeline calls this with [`Route::Login`] when a session can
/// no longer be refreshed. Fire-and-forget: implementations must not block.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// A navigator that ignores every command, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _route: Route) {}
}
