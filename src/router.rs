//! Route table: one path per screen.

use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Gallery,
    Services,
    Admin,
}

impl Route {
    /// Every route, in navigation-bar order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Services, Route::Gallery, Route::Admin];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gallery => "/gallery",
            Route::Services => "/services",
            Route::Admin => "/admin",
        }
    }

    /// Navigation-bar label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Gallery => "Gallery",
            Route::Services => "Services",
            Route::Admin => "Admin",
        }
    }

    /// Exact path lookup. Trailing slashes and query strings are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/gallery" => Some(Route::Gallery),
            "/services" => Some(Route::Services),
            "/admin" => Some(Route::Admin),
            _ => None,
        }
    }

    /// Resolve a path, falling back to Home for unknown paths.
    pub fn from_path(path: &str) -> Route {
        Route::parse(path).unwrap_or_else(|| {
            warn!(path = %path, "Unknown route, showing home page");
            Route::Home
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
