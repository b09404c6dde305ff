//! Route table and session gate
//!
//! Five paths map to five screens. Everything but `/auth` requires a session;
//! `/auth` itself bounces an authenticated user to the feed.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Auth,
    Feed,
    Search,
    Chat,
    Profile,
}

impl Route {
    /// Screens reachable from the bottom navigation bar, in bar order
    pub const TABS: [Route; 4] = [Route::Feed, Route::Search, Route::Chat, Route::Profile];

    pub fn path(self) -> &'static str {
        match self {
            Route::Auth => "/auth",
            Route::Feed => "/",
            Route::Search => "/search",
            Route::Chat => "/chat",
            Route::Profile => "/profile",
        }
    }

    /// Parse a navigation path
    ///
    /// Trailing slashes are ignored; anything unrecognised lands on the feed.
    ///
    /// # Examples
    /// ```
    /// use foodmatch::Route;
    ///
    /// assert_eq!(Route::from_path("/chat"), Route::Chat);
    /// assert_eq!(Route::from_path("/search/"), Route::Search);
    /// assert_eq!(Route::from_path("/nowhere"), Route::Feed);
    /// ```
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "/auth" => Route::Auth,
            "/search" => Route::Search,
            "/chat" => Route::Chat,
            "/profile" => Route::Profile,
            _ => Route::Feed,
        }
    }

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Route::Auth => "Sign in",
            Route::Feed => "Feed",
            Route::Search => "Search",
            Route::Chat => "Chats",
            Route::Profile => "Profile",
        }
    }

    pub fn requires_session(self) -> bool {
        self != Route::Auth
    }

    /// Position in the navigation bar (None for auth)
    pub fn tab_index(self) -> Option<usize> {
        Route::TABS.iter().position(|r| *r == self)
    }

    /// Next tab to the right, wrapping
    pub fn next_tab(self) -> Route {
        let idx = self.tab_index().map(|i| (i + 1) % Route::TABS.len()).unwrap_or(0);
        Route::TABS[idx]
    }

    /// Next tab to the left, wrapping
    pub fn prev_tab(self) -> Route {
        let len = Route::TABS.len();
        let idx = self.tab_index().map(|i| (i + len - 1) % len).unwrap_or(0);
        Route::TABS[idx]
    }
}

/// Apply the session gate to a requested route
///
/// # Examples
/// ```
/// use foodmatch::Route;
/// use foodmatch::logic::router::resolve;
///
/// assert_eq!(resolve(Route::Chat, false), Route::Auth);
/// assert_eq!(resolve(Route::Auth, true), Route::Feed);
/// assert_eq!(resolve(Route::Chat, true), Route::Chat);
/// ```
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    match (requested, authenticated) {
        (Route::Auth, true) => Route::Feed,
        (route, false) if route.requires_session() => Route::Auth,
        (route, _) => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 5] = [Route::Auth, Route::Feed, Route::Search, Route::Chat, Route::Profile];

    #[test]
    fn test_paths_round_trip() {
        for route in ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_root_path_is_feed() {
        assert_eq!(Route::from_path("/"), Route::Feed);
        assert_eq!(Route::from_path(""), Route::Feed);
    }

    #[test]
    fn test_anonymous_is_sent_to_auth() {
        for route in ALL {
            assert_eq!(resolve(route, false), Route::Auth);
        }
    }

    #[test]
    fn test_authenticated_never_sees_auth() {
        for route in ALL {
            let resolved = resolve(route, true);
            assert_ne!(resolved, Route::Auth);
            if route != Route::Auth {
                assert_eq!(resolved, route);
            }
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Route::Feed.next_tab(), Route::Search);
        assert_eq!(Route::Profile.next_tab(), Route::Feed);
        assert_eq!(Route::Feed.prev_tab(), Route::Profile);
        assert_eq!(Route::Chat.prev_tab(), Route::Search);
    }

    #[test]
    fn test_auth_is_not_a_tab() {
        assert_eq!(Route::Auth.tab_index(), None);
        assert_eq!(Route::Auth.next_tab(), Route::Feed);
    }
}
