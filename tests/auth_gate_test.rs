//! Integration tests for the session gate
//!
//! Route requests go through the root model; the session decides where
//! they actually land.

use foodmatch::config::Config;
use foodmatch::model::auth::{AuthMode, AuthRequest, SocialProvider};
use foodmatch::model::session::AuthMethod;
use foodmatch::model::Model;
use foodmatch::services::AcceptAllAuthenticator;
use foodmatch::Route;

const ALL_PATHS: [&str; 5] = ["/auth", "/", "/search", "/chat", "/profile"];

/// Test: Anonymous users are sent to /auth from every path, including unknown ones
#[test]
fn test_anonymous_requests_land_on_auth() {
    let mut model = Model::new(&Config::default());
    for path in ALL_PATHS.iter().chain(&["/nowhere"]) {
        assert_eq!(model.navigate(Route::from_path(path)), Route::Auth, "{}", path);
    }
}

/// Test: Submitting empty credentials still signs in and leaves /auth
#[test]
fn test_empty_login_redirects_to_feed() {
    let mut model = Model::new(&Config::default());
    let route = model.authenticate(&AcceptAllAuthenticator, model.auth.submission());
    assert_eq!(route, Route::Feed);
    assert_eq!(model.navigate(Route::Auth), Route::Feed);
}

/// Test: Registration mode and both social providers all authenticate
#[test]
fn test_every_auth_path_authenticates() {
    let requests = [
        (
            AuthRequest::Credentials {
                mode: AuthMode::Register,
                email: "new@example.com".to_string(),
                password: "secret".to_string(),
            },
            AuthMethod::Registration,
        ),
        (AuthRequest::Social(SocialProvider::Google), AuthMethod::Google),
        (
            AuthRequest::Social(SocialProvider::Facebook),
            AuthMethod::Facebook,
        ),
    ];

    for (request, method) in requests {
        let mut model = Model::new(&Config::default());
        assert_eq!(model.authenticate(&AcceptAllAuthenticator, request), Route::Feed);
        assert_eq!(model.session.user().map(|u| u.method), Some(method));
    }
}

/// Test: Signed-in users reach every screen
#[test]
fn test_signed_in_users_reach_every_tab() {
    let mut model = Model::new(&Config::default());
    model.authenticate(&AcceptAllAuthenticator, model.auth.submission());
    for route in Route::TABS {
        assert_eq!(model.navigate(route), route);
    }
}

/// Test: Logout re-gates every screen
#[test]
fn test_logout_returns_everything_to_auth() {
    let mut model = Model::new(&Config::default());
    model.authenticate(&AcceptAllAuthenticator, model.auth.submission());
    model.navigate(Route::Profile);

    assert_eq!(model.logout(), Route::Auth);
    assert!(!model.is_authenticated());
    for path in ALL_PATHS {
        assert_eq!(model.navigate(Route::from_path(path)), Route::Auth);
    }
}

/// Test: A configured start route still passes through the gate
#[test]
fn test_start_route_is_gated() {
    let config = Config {
        start_route: "/chat".to_string(),
        ..Config::default()
    };
    let model = Model::new(&config);
    assert_eq!(model.route, Route::Auth);
}
