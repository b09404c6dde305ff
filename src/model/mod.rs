//! Application Model
//!
//! Pure state for the whole client, composed of one sub-model per screen
//! plus the session and UI state shared between them:
//!
//! - **Session**: who is signed in (drives the route gate)
//! - **AuthModel / FeedModel / SearchModel / ChatModel / ProfileModel**:
//!   per-screen local state, never mutated by another screen
//! - **UiModel**: preferences, toast, quit flag
//!
//! Key principles:
//! - No services: timers, authentication and photo storage are passed in
//! - Every route change goes through [`Model::navigate`], which applies the
//!   session gate and resets the screen being left

pub mod auth;
pub mod chat;
pub mod feed;
pub mod profile;
pub mod search;
pub mod session;
pub mod types;
pub mod ui;

pub use auth::AuthModel;
pub use chat::ChatModel;
pub use feed::FeedModel;
pub use profile::ProfileModel;
pub use search::SearchModel;
pub use session::Session;
pub use types::*;
pub use ui::UiModel;

use chrono::{DateTime, TimeZone};
use std::fmt;

use crate::config::Config;
use crate::logic::composer::{SendOutcome, UnreadOnSend};
use crate::logic::router::{self, Route};
use crate::logic::sequencer::{FireOutcome, SwipeDirection, SwipeOutcome, TimerRequest, TimerToken};
use crate::services::auth::Authenticator;
use auth::AuthRequest;

/// Root application model composed of per-screen sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub session: Session,

    /// Screen on display (always the gated route)
    pub route: Route,

    pub auth: AuthModel,
    pub feed: FeedModel,
    pub search: SearchModel,
    pub chat: ChatModel,
    pub profile: ProfileModel,

    pub ui: UiModel,

    pub unread_on_send: UnreadOnSend,
}

impl Model {
    /// Anonymous model on the configured start route (after gating)
    pub fn new(config: &Config) -> Self {
        let requested = Route::from_path(&config.start_route);
        Self {
            session: Session::new(),
            route: router::resolve(requested, false),
            auth: AuthModel::new(),
            feed: FeedModel::new(config.sequencer_timings()),
            search: SearchModel::new(),
            chat: ChatModel::new(),
            profile: ProfileModel::new(),
            ui: UiModel::new(config.vim_mode, config.toast_ms),
            unread_on_send: config.unread_on_send,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether a text field on the current screen has focus
    pub fn is_typing(&self) -> bool {
        match self.route {
            Route::Auth => self.auth.focus.is_text(),
            Route::Chat => self.chat.focus == chat::ChatFocus::Composer,
            Route::Profile => self.profile.section.is_text(),
            Route::Feed | Route::Search => false,
        }
    }

    /// Go to `requested`, or wherever the session gate sends us instead
    pub fn navigate(&mut self, requested: Route) -> Route {
        let target = router::resolve(requested, self.is_authenticated());
        if target != requested {
            log::debug!("Redirect {} -> {}", requested.path(), target.path());
        }
        if target != self.route {
            log::debug!("Route {} -> {}", self.route.path(), target.path());
            self.leave(self.route);
            self.route = target;
        }
        target
    }

    /// Reset local state of a screen that is no longer shown
    fn leave(&mut self, route: Route) {
        match route {
            Route::Auth => self.auth = AuthModel::new(),
            Route::Feed => self.feed.reset(),
            Route::Search => self.search = SearchModel::new(),
            Route::Chat => self.chat.leave(),
            Route::Profile => self.profile = ProfileModel::new(),
        }
    }

    /// Run an auth request; on success the gate moves us off `/auth`
    pub fn authenticate(&mut self, authenticator: &dyn Authenticator, request: AuthRequest) -> Route {
        match authenticator.authenticate(&request) {
            Ok(user) => {
                log::info!("Signed in as {} ({})", user.display_name, user.method.as_str());
                self.show_toast(format!("Signed in as {}", user.display_name));
                self.session.begin(user);
                self.navigate(Route::Auth)
            }
            Err(e) => {
                log::warn!("Sign in failed: {:#}", e);
                self.show_toast(format!("Error: {}", e));
                self.route
            }
        }
    }

    /// End the session; the current screen is re-gated
    pub fn logout(&mut self) -> Route {
        if let Some(user) = self.session.end() {
            log::info!("Logged out {}", user.display_name);
            self.show_toast("Logged out".to_string());
        }
        self.navigate(self.route)
    }

    /// Swipe on the feed; returns the timer the caller must schedule
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<TimerRequest> {
        if self.route != Route::Feed {
            return None;
        }
        match self.feed.swipe(direction) {
            SwipeOutcome::Started { timer, .. } => Some(timer),
            SwipeOutcome::Ignored => None,
        }
    }

    /// Deliver an elapsed timer; may hand back a follow-up timer
    pub fn deliver_timer(&mut self, token: TimerToken) -> Option<TimerRequest> {
        match self.feed.fire(token) {
            FireOutcome::Announced { timer, .. } => Some(timer),
            _ => None,
        }
    }

    /// Send the chat composer buffer
    pub fn send_message<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> SendOutcome
    where
        Tz::Offset: fmt::Display,
    {
        self.chat.send(now, self.unread_on_send)
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
