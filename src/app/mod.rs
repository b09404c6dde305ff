//! App Orchestration Methods
//!
//! App implementation methods grouped by screen. Each submodule connects:
//! - Model state (pure, in src/model/)
//! - Services (authenticator, photo store, timer service)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by screen
//! for better discoverability.

pub(crate) mod auth;
pub(crate) mod chat;
pub(crate) mod feed;
pub(crate) mod navigation;
pub(crate) mod profile;
pub(crate) mod search;
