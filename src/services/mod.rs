//! External Services
//!
//! This module contains the collaborators the screens talk to:
//! - auth: Authenticator seam (accept-all default)
//! - photos: Photo storage seam (in-session handles)
//! - timers: Background timer service for the match sequencer

pub mod auth;
pub mod photos;
pub mod timers;

// Re-export commonly used types for convenience
pub use auth::{AcceptAllAuthenticator, Authenticator};
pub use photos::{PhotoStore, SessionPhotoStore};
pub use timers::{spawn_timer_service, TimerFired};
