//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input, dispatched per screen
//! - timers: Elapsed sequencer timers from the background timer service
//!
//! Handlers take &mut App and translate events into App/Model calls.

pub mod keyboard;
pub mod timers;

// Re-export for convenience
pub use keyboard::handle_key;
pub use timers::handle_timer_fired;
