//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - composer: Building and appending locally sent chat messages
//! - formatting: Text shaping for the terminal (truncation, badges, masks)
//! - navigation: List cursor movement with wrapping
//! - photos: Expanding typed paths and globs into selected photo files
//! - router: Route table and session gate
//! - sequencer: Swipe/match state machine for the discovery feed
//! - toggle: Tag membership sets for filters and profile cuisines
//! - ui: Toast lifetime and swipe animation placement

pub mod composer;
pub mod formatting;
pub mod navigation;
pub mod photos;
pub mod router;
pub mod sequencer;
pub mod toggle;
pub mod ui;
