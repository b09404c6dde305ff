//! foodmatch library
//!
//! Exposes the catalog, model, logic and services for the binary and for testing

pub mod catalog;
pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod services;

pub use logic::router::Route;
