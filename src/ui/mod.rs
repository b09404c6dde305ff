// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, content, legend, nav bar)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top title bar (app name, screen, signed-in user)
// - auth / feed / search / chat / profile: One renderer per screen
// - legend: Renders hotkey legend for the active screen
// - nav_bar: Renders the bottom navigation bar
// - toast: Renders toast notifications (brief pop-up messages)

pub mod auth;
pub mod chat;
pub mod feed;
pub mod header;
pub mod layout;
pub mod legend;
pub mod nav_bar;
pub mod profile;
pub mod render;
pub mod search;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
