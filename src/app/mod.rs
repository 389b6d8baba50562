//! Application-level modules for the Shade GUI.
//!
//! This module contains the theme coordinator and centralized state management.

mod app_state;
mod theme_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
