//! State management modules for the Shade GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (preference, resolved mode, backing store)
//! - Preview state (sample widget values, details toggle)

mod preview_state;
mod theme_state;

pub use preview_state::PreviewState;
pub use theme_state::ThemeState;
