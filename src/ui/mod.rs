//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the Shade GUI:
//! - Header panel (title, details toggle, theme selector)
//! - Preview panel (sample widget gallery)
//! - Status bar (preference, ambient, and effective mode display)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod panel_manager;
pub mod preview_panel;
pub mod status_bar;
