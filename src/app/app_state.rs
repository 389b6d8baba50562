//! Centralized application state for the Shade GUI.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's state,
//! keeping invariants local and mutations intent-revealing.

use std::path::PathBuf;

use shade::ThemeManager;

use crate::state::{PreviewState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Theme preference state
    pub theme: ThemeState,

    /// Preview gallery state
    pub preview: PreviewState,

    // ===== Top-Level State =====
    /// Location of the preference file, if one is in use
    pub store_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state over the per-user preference file.
    pub fn new() -> Self {
        Self {
            theme: ThemeState::new(),
            preview: PreviewState::new(),
            store_path: shade::FileStore::default_path(),
        }
    }

    /// Creates a new AppState with preferences loaded from storage.
    pub fn with_preferences(
        manager: ThemeManager,
        store_path: Option<PathBuf>,
        show_details: bool,
    ) -> Self {
        Self {
            theme: ThemeState::with_manager(manager),
            preview: PreviewState::with_details(show_details),
            store_path,
        }
    }
}
