//! Theme preference state management.
//!
//! This module encapsulates all state related to the display theme,
//! wrapping the provider that owns the persisted preference.

use shade::{FileStore, Theme, ThemeManager};

/// State related to the display-theme preference.
///
/// Responsibilities:
/// - Owning the theme manager and its preference store
/// - Providing theme-related queries for panels
/// - Routing preference changes into the manager
#[derive(Debug)]
pub struct ThemeState {
    /// Provider over the persisted preference
    manager: ThemeManager,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state over the per-user preference file.
    pub fn new() -> Self {
        Self::with_manager(ThemeManager::new(Box::new(FileStore::open_default())))
    }

    /// Creates a new theme state around an existing manager.
    ///
    /// # Arguments
    /// * `manager` - The provider to wrap, already mounted on its store
    pub fn with_manager(manager: ThemeManager) -> Self {
        Self { manager }
    }

    // ===== Theme Queries =====

    /// Returns the current theme preference.
    pub fn theme(&self) -> Theme {
        self.manager.theme()
    }

    /// Returns whether the effective mode is dark.
    pub fn is_dark(&self) -> bool {
        self.manager.is_dark()
    }

    /// Returns a mutable reference to the theme manager.
    pub fn manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.manager
    }

    // ===== Theme Mutations =====

    /// Switches the theme preference.
    ///
    /// # Arguments
    /// * `theme` - The preference to activate and persist
    pub fn set_theme(&mut self, theme: Theme) {
        self.manager.set_theme(theme);
    }
}
