//! Stateful theme provider.
//!
//! Ties the persisted preference and the resolver together behind one
//! owner that consumers query for the current `{theme, is_dark}` pair.

use crate::store::{self, PreferenceStore};
use crate::theme::{self, Theme};

/// Owns the theme preference, its backing store, and the resolved darkness.
///
/// Construction loads the persisted preference (defaulting to
/// `Theme::System`) and resolves it against the ambient color scheme once.
/// After that, darkness changes only through [`set_theme`](Self::set_theme)
/// or [`refresh`](Self::refresh); readers always see the most recent
/// resolution, never a value read back from presentation state.
pub struct ThemeManager {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
    is_dark: bool,
}

impl ThemeManager {
    /// Creates a manager over `store`, loading and resolving the persisted
    /// preference.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let theme = store::load_theme(store.as_ref());
        let is_dark = theme::resolve(theme);
        log::debug!("loaded theme preference {} (dark: {})", theme, is_dark);

        ThemeManager {
            store,
            theme,
            is_dark,
        }
    }

    /// Returns the current preference.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether the effective mode is dark.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Switches the preference: resolves the new effective mode, records
    /// it, and persists the preference.
    ///
    /// Setting the already-current preference re-runs the same steps and
    /// lands in the same state.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.is_dark = theme::resolve(theme);
        store::save_theme(self.store.as_mut(), theme);
        log::debug!("theme preference set to {} (dark: {})", theme, self.is_dark);
    }

    /// Re-resolves the effective mode against the current ambient color
    /// scheme and reports whether it changed.
    ///
    /// Under `Theme::System` this is how an OS appearance change
    /// propagates without a new `set_theme` call; under the forced
    /// preferences it never reports a change. Cheap enough to poll every
    /// frame.
    pub fn refresh(&mut self) -> bool {
        let is_dark = theme::resolve(self.theme);
        if is_dark == self.is_dark {
            return false;
        }

        log::debug!("ambient color scheme changed (dark: {})", is_dark);
        self.is_dark = is_dark;
        true
    }

    /// Returns the backing store, for reading sibling settings.
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Returns the backing store mutably, for writing sibling settings.
    pub fn store_mut(&mut self) -> &mut dyn PreferenceStore {
        self.store.as_mut()
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("theme", &self.theme)
            .field("is_dark", &self.is_dark)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambient::{set_color_mode_detector, ColorMode};
    use crate::store::{MemoryStore, THEME_KEY};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_new_defaults_to_system() {
        set_color_mode_detector(|| ColorMode::Light);

        let manager = ThemeManager::new(Box::new(MemoryStore::new()));
        assert_eq!(manager.theme(), Theme::System);
        assert!(!manager.is_dark());
    }

    #[test]
    #[serial]
    fn test_new_loads_persisted_preference() {
        set_color_mode_detector(|| ColorMode::Light);

        let mut store = MemoryStore::new();
        store.set_string(THEME_KEY, "dark".to_string());

        let manager = ThemeManager::new(Box::new(store));
        assert_eq!(manager.theme(), Theme::Dark);
        assert!(manager.is_dark());
    }

    #[test]
    #[serial]
    fn test_set_theme_resolves_and_persists() {
        set_color_mode_detector(|| ColorMode::Light);

        let mut manager = ThemeManager::new(Box::new(MemoryStore::new()));
        manager.set_theme(Theme::Dark);

        assert!(manager.is_dark());
        assert_eq!(manager.store().get_string(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    #[serial]
    fn test_set_theme_is_idempotent() {
        set_color_mode_detector(|| ColorMode::Dark);

        let mut manager = ThemeManager::new(Box::new(MemoryStore::new()));
        manager.set_theme(Theme::Light);
        let first = (manager.theme(), manager.is_dark());
        let stored_first = manager.store().get_string(THEME_KEY);

        manager.set_theme(Theme::Light);
        assert_eq!((manager.theme(), manager.is_dark()), first);
        assert_eq!(manager.store().get_string(THEME_KEY), stored_first);
    }

    #[test]
    #[serial]
    fn test_refresh_follows_ambient_under_system() {
        set_color_mode_detector(|| ColorMode::Light);
        let mut manager = ThemeManager::new(Box::new(MemoryStore::new()));
        assert!(!manager.is_dark());

        set_color_mode_detector(|| ColorMode::Dark);
        assert!(manager.refresh());
        assert!(manager.is_dark());

        // No further change until the ambient mode moves again.
        assert!(!manager.refresh());
    }

    #[test]
    #[serial]
    fn test_refresh_ignores_ambient_under_forced_preference() {
        set_color_mode_detector(|| ColorMode::Light);
        let mut manager = ThemeManager::new(Box::new(MemoryStore::new()));
        manager.set_theme(Theme::Dark);

        set_color_mode_detector(|| ColorMode::Dark);
        assert!(!manager.refresh());
        assert!(manager.is_dark());

        set_color_mode_detector(|| ColorMode::Light);
        assert!(!manager.refresh());
        assert!(manager.is_dark());
    }
}
