//! Theme management and persistence coordination.
//!
//! Handles theme selection, resolution, application to the egui context,
//! and persistent storage across sessions.

use shade::Theme;

use crate::app::AppState;

const SHOW_DETAILS_KEY: &str = "show_details";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Switches the theme preference.
    ///
    /// The manager resolves the new effective mode and persists the
    /// preference; the context picks up the change on the next apply.
    pub fn set_theme(state: &mut AppState, theme: Theme) {
        state.theme.set_theme(theme);
    }

    /// Re-resolves the effective mode against the ambient color scheme.
    ///
    /// Called every frame so a system preference follows OS appearance
    /// changes without user input. Returns true if the mode flipped.
    pub fn refresh_ambient(state: &mut AppState) -> bool {
        state.theme.manager_mut().refresh()
    }

    /// Applies the resolved mode to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let visuals = if state.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }

    /// Writes UI settings next to the theme preference.
    ///
    /// Safe to call every frame: unchanged values do not touch the file.
    pub fn persist_ui_settings(state: &mut AppState) {
        let show_details = state.preview.show_details();
        shade::save_setting(
            state.theme.manager_mut().store_mut(),
            SHOW_DETAILS_KEY,
            &show_details,
        );
    }

    /// Reads the persisted details toggle ahead of state construction.
    pub fn load_show_details(store: &dyn shade::PreferenceStore) -> bool {
        shade::load_setting_or(store, SHOW_DETAILS_KEY, true)
    }
}
