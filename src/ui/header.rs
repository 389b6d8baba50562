//! Header panel UI rendering
//!
//! Handles the top bar with the application title, details toggle, and
//! theme selector.

use eframe::egui;

use crate::app::AppState;
use shade::Theme;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a theme preference from the selector
    ThemeSelected(Theme),
}

/// Renders the application header with the theme selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Shade");

        ui.separator();

        // Details checkbox
        let mut show_details = state.preview.show_details();
        let details_response = ui.checkbox(&mut show_details, "Details");

        if details_response.changed() {
            state.preview.set_show_details(show_details);
        }

        if details_response.hovered() {
            details_response.on_hover_text("Show resolution details in the status bar");
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current_theme = state.theme.theme();
            let mut selected_theme = current_theme;
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(selected_theme.as_str())
                .show_ui(ui, |ui| {
                    for theme in Theme::ALL {
                        ui.selectable_value(&mut selected_theme, theme, theme.as_str());
                    }
                });

            // Route the change through the coordinator
            if selected_theme != current_theme {
                interaction = Some(HeaderInteraction::ThemeSelected(selected_theme));
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}
