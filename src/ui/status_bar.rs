//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the preference, the effective
//! mode, and (optionally) resolution details.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use shade::ColorMode;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let effective = if state.theme.is_dark() { "dark" } else { "light" };

        ui.label(RichText::new(format!("Preference: {}", state.theme.theme())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Effective: {}", effective)).strong());

        if state.preview.show_details() {
            let ambient = match shade::detect_color_mode() {
                ColorMode::Dark => "dark",
                ColorMode::Light => "light",
            };
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Ambient: {}", ambient)).strong());

            ui.label(RichText::new("|").strong());
            match &state.store_path {
                Some(path) => ui.label(RichText::new(format!("File: {}", path.display())).strong()),
                None => ui.label(RichText::new("File: (in memory)").strong()),
            };
        }
    });
}
