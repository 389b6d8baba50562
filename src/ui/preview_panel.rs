//! Preview panel UI rendering
//!
//! Handles the central gallery of sample widgets. The gallery is a plain
//! consumer of the theme state: it reads the resolved mode and renders
//! under whatever visuals the coordinator applied this frame.

use eframe::egui;
use egui::{RichText, ScrollArea};

use crate::app::AppState;

/// Renders the preview gallery of sample widgets
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_preview_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let theme = state.theme.theme();
    let effective = if state.theme.is_dark() { "dark" } else { "light" };

    ui.label(
        RichText::new(format!(
            "Preference \"{}\" renders this window {}.",
            theme, effective
        ))
        .strong(),
    );
    ui.separator();

    ScrollArea::vertical()
        .id_salt("preview_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(4.0);

            egui::Grid::new("preview_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Text input");
                    ui.add(
                        egui::TextEdit::singleline(state.preview.sample_text_mut())
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label("Checkbox");
                    ui.checkbox(state.preview.sample_checked_mut(), "Enabled");
                    ui.end_row();

                    ui.label("Slider");
                    ui.add(egui::Slider::new(state.preview.sample_value_mut(), 0.0..=100.0));
                    ui.end_row();

                    ui.label("Button");
                    if ui.button("Reset samples").clicked() {
                        state.preview.reset_samples();
                    }
                    ui.end_row();

                    ui.label("Link");
                    ui.hyperlink_to("egui homepage", "https://www.egui.rs");
                    ui.end_row();
                });

            ui.add_space(10.0);

            ui.label("Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                      eiusmod tempor incididunt ut labore et dolore magna aliqua.");
        });
}
