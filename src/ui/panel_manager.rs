//! Panel orchestration and layout management.
//!
//! Coordinates the UI panels (header, preview, status) and funnels their
//! interactions back to the application.

use crate::app::AppState;
use crate::ui::{header, preview_panel, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// User picked a theme preference
    ThemeSelected(shade::Theme),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::ThemeSelected(theme) => {
                        PanelInteraction::ThemeSelected(theme)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: preview gallery
        let preview_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(preview_frame)
            .show(ctx, |ui| {
                ui.heading("Preview");
                ui.separator();

                preview_panel::render_preview_panel(ui, state);
            });

        interaction
    }
}
