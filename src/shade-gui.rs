//! Shade GUI Application
//!
//! This module provides a small desktop front end for the theme preference
//! provider. The window is itself the first consumer: every panel renders
//! under the visuals resolved from the persisted preference.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and theme coordination
//! - `state/` - State management for the preference and the preview gallery
//! - `ui/` - UI panel rendering and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, ThemeCoordinator};
use shade::{FileStore, ThemeManager};
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the Shade GUI.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_title("Shade"),
        ..Default::default()
    };

    eframe::run_native(
        "Shade",
        options,
        Box::new(|cc| Ok(Box::new(ShadeApp::new(cc)))),
    )
}

/// The main Shade application.
///
/// Most functionality is delegated:
/// - `ThemeCoordinator` handles resolution, application, and persistence
/// - `PanelManager` handles UI panel layout and rendering
struct ShadeApp {
    /// Centralized application state
    state: AppState,
}

impl Default for ShadeApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl ShadeApp {
    /// Creates a new instance with the preference loaded from the per-user
    /// preference file.
    fn new(_cc: &eframe::CreationContext) -> Self {
        let store = FileStore::open_default();
        let store_path = store.path().map(|p| p.to_path_buf());
        let show_details = ThemeCoordinator::load_show_details(&store);
        let manager = ThemeManager::new(Box::new(store));

        Self {
            state: AppState::with_preferences(manager, store_path, show_details),
        }
    }

    /// Handles panel interactions by delegating to the coordinator.
    fn handle_panel_interaction(&mut self, interaction: ui::panel_manager::PanelInteraction) {
        match interaction {
            ui::panel_manager::PanelInteraction::ThemeSelected(theme) => {
                ThemeCoordinator::set_theme(&mut self.state, theme);
            }
        }
    }
}

impl eframe::App for ShadeApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::persist_ui_settings(&mut self.state);
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Re-resolve against the ambient color scheme
    /// 2. Apply the resolved theme
    /// 3. Persist preferences during frame
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Follow OS appearance changes while in system mode
        ThemeCoordinator::refresh_ambient(&mut self.state);

        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        ThemeCoordinator::persist_ui_settings(&mut self.state);

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        // Repaint periodically so an ambient change lands without input
        ctx.request_repaint_after(std::time::Duration::from_secs(2));
    }
}
