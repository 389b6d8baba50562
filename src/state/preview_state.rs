//! Preview gallery state management.
//!
//! This module encapsulates the widget state of the preview panel,
//! including the persisted status-bar details toggle.

/// State for the preview gallery and status-bar details.
///
/// Responsibilities:
/// - Tracking sample widget values so the gallery is interactive
/// - Tracking whether resolution details are shown in the status bar
#[derive(Debug, Clone)]
pub struct PreviewState {
    /// Whether the status bar shows resolution details
    show_details: bool,
    /// Text buffer for the sample input field
    sample_text: String,
    /// Sample checkbox value
    sample_checked: bool,
    /// Sample slider value (0.0 to 100.0)
    sample_value: f32,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewState {
    /// Creates a new preview state with default values.
    pub fn new() -> Self {
        Self::with_details(true)
    }

    /// Creates a new preview state with the details toggle restored
    /// from storage.
    pub fn with_details(show_details: bool) -> Self {
        Self {
            show_details,
            sample_text: "The quick brown fox".to_string(),
            sample_checked: true,
            sample_value: 42.0,
        }
    }

    // ===== Queries =====

    /// Returns whether the status bar shows resolution details.
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    // ===== Mutations =====

    /// Sets whether the status bar shows resolution details.
    pub fn set_show_details(&mut self, show_details: bool) {
        self.show_details = show_details;
    }

    /// Restores the sample widgets to their initial values.
    pub fn reset_samples(&mut self) {
        *self = Self::with_details(self.show_details);
    }

    // ===== Sample Widget Accessors =====

    /// Returns a mutable reference to the sample text buffer.
    pub fn sample_text_mut(&mut self) -> &mut String {
        &mut self.sample_text
    }

    /// Returns a mutable reference to the sample checkbox value.
    pub fn sample_checked_mut(&mut self) -> &mut bool {
        &mut self.sample_checked
    }

    /// Returns a mutable reference to the sample slider value.
    pub fn sample_value_mut(&mut self) -> &mut f32 {
        &mut self.sample_value
    }
}
