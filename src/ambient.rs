//! Ambient platform color-scheme detection.
//!
//! Wraps the OS "does the user prefer dark?" query behind a process-global
//! detector function so callers (and tests) can substitute a fixed answer.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The platform's ambient color scheme at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to answer ambient color-scheme queries.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Queries the ambient color scheme through the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

/// Asks the OS. `dark-light` reports `Light` when the platform has no
/// usable appearance signal, so failed detection lands on the light side.
fn os_color_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}
