//! Theme preference model for Shade
//!
//! This module provides the tri-state display-theme preference (light, dark,
//! or follow-the-system) and the resolver that derives effective darkness
//! from a preference and the ambient platform color scheme.
//!
//! # Examples
//!
//! ```
//! use shade::{resolve_with, ColorMode, Theme};
//!
//! assert!(resolve_with(Theme::Dark, ColorMode::Light));
//! assert!(resolve_with(Theme::System, ColorMode::Dark));
//! assert!(!resolve_with(Theme::Light, ColorMode::Dark));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ambient::{self, ColorMode};

/// A user's display-theme preference.
///
/// `System` defers to the platform's ambient color scheme; the other two
/// variants force a mode regardless of what the platform prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// All selectable preferences, in menu order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Returns the canonical persisted form of this preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "unknown theme '{}' (expected light, dark, or system)",
                other
            )),
        }
    }
}

/// Computes effective darkness for a preference against a known ambient mode.
///
/// Dark wins outright; System inherits the ambient mode; Light is never dark.
pub fn resolve_with(theme: Theme, ambient: ColorMode) -> bool {
    theme == Theme::Dark || (theme == Theme::System && ambient == ColorMode::Dark)
}

/// Computes effective darkness for a preference, querying the ambient
/// platform color scheme at call time.
pub fn resolve(theme: Theme) -> bool {
    resolve_with(theme, ambient::detect_color_mode())
}
