pub mod ambient;
pub mod manager;
pub mod settings;
pub mod store;
pub mod theme;

// Export theme model and resolver
pub use theme::{resolve, resolve_with, Theme};

// Export ambient color-scheme detection
pub use ambient::{detect_color_mode, set_color_mode_detector, ColorMode};

// Export preference persistence
pub use store::{load_theme, save_theme, FileStore, MemoryStore, PreferenceStore, THEME_KEY};

// Export typed settings helpers
pub use settings::{load_setting, load_setting_or, save_setting, try_load_setting};

// Export the stateful provider
pub use manager::ThemeManager;
